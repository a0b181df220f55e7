//! Wall-clock adapters.
//!
//! The face reads the local time and the wearer's 12/24-hour preference
//! through [`WallClock`].  [`SystemClock`] reads the host clock;
//! [`FixedClock`] is a settable clock for tests and scripted runs.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{Duration, Local, NaiveDateTime};

use crate::infrastructure::storage::config::ClockStyle;

/// Source of local time.
pub trait WallClock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Whether the clock label uses 24-hour time.
    fn is_24h_style(&self) -> bool;
}

// ── System clock ──────────────────────────────────────────────────────────────

/// Host local time with a configured 12/24-hour style.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    twenty_four_hour: bool,
}

impl SystemClock {
    pub fn new(style: ClockStyle) -> Self {
        let twenty_four_hour = match style {
            ClockStyle::TwentyFourHour => true,
            ClockStyle::TwelveHour => false,
            ClockStyle::System => locale_prefers_24h(locale_from_env().as_deref()),
        };
        Self { twenty_four_hour }
    }
}

impl WallClock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn is_24h_style(&self) -> bool {
        self.twenty_four_hour
    }
}

/// First non-empty of `LC_ALL`, `LC_TIME`, `LANG`.
fn locale_from_env() -> Option<String> {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
}

/// Locales whose conventional clock is 12-hour; everything else is 24-hour.
fn locale_prefers_24h(locale: Option<&str>) -> bool {
    const TWELVE_HOUR: [&str; 6] = ["en_US", "en_CA", "en_AU", "en_NZ", "en_PH", "en_IN"];
    match locale {
        Some(locale) => !TWELVE_HOUR.iter().any(|prefix| locale.starts_with(prefix)),
        None => true,
    }
}

// ── Fixed clock ───────────────────────────────────────────────────────────────

#[derive(Debug)]
struct FixedClockState {
    now: NaiveDateTime,
    twenty_four_hour: bool,
}

/// A clock that only moves when told to.  Clones share the same time.
#[derive(Debug, Clone)]
pub struct FixedClock {
    state: Arc<Mutex<FixedClockState>>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime, twenty_four_hour: bool) -> Self {
        Self {
            state: Arc::new(Mutex::new(FixedClockState {
                now,
                twenty_four_hour,
            })),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.lock().now = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut state = self.lock();
        state.now += by;
    }

    pub fn set_24h_style(&self, twenty_four_hour: bool) {
        self.lock().twenty_four_hour = twenty_four_hour;
    }

    fn lock(&self) -> MutexGuard<'_, FixedClockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WallClock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.lock().now
    }

    fn is_24h_style(&self) -> bool {
        self.lock().twenty_four_hour
    }
}
