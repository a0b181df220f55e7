//! Health-service adapters.
//!
//! The face only needs today's step count and a stream of health events.
//! [`HealthService`] is that slice of the platform's health API;
//! [`SimulatedPedometer`] backs it in the simulator and [`FixedHealth`] in
//! tests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{NaiveDateTime, Timelike};
use tracing::debug;

/// Health events delivered to the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthEvent {
    /// Several metrics changed at once (e.g. after a sync).
    SignificantUpdate,
    /// The step count changed.
    MovementUpdate,
    /// Sleep data changed.
    SleepUpdate,
}

/// The step-count slice of the platform health service.
pub trait HealthService {
    /// Whether step data is available for the range `[start, end)`.
    fn steps_accessible(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool;

    /// Sum of today's steps.
    fn steps_today(&self) -> i32;

    /// Starts event delivery.  Returns `false` when the service cannot
    /// deliver events on this device.
    fn subscribe_events(&mut self) -> bool;
}

// ── Simulated pedometer ───────────────────────────────────────────────────────

#[derive(Debug)]
struct PedometerState {
    enabled: bool,
    steps_per_minute: u32,
    steps: i32,
    last_sample: Option<NaiveDateTime>,
    subscribed: bool,
}

/// Walks a fixed number of steps per minute of wall time and resets at
/// midnight.  Clones share the same counter, so the host loop can drive the
/// copy it kept while the face reads the copy it owns.
#[derive(Debug, Clone)]
pub struct SimulatedPedometer {
    state: Arc<Mutex<PedometerState>>,
}

impl SimulatedPedometer {
    /// A disabled pedometer reports no data and refuses subscriptions.
    pub fn new(steps_per_minute: u32, enabled: bool) -> Self {
        Self {
            state: Arc::new(Mutex::new(PedometerState {
                enabled,
                steps_per_minute,
                steps: 0,
                last_sample: None,
                subscribed: false,
            })),
        }
    }

    /// Accounts for the wall time elapsed since the previous sample.
    ///
    /// Returns [`HealthEvent::MovementUpdate`] when the count changed and
    /// the face has subscribed.  The first sample only sets the baseline.
    pub fn advance(&self, now: NaiveDateTime) -> Option<HealthEvent> {
        let mut state = self.lock();
        if !state.enabled {
            return None;
        }

        let prev = state.last_sample.replace(now)?;
        if now <= prev {
            return None;
        }

        let before = state.steps;
        let rate = i64::from(state.steps_per_minute);
        if now.date() != prev.date() {
            // Only the minutes walked since midnight count towards today.
            let since_midnight = i64::from(now.num_seconds_from_midnight() / 60);
            state.steps = clamp_steps(since_midnight * rate);
            debug!(steps = state.steps, "pedometer reset at midnight");
        } else {
            let minutes = now.signed_duration_since(prev).num_minutes();
            // Whole minutes only; keep the remainder for the next sample.
            if minutes == 0 {
                state.last_sample = Some(prev);
                return None;
            }
            state.last_sample = Some(prev + chrono::Duration::minutes(minutes));
            state.steps = clamp_steps(i64::from(state.steps) + minutes * rate);
        }

        (state.subscribed && state.steps != before).then_some(HealthEvent::MovementUpdate)
    }

    fn lock(&self) -> MutexGuard<'_, PedometerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn clamp_steps(steps: i64) -> i32 {
    i32::try_from(steps).unwrap_or(i32::MAX)
}

impl HealthService for SimulatedPedometer {
    fn steps_accessible(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.lock().enabled && start <= end
    }

    fn steps_today(&self) -> i32 {
        self.lock().steps
    }

    fn subscribe_events(&mut self) -> bool {
        let mut state = self.lock();
        state.subscribed = state.enabled;
        state.subscribed
    }
}

// ── Fixed health (tests) ──────────────────────────────────────────────────────

#[derive(Debug)]
struct FixedHealthState {
    steps: i32,
    accessible: bool,
    events_available: bool,
    subscribe_calls: usize,
}

/// Health service whose answers are set by the test.  Clones share state.
#[derive(Debug, Clone)]
pub struct FixedHealth {
    state: Arc<Mutex<FixedHealthState>>,
}

impl FixedHealth {
    /// Accessible data with `steps` steps and event delivery available.
    pub fn with_steps(steps: i32) -> Self {
        Self {
            state: Arc::new(Mutex::new(FixedHealthState {
                steps,
                accessible: true,
                events_available: true,
                subscribe_calls: 0,
            })),
        }
    }

    /// No data and no events, like a device without a health service.
    pub fn unavailable() -> Self {
        let health = Self::with_steps(0);
        health.set_accessible(false);
        health.lock().events_available = false;
        health
    }

    pub fn set_steps(&self, steps: i32) {
        self.lock().steps = steps;
    }

    pub fn set_accessible(&self, accessible: bool) {
        self.lock().accessible = accessible;
    }

    pub fn subscribe_calls(&self) -> usize {
        self.lock().subscribe_calls
    }

    fn lock(&self) -> MutexGuard<'_, FixedHealthState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HealthService for FixedHealth {
    fn steps_accessible(&self, _start: NaiveDateTime, _end: NaiveDateTime) -> bool {
        self.lock().accessible
    }

    fn steps_today(&self) -> i32 {
        self.lock().steps
    }

    fn subscribe_events(&mut self) -> bool {
        let mut state = self.lock();
        state.subscribe_calls += 1;
        state.events_available
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(d: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, d)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn subscribed(rate: u32) -> SimulatedPedometer {
        let mut pedometer = SimulatedPedometer::new(rate, true);
        assert!(pedometer.subscribe_events());
        pedometer
    }

    #[test]
    fn test_first_sample_sets_baseline_only() {
        let pedometer = subscribed(90);
        assert_eq!(pedometer.advance(at(21, 10, 0, 0)), None);
        assert_eq!(pedometer.steps_today(), 0);
    }

    #[test]
    fn test_each_minute_adds_configured_steps() {
        // Arrange
        let pedometer = subscribed(90);
        pedometer.advance(at(21, 10, 0, 0));

        // Act
        let event = pedometer.advance(at(21, 10, 2, 0));

        // Assert
        assert_eq!(event, Some(HealthEvent::MovementUpdate));
        assert_eq!(pedometer.steps_today(), 180);
    }

    #[test]
    fn test_partial_minutes_carry_over() {
        let pedometer = subscribed(10);
        pedometer.advance(at(21, 10, 0, 0));

        assert_eq!(pedometer.advance(at(21, 10, 0, 40)), None);
        assert_eq!(pedometer.advance(at(21, 10, 1, 20)), Some(HealthEvent::MovementUpdate));
        assert_eq!(pedometer.steps_today(), 10);
    }

    #[test]
    fn test_midnight_resets_to_steps_walked_since_midnight() {
        let pedometer = subscribed(10);
        pedometer.advance(at(21, 23, 0, 0));
        pedometer.advance(at(21, 23, 59, 0));

        pedometer.advance(at(22, 0, 3, 0));

        assert_eq!(pedometer.steps_today(), 30);
    }

    #[test]
    fn test_no_events_before_subscription() {
        let pedometer = SimulatedPedometer::new(90, true);
        pedometer.advance(at(21, 10, 0, 0));
        assert_eq!(pedometer.advance(at(21, 10, 5, 0)), None);
        assert_eq!(pedometer.steps_today(), 450);
    }

    #[test]
    fn test_disabled_pedometer_reports_nothing() {
        let mut pedometer = SimulatedPedometer::new(90, false);
        assert!(!pedometer.subscribe_events());
        assert!(!pedometer.steps_accessible(at(21, 0, 0, 0), at(21, 10, 0, 0)));
        pedometer.advance(at(21, 10, 0, 0));
        assert_eq!(pedometer.advance(at(21, 10, 0, 0) + Duration::hours(1)), None);
    }

    #[test]
    fn test_fixed_health_unavailable() {
        let mut health = FixedHealth::unavailable();
        assert!(!health.subscribe_events());
        assert!(!health.steps_accessible(at(21, 0, 0, 0), at(21, 1, 0, 0)));
        assert_eq!(health.subscribe_calls(), 1);
    }
}
