//! Tick timer units.
//!
//! The tick handler receives the set of calendar units that changed since the
//! previous tick.  At midnight on New Year's Eve every unit changes at once;
//! on an ordinary minute boundary only `SECOND | MINUTE` do.

use std::ops::{BitOr, BitOrAssign};

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Bit set of calendar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeUnits(pub u8);

impl TimeUnits {
    pub const SECOND: u8 = 1 << 0;
    pub const MINUTE: u8 = 1 << 1;
    pub const HOUR: u8 = 1 << 2;
    pub const DAY: u8 = 1 << 3;
    pub const MONTH: u8 = 1 << 4;
    pub const YEAR: u8 = 1 << 5;

    pub const NONE: TimeUnits = TimeUnits(0);
    /// The units the face subscribes to.
    pub const MINUTE_AND_DAY: TimeUnits = TimeUnits(Self::MINUTE | Self::DAY);

    /// Returns `true` if any bit of `unit` is set.
    pub const fn contains(self, unit: u8) -> bool {
        self.0 & unit != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Keeps only the units also present in `mask`.
    pub const fn intersect(self, mask: TimeUnits) -> TimeUnits {
        TimeUnits(self.0 & mask.0)
    }

    /// Computes which units differ between two wall-clock samples.
    ///
    /// A unit counts as changed when the timestamps, truncated to that unit,
    /// differ; so a change of day always implies a change of hour, minute and
    /// second as well.
    pub fn changed_between(prev: NaiveDateTime, now: NaiveDateTime) -> TimeUnits {
        let mut units = TimeUnits::NONE;
        if prev.year() != now.year() {
            units |= TimeUnits(Self::YEAR);
        }
        if (prev.year(), prev.month()) != (now.year(), now.month()) {
            units |= TimeUnits(Self::MONTH);
        }
        if prev.date() != now.date() {
            units |= TimeUnits(Self::DAY);
        }
        if prev.date() != now.date() || prev.hour() != now.hour() {
            units |= TimeUnits(Self::HOUR);
        }
        if prev.date() != now.date() || (prev.hour(), prev.minute()) != (now.hour(), now.minute()) {
            units |= TimeUnits(Self::MINUTE);
        }
        if prev.date() != now.date() || prev.num_seconds_from_midnight() != now.num_seconds_from_midnight() {
            units |= TimeUnits(Self::SECOND);
        }
        units
    }
}

impl BitOr for TimeUnits {
    type Output = TimeUnits;

    fn bitor(self, rhs: TimeUnits) -> TimeUnits {
        TimeUnits(self.0 | rhs.0)
    }
}

impl BitOrAssign for TimeUnits {
    fn bitor_assign(&mut self, rhs: TimeUnits) {
        self.0 |= rhs.0;
    }
}
