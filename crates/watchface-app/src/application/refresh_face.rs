//! Label refresh: time, date and today's step count.
//!
//! Each routine samples its source (clock or health service), formats the
//! text and pushes it to one label.  They are called once at startup and
//! then from the tick and health handlers.

use chrono::{NaiveDateTime, NaiveTime};
use thiserror::Error;
use watchface_core::format::{format_date, format_steps, format_time};
use watchface_core::FaceProfile;

use crate::application::surfaces::{FaceSurfaces, LabelId};
use crate::infrastructure::clock::WallClock;
use crate::infrastructure::health::HealthService;

/// Error type for label refresh.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RefreshError {
    /// The health service has no step data for today so far.
    #[error("step data unavailable for {start} .. {end}")]
    HealthDataUnavailable {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Midnight at the start of `now`'s day.
pub fn start_of_day(now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(NaiveTime::MIN)
}

/// Writes the current time to the time label.  Returns the text written.
pub fn refresh_time<F, C>(surfaces: &mut F, clock: &C, profile: FaceProfile) -> String
where
    F: FaceSurfaces + ?Sized,
    C: WallClock + ?Sized,
{
    let text = format_time(&clock.now(), clock.is_24h_style(), profile.hour_padding());
    surfaces.set_text(LabelId::Time, &text);
    text
}

/// Writes the current date to the date label.  Returns the text written.
pub fn refresh_date<F, C>(surfaces: &mut F, clock: &C) -> String
where
    F: FaceSurfaces + ?Sized,
    C: WallClock + ?Sized,
{
    let text = format_date(&clock.now());
    surfaces.set_text(LabelId::Date, &text);
    text
}

/// Writes today's step count to the steps label.
///
/// # Errors
///
/// Returns [`RefreshError::HealthDataUnavailable`] when step data for
/// `[start of today, now)` is not accessible.  The label keeps its previous
/// text in that case.
pub fn refresh_steps<F, C, H>(surfaces: &mut F, clock: &C, health: &H) -> Result<i32, RefreshError>
where
    F: FaceSurfaces + ?Sized,
    C: WallClock + ?Sized,
    H: HealthService + ?Sized,
{
    let end = clock.now();
    let start = start_of_day(end);
    if !health.steps_accessible(start, end) {
        return Err(RefreshError::HealthDataUnavailable { start, end });
    }

    let steps = health.steps_today();
    surfaces.set_text(LabelId::Steps, &format_steps(steps));
    Ok(steps)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::surfaces::FaceLayout;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::health::FixedHealth;
    use crate::infrastructure::presentation::recording::RecordingSurfaces;
    use chrono::NaiveDate;
    use watchface_core::ScreenShape;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 21)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn surfaces() -> RecordingSurfaces {
        let mut surfaces = RecordingSurfaces::new();
        surfaces.build(&FaceLayout::for_screen(ScreenShape::Round));
        surfaces
    }

    #[test]
    fn test_start_of_day_is_midnight() {
        assert_eq!(start_of_day(at(17, 45)), at(0, 0));
    }

    #[test]
    fn test_refresh_time_uses_clock_style_and_profile_padding() {
        // Arrange
        let mut surfaces = surfaces();
        let clock = FixedClock::new(at(8, 30), false);

        // Act
        let configurable = refresh_time(&mut surfaces, &clock, FaceProfile::Configurable);
        let classic = refresh_time(&mut surfaces, &clock, FaceProfile::Classic);

        // Assert
        assert_eq!(configurable, "8:30");
        assert_eq!(classic, " 8:30");
        assert_eq!(surfaces.text(LabelId::Time).as_deref(), Some(" 8:30"));
    }

    #[test]
    fn test_refresh_time_24h() {
        let mut surfaces = surfaces();
        let clock = FixedClock::new(at(8, 30), true);

        refresh_time(&mut surfaces, &clock, FaceProfile::Configurable);

        assert_eq!(surfaces.text(LabelId::Time).as_deref(), Some("08:30"));
    }

    #[test]
    fn test_refresh_date() {
        let mut surfaces = surfaces();
        refresh_date(&mut surfaces, &FixedClock::new(at(9, 0), true));
        assert_eq!(surfaces.text(LabelId::Date).as_deref(), Some("Jul 21"));
    }

    #[test]
    fn test_refresh_steps_writes_heart_and_count() {
        let mut surfaces = surfaces();
        let clock = FixedClock::new(at(9, 0), true);

        let steps = refresh_steps(&mut surfaces, &clock, &FixedHealth::with_steps(4210));

        assert_eq!(steps, Ok(4210));
        assert_eq!(surfaces.text(LabelId::Steps).as_deref(), Some("\u{1F49C} 4210"));
    }

    #[test]
    fn test_refresh_steps_unavailable_keeps_previous_text() {
        // Arrange
        let mut surfaces = surfaces();
        let clock = FixedClock::new(at(9, 0), true);
        let health = FixedHealth::with_steps(100);
        refresh_steps(&mut surfaces, &clock, &health).expect("first refresh");
        health.set_accessible(false);
        health.set_steps(200);

        // Act
        let result = refresh_steps(&mut surfaces, &clock, &health);

        // Assert
        assert_eq!(
            result,
            Err(RefreshError::HealthDataUnavailable {
                start: at(0, 0),
                end: at(9, 0),
            })
        );
        assert_eq!(surfaces.text(LabelId::Steps).as_deref(), Some("\u{1F49C} 100"));
    }
}
