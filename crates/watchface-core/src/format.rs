//! Label text formatting: time, date and step count.
//!
//! All functions are pure; the caller supplies the wall-clock time and the
//! user's 12/24-hour preference.

use chrono::NaiveDateTime;

/// Longest time string the clock label is sized for (`"23:59"`, `"12:00"`).
pub const MAX_TIME_LEN: usize = 8;

/// Glyph drawn in front of the step count (purple heart).
pub const STEPS_GLYPH: char = '\u{1F49C}';

/// How a single-digit hour is rendered in 12-hour mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourPadding {
    /// Pad with a space: `" 8:30"`.
    Space,
    /// No padding: `"8:30"`.
    Stripped,
}

/// Formats the clock label.
///
/// - 24-hour: `"08:30"`, `"17:05"`.
/// - 12-hour with [`HourPadding::Space`]: `" 8:30"`.
/// - 12-hour with [`HourPadding::Stripped`]: `"8:30"`.
pub fn format_time(now: &NaiveDateTime, twenty_four_hour: bool, padding: HourPadding) -> String {
    let text = if twenty_four_hour {
        now.format("%H:%M").to_string()
    } else {
        match padding {
            HourPadding::Space => now.format("%l:%M").to_string(),
            // %I is always two digits, so at most one leading zero goes.
            HourPadding::Stripped => now
                .format("%I:%M")
                .to_string()
                .trim_start_matches(&['0', ' '][..])
                .to_string(),
        }
    };
    truncate_chars(text, MAX_TIME_LEN - 1)
}

/// Formats the date label as abbreviated month and space-padded day:
/// `"Jul 21"`, `"Jul  1"`.
pub fn format_date(now: &NaiveDateTime) -> String {
    now.format("%b %e").to_string()
}

/// Formats the steps label: `"💜 4210"`.
pub fn format_steps(count: i32) -> String {
    format!("{STEPS_GLYPH} {count}")
}

// The on-device buffers hold `len` characters plus a terminator.
fn truncate_chars(mut text: String, len: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(len) {
        text.truncate(idx);
    }
    text
}
