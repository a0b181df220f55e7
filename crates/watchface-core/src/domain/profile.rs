//! Face profiles.
//!
//! The same controller drives two faces that differ only in where their colors
//! come from and in a few drawing/formatting details:
//!
//! | Profile        | Colors                      | Storage | Date badge          | 12h hour  |
//! |----------------|-----------------------------|---------|---------------------|-----------|
//! | `Classic`      | fixed                       | never   | fixed 60 px         | `" 8:30"` |
//! | `Configurable` | persisted + companion app   | key `1` | fitted + two rings  | `"8:30"`  |

use serde::{Deserialize, Serialize};

use crate::domain::color::Color;
use crate::domain::settings::WatchfaceSettings;
use crate::format::HourPadding;

/// Which face to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceProfile {
    /// Fixed colors, no persistence, no companion-app configuration.
    Classic,
    /// User colors and step-counter toggle, persisted and live-updated.
    #[default]
    Configurable,
}

impl FaceProfile {
    /// Whether this profile loads, merges and persists [`WatchfaceSettings`].
    pub const fn uses_settings(self) -> bool {
        matches!(self, FaceProfile::Configurable)
    }

    /// Hour padding used for 12-hour time.
    pub const fn hour_padding(self) -> HourPadding {
        match self {
            FaceProfile::Classic => HourPadding::Space,
            FaceProfile::Configurable => HourPadding::Stripped,
        }
    }

    /// The fixed appearance of the classic face, expressed as a settings record.
    ///
    /// The accent color is the date badge fill.
    pub const fn classic_appearance() -> WatchfaceSettings {
        WatchfaceSettings {
            background_color: Color::SUNSET_ORANGE,
            accent_color: Color::DARK_CANDY_APPLE_RED,
            clock_text_color: Color::BLACK,
            date_text_color: Color::WHITE,
            steps_text_color: Color::BLACK,
            show_steps: true,
        }
    }
}
