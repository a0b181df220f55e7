//! The watchface configuration record and its partial-update merge.
//!
//! [`WatchfaceSettings`] is the only durable entity of the face.  It is always
//! complete: it starts from [`WatchfaceSettings::initialize_defaults`] and is
//! then either replaced wholesale by the persisted copy, or changed one field
//! at a time by a [`SettingsUpdate`].
//!
//! # Partial-update merge (for beginners)
//!
//! The companion app does not have to send every field.  A message that only
//! carries `ShowSteps` turns into a `SettingsUpdate` where every other field
//! is `None`.  [`WatchfaceSettings::apply_update`] overwrites the fields that
//! are `Some(..)` and leaves the rest exactly as they were:
//!
//! ```rust
//! use watchface_core::{SettingsUpdate, WatchfaceSettings};
//!
//! let mut settings = WatchfaceSettings::default();
//! let update = SettingsUpdate { show_steps: Some(false), ..Default::default() };
//! settings.apply_update(&update);
//!
//! assert!(!settings.show_steps);
//! assert_eq!(settings.background_color, WatchfaceSettings::default().background_color);
//! ```

use std::fmt;

use crate::domain::color::Color;

/// User-configurable appearance of the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchfaceSettings {
    /// Window background fill.
    pub background_color: Color,
    /// Ring strokes and the date badge fill.
    pub accent_color: Color,
    pub clock_text_color: Color,
    pub date_text_color: Color,
    pub steps_text_color: Color,
    /// Whether the step-count label is visible.
    pub show_steps: bool,
}

impl WatchfaceSettings {
    /// The fixed baseline record used before anything is loaded.
    ///
    /// | Field            | Default      |
    /// |------------------|--------------|
    /// | background_color | MintGreen    |
    /// | accent_color     | OxfordBlue   |
    /// | clock_text_color | Black        |
    /// | date_text_color  | White        |
    /// | steps_text_color | Black        |
    /// | show_steps       | `true`       |
    pub const fn initialize_defaults() -> Self {
        Self {
            background_color: Color::MINT_GREEN,
            accent_color: Color::OXFORD_BLUE,
            clock_text_color: Color::BLACK,
            date_text_color: Color::WHITE,
            steps_text_color: Color::BLACK,
            show_steps: true,
        }
    }

    /// Overwrites every field named by `update`; unnamed fields are left untouched.
    ///
    /// Returns the fields that were named (whether or not the value differed).
    pub fn apply_update(&mut self, update: &SettingsUpdate) -> Vec<SettingsField> {
        let mut applied = Vec::new();
        if let Some(color) = update.background_color {
            self.background_color = color;
            applied.push(SettingsField::BackgroundColor);
        }
        if let Some(color) = update.accent_color {
            self.accent_color = color;
            applied.push(SettingsField::AccentColor);
        }
        if let Some(color) = update.clock_text_color {
            self.clock_text_color = color;
            applied.push(SettingsField::ClockTextColor);
        }
        if let Some(color) = update.date_text_color {
            self.date_text_color = color;
            applied.push(SettingsField::DateTextColor);
        }
        if let Some(color) = update.steps_text_color {
            self.steps_text_color = color;
            applied.push(SettingsField::StepsTextColor);
        }
        if let Some(show) = update.show_steps {
            self.show_steps = show;
            applied.push(SettingsField::ShowSteps);
        }
        applied
    }

    /// Consuming form of [`apply_update`](Self::apply_update).
    #[must_use]
    pub fn merged(mut self, update: &SettingsUpdate) -> Self {
        self.apply_update(update);
        self
    }
}

impl Default for WatchfaceSettings {
    fn default() -> Self {
        Self::initialize_defaults()
    }
}

/// A sparse set of field overrides.  `None` means "leave as is".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub background_color: Option<Color>,
    pub accent_color: Option<Color>,
    pub clock_text_color: Option<Color>,
    pub date_text_color: Option<Color>,
    pub steps_text_color: Option<Color>,
    pub show_steps: Option<bool>,
}

impl SettingsUpdate {
    /// `true` when the update names no field at all.
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }

    /// Number of fields the update names.
    pub fn field_count(&self) -> usize {
        [
            self.background_color.is_some(),
            self.accent_color.is_some(),
            self.clock_text_color.is_some(),
            self.date_text_color.is_some(),
            self.steps_text_color.is_some(),
            self.show_steps.is_some(),
        ]
        .iter()
        .filter(|named| **named)
        .count()
    }
}

/// Identifies one field of [`WatchfaceSettings`], mainly for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    BackgroundColor,
    AccentColor,
    ClockTextColor,
    DateTextColor,
    StepsTextColor,
    ShowSteps,
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SettingsField::BackgroundColor => "background_color",
            SettingsField::AccentColor => "accent_color",
            SettingsField::ClockTextColor => "clock_text_color",
            SettingsField::DateTextColor => "date_text_color",
            SettingsField::StepsTextColor => "steps_text_color",
            SettingsField::ShowSteps => "show_steps",
        };
        f.write_str(name)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
