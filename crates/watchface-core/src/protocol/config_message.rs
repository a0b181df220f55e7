//! Configuration messages pushed by the companion app.
//!
//! A message is a sparse dictionary: 32-bit key → tuple value.  The companion
//! app sends any subset of the six keys below; the face merges whatever it
//! receives into its settings record and ignores the rest.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::color::Color;
use crate::domain::settings::SettingsUpdate;

// ── Message keys ──────────────────────────────────────────────────────────────

/// Keys understood by the configurable face.
///
/// The numeric values are the ids the companion app assigns to its settings
/// in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u32)]
pub enum MessageKey {
    BackgroundColor = 0,
    /// Accent color for the rings and the date badge.
    SecondaryColor = 1,
    ClockTextColor = 2,
    DateTextColor = 3,
    StepsTextColor = 4,
    ShowSteps = 5,
}

impl MessageKey {
    /// Every key, in id order.
    pub const ALL: [MessageKey; 6] = [
        MessageKey::BackgroundColor,
        MessageKey::SecondaryColor,
        MessageKey::ClockTextColor,
        MessageKey::DateTextColor,
        MessageKey::StepsTextColor,
        MessageKey::ShowSteps,
    ];

    /// Numeric id of the key.
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// The companion app's name for the key.
    pub const fn name(self) -> &'static str {
        match self {
            MessageKey::BackgroundColor => "BackgroundColor",
            MessageKey::SecondaryColor => "SecondaryColor",
            MessageKey::ClockTextColor => "ClockTextColor",
            MessageKey::DateTextColor => "DateTextColor",
            MessageKey::StepsTextColor => "StepsTextColor",
            MessageKey::ShowSteps => "ShowSteps",
        }
    }

    /// Looks a key up by its companion-app name (exact match).
    pub fn from_name(name: &str) -> Option<MessageKey> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl TryFrom<u32> for MessageKey {
    type Error = ();

    fn try_from(value: u32) -> Result<Self, ()> {
        match value {
            0 => Ok(MessageKey::BackgroundColor),
            1 => Ok(MessageKey::SecondaryColor),
            2 => Ok(MessageKey::ClockTextColor),
            3 => Ok(MessageKey::DateTextColor),
            4 => Ok(MessageKey::StepsTextColor),
            5 => Ok(MessageKey::ShowSteps),
            _ => Err(()),
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Tuple values ──────────────────────────────────────────────────────────────

/// One value in a configuration message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TupleValue {
    Int(i32),
    Str(String),
    Bytes(Vec<u8>),
}

impl TupleValue {
    /// The integer payload, if this is an integer tuple.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            TupleValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            TupleValue::Int(_) => "int",
            TupleValue::Str(_) => "string",
            TupleValue::Bytes(_) => "bytes",
        }
    }
}

// ── Message ───────────────────────────────────────────────────────────────────

/// A sparse key → value dictionary received from the companion app.
///
/// Keys are kept as raw `u32` so a message carrying keys this build does not
/// know about still round-trips through the inbox intact; they are dropped
/// only when the message is turned into a [`SettingsUpdate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMessage {
    tuples: BTreeMap<u32, TupleValue>,
}

impl ConfigMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) a tuple under a raw key id.
    pub fn insert(&mut self, key: u32, value: TupleValue) {
        self.tuples.insert(key, value);
    }

    /// Builder form of [`insert`](Self::insert) for a known key.
    ///
    /// ```rust
    /// use watchface_core::{ConfigMessage, MessageKey, TupleValue};
    ///
    /// let msg = ConfigMessage::new()
    ///     .with(MessageKey::BackgroundColor, TupleValue::Int(0x55AAFF))
    ///     .with(MessageKey::ShowSteps, TupleValue::Int(0));
    /// assert_eq!(msg.len(), 2);
    /// ```
    #[must_use]
    pub fn with(mut self, key: MessageKey, value: TupleValue) -> Self {
        self.insert(key.id(), value);
        self
    }

    /// Finds the tuple for `key`, if present.
    pub fn find(&self, key: MessageKey) -> Option<&TupleValue> {
        self.tuples.get(&key.id())
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Iterates over `(raw key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &TupleValue)> {
        self.tuples.iter().map(|(k, v)| (*k, v))
    }

    /// Converts the message into a sparse settings update.
    ///
    /// - Color keys take the integer as `0xRRGGBB` (see [`Color::from_hex`]).
    /// - `ShowSteps` is `true` only for the integer `1`.
    /// - A known key with a non-integer value is skipped.
    /// - Unknown keys are ignored.
    pub fn to_settings_update(&self) -> SettingsUpdate {
        let mut update = SettingsUpdate::default();

        for (raw_key, value) in self.iter() {
            let Ok(key) = MessageKey::try_from(raw_key) else {
                debug!(key = raw_key, "ignoring unknown configuration key");
                continue;
            };
            let Some(int) = value.as_int() else {
                debug!(%key, kind = value.kind(), "skipping non-integer configuration value");
                continue;
            };

            // Negative ints carry the same bit pattern the app sent.
            let color = || Color::from_hex(int as u32);
            match key {
                MessageKey::BackgroundColor => update.background_color = Some(color()),
                MessageKey::SecondaryColor => update.accent_color = Some(color()),
                MessageKey::ClockTextColor => update.clock_text_color = Some(color()),
                MessageKey::DateTextColor => update.date_text_color = Some(color()),
                MessageKey::StepsTextColor => update.steps_text_color = Some(color()),
                MessageKey::ShowSteps => update.show_steps = Some(int == 1),
            }
        }

        update
    }
}

impl SettingsUpdate {
    /// Builds an update from a companion-app message.
    ///
    /// Equivalent to [`ConfigMessage::to_settings_update`].
    pub fn from_message(message: &ConfigMessage) -> Self {
        message.to_settings_update()
    }
}

impl FromIterator<(MessageKey, TupleValue)> for ConfigMessage {
    fn from_iter<I: IntoIterator<Item = (MessageKey, TupleValue)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ConfigMessage::new(), |msg, (key, value)| msg.with(key, value))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
