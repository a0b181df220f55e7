//! Binary codec for the persisted settings record.
//!
//! Storage format (version 1):
//! ```text
//! [version:1][background:1][accent:1][clock_text:1][date_text:1][steps_text:1][show_steps:1]
//! ```
//! Total size: 7 bytes.  Colors are ARGB8 bytes (see [`Color`]).  The flag
//! byte is written as `0x00`/`0x01`; any nonzero byte reads back as `true`.
//!
//! # Legacy layout
//!
//! The first releases stored the six fields as a packed struct with no
//! version byte (6 bytes).  [`decode_settings`] still accepts that layout so
//! an upgrade keeps the wearer's colors; [`encode_settings`] always writes
//! version 1.
//!
//! # Size check (for beginners)
//!
//! The key-value store hands back whatever bytes were written under a key.
//! If a future release changes the record shape, an older blob has a
//! different length, and reading it field-by-field would silently produce
//! garbage colors.  Checking the exact length (and the version byte) first
//! turns that into a clean [`BlobError`], which the caller answers by keeping
//! the defaults.

use thiserror::Error;

use crate::domain::color::Color;
use crate::domain::settings::WatchfaceSettings;

/// Storage key the settings record lives under.
pub const SETTINGS_KEY: u32 = 1;

/// Current blob layout version.
pub const BLOB_VERSION: u8 = 0x01;

/// Size of a version-1 blob in bytes.
pub const SETTINGS_BLOB_SIZE: usize = 7;

/// Size of the unversioned legacy blob in bytes.
pub const LEGACY_BLOB_SIZE: usize = 6;

/// Errors that can occur while decoding a persisted settings blob.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlobError {
    /// The blob length matches neither the current nor the legacy layout.
    #[error("settings blob size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The version byte is not one this build understands.
    #[error("unsupported settings blob version: {0}")]
    UnsupportedVersion(u8),
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Encodes `settings` into a version-1 blob.
///
/// # Examples
///
/// ```rust
/// use watchface_core::{decode_settings, encode_settings, WatchfaceSettings};
///
/// let settings = WatchfaceSettings::default();
/// let blob = encode_settings(&settings);
/// assert_eq!(decode_settings(&blob), Ok(settings));
/// ```
pub fn encode_settings(settings: &WatchfaceSettings) -> [u8; SETTINGS_BLOB_SIZE] {
    [
        BLOB_VERSION,
        settings.background_color.argb8(),
        settings.accent_color.argb8(),
        settings.clock_text_color.argb8(),
        settings.date_text_color.argb8(),
        settings.steps_text_color.argb8(),
        u8::from(settings.show_steps),
    ]
}

/// Decodes a blob written by [`encode_settings`] or by a legacy release.
///
/// The blob replaces the whole record: there is no per-field fallback.
///
/// # Errors
///
/// Returns [`BlobError::SizeMismatch`] when `bytes` is neither 7 nor 6 bytes
/// long, and [`BlobError::UnsupportedVersion`] when a 7-byte blob carries an
/// unknown version byte.
pub fn decode_settings(bytes: &[u8]) -> Result<WatchfaceSettings, BlobError> {
    match bytes.len() {
        SETTINGS_BLOB_SIZE => {
            let version = bytes[0];
            if version != BLOB_VERSION {
                return Err(BlobError::UnsupportedVersion(version));
            }
            Ok(decode_fields(&bytes[1..]))
        }
        LEGACY_BLOB_SIZE => Ok(decode_fields(bytes)),
        actual => Err(BlobError::SizeMismatch {
            expected: SETTINGS_BLOB_SIZE,
            actual,
        }),
    }
}

// ── Field decoding ────────────────────────────────────────────────────────────

/// Reads the six packed fields.  `fields` must be exactly
/// [`LEGACY_BLOB_SIZE`] bytes long; both callers guarantee it.
fn decode_fields(fields: &[u8]) -> WatchfaceSettings {
    WatchfaceSettings {
        background_color: Color::from_argb8(fields[0]),
        accent_color: Color::from_argb8(fields[1]),
        clock_text_color: Color::from_argb8(fields[2]),
        date_text_color: Color::from_argb8(fields[3]),
        steps_text_color: Color::from_argb8(fields[4]),
        show_steps: fields[5] != 0,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
