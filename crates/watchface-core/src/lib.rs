//! # watchface-core
//!
//! Shared library for the watchface containing the settings record, the
//! 8-bit palette colors, the persisted settings blob codec, the companion-app
//! configuration message model, and the time/date/step label formatting.
//!
//! It has zero dependencies on storage, windowing, health services, or
//! transports: everything here is pure and can be tested on any host.
//!
//! # Architecture overview (for beginners)
//!
//! The watchface shows the time, the date and today's step count on a round
//! or rectangular wrist display.  One face profile lets the wearer pick the
//! colors and hide the step counter from a companion app on their phone.
//! Those choices have to survive a restart, so they are written to the
//! watch's small key-value store.
//!
//! This crate (`watchface-core`) is the shared foundation.  It defines:
//!
//! - **`domain`** – The settings record and its per-field merge, palette
//!   colors, face profiles, screen geometry, and tick time units.
//!
//! - **`protocol`** – How bytes travel: the fixed-size settings blob stored
//!   under key `1`, and the sparse key/value configuration message pushed by
//!   the companion app.
//!
//! - **`format`** – The text shown on the labels: `10:42`, `Jul 21`,
//!   `💜 4210`.

pub mod domain;
pub mod format;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `watchface_core::WatchfaceSettings` instead of the full module path.
pub use domain::color::{Color, ColorError};
pub use domain::geometry::{Point, Rect, ScreenShape, Size};
pub use domain::profile::FaceProfile;
pub use domain::settings::{SettingsField, SettingsUpdate, WatchfaceSettings};
pub use domain::time_units::TimeUnits;
pub use protocol::config_message::{ConfigMessage, MessageKey, TupleValue};
pub use protocol::settings_blob::{decode_settings, encode_settings, BlobError, SETTINGS_KEY};
