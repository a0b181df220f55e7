//! SettingsSync: loads, merges, persists and applies the watchface settings.
//!
//! # Lifecycle
//!
//! ```text
//! SettingsSync::load(store)        defaults → persisted copy (if any)
//!        │
//!        ▼
//!   merge(update)                  per-field overwrite
//!   persist()                      full blob under key 1, best effort
//!   apply_to_presentation(..)      colors, steps visibility, canvas redraw
//! ```
//!
//! `load` is the only constructor, so a `SettingsSync` always holds a
//! complete, ready record.  Loading never fails from the caller's point of
//! view: a missing, unreadable or incompatible blob leaves the defaults in
//! place and is only logged.

use thiserror::Error;
use tracing::{debug, info, warn};
use watchface_core::{
    decode_settings, encode_settings, BlobError, SettingsField, SettingsUpdate,
    WatchfaceSettings, SETTINGS_KEY,
};

use crate::application::surfaces::{FaceSurfaces, LabelId};
use crate::infrastructure::storage::{PersistentStore, StorageError};

/// Error type for settings load and persist outcomes.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The store could not be read.
    #[error("settings storage unavailable: {0}")]
    StorageUnavailable(#[source] StorageError),

    /// A blob exists but does not have the expected layout.
    #[error("persisted settings rejected: {0}")]
    StorageSizeMismatch(#[from] BlobError),

    /// The store refused the write.
    #[error("failed to persist settings: {0}")]
    StorageWriteFailure(#[source] StorageError),
}

/// Reads the persisted settings record.
///
/// Returns `Ok(None)` when nothing is stored under [`SETTINGS_KEY`].
///
/// # Errors
///
/// Returns [`SettingsError::StorageUnavailable`] if the store cannot be read
/// and [`SettingsError::StorageSizeMismatch`] if the blob has the wrong shape.
pub fn read_settings<S: PersistentStore + ?Sized>(
    store: &S,
) -> Result<Option<WatchfaceSettings>, SettingsError> {
    let Some(bytes) = store
        .read(SETTINGS_KEY)
        .map_err(SettingsError::StorageUnavailable)?
    else {
        return Ok(None);
    };
    Ok(Some(decode_settings(&bytes)?))
}

/// Owns the in-memory settings record and the store it is persisted to.
#[derive(Debug)]
pub struct SettingsSync<S> {
    store: S,
    settings: WatchfaceSettings,
}

impl<S: PersistentStore> SettingsSync<S> {
    /// Seeds the record with defaults, then replaces it wholesale with the
    /// persisted copy when one can be read.
    pub fn load(store: S) -> Self {
        let settings = match read_settings(&store) {
            Ok(Some(settings)) => {
                info!("loaded persisted settings");
                settings
            }
            Ok(None) => {
                debug!("no persisted settings; using defaults");
                WatchfaceSettings::initialize_defaults()
            }
            Err(e @ SettingsError::StorageSizeMismatch(_)) => {
                warn!("{e}; using defaults");
                WatchfaceSettings::initialize_defaults()
            }
            Err(e) => {
                debug!("{e}; using defaults");
                WatchfaceSettings::initialize_defaults()
            }
        };
        Self { store, settings }
    }

    /// The current record.
    pub fn settings(&self) -> &WatchfaceSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Overwrites the fields named by `update`.  Returns the fields applied.
    pub fn merge(&mut self, update: &SettingsUpdate) -> Vec<SettingsField> {
        let applied = self.settings.apply_update(update);
        debug!(
            fields = ?applied.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "settings merged"
        );
        applied
    }

    /// Writes the full record under [`SETTINGS_KEY`], replacing what was there.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::StorageWriteFailure`] if the store refuses the
    /// write.  The in-memory record is unaffected either way.
    pub fn persist(&mut self) -> Result<(), SettingsError> {
        let blob = encode_settings(&self.settings);
        self.store
            .write(SETTINGS_KEY, &blob)
            .map_err(SettingsError::StorageWriteFailure)
    }

    /// Merges `update` and persists the result.  A failed write is logged and
    /// not retried; the merged record stays in memory.
    pub fn merge_and_persist(&mut self, update: &SettingsUpdate) -> Vec<SettingsField> {
        let applied = self.merge(update);
        if let Err(e) = self.persist() {
            warn!("{e}");
        }
        applied
    }
}

/// Pushes a settings record to the window.
///
/// Order: background, step-label visibility, canvas redraw (rings and badge
/// use the accent color), then the three text colors.
pub fn apply_to_presentation<F: FaceSurfaces + ?Sized>(
    settings: &WatchfaceSettings,
    surfaces: &mut F,
) {
    surfaces.set_background_color(settings.background_color);
    surfaces.set_hidden(LabelId::Steps, !settings.show_steps);
    surfaces.mark_canvas_dirty();
    surfaces.set_text_color(LabelId::Time, settings.clock_text_color);
    surfaces.set_text_color(LabelId::Date, settings.date_text_color);
    surfaces.set_text_color(LabelId::Steps, settings.steps_text_color);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
