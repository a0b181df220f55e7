//! Integration tests for the settings sync loop across restarts.
//!
//! Each test runs the face against a real [`FileStore`] in a temporary
//! directory, sends configuration messages, then builds a brand-new face on
//! the same directory to check what survived.

use chrono::{NaiveDate, NaiveDateTime};
use watchface_app::application::surfaces::LabelId;
use watchface_app::application::watchface::Watchface;
use watchface_app::infrastructure::clock::FixedClock;
use watchface_app::infrastructure::health::FixedHealth;
use watchface_app::infrastructure::inbox::parse_inbox_line;
use watchface_app::infrastructure::presentation::recording::RecordingSurfaces;
use watchface_app::infrastructure::storage::file_store::FileStore;
use watchface_app::infrastructure::storage::PersistentStore;
use watchface_core::{
    encode_settings, Color, FaceProfile, ScreenShape, WatchfaceSettings, SETTINGS_KEY,
};

type FileFace = Watchface<FileStore, RecordingSurfaces, FixedClock, FixedHealth>;

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 7, 21)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Boots a configurable face on `dir` and returns it with its surfaces handle.
fn boot(dir: &std::path::Path) -> (FileFace, RecordingSurfaces) {
    let surfaces = RecordingSurfaces::new();
    let mut face = Watchface::new(
        FaceProfile::Configurable,
        ScreenShape::Round,
        FileStore::new(dir),
        surfaces.clone(),
        FixedClock::new(noon(), true),
        FixedHealth::with_steps(321),
    );
    face.init();
    (face, surfaces)
}

fn send(face: &mut FileFace, json: &str) {
    let message = parse_inbox_line(json).expect("valid inbox line");
    face.on_inbox_received(&message);
}

#[test]
fn test_fresh_install_shows_defaults_and_writes_nothing() {
    // Arrange
    let dir = tempfile::tempdir().expect("tempdir");

    // Act
    let (face, surfaces) = boot(dir.path());

    // Assert
    assert_eq!(face.appearance(), WatchfaceSettings::initialize_defaults());
    assert_eq!(surfaces.background(), Color::MINT_GREEN);
    assert_eq!(surfaces.text_color(LabelId::Date), Some(Color::WHITE));
    assert!(!FileStore::new(dir.path()).exists(SETTINGS_KEY));
}

#[test]
fn test_background_color_survives_restart() {
    // Arrange
    let dir = tempfile::tempdir().expect("tempdir");
    let (mut face, _) = boot(dir.path());

    // Act
    send(&mut face, r#"{"BackgroundColor": 5614335}"#);
    face.deinit();
    let (restarted, surfaces) = boot(dir.path());

    // Assert
    let expected = WatchfaceSettings {
        background_color: Color::from_hex(0x55AAFF),
        ..WatchfaceSettings::default()
    };
    assert_eq!(restarted.appearance(), expected);
    assert_eq!(surfaces.background(), Color::from_hex(0x55AAFF));
}

#[test]
fn test_show_steps_off_survives_restart_and_hides_label() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (mut face, surfaces) = boot(dir.path());

    send(&mut face, r#"{"ShowSteps": 0}"#);
    assert_eq!(surfaces.is_hidden(LabelId::Steps), Some(true));

    let (restarted, surfaces) = boot(dir.path());
    assert!(!restarted.appearance().show_steps);
    assert_eq!(surfaces.is_hidden(LabelId::Steps), Some(true));
}

#[test]
fn test_two_sequential_messages_both_stick() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (mut face, _) = boot(dir.path());

    send(&mut face, r##"{"ClockTextColor": "#FF0000"}"##);
    send(&mut face, r##"{"DateTextColor": "#0000FF"}"##);
    let (restarted, surfaces) = boot(dir.path());

    assert_eq!(restarted.appearance().clock_text_color, Color::RED);
    assert_eq!(restarted.appearance().date_text_color, Color::BLUE);
    assert_eq!(surfaces.text_color(LabelId::Time), Some(Color::RED));
}

#[test]
fn test_persisted_blob_is_byte_exact_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (mut face, _) = boot(dir.path());

    send(&mut face, r#"{"SecondaryColor": 16711680, "99": 1}"#);

    let stored = FileStore::new(dir.path())
        .read(SETTINGS_KEY)
        .expect("read")
        .expect("blob present");
    assert_eq!(stored, encode_settings(&face.appearance()).to_vec());
}

#[test]
fn test_corrupt_blob_falls_back_to_defaults() {
    // Arrange
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = FileStore::new(dir.path());
    store.write(SETTINGS_KEY, &[1, 2, 3]).expect("write");

    // Act
    let (face, _) = boot(dir.path());

    // Assert
    assert_eq!(face.appearance(), WatchfaceSettings::default());
}

#[test]
fn test_legacy_blob_is_read_and_rewritten_in_current_layout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = FileStore::new(dir.path());
    store
        .write(SETTINGS_KEY, &[0xF5, 0xE0, 0xC0, 0xFF, 0xC0, 0x01])
        .expect("write legacy");

    let (mut face, _) = boot(dir.path());
    assert_eq!(face.appearance().background_color, Color::SUNSET_ORANGE);

    send(&mut face, r#"{"ShowSteps": true}"#);

    let stored = store.read(SETTINGS_KEY).expect("read").expect("present");
    assert_eq!(stored.len(), 7);
    assert_eq!(stored[0], 0x01);
}
