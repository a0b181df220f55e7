//! Integration tests for the watchface-core settings path.
//!
//! These tests drive a companion-app message through the public API into the
//! settings record and then through the persisted blob, exercising the
//! message model, the per-field merge and the blob codec together.

use watchface_core::{
    decode_settings, encode_settings, BlobError, Color, ConfigMessage, MessageKey,
    SettingsUpdate, TupleValue, WatchfaceSettings,
};

/// Merges `msg` into `settings`, then persists and reloads the result.
fn apply_and_reload(settings: WatchfaceSettings, msg: &ConfigMessage) -> WatchfaceSettings {
    let merged = settings.merged(&SettingsUpdate::from_message(msg));
    let blob = encode_settings(&merged);
    decode_settings(&blob).expect("freshly encoded blob must decode")
}

#[test]
fn test_fresh_install_yields_documented_defaults() {
    let settings = WatchfaceSettings::initialize_defaults();

    assert_eq!(settings.background_color, Color::MINT_GREEN);
    assert_eq!(settings.accent_color, Color::OXFORD_BLUE);
    assert_eq!(settings.clock_text_color, Color::BLACK);
    assert_eq!(settings.date_text_color, Color::WHITE);
    assert_eq!(settings.steps_text_color, Color::BLACK);
    assert!(settings.show_steps);
}

#[test]
fn test_show_steps_zero_only_disables_steps() {
    // Arrange
    let msg = ConfigMessage::new().with(MessageKey::ShowSteps, TupleValue::Int(0));

    // Act
    let reloaded = apply_and_reload(WatchfaceSettings::default(), &msg);

    // Assert
    assert_eq!(
        reloaded,
        WatchfaceSettings {
            show_steps: false,
            ..WatchfaceSettings::default()
        }
    );
}

#[test]
fn test_background_color_survives_persist_and_reload() {
    // Arrange
    let msg = ConfigMessage::new().with(MessageKey::BackgroundColor, TupleValue::Int(0x55AAFF));

    // Act
    let reloaded = apply_and_reload(WatchfaceSettings::default(), &msg);

    // Assert
    assert_eq!(reloaded.background_color, Color::from_hex(0x55AAFF));
    assert_eq!(reloaded.background_color.to_hex(), 0x55AAFF);
    assert_eq!(
        reloaded,
        WatchfaceSettings {
            background_color: Color::from_hex(0x55AAFF),
            ..WatchfaceSettings::default()
        }
    );
}

#[test]
fn test_two_sequential_messages_both_stick() {
    let first = ConfigMessage::new().with(MessageKey::ClockTextColor, TupleValue::Int(0xFF0000));
    let second = ConfigMessage::new().with(MessageKey::DateTextColor, TupleValue::Int(0x0000FF));

    let after_first = apply_and_reload(WatchfaceSettings::default(), &first);
    let after_second = apply_and_reload(after_first, &second);

    assert_eq!(after_second.clock_text_color, Color::RED);
    assert_eq!(after_second.date_text_color, Color::BLUE);
    assert_eq!(after_second.background_color, Color::MINT_GREEN);
}

#[test]
fn test_unknown_fields_do_not_disturb_known_ones() {
    let mut msg = ConfigMessage::new().with(MessageKey::SecondaryColor, TupleValue::Int(0xFFFF00));
    msg.insert(77, TupleValue::Int(1));

    let reloaded = apply_and_reload(WatchfaceSettings::default(), &msg);

    assert_eq!(reloaded.accent_color, Color::YELLOW);
    assert_eq!(
        reloaded,
        WatchfaceSettings {
            accent_color: Color::YELLOW,
            ..WatchfaceSettings::default()
        }
    );
}

#[test]
fn test_decode_is_idempotent() {
    let blob = encode_settings(&WatchfaceSettings::default());
    assert_eq!(decode_settings(&blob), decode_settings(&blob));
}

#[test]
fn test_truncated_blob_is_rejected_so_caller_keeps_defaults() {
    let blob = encode_settings(&WatchfaceSettings::default());

    let result = decode_settings(&blob[..4]);

    assert_eq!(result, Err(BlobError::SizeMismatch { expected: 7, actual: 4 }));
    let settings = result.unwrap_or_default();
    assert_eq!(settings, WatchfaceSettings::initialize_defaults());
}
