//! Companion-app inbox for the simulator.
//!
//! Each line on stdin is one JSON object standing in for a configuration
//! message.  Keys are message-key names or numeric ids; values are integers,
//! booleans, `"#RRGGBB"`/`"0xRRGGBB"` strings, other strings, or byte arrays:
//!
//! ```json
//! {"BackgroundColor": "#55AAFF", "ShowSteps": false}
//! {"0": 5614335, "5": 1}
//! ```
//!
//! A line that is not a JSON object is rejected as a whole.  Inside an
//! object, entries that cannot be represented as a tuple are skipped, the
//! same way the face skips malformed fields of a real message.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use watchface_core::{ConfigMessage, MessageKey, TupleValue};

/// Error type for inbox line decoding.
#[derive(Debug, Error)]
pub enum InboxError {
    /// The line is not valid JSON.
    #[error("invalid JSON in inbox line: {0}")]
    Json(#[from] serde_json::Error),

    /// The line is valid JSON but not an object.
    #[error("inbox line must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Decodes one inbox line into a [`ConfigMessage`].
///
/// # Errors
///
/// Returns [`InboxError::Json`] for malformed JSON and
/// [`InboxError::NotAnObject`] when the top-level value is not an object.
pub fn parse_inbox_line(line: &str) -> Result<ConfigMessage, InboxError> {
    let value: Value = serde_json::from_str(line)?;
    let Value::Object(entries) = value else {
        return Err(InboxError::NotAnObject(json_kind(&value)));
    };

    let mut message = ConfigMessage::new();
    for (name, value) in entries {
        let Some(key) = resolve_key(&name) else {
            debug!(key = %name, "skipping unknown inbox key name");
            continue;
        };
        match to_tuple(&value) {
            Some(tuple) => message.insert(key, tuple),
            None => debug!(key = %name, kind = json_kind(&value), "skipping inbox value"),
        }
    }
    Ok(message)
}

/// Accepts a message-key name or a numeric id.  Unknown numeric ids pass
/// through; the face ignores them later.
fn resolve_key(name: &str) -> Option<u32> {
    MessageKey::from_name(name)
        .map(MessageKey::id)
        .or_else(|| name.parse::<u32>().ok())
}

fn to_tuple(value: &Value) -> Option<TupleValue> {
    match value {
        Value::Bool(flag) => Some(TupleValue::Int(i32::from(*flag))),
        Value::Number(n) => n.as_i64().and_then(int32).map(TupleValue::Int),
        Value::String(s) => Some(parse_hex(s).map_or_else(|| TupleValue::Str(s.clone()), TupleValue::Int)),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
            .collect::<Option<Vec<u8>>>()
            .map(TupleValue::Bytes),
        Value::Null | Value::Object(_) => None,
    }
}

/// Fits an integer into an `int32` tuple.  Values in the `u32` range keep
/// their bit pattern.
fn int32(v: i64) -> Option<i32> {
    i32::try_from(v)
        .ok()
        .or_else(|| u32::try_from(v).ok().map(|u| u as i32))
}

fn parse_hex(s: &str) -> Option<i32> {
    let digits = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"))?;
    u32::from_str_radix(digits, 16).ok().map(|u| u as i32)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchface_core::{Color, SettingsUpdate};

    #[test]
    fn test_named_keys_with_hex_string_and_bool() {
        // Arrange / Act
        let msg = parse_inbox_line(r##"{"BackgroundColor": "#55AAFF", "ShowSteps": false}"##)
            .expect("parse");

        // Assert
        assert_eq!(msg.find(MessageKey::BackgroundColor), Some(&TupleValue::Int(0x55AAFF)));
        assert_eq!(msg.find(MessageKey::ShowSteps), Some(&TupleValue::Int(0)));
    }

    #[test]
    fn test_numeric_ids_and_integers() {
        let msg = parse_inbox_line(r#"{"1": 16711680, "5": 1}"#).expect("parse");

        let update = SettingsUpdate::from_message(&msg);

        assert_eq!(update.accent_color, Some(Color::RED));
        assert_eq!(update.show_steps, Some(true));
    }

    #[test]
    fn test_unknown_numeric_id_is_kept_and_unknown_name_dropped() {
        let msg = parse_inbox_line(r#"{"42": 7, "Vibrate": 1}"#).expect("parse");
        assert_eq!(msg.len(), 1);
        assert!(SettingsUpdate::from_message(&msg).is_empty());
    }

    #[test]
    fn test_plain_string_becomes_string_tuple() {
        let msg = parse_inbox_line(r#"{"ClockTextColor": "white"}"#).expect("parse");
        assert_eq!(
            msg.find(MessageKey::ClockTextColor),
            Some(&TupleValue::Str("white".into()))
        );
    }

    #[test]
    fn test_byte_array_and_skipped_values() {
        let msg = parse_inbox_line(r#"{"2": [1, 2, 3], "3": null, "4": [300], "0": 1.5}"#)
            .expect("parse");

        assert_eq!(msg.len(), 1);
        assert_eq!(
            msg.find(MessageKey::ClockTextColor),
            Some(&TupleValue::Bytes(vec![1, 2, 3]))
        );
    }

    #[test]
    fn test_non_object_line_is_rejected() {
        assert!(matches!(
            parse_inbox_line("[1, 2]"),
            Err(InboxError::NotAnObject("array"))
        ));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(parse_inbox_line("{\"ShowSteps\": "), Err(InboxError::Json(_))));
    }

    #[test]
    fn test_full_u32_color_keeps_bit_pattern() {
        assert_eq!(int32(0xFFFF_FFFF), Some(-1));
        assert_eq!(int32(1 << 40), None);
    }
}
