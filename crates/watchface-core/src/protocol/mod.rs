//! Protocol module containing the persisted settings blob codec and the
//! companion-app configuration message model.

pub mod config_message;
pub mod settings_blob;

pub use config_message::{ConfigMessage, MessageKey, TupleValue};
pub use settings_blob::{decode_settings, encode_settings, BlobError, SETTINGS_KEY};
