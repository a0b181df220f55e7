//! TOML-based host configuration for the watchface simulator.
//!
//! The file is optional: every field has a default, so the simulator runs
//! with no configuration at all.  A full file looks like:
//!
//! ```toml
//! [face]
//! profile = "configurable"   # or "classic"
//! clock_style = "system"     # "24h", "12h" or "system"
//! screen = "round"           # "round" (180x180) or "rect" (144x168)
//!
//! [storage]
//! dir = "/var/lib/watchface"
//!
//! [health]
//! enabled = true
//! steps_per_minute = 90
//!
//! [log]
//! level = "info"
//! ```
//!
//! # Serde default values (for beginners)
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return value
//! of `some_fn()` when the field is absent from the TOML file, and sections
//! annotated with `#[serde(default)]` fall back to their `Default` impl when
//! the whole `[section]` is missing.  That is what lets an empty file, or a
//! file written for an older release, still load.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use watchface_core::{FaceProfile, ScreenShape};

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level host configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeviceConfig {
    #[serde(default)]
    pub face: FaceConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Which face runs and on what display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FaceConfig {
    #[serde(default)]
    pub profile: FaceProfile,
    #[serde(default)]
    pub clock_style: ClockStyle,
    #[serde(default)]
    pub screen: ScreenShape,
}

/// Where the persistent key-value store lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Storage directory.  `None` means [`default_storage_dir`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl StorageConfig {
    /// The configured directory, or the platform default.
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(default_storage_dir)
    }
}

/// Simulated pedometer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthConfig {
    /// When `false` the health service reports no data and no events.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Steps added for every simulated minute.
    #[serde(default = "default_steps_per_minute")]
    pub steps_per_minute: u32,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// `tracing` level directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 12/24-hour preference for the clock label.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClockStyle {
    #[serde(rename = "24h")]
    TwentyFourHour,
    #[serde(rename = "12h")]
    TwelveHour,
    /// Follow the host locale.
    #[default]
    #[serde(rename = "system")]
    System,
}

impl FromStr for ClockStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "24h" | "24" => Ok(ClockStyle::TwentyFourHour),
            "12h" | "12" => Ok(ClockStyle::TwelveHour),
            "system" => Ok(ClockStyle::System),
            other => Err(format!("unknown clock style '{other}' (expected 24h, 12h or system)")),
        }
    }
}

impl fmt::Display for ClockStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClockStyle::TwentyFourHour => "24h",
            ClockStyle::TwelveHour => "12h",
            ClockStyle::System => "system",
        })
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_steps_per_minute() -> u32 {
    90
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            steps_per_minute: default_steps_per_minute(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ── Config loading ────────────────────────────────────────────────────────────

/// Loads `DeviceConfig` from `path`, returning `DeviceConfig::default()` if
/// the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<DeviceConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(DeviceConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Platform data directory for the persistent store:
/// - Windows:  `%APPDATA%\Watchface`
/// - Linux:    `$XDG_DATA_HOME/watchface` or `~/.local/share/watchface`
/// - macOS:    `~/Library/Application Support/Watchface`
///
/// Falls back to `./watchface-data` when the platform directory cannot be
/// determined.
pub fn default_storage_dir() -> PathBuf {
    platform_data_dir().unwrap_or_else(|| PathBuf::from("watchface-data"))
}

fn platform_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Watchface"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".local").join("share"))
            })?;
        Some(base.join("watchface"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Watchface")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
