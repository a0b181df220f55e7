//! Watchface simulator entry point.
//!
//! Runs the face on the host: the terminal stands in for the display, a
//! simulated pedometer for the health service, a directory of files for the
//! watch's key-value store, and stdin for the companion app.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ Cli::parse() + load_config()   -- CLI flags override the TOML file
//!  └─ Watchface::new()               -- loads persisted settings
//!  └─ Watchface::init()              -- window, labels, health subscription
//!  └─ event loop (tokio::select!)
//!       ├─ tick interval  → pedometer + clock poll
//!       ├─ stdin line     → JSON inbox → on_inbox_received
//!       └─ Ctrl+C         → deinit and exit
//! ```
//!
//! Every branch runs to completion before the next one starts, which is the
//! single-threaded dispatch the face expects.
//!
//! # Example
//!
//! ```bash
//! echo '{"BackgroundColor": "#55AAFF", "ShowSteps": 0}' | watchface --tick-ms 500
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use watchface_core::FaceProfile;

use watchface_app::application::watchface::Watchface;
use watchface_app::infrastructure::clock::{SystemClock, WallClock};
use watchface_app::infrastructure::health::SimulatedPedometer;
use watchface_app::infrastructure::inbox::parse_inbox_line;
use watchface_app::infrastructure::presentation::recording::RecordingCanvas;
use watchface_app::infrastructure::presentation::terminal::TerminalSurfaces;
use watchface_app::infrastructure::storage::config::{load_config, ClockStyle, DeviceConfig};
use watchface_app::infrastructure::storage::file_store::FileStore;

type HostFace = Watchface<FileStore, TerminalSurfaces, SystemClock, SimulatedPedometer>;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Watchface simulator.
///
/// Shows the time, the date and today's steps as text frames, persists
/// settings to disk, and reads companion-app configuration messages as JSON
/// lines on stdin.
#[derive(Debug, Parser)]
#[command(name = "watchface", about = "Host simulator for the watchface", version)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, env = "WATCHFACE_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for the persistent key-value store.
    ///
    /// Overrides `[storage] dir` from the configuration file.
    #[arg(long, env = "WATCHFACE_STORAGE_DIR")]
    storage_dir: Option<PathBuf>,

    /// Face profile: `classic` or `configurable`.
    #[arg(long, value_parser = parse_profile, env = "WATCHFACE_PROFILE")]
    profile: Option<FaceProfile>,

    /// Clock style: `24h`, `12h` or `system`.
    #[arg(long, env = "WATCHFACE_CLOCK_STYLE")]
    clock_style: Option<ClockStyle>,

    /// How often the simulator samples the clock and the pedometer, in
    /// milliseconds.
    #[arg(long, default_value_t = 1000, env = "WATCHFACE_TICK_MS")]
    tick_ms: u64,
}

impl Cli {
    /// Applies the CLI overrides on top of the file configuration.
    fn apply_to(&self, mut config: DeviceConfig) -> DeviceConfig {
        if let Some(dir) = &self.storage_dir {
            config.storage.dir = Some(dir.clone());
        }
        if let Some(profile) = self.profile {
            config.face.profile = profile;
        }
        if let Some(style) = self.clock_style {
            config.face.clock_style = style;
        }
        config
    }

    fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

fn parse_profile(s: &str) -> Result<FaceProfile, String> {
    match s.to_ascii_lowercase().as_str() {
        "classic" => Ok(FaceProfile::Classic),
        "configurable" => Ok(FaceProfile::Configurable),
        other => Err(format!("unknown profile '{other}' (expected classic or configurable)")),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DeviceConfig::default(),
    };
    let config = cli.apply_to(file_config);

    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // `RUST_LOG` wins; otherwise the configured level; otherwise `info`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.log.level))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let storage_dir = config.storage.resolved_dir();
    info!(
        profile = ?config.face.profile,
        screen = ?config.face.screen,
        clock_style = %config.face.clock_style,
        storage = %storage_dir.display(),
        "watchface simulator starting"
    );

    let clock = SystemClock::new(config.face.clock_style);
    let pedometer =
        SimulatedPedometer::new(config.health.steps_per_minute, config.health.enabled);

    let mut face: HostFace = Watchface::new(
        config.face.profile,
        config.face.screen,
        FileStore::new(storage_dir),
        TerminalSurfaces::new(),
        clock,
        pedometer.clone(),
    );
    face.init();
    render_if_pending(&mut face);

    let result = run_event_loop(&mut face, &clock, &pedometer, cli.tick_period()).await;

    face.deinit();
    result
}

// ── Event loop ────────────────────────────────────────────────────────────────

async fn run_event_loop(
    face: &mut HostFace,
    clock: &SystemClock,
    pedometer: &SimulatedPedometer,
    period: Duration,
) -> anyhow::Result<()> {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut inbox = BufReader::new(tokio::io::stdin()).lines();
    let mut inbox_open = true;

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(event) = pedometer.advance(clock.now()) {
                    face.on_health_event(event);
                }
                face.poll_clock();
            }
            line = inbox.next_line(), if inbox_open => {
                match line.context("failed to read inbox line")? {
                    Some(line) if line.trim().is_empty() => {}
                    Some(line) => match parse_inbox_line(&line) {
                        Ok(message) => {
                            face.on_inbox_received(&message);
                        }
                        Err(e) => warn!("{e}"),
                    },
                    None => {
                        info!("inbox closed; face keeps running until Ctrl+C");
                        inbox_open = false;
                    }
                }
            }
            signal = &mut shutdown => {
                signal.context("failed to listen for Ctrl+C")?;
                info!("received Ctrl+C, shutting down");
                break;
            }
        }
        render_if_pending(face);
    }
    Ok(())
}

/// Prints a frame when the window changed since the last one.
fn render_if_pending(face: &mut HostFace) {
    if !face.surfaces_mut().take_redraw() {
        return;
    }
    let mut canvas = RecordingCanvas::default();
    face.draw_canvas(&mut canvas);
    print!("{}", face.surfaces().render_frame(&canvas.ops));
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        // Arrange: parse with no arguments (all defaults apply)
        let cli = Cli::parse_from(["watchface"]);

        // Assert
        assert_eq!(cli.tick_ms, 1000);
        assert!(cli.config.is_none());
        assert!(cli.profile.is_none());
    }

    #[test]
    fn test_cli_overrides_file_config() {
        // Arrange
        let cli = Cli::parse_from([
            "watchface",
            "--profile",
            "classic",
            "--clock-style",
            "12h",
            "--storage-dir",
            "/tmp/face",
        ]);

        // Act
        let config = cli.apply_to(DeviceConfig::default());

        // Assert
        assert_eq!(config.face.profile, FaceProfile::Classic);
        assert_eq!(config.face.clock_style, ClockStyle::TwelveHour);
        assert_eq!(config.storage.dir, Some(PathBuf::from("/tmp/face")));
    }

    #[test]
    fn test_absent_flags_keep_file_values() {
        let mut file = DeviceConfig::default();
        file.face.profile = FaceProfile::Classic;

        let config = Cli::parse_from(["watchface"]).apply_to(file.clone());

        assert_eq!(config, file);
    }

    #[test]
    fn test_invalid_profile_is_rejected() {
        assert!(Cli::try_parse_from(["watchface", "--profile", "fancy"]).is_err());
    }

    #[test]
    fn test_zero_tick_is_clamped() {
        let cli = Cli::parse_from(["watchface", "--tick-ms", "0"]);
        assert_eq!(cli.tick_period(), Duration::from_millis(1));
    }
}
