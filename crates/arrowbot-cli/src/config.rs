//! Bot configuration.
//!
//! Every option can come from the command line or from a JSON config
//! file next to the binary; flags win over the file. Calibration values
//! (button position, circle radius, sample offset) have no sane
//! defaults, so they are required, from either source.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "arrowbot.json";

/// Errors resolving the bot configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A calibration option was given neither on the command line nor
    /// in the config file.
    #[error("missing required option `{0}` (pass it as a flag or set it in the config file)")]
    Missing(&'static str),

    /// The config file exists but could not be read.
    #[error("config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The config file exists but is not valid JSON.
    #[error("config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Command-line flags, mirroring the config file schema.
#[derive(Debug, Parser)]
#[command(
    name = "arrowbot",
    version,
    about = "Solves the arrow puzzle on a connected device",
    allow_negative_numbers = true
)]
pub struct Args {
    /// Path to the adb executable.
    #[arg(short = 'a', long)]
    pub adb_path: Option<String>,

    /// Extra argument passed to every adb invocation (repeatable).
    #[arg(short = 'A', long = "adb-arg")]
    pub adb_args: Vec<String>,

    /// Screen y of the advance button.
    #[arg(short = 'b', long)]
    pub next_y: Option<i32>,

    /// Screen x of the advance button (defaults to the frame center).
    #[arg(short = 'B', long)]
    pub next_x: Option<i32>,

    /// Milliseconds to wait before tapping the advance button.
    #[arg(short = 'd', long)]
    pub next_delay: Option<u64>,

    /// Milliseconds to wait after tapping the advance button.
    #[arg(short = 'D', long)]
    pub reset_delay: Option<u64>,

    /// Radius of one puzzle circle, in pixels.
    #[arg(short = 'r', long)]
    pub radius: Option<i32>,

    /// Screen y of the topmost circle center.
    #[arg(short = 'p', long)]
    pub position_y: Option<i32>,

    /// Screen x of the topmost circle center (defaults to the frame center).
    #[arg(short = 'P', long)]
    pub position_x: Option<i32>,

    /// Sample-point y offset from a circle center.
    #[arg(short = 's', long)]
    pub sample_y: Option<i32>,

    /// Sample-point x offset from a circle center.
    #[arg(short = 'S', long)]
    pub sample_x: Option<i32>,

    /// Write a calibration png showing all meaningful positions, then exit.
    #[arg(long)]
    pub debug_file: Option<PathBuf>,

    /// Refuse to run if the screen width differs.
    #[arg(short = 'E', long)]
    pub expect_width: Option<u32>,

    /// Refuse to run if the screen height differs.
    #[arg(short = 'e', long)]
    pub expect_height: Option<u32>,

    /// Config file with the same options as the flags.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

/// Config file schema: every flag, all optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    adb_path: Option<String>,
    #[serde(default)]
    adb_args: Vec<String>,
    next_y: Option<i32>,
    next_x: Option<i32>,
    next_delay: Option<u64>,
    reset_delay: Option<u64>,
    radius: Option<i32>,
    position_y: Option<i32>,
    position_x: Option<i32>,
    sample_y: Option<i32>,
    sample_x: Option<i32>,
    debug_file: Option<PathBuf>,
    expect_width: Option<u32>,
    expect_height: Option<u32>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Fully resolved bot configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub adb_path: String,
    pub adb_args: Vec<String>,
    /// Advance button; `x = None` resolves to the frame center.
    pub next_x: Option<i32>,
    pub next_y: i32,
    pub next_delay: Duration,
    pub reset_delay: Duration,
    pub circle_radius: i32,
    /// Topmost circle; `x = None` resolves to the frame center.
    pub position_x: Option<i32>,
    pub position_y: i32,
    pub sample_x: i32,
    pub sample_y: i32,
    pub debug_file: Option<PathBuf>,
    pub expect_width: Option<u32>,
    pub expect_height: Option<u32>,
}

impl BotConfig {
    /// Merge command-line flags over the config file.
    pub fn resolve(args: Args) -> Result<Self, ConfigError> {
        let file = FileConfig::load(&args.config)?;

        let adb_args = if args.adb_args.is_empty() {
            file.adb_args
        } else {
            args.adb_args
        };

        Ok(Self {
            adb_path: args
                .adb_path
                .or(file.adb_path)
                .unwrap_or_else(|| "adb".to_string()),
            adb_args,
            next_x: args.next_x.or(file.next_x),
            next_y: args
                .next_y
                .or(file.next_y)
                .ok_or(ConfigError::Missing("next-y"))?,
            next_delay: Duration::from_millis(args.next_delay.or(file.next_delay).unwrap_or(50)),
            reset_delay: Duration::from_millis(args.reset_delay.or(file.reset_delay).unwrap_or(50)),
            circle_radius: args
                .radius
                .or(file.radius)
                .ok_or(ConfigError::Missing("radius"))?,
            position_x: args.position_x.or(file.position_x),
            position_y: args
                .position_y
                .or(file.position_y)
                .ok_or(ConfigError::Missing("position-y"))?,
            sample_x: args.sample_x.or(file.sample_x).unwrap_or(0),
            sample_y: args
                .sample_y
                .or(file.sample_y)
                .ok_or(ConfigError::Missing("sample-y"))?,
            debug_file: args.debug_file.or(file.debug_file),
            expect_width: args.expect_width.or(file.expect_width),
            expect_height: args.expect_height.or(file.expect_height),
        })
    }
}
