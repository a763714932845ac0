//! Command-line argument parsing for Rewind.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Rewind command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "rewind", about = "Rewind lag compensation")]
pub struct CliArgs {
    /// Seconds between history captures.
    #[arg(long)]
    pub capture_interval: Option<f64>,

    /// Maximum captures retained per object.
    #[arg(long)]
    pub history_limit: Option<usize>,

    /// Evict captures older than this many seconds (0 disables).
    #[arg(long)]
    pub max_age: Option<f64>,

    /// Simulated round-trip time in seconds.
    #[arg(long)]
    pub rtt: Option<f64>,

    /// Client interpolation buffer delay in seconds.
    #[arg(long)]
    pub buffer_time: Option<f64>,

    /// Log retained history entries alongside reconstructions.
    #[arg(long)]
    pub show_history: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(interval) = args.capture_interval {
            self.compensation.capture_interval = interval;
        }
        if let Some(limit) = args.history_limit {
            self.compensation.history_limit = limit;
        }
        if let Some(max_age) = args.max_age {
            self.compensation.max_age = max_age;
        }
        if let Some(rtt) = args.rtt {
            self.timing.default_rtt = rtt;
        }
        if let Some(buffer_time) = args.buffer_time {
            self.timing.buffer_time = buffer_time;
        }
        if args.show_history {
            self.debug.show_history = true;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
