//! Configuration system for Rewind.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports CLI overrides via clap, hot-reload detection, and forward/backward
//! compatible serialization. Timing values are validated on load so that
//! non-finite or negative delays never reach the compensation math.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CompensationConfig, Config, DebugConfig, TimingConfig};
pub use error::ConfigError;
