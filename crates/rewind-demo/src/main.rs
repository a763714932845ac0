//! Headless demo: the server profiles a moving target while a lagged client
//! fires hit-scan queries; reconstruction error is reported per shot.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p rewind-demo` for defaults, or e.g.
//! `cargo run -p rewind-demo -- --rtt 0.25 --log-level debug`.

use clap::Parser;
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use rewind_compensator::Compensator;
use rewind_config::{CliArgs, Config};
use rewind_history::{HistorySettings, RttEstimator, estimate_time, validate_timing};
use tracing::{debug, info, warn};

/// Fixed simulation tick rate.
const TICK_RATE: u32 = 60;

/// Total simulated ticks (10 seconds at 60 Hz).
const TOTAL_TICKS: u64 = 600;

/// Ticks between simulated hit-scan shots.
const SHOT_EVERY_TICKS: u64 = 30;

/// Target bounds, constant throughout the run.
const TARGET_SIZE: Vec3 = Vec3::new(1.0, 2.0, 1.0);

/// Ground truth: the target orbits the origin at a fixed angular speed, so
/// any simulated time maps to an exact position for error reporting.
fn target_position(time: f64) -> Vec3 {
    let angle = time * 0.8;
    Vec3::new((angle.cos() * 5.0) as f32, 1.0, (angle.sin() * 5.0) as f32)
}

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .expect("Failed to resolve config directory")
            .join("rewind")
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);
    if let Err(err) = config.validate() {
        eprintln!("invalid configuration: {err}");
        std::process::exit(1);
    }

    // Initialize logging with config and debug settings
    let log_dir = config_dir.join("logs");
    rewind_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(
        capture_interval = config.compensation.capture_interval,
        history_limit = config.compensation.history_limit,
        rtt = config.timing.default_rtt,
        buffer_time = config.timing.buffer_time,
        "starting rewind demo"
    );

    let settings = HistorySettings {
        capture_interval: config.compensation.capture_interval,
        history_limit: config.compensation.history_limit,
        max_age: (config.compensation.max_age > 0.0).then_some(config.compensation.max_age),
    };
    let mut compensator = Compensator::new(settings);

    // The transport layer would normally feed per-message RTT measurements;
    // here they are synthesized around the configured baseline with
    // deterministic jitter (fixed seed for a reproducible run).
    let mut rng = Xoshiro256StarStar::seed_from_u64(42);
    let mut rtt = RttEstimator::default();

    let dt = 1.0 / f64::from(TICK_RATE);
    let mut shots = 0u32;
    let mut reconstructed_shots = 0u32;
    let mut worst_error = 0.0f64;

    for tick in 0..TOTAL_TICKS {
        let now = tick as f64 * dt;
        compensator.capture(now, target_position(now), TARGET_SIZE);

        // One RTT measurement per tick, jittered +/-20% around the baseline.
        let jitter = rng.gen_range(0.8..1.2);
        rtt.record_sample(config.timing.default_rtt * jitter);

        if tick == 0 || tick % SHOT_EVERY_TICKS != 0 {
            continue;
        }
        shots += 1;

        let smoothed_rtt = rtt.ewma_rtt;
        let buffer_time = config.timing.buffer_time;
        if let Err(err) = validate_timing(now, smoothed_rtt, buffer_time) {
            warn!(%err, "rejecting shot with bad timing inputs");
            continue;
        }

        let estimated = estimate_time(now, smoothed_rtt, buffer_time);
        match compensator.sample(now, smoothed_rtt, buffer_time) {
            Some(reconstructed) => {
                reconstructed_shots += 1;
                // The demo knows the true trajectory, so it can report how
                // far the reconstruction landed from where the target
                // actually was at the estimated instant.
                let truth = target_position(estimated);
                let error = f64::from(reconstructed.position.distance(truth));
                worst_error = worst_error.max(error);
                info!(
                    server_time = now,
                    estimated_time = estimated,
                    error = error,
                    "reconstructed target bounds"
                );

                if config.debug.show_history {
                    for capture in compensator.history() {
                        debug!(
                            timestamp = capture.timestamp,
                            position = ?capture.position,
                            "history entry"
                        );
                    }
                }
            }
            None => {
                // Routine miss: the caller's fallback policy applies. This
                // demo treats it as a live-state hit test.
                warn!(
                    server_time = now,
                    estimated_time = estimated,
                    "history cannot answer; falling back to live state"
                );
            }
        }
    }

    info!(
        shots,
        reconstructed_shots,
        worst_error,
        median_rtt = rtt.median_rtt(),
        "demo complete"
    );
}
