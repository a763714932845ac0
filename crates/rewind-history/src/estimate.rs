//! Estimation of the instant a remote client actually perceived.

use std::collections::VecDeque;

/// EWMA smoothing factor for RTT samples (default 0.125).
pub const RTT_EWMA_ALPHA: f64 = 0.125;

/// Maximum number of RTT samples retained for the median.
pub const RTT_MAX_SAMPLES: usize = 16;

/// The server-timeline instant the remote client currently perceives.
///
/// `rtt / 2` approximates the one-way trip — latency is assumed symmetric,
/// a known approximation with acknowledged error bounds — and `buffer_time`
/// is the client's deliberate render delay behind real time. The result is
/// not clamped and may predate the oldest retained capture; sampling then
/// reports a miss rather than extrapolating.
///
/// Pure arithmetic over finite inputs; non-finite inputs are a caller
/// contract violation, rejected upstream via [`validate_timing`].
pub fn estimate_time(server_time: f64, rtt: f64, buffer_time: f64) -> f64 {
    server_time - rtt / 2.0 - buffer_time
}

/// Timing inputs that must not reach interpolation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimingError {
    /// A timing input was NaN or infinite.
    #[error("non-finite {name}: {value}")]
    NonFinite {
        /// Which input was rejected.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A delay input was negative.
    #[error("negative {name}: {value}")]
    Negative {
        /// Which input was rejected.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// Validates timing inputs before they feed [`estimate_time`].
///
/// A NaN here would silently corrupt every reconstructed position
/// downstream, so non-finite values are rejected at the boundary.
/// `server_time` may sit anywhere on the timeline; `rtt` and `buffer_time`
/// are delays and must be non-negative.
///
/// # Errors
///
/// Returns [`TimingError`] naming the first offending input.
pub fn validate_timing(server_time: f64, rtt: f64, buffer_time: f64) -> Result<(), TimingError> {
    for (name, value) in [
        ("server_time", server_time),
        ("rtt", rtt),
        ("buffer_time", buffer_time),
    ] {
        if !value.is_finite() {
            return Err(TimingError::NonFinite { name, value });
        }
    }
    for (name, value) in [("rtt", rtt), ("buffer_time", buffer_time)] {
        if value < 0.0 {
            return Err(TimingError::Negative { name, value });
        }
    }
    Ok(())
}

/// Exponentially weighted moving average RTT estimator over seconds.
///
/// Smooths the raw per-message round-trip measurements supplied by the
/// network-timing layer; the median over retained samples rejects jitter
/// spikes.
#[derive(Debug, Clone)]
pub struct RttEstimator {
    /// Recent RTT samples in seconds, oldest first.
    pub samples: VecDeque<f64>,
    /// Maximum number of samples to retain.
    pub max_samples: usize,
    /// Current EWMA RTT estimate in seconds.
    pub ewma_rtt: f64,
    /// EWMA smoothing factor.
    pub alpha: f64,
}

impl Default for RttEstimator {
    fn default() -> Self {
        Self {
            samples: VecDeque::new(),
            max_samples: RTT_MAX_SAMPLES,
            ewma_rtt: 0.0,
            alpha: RTT_EWMA_ALPHA,
        }
    }
}

impl RttEstimator {
    /// Records a new RTT sample and updates the EWMA. The first sample
    /// seeds the average directly.
    pub fn record_sample(&mut self, rtt: f64) {
        if self.samples.is_empty() {
            self.ewma_rtt = rtt;
        } else {
            self.ewma_rtt = self.alpha * rtt + (1.0 - self.alpha) * self.ewma_rtt;
        }

        self.samples.push_back(rtt);
        if self.samples.len() > self.max_samples {
            self.samples.pop_front();
        }
    }

    /// Median of the retained samples, or zero when none were recorded.
    pub fn median_rtt(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(f64::total_cmp);
        sorted[sorted.len() / 2]
    }
}
