//! Per-object lag compensation: cadence-gated capture and rewound sampling.

use glam::Vec3;
use tracing::{debug, trace};

use rewind_history::{Capture, HistoryBuffer, HistorySettings, estimate_time};

/// Profiles one hit-testable object: owns its [`HistoryBuffer`], captures
/// its bounds on a fixed cadence, and reconstructs past bounds for hit
/// tests.
///
/// One compensator per object; compensators are never shared. All calls
/// take explicit times — the surrounding simulation owns the clock.
#[derive(Debug, Clone)]
pub struct Compensator {
    settings: HistorySettings,
    history: HistoryBuffer,
    last_capture_time: f64,
}

impl Compensator {
    /// Creates a compensator with an empty history.
    pub fn new(settings: HistorySettings) -> Self {
        let history = HistoryBuffer::with_capacity(settings.history_limit);
        Self {
            settings,
            history,
            // Any finite `now` is past this, so the first capture always
            // lands.
            last_capture_time: f64::NEG_INFINITY,
        }
    }

    /// Captures the object's current bounds if a full capture interval has
    /// elapsed since the previous capture. Returns `true` when a capture
    /// was stored.
    ///
    /// Call once per simulation tick with the server's local time;
    /// timestamps must be non-decreasing across calls.
    pub fn capture(&mut self, now: f64, position: Vec3, size: Vec3) -> bool {
        if now < self.last_capture_time + self.settings.capture_interval {
            return false;
        }
        self.last_capture_time = now;
        self.history
            .insert(&self.settings, now, Capture::new(now, position, size));
        trace!(
            timestamp = now,
            retained = self.history.len(),
            "captured bounds"
        );
        true
    }

    /// Reconstructs the object's bounds at the instant the acting client
    /// perceived, given the server's current time and the connection's
    /// round-trip time and client buffer delay.
    ///
    /// `None` means the history cannot answer: it is empty, or the
    /// estimated time falls outside the retained range (startup, stale RTT,
    /// long stall). This is a routine outcome, not a fault — the fallback
    /// policy (treat as a miss, or test against live state) belongs to the
    /// caller.
    pub fn sample(&self, now: f64, rtt: f64, buffer_time: f64) -> Option<Capture> {
        let estimated = estimate_time(now, rtt, buffer_time);

        let Some(bracket) = self.history.sample(estimated, self.settings.capture_interval) else {
            debug!(
                estimated,
                oldest = self.history.oldest().map(|c| c.timestamp),
                newest = self.history.newest().map(|c| c.timestamp),
                "history does not contain the estimated time"
            );
            return None;
        };

        if !bracket.plausible {
            debug!(
                estimated,
                bracket_width = bracket.width(),
                capture_interval = self.settings.capture_interval,
                "bracket wider than capture cadence; captures were missed"
            );
        }

        Some(Capture::interpolate(&bracket.before, &bracket.after, bracket.t))
    }

    /// Read-only view of the retained history, oldest first. For debug
    /// overlays; iteration never touches the mutation path.
    pub fn history(&self) -> impl Iterator<Item = &Capture> {
        self.history.iter()
    }

    /// Number of retained captures.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Returns `true` if no captures are retained.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The settings this compensator was created with.
    pub fn settings(&self) -> &HistorySettings {
        &self.settings
    }

    /// Drops all history. Call when the object teleports or respawns; its
    /// past extents no longer describe it.
    pub fn clear(&mut self) {
        self.history.clear();
        self.last_capture_time = f64::NEG_INFINITY;
    }
}

#[cfg(test)]
#[path = "compensator_tests.rs"]
mod tests;
