//! Bracketing search: the two captures surrounding a target time.

use crate::{Capture, HistoryBuffer};

/// Bracket widths beyond this many capture intervals indicate missed
/// captures around the target time.
pub const MISSED_CAPTURE_TOLERANCE: f64 = 3.0;

/// A successful bracketing query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Retained capture at or immediately before the target time.
    pub before: Capture,
    /// Retained capture at or immediately after the target time.
    pub after: Capture,
    /// Fraction in `[0, 1]` such that
    /// `target = before.timestamp + t * (after.timestamp - before.timestamp)`.
    /// Zero when both ends are the same capture.
    pub t: f64,
    /// `false` when the bracket is wider than [`MISSED_CAPTURE_TOLERANCE`]
    /// capture intervals. The bracket is still the best retained data and is
    /// returned regardless; callers decide whether to surface the anomaly.
    pub plausible: bool,
}

impl Bracket {
    /// Seconds between the bracket's two captures.
    pub fn width(&self) -> f64 {
        self.after.timestamp - self.before.timestamp
    }
}

impl HistoryBuffer {
    /// Finds the two retained captures bracketing `target_time`.
    ///
    /// Fails on an empty buffer and on any target outside the retained
    /// range — history is never extrapolated, so stale or future queries
    /// are rejected rather than guessed. A target exactly on an entry's
    /// timestamp succeeds with both bracket ends set to that entry and
    /// `t = 0`.
    ///
    /// `capture_interval` does not alter the search; it only feeds the
    /// result's plausibility flag. Pass a non-positive value when the
    /// cadence is unknown.
    pub fn sample(&self, target_time: f64, capture_interval: f64) -> Option<Bracket> {
        let entries = self.entries();
        let oldest = entries.front()?;
        let newest = entries.back()?;
        if target_time < oldest.timestamp || target_time > newest.timestamp {
            return None;
        }

        // First entry with timestamp >= target. In-range above guarantees
        // one exists.
        let idx = entries.partition_point(|c| c.timestamp < target_time);
        let after = entries[idx];
        if after.timestamp == target_time {
            return Some(Bracket {
                before: after,
                after,
                t: 0.0,
                plausible: true,
            });
        }

        // Not an exact match and target > oldest, so a predecessor exists.
        let before = entries[idx - 1];
        let width = after.timestamp - before.timestamp;
        // Duplicate timestamps collapse the bracket to zero width.
        let t = if width > 0.0 {
            (target_time - before.timestamp) / width
        } else {
            0.0
        };
        let plausible =
            capture_interval <= 0.0 || width <= capture_interval * MISSED_CAPTURE_TOLERANCE;

        Some(Bracket {
            before,
            after,
            t,
            plausible,
        })
    }
}
