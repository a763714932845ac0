//! Bounded, time-ordered history of captures for a single object.

use std::collections::VecDeque;

use crate::Capture;

/// Default seconds between captures.
pub const DEFAULT_CAPTURE_INTERVAL: f64 = 0.1;

/// Default maximum number of captures retained per object.
pub const DEFAULT_HISTORY_LIMIT: usize = 6;

/// Tuning for one object's history. Supplied once when profiling begins and
/// treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySettings {
    /// Seconds between captures.
    pub capture_interval: f64,
    /// Maximum number of captures retained. Zero is a degenerate but
    /// tolerated configuration: every insert immediately evicts itself, the
    /// buffer stays permanently empty, and sampling always fails.
    pub history_limit: usize,
    /// Evict captures older than this many seconds relative to the capture
    /// being inserted, even when under the count limit. Bounds staleness
    /// after a server stall. `None` disables age-based eviction.
    pub max_age: Option<f64>,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            capture_interval: DEFAULT_CAPTURE_INTERVAL,
            history_limit: DEFAULT_HISTORY_LIMIT,
            max_age: None,
        }
    }
}

/// Time-ordered, bounded sequence of [`Capture`]s, oldest first.
///
/// Owned exclusively by the object it profiles; no two objects share a
/// buffer. Timestamps must be non-decreasing across inserts — the buffer
/// never resorts, and non-monotonic inserts corrupt bracketing.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    entries: VecDeque<Capture>,
}

impl HistoryBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with room for `limit` captures.
    pub fn with_capacity(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
        }
    }

    /// Appends `capture` keyed at `timestamp` and enforces the bounds:
    /// oldest entries are evicted while over `settings.history_limit`, then
    /// while older than `timestamp - max_age` if age eviction is enabled.
    ///
    /// `timestamp` must be the caller's current local clock reading; the
    /// capture's own timestamp field is overwritten with it so the entry
    /// and its key never disagree.
    pub fn insert(&mut self, settings: &HistorySettings, timestamp: f64, mut capture: Capture) {
        capture.timestamp = timestamp;
        self.entries.push_back(capture);

        while self.entries.len() > settings.history_limit {
            self.entries.pop_front();
        }
        if let Some(max_age) = settings.max_age {
            let cutoff = timestamp - max_age;
            while self.entries.front().is_some_and(|c| c.timestamp < cutoff) {
                self.entries.pop_front();
            }
        }
    }

    /// Read-only iteration over retained captures, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Capture> {
        self.entries.iter()
    }

    /// The oldest retained capture, if any.
    pub fn oldest(&self) -> Option<&Capture> {
        self.entries.front()
    }

    /// The newest retained capture, if any.
    pub fn newest(&self) -> Option<&Capture> {
        self.entries.back()
    }

    /// Number of retained captures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no captures are retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all retained captures (object teleported or respawned; its
    /// past extents no longer describe it).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn entries(&self) -> &VecDeque<Capture> {
        &self.entries
    }
}
