//! Unit tests for the per-object compensator pipeline.

use glam::Vec3;

use rewind_history::HistorySettings;

use super::*;

const SIZE: Vec3 = Vec3::new(1.0, 2.0, 1.0);

/// Helper: target moving along +x at 10 units/s.
fn target_position(time: f64) -> Vec3 {
    Vec3::new((time * 10.0) as f32, 0.0, 0.0)
}

/// Helper: compensator fed with captures every 0.1 s over `0.0..=end`.
fn profiled_until(end: f64) -> Compensator {
    let mut comp = Compensator::new(HistorySettings {
        capture_interval: 0.1,
        history_limit: 64,
        max_age: None,
    });
    let mut now = 0.0;
    while now <= end + 1e-9 {
        comp.capture(now, target_position(now), SIZE);
        now += 0.1;
    }
    comp
}

#[test]
fn test_first_capture_always_lands() {
    let mut comp = Compensator::new(HistorySettings::default());
    assert!(comp.capture(0.0, Vec3::ZERO, SIZE));
    assert_eq!(comp.len(), 1);
}

#[test]
fn test_capture_is_cadence_gated() {
    let mut comp = Compensator::new(HistorySettings {
        capture_interval: 0.1,
        ..HistorySettings::default()
    });
    assert!(comp.capture(0.0, Vec3::ZERO, SIZE));
    // Within the interval: skipped.
    assert!(!comp.capture(0.05, Vec3::ONE, SIZE));
    assert_eq!(comp.len(), 1);
    // Interval elapsed: stored.
    assert!(comp.capture(0.1, Vec3::ONE, SIZE));
    assert_eq!(comp.len(), 2);
}

#[test]
fn test_sample_reconstructs_past_position() {
    let comp = profiled_until(1.0);

    // now=1.0, rtt=0.2, buffer=0.1 -> estimated 0.8, where x was 8.
    let reconstructed = comp.sample(1.0, 0.2, 0.1).expect("0.8 is within retention");
    assert!(
        (reconstructed.position.x - 8.0).abs() < 1e-4,
        "x = {}",
        reconstructed.position.x
    );
    assert_eq!(reconstructed.size, SIZE);
}

#[test]
fn test_sample_between_captures_interpolates() {
    let comp = profiled_until(1.0);

    // Estimated time 0.75 falls between the 0.7 and 0.8 captures.
    let reconstructed = comp.sample(1.0, 0.3, 0.1).expect("0.75 is within retention");
    assert!(
        (reconstructed.position.x - 7.5).abs() < 1e-4,
        "x = {}",
        reconstructed.position.x
    );
}

#[test]
fn test_sample_with_empty_history_misses() {
    let comp = Compensator::new(HistorySettings::default());
    assert!(comp.sample(1.0, 0.1, 0.1).is_none());
}

#[test]
fn test_sample_older_than_retention_misses() {
    let mut comp = Compensator::new(HistorySettings {
        capture_interval: 0.1,
        history_limit: 6,
        max_age: None,
    });
    let mut now = 0.0;
    while now <= 10.0 + 1e-9 {
        comp.capture(now, target_position(now), SIZE);
        now += 0.1;
    }
    // Six retained captures cover ~0.5 s; an RTT of 4 s rewinds far past
    // them.
    assert!(comp.sample(10.0, 4.0, 0.1).is_none());
}

#[test]
fn test_sample_in_the_future_misses() {
    let comp = profiled_until(1.0);
    // Zero delays put the estimate at `now`, past the newest capture.
    assert!(comp.sample(1.05, 0.0, 0.0).is_none());
}

#[test]
fn test_history_iterates_oldest_first() {
    let comp = profiled_until(0.5);
    let timestamps: Vec<f64> = comp.history().map(|c| c.timestamp).collect();
    let mut sorted = timestamps.clone();
    sorted.sort_by(f64::total_cmp);
    assert_eq!(timestamps, sorted);
    assert_eq!(timestamps.len(), comp.len());
}

#[test]
fn test_clear_forgets_history_and_cadence() {
    let mut comp = profiled_until(1.0);
    comp.clear();
    assert!(comp.is_empty());
    assert!(comp.sample(1.0, 0.2, 0.1).is_none());
    // The next capture after a clear lands immediately.
    assert!(comp.capture(1.01, Vec3::ZERO, SIZE));
}

#[test]
fn test_zero_history_limit_never_samples() {
    let mut comp = Compensator::new(HistorySettings {
        history_limit: 0,
        ..HistorySettings::default()
    });
    for i in 0..20 {
        comp.capture(i as f64 * 0.1, target_position(i as f64 * 0.1), SIZE);
    }
    assert!(comp.is_empty());
    assert!(comp.sample(2.0, 0.1, 0.1).is_none());
}
