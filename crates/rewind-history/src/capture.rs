//! Immutable spatial captures and interpolation between them.

use glam::Vec3;

/// A snapshot of an object's spatial extent at one instant: the center of
/// its bounds plus the full size along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capture {
    /// Server-local time in seconds at which the capture was taken.
    ///
    /// Meaningful only for captures stored in a history buffer. A capture
    /// produced by [`Capture::interpolate`] represents "now, reconstructed"
    /// rather than a historical instant, and its timestamp is a don't-care.
    pub timestamp: f64,
    /// Center of the object's bounds in world space.
    pub position: Vec3,
    /// Full extent of the bounds along each axis.
    pub size: Vec3,
}

impl Capture {
    /// Creates a capture taken at `timestamp`.
    pub fn new(timestamp: f64, position: Vec3, size: Vec3) -> Self {
        Self {
            timestamp,
            position,
            size,
        }
    }

    /// Unclamped component-wise linear blend of two captures.
    ///
    /// `t` is normally the fraction reported by bracketing and lies in
    /// `[0, 1]`, but no range restriction is imposed; callers that
    /// deliberately extrapolate may pass values outside it.
    pub fn interpolate(from: &Capture, to: &Capture, t: f64) -> Capture {
        Capture {
            // The interpolated capture is applied directly; it carries no
            // meaningful timestamp of its own.
            timestamp: 0.0,
            position: from.position.lerp(to.position, t as f32),
            size: from.size.lerp(to.size, t as f32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture_at(timestamp: f64, x: f32) -> Capture {
        Capture::new(timestamp, Vec3::new(x, 0.0, 0.0), Vec3::new(1.0, 2.0, 1.0))
    }

    #[test]
    fn test_interpolate_at_zero_matches_from() {
        let a = capture_at(1.0, 0.0);
        let b = capture_at(2.0, 10.0);
        let mid = Capture::interpolate(&a, &b, 0.0);
        assert_eq!(mid.position, a.position);
        assert_eq!(mid.size, a.size);
    }

    #[test]
    fn test_interpolate_at_one_matches_to() {
        let a = capture_at(1.0, 0.0);
        let b = capture_at(2.0, 10.0);
        let end = Capture::interpolate(&a, &b, 1.0);
        assert_eq!(end.position, b.position);
        assert_eq!(end.size, b.size);
    }

    #[test]
    fn test_interpolate_midpoint() {
        let a = Capture::new(0.0, Vec3::ZERO, Vec3::splat(1.0));
        let b = Capture::new(1.0, Vec3::new(2.0, 4.0, 6.0), Vec3::splat(3.0));
        let mid = Capture::interpolate(&a, &b, 0.5);
        assert_eq!(mid.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mid.size, Vec3::splat(2.0));
    }

    #[test]
    fn test_interpolate_is_unclamped() {
        let a = capture_at(0.0, 0.0);
        let b = capture_at(1.0, 1.0);
        let beyond = Capture::interpolate(&a, &b, 2.0);
        assert_eq!(beyond.position.x, 2.0);
        let before = Capture::interpolate(&a, &b, -1.0);
        assert_eq!(before.position.x, -1.0);
    }
}
