//! # Kinematic Motion
//!
//! Constant-rate interpolation helpers for bodies that are driven directly by
//! gameplay code instead of by forces.

use crate::types::Vec3;

/// Move `current` toward `target` by at most `max_delta` units.
///
/// Never overshoots: when the remaining distance is within `max_delta` the
/// target itself is returned. A negative `max_delta` is treated as zero.
#[must_use]
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let offset = target - current;
    let dist = offset.length();
    let max_delta = max_delta.max(0.0);
    if dist <= max_delta {
        return target;
    }
    current + offset * (max_delta / dist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_step_keeps_direction() {
        let p = move_towards(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), 0.5);
        assert_eq!(p, Vec3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn large_step_snaps_to_target() {
        let target = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(move_towards(Vec3::ZERO, target, 50.0), target);
    }

    #[test]
    fn negative_delta_does_not_move_backwards() {
        let p = move_towards(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), -1.0);
        assert_eq!(p, Vec3::ZERO);
    }
}
