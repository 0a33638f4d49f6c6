//! Homing guidance for player missiles.
//!
//! Each frame the missile keeps most of its current heading and bends a
//! fixed fraction toward the nearest live enemy. There is no lead, no
//! turn-rate limit and no lock-on: the target is re-picked every frame.

use skystrike_core::constants::{HOMING_KEEP_WEIGHT, HOMING_TURN_WEIGHT};
use skystrike_core::types::Vector3;

/// Blend the current direction 85/15 toward `target` and renormalize.
///
/// Falls back to `current` when the blend degenerates to zero length.
pub fn homing_direction(current: Vector3, from: Vector3, target: Vector3) -> Vector3 {
    let to_target = (target - from).normalize_or_zero();
    let blended = current * HOMING_KEEP_WEIGHT + to_target * HOMING_TURN_WEIGHT;
    let dir = blended.normalize_or_zero();
    if dir == Vector3::ZERO {
        current
    } else {
        dir
    }
}

/// Nearest candidate by straight-line distance. Ties keep the first.
pub fn nearest_target(from: Vector3, candidates: &[Vector3]) -> Option<Vector3> {
    candidates
        .iter()
        .copied()
        .min_by(|a, b| from.distance_squared(*a).total_cmp(&from.distance_squared(*b)))
}
