//! Fundamental geometric types and heading helpers.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_ALTITUDE, MIN_ALTITUDE, WORLD_HALF_EXTENT};

/// 3D vector in world space. y = Up, yaw 0 faces +z.
///
/// `normalize_or_zero` is the normalization used throughout: a zero-length
/// input yields the zero vector instead of NaNs.
pub type Vector3 = glam::DVec3;

/// Unit direction for a yaw/pitch pair (radians).
pub fn heading_vector(yaw: f64, pitch: f64) -> Vector3 {
    Vector3::new(
        yaw.sin() * pitch.cos(),
        pitch.sin(),
        yaw.cos() * pitch.cos(),
    )
}

/// Yaw (radians) of a direction, 0 = +z, positive toward +x.
pub fn yaw_of(dir: Vector3) -> f64 {
    dir.x.atan2(dir.z)
}

/// Pitch (radians) of a direction, positive = climbing.
pub fn pitch_of(dir: Vector3) -> f64 {
    let len = dir.length();
    if len <= f64::EPSILON {
        return 0.0;
    }
    (dir.y / len).clamp(-1.0, 1.0).asin()
}

/// Clamp a position into the playable volume.
pub fn clamp_to_world(pos: Vector3) -> Vector3 {
    Vector3::new(
        pos.x.clamp(-WORLD_HALF_EXTENT, WORLD_HALF_EXTENT),
        pos.y.clamp(MIN_ALTITUDE, MAX_ALTITUDE),
        pos.z.clamp(-WORLD_HALF_EXTENT, WORLD_HALF_EXTENT),
    )
}

/// Whether a position lies inside the playable volume.
pub fn in_world(pos: Vector3) -> bool {
    pos.x.abs() <= WORLD_HALF_EXTENT
        && pos.z.abs() <= WORLD_HALF_EXTENT
        && (MIN_ALTITUDE..=MAX_ALTITUDE).contains(&pos.y)
}

/// Simulation time tracking. Advanced by the variable frame `dt`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulated frames.
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}
