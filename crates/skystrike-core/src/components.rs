//! ECS components for hecs entities, plus the plain-data singletons the
//! engine owns directly (escort aircraft, defense base).
//!
//! Components carry data and the few invariant-keeping accessors they need.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::error::InvariantError;
use crate::types::Vector3;

/// World-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vector3);

/// World-space velocity (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vector3);

/// Stable enemy identifier, assigned at spawn and never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

/// Hit points with a one-way `alive` flag.
///
/// `current` only decreases, never drops below zero, and `alive` flips to
/// false exactly once: on the call that brings `current` to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    current: f64,
    max: f64,
    alive: bool,
}

impl Health {
    /// Full health. Rejects non-positive or non-finite maxima.
    pub fn new(max: f64) -> Result<Self, InvariantError> {
        if !max.is_finite() || max <= 0.0 {
            return Err(InvariantError::InvalidMaxHealth(max));
        }
        Ok(Self {
            current: max,
            max,
            alive: true,
        })
    }

    /// Back to full health with the same (already validated) maximum.
    pub fn restored(&self) -> Self {
        Self {
            current: self.max,
            max: self.max,
            alive: true,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn alive(&self) -> bool {
        self.alive
    }

    /// Remaining fraction in 0.0..=1.0.
    pub fn fraction(&self) -> f64 {
        self.current / self.max
    }

    /// Apply damage. Returns true only on the call that killed.
    /// Negative or NaN damage and damage to the dead are ignored.
    pub fn apply_damage(&mut self, amount: f64) -> bool {
        if !self.alive || amount.is_nan() || amount <= 0.0 {
            return false;
        }
        self.current = (self.current - amount).max(0.0);
        if self.current <= 0.0 {
            self.alive = false;
            return true;
        }
        false
    }
}

/// Fixed attribute record for an enemy type, resolved once at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyProfile {
    pub max_health: f64,
    /// Base cruise speed before the difficulty multiplier.
    pub speed: f64,
    /// Collision radius.
    pub size: f64,
    /// Render color (rgb, 0..1).
    pub color: [f32; 3],
    /// Base seconds between shots before the difficulty multiplier.
    pub fire_cooldown: f64,
    /// Damage per projectile.
    pub damage: f64,
    /// Points for a kill before combo/missile multipliers.
    pub score_value: u32,
}

/// Enemy aircraft state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub enemy_type: EnemyType,
    pub profile: EnemyProfile,
    pub state: AiState,
    /// Seconds spent in the current state.
    pub state_time: f64,
    /// Persisted PATROL waypoint.
    pub patrol_target: Vector3,
    /// Seconds until the next shot is allowed (floored at zero).
    pub fire_cooldown: f64,
    /// Yaw (radians).
    pub rotation: f64,
    pub pitch: f64,
    pub is_boss: bool,
}

/// A bullet or missile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Unit travel direction.
    pub direction: Vector3,
    pub speed: f64,
    pub damage: f64,
    pub is_missile: bool,
    pub owner: ProjectileOwner,
    pub age: f64,
    pub max_lifetime: f64,
    /// Cleared on expiry or impact; cleanup despawns it.
    pub alive: bool,
}

/// Purely visual fireball. Expires on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub age: f64,
    pub radius: f64,
    pub max_age: f64,
}

/// Drifting scenery cloud.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    pub size: f64,
}

/// Held flight and trigger controls, set by input commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub altitude_up: bool,
    pub altitude_down: bool,
    /// Machine gun fires continuously while held.
    pub fire_primary: bool,
    /// One missile attempt is pending.
    pub fire_secondary: bool,
}

impl ControlState {
    pub fn set(&mut self, control: FlightControl, active: bool) {
        match control {
            FlightControl::PitchUp => self.pitch_up = active,
            FlightControl::PitchDown => self.pitch_down = active,
            FlightControl::YawLeft => self.yaw_left = active,
            FlightControl::YawRight => self.yaw_right = active,
            FlightControl::AltitudeUp => self.altitude_up = active,
            FlightControl::AltitudeDown => self.altitude_down = active,
        }
    }
}

/// Friendly aircraft escorted in ESCORT missions. Flies straight to its destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendlyAircraft {
    pub position: Vector3,
    pub destination: Vector3,
    pub speed: f64,
    pub health: Health,
    pub arrived: bool,
}

/// Stationary base defended in DEFENSE missions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenseBase {
    pub position: Vector3,
    pub breach_radius: f64,
    /// Distinct enemies that have entered the breach radius.
    pub breaches: u32,
    pub max_breaches: u32,
}
