//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy aircraft type. Fixes the attribute record an enemy is built from.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum EnemyType {
    /// Light, fragile, cheap.
    #[default]
    Scout,
    /// Fast fighter.
    Jet,
    /// Slow, armored, hits hard.
    Bomber,
}

impl EnemyType {
    pub const ALL: [EnemyType; 3] = [EnemyType::Scout, EnemyType::Jet, EnemyType::Bomber];
}

/// Enemy behavior state. Destruction is tracked by `Health::alive`, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiState {
    /// Wandering between random waypoints.
    #[default]
    Patrol,
    /// Flying straight at the player.
    Chase,
    /// Circling the player and firing.
    Attack,
    /// Running away while damaged.
    Evade,
}

/// Who fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

/// Mission category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionType {
    Elimination,
    Survival,
    Escort,
    Defense,
    Boss,
}

/// Top-level game state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Menu,
    MissionSelect,
    MissionBriefing,
    Playing,
    Paused,
    MissionComplete,
    MissionFailed,
    GameOver,
}

/// Camera framing requested by the player. Consumed by the renderer only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraMode {
    /// Behind and above the aircraft.
    #[default]
    Chase,
    /// From the pilot's seat.
    Cockpit,
    /// Slowly orbiting the aircraft.
    Orbit,
}

impl CameraMode {
    /// Next mode in the toggle cycle.
    pub fn next(self) -> Self {
        match self {
            CameraMode::Chase => CameraMode::Cockpit,
            CameraMode::Cockpit => CameraMode::Orbit,
            CameraMode::Orbit => CameraMode::Chase,
        }
    }
}

/// Held flight controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightControl {
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    AltitudeUp,
    AltitudeDown,
}

/// Why a mission was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    PlayerDestroyed,
    EscortDestroyed,
    BaseBreached,
}
