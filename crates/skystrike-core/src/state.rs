//! Game state snapshot: the complete read-only state handed to the
//! renderer and HUD after each update.

use serde::{Deserialize, Serialize};

use crate::components::EnemyId;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{SimTime, Vector3};

/// Complete game state produced after each update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub state: GameState,
    pub camera: CameraMode,
    pub god_mode: bool,
    /// Difficulty multiplier applied to enemy speed and fire rate.
    pub difficulty: f64,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub explosions: Vec<ExplosionView>,
    pub clouds: Vec<CloudView>,
    /// Active (or just finished) mission, `None` in free play and menus.
    pub mission: Option<MissionView>,
    /// Mission catalog with progression flags, in catalog order.
    pub missions: Vec<MissionSummary>,
    pub score: ScoreView,
    pub events: Vec<GameEvent>,
}

/// Player aircraft state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vector3,
    /// Yaw (radians).
    pub rotation: f64,
    pub pitch: f64,
    pub health: f64,
    pub max_health: f64,
    pub alive: bool,
    pub missiles: u32,
    pub gun_cooldown: f64,
    pub missile_cooldown: f64,
}

/// A live enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub enemy_type: EnemyType,
    pub position: Vector3,
    pub rotation: f64,
    pub pitch: f64,
    pub health: f64,
    pub max_health: f64,
    pub color: [f32; 3],
    pub size: f64,
    pub state: AiState,
    pub is_boss: bool,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vector3,
    pub direction: Vector3,
    pub is_missile: bool,
    pub owner: ProjectileOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: Vector3,
    pub age: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudView {
    pub position: Vector3,
    pub size: f64,
}

/// Mission header plus objective progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionView {
    pub id: u32,
    pub name: String,
    pub mission_type: MissionType,
    pub elapsed_secs: f64,
    pub progress: ObjectiveProgress,
}

/// Per-type objective progress figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectiveProgress {
    Elimination {
        kills: Vec<KillProgress>,
    },
    Survival {
        elapsed_secs: f64,
        duration_secs: f64,
    },
    Escort {
        escort_position: Vector3,
        destination: Vector3,
        escort_health: f64,
        escort_max_health: f64,
    },
    Defense {
        base_position: Vector3,
        breach_radius: f64,
        breaches: u32,
        max_breaches: u32,
        spawned: u32,
        spawn_quota: u32,
    },
    Boss {
        spawned: bool,
        boss_health: f64,
        boss_max_health: f64,
    },
}

/// Kills of one enemy type against the required count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KillProgress {
    pub enemy_type: EnemyType,
    pub kills: u32,
    pub required: u32,
}

/// One catalog entry for the mission-select screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionSummary {
    pub id: u32,
    pub name: String,
    pub mission_type: MissionType,
    pub unlocked: bool,
    pub completed: bool,
}

/// Running score for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u64,
    pub combo: u32,
    pub combo_timer: f64,
    pub shots_fired: u32,
    pub hits: u32,
    pub kills: u32,
}
