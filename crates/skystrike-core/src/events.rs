//! Events emitted by the simulation for audio and HUD feedback.

use serde::{Deserialize, Serialize};

use crate::components::EnemyId;
use crate::enums::*;
use crate::types::Vector3;

/// Something notable that happened during an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The player fired.
    ShotFired { missile: bool },
    /// An enemy was shot down by the player.
    EnemyDestroyed {
        id: EnemyId,
        enemy_type: EnemyType,
        position: Vector3,
        points: u64,
        combo: u32,
    },
    /// An enemy rammed the player and was destroyed.
    Collision { id: EnemyId, position: Vector3 },
    /// The player took damage.
    PlayerHit { damage: f64 },
    /// The player's aircraft was destroyed.
    PlayerDestroyed { position: Vector3 },
    /// The escort took damage.
    EscortHit { damage: f64 },
    /// An enemy entered the defense base's breach radius.
    BaseBreached { id: EnemyId, breaches: u32 },
    /// The boss entered the arena.
    BossSpawned { id: EnemyId },
    MissionComplete { mission_id: u32 },
    MissionFailed {
        mission_id: u32,
        reason: FailureReason,
    },
}
