//! Type-specific attribute records.
//!
//! Resolved once when an enemy spawns and stored on its `Enemy` component,
//! so systems never branch on the enemy type again.

use skystrike_core::components::EnemyProfile;
use skystrike_core::enums::EnemyType;

/// Get the attribute record for a given enemy type.
pub fn get_profile(enemy_type: EnemyType) -> EnemyProfile {
    use skystrike_core::constants::*;

    match enemy_type {
        EnemyType::Scout => EnemyProfile {
            max_health: SCOUT_HEALTH,
            speed: SCOUT_SPEED,
            size: SCOUT_SIZE,
            color: [0.2, 0.8, 0.3],
            fire_cooldown: SCOUT_FIRE_COOLDOWN,
            damage: SCOUT_DAMAGE,
            score_value: SCOUT_SCORE,
        },
        EnemyType::Jet => EnemyProfile {
            max_health: JET_HEALTH,
            speed: JET_SPEED,
            size: JET_SIZE,
            color: [0.8, 0.2, 0.2],
            fire_cooldown: JET_FIRE_COOLDOWN,
            damage: JET_DAMAGE,
            score_value: JET_SCORE,
        },
        EnemyType::Bomber => EnemyProfile {
            max_health: BOMBER_HEALTH,
            speed: BOMBER_SPEED,
            size: BOMBER_SIZE,
            color: [0.4, 0.4, 0.5],
            fire_cooldown: BOMBER_FIRE_COOLDOWN,
            damage: BOMBER_DAMAGE,
            score_value: BOMBER_SCORE,
        },
    }
}
