//! Cleanup system: despawns destroyed enemies and spent projectiles.

use hecs::{Entity, World};

use skystrike_core::components::{Enemy, Health, Projectile};

/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_enemy, health)) in world.query_mut::<(&Enemy, &Health)>() {
        if !health.alive() {
            despawn_buffer.push(entity);
        }
    }

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if !projectile.alive {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
