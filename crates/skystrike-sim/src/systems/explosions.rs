//! Explosion effects: grow, age, and disappear after their lifetime.

use hecs::{Entity, World};

use skystrike_core::components::Explosion;
use skystrike_core::constants::EXPLOSION_GROWTH_RATE;

pub fn run(world: &mut World, dt: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, explosion) in world.query_mut::<&mut Explosion>() {
        explosion.age += dt;
        explosion.radius += EXPLOSION_GROWTH_RATE * dt;
        if explosion.age >= explosion.max_age {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
