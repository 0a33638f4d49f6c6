//! Projectile system: ages bullets and missiles, steers player missiles
//! toward the nearest live enemy, and moves everything in flight.

use hecs::World;

use skystrike_core::components::{Enemy, Health, Position, Projectile, Velocity};
use skystrike_core::enums::ProjectileOwner;
use skystrike_core::types::{in_world, Vector3};

use crate::guidance::{homing_direction, nearest_target};
use crate::systems::movement;

/// Positions of every live enemy, in world iteration order.
pub fn homing_targets(world: &World) -> Vec<Vector3> {
    world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .filter(|(_, (_, _, health))| health.alive())
        .map(|(_, (_, pos, _))| pos.0)
        .collect()
}

/// Run the projectile system for one frame.
pub fn run(world: &mut World, targets: &[Vector3], dt: f64) {
    for (_entity, (projectile, pos, vel)) in
        world.query_mut::<(&mut Projectile, &Position, &mut Velocity)>()
    {
        if !projectile.alive {
            continue;
        }
        projectile.age += dt;
        if projectile.age > projectile.max_lifetime {
            projectile.alive = false;
            vel.0 = Vector3::ZERO;
            continue;
        }

        if projectile.is_missile && projectile.owner == ProjectileOwner::Player {
            if let Some(target) = nearest_target(pos.0, targets) {
                projectile.direction = homing_direction(projectile.direction, pos.0, target);
            }
        }
        vel.0 = projectile.direction * projectile.speed;
    }

    movement::run::<Projectile>(world, dt);

    for (_entity, (projectile, pos)) in world.query_mut::<(&mut Projectile, &Position)>() {
        if projectile.alive && !in_world(pos.0) {
            projectile.alive = false;
        }
    }
}
