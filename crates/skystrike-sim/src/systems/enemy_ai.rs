//! Enemy AI system: runs the behavior FSM for each live enemy, steers it,
//! and fires at the player while attacking.
//!
//! Calls the FSM from skystrike-ai, then updates ECS components.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use skystrike_ai::fsm::{evaluate, steer, EnemyContext};
use skystrike_core::components::{Enemy, Health, Position, Projectile, Velocity};
use skystrike_core::enums::AiState;
use skystrike_core::types::{clamp_to_world, pitch_of, yaw_of, Vector3};

use crate::systems::movement;
use crate::world_setup;

/// Run the enemy AI for one frame. Shots fired are pushed to `shots` as
/// (muzzle position, projectile) for the caller to spawn.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player_position: Vector3,
    difficulty: f64,
    dt: f64,
    shots: &mut Vec<(Vector3, Projectile)>,
) {
    for (_entity, (enemy, pos, vel, health)) in
        world.query_mut::<(&mut Enemy, &Position, &mut Velocity, &Health)>()
    {
        if !health.alive() {
            vel.0 = Vector3::ZERO;
            continue;
        }

        enemy.fire_cooldown = (enemy.fire_cooldown - dt).max(0.0);

        let ctx = EnemyContext {
            state: enemy.state,
            position: pos.0,
            player_position,
            health_fraction: health.fraction(),
            state_time: enemy.state_time,
            patrol_target: enemy.patrol_target,
        };
        let decision = evaluate(&ctx, rng);
        if decision.state_changed {
            log::trace!(
                "enemy #{} {:?} -> {:?}",
                enemy.id.0,
                enemy.state,
                decision.new_state
            );
            enemy.state = decision.new_state;
            enemy.state_time = 0.0;
        }
        enemy.state_time += dt;
        enemy.patrol_target = decision.patrol_target;

        vel.0 = steer(pos.0, decision.target, enemy.profile.speed * difficulty);
        if vel.0 != Vector3::ZERO {
            enemy.rotation = yaw_of(vel.0);
            enemy.pitch = pitch_of(vel.0);
        }

        if enemy.state == AiState::Attack && enemy.fire_cooldown <= 0.0 {
            shots.push((
                pos.0,
                world_setup::enemy_bullet(pos.0, player_position, enemy.profile.damage),
            ));
            enemy.fire_cooldown = enemy.profile.fire_cooldown / difficulty;
        }
    }

    movement::run::<Enemy>(world, dt);

    for (_entity, (_enemy, pos)) in world.query_mut::<(&Enemy, &mut Position)>() {
        pos.0 = clamp_to_world(pos.0);
    }
}
