//! Enemy spawning: per-mission rules, plus the free-play trickle.
//!
//! Spawns are timer driven and capped by the number of enemies still
//! alive. The boss is the exception: it appears on the first frame.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::{Enemy, EnemyId, Health};
use skystrike_core::constants::*;
use skystrike_core::enums::EnemyType;
use skystrike_core::error::InvariantError;
use skystrike_core::events::GameEvent;

use crate::mission::{MissionRun, Objective};
use crate::world_setup;

/// Number of enemies still alive.
pub fn live_enemy_count(world: &World) -> usize {
    world
        .query::<(&Enemy, &Health)>()
        .iter()
        .filter(|(_, (_, health))| health.alive())
        .count()
}

fn allocate_id(next_enemy_id: &mut u32) -> EnemyId {
    let id = EnemyId(*next_enemy_id);
    *next_enemy_id += 1;
    id
}

/// Advance `timer` and report whether a spawn is due. Resets the timer when
/// it is.
fn spawn_due(timer: &mut f64, interval: f64, dt: f64, live: usize, cap: usize) -> bool {
    *timer += dt;
    if *timer < interval || live >= cap {
        return false;
    }
    *timer = 0.0;
    true
}

/// Spawn for the active mission.
pub fn run_mission(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    run: &mut MissionRun,
    next_enemy_id: &mut u32,
    dt: f64,
    events: &mut Vec<GameEvent>,
) -> Result<(), InvariantError> {
    let live = live_enemy_count(world);
    let objective = run.definition.objective;

    match objective {
        Objective::Elimination { .. } => {
            let open = run.open_targets();
            if open.is_empty()
                || !spawn_due(&mut run.spawn_timer, SPAWN_INTERVAL, dt, live, ELIMINATION_ENEMY_CAP)
            {
                return Ok(());
            }
            let enemy_type = open[rng.gen_range(0..open.len())];
            let position = world_setup::random_edge_position(rng);
            let id = allocate_id(next_enemy_id);
            world_setup::spawn_enemy(world, rng, id, enemy_type, position, None)?;
            run.spawned += 1;
        }
        Objective::Survival { .. } => {
            if !spawn_due(
                &mut run.spawn_timer,
                SURVIVAL_SPAWN_INTERVAL,
                dt,
                live,
                SURVIVAL_ENEMY_CAP,
            ) {
                return Ok(());
            }
            let enemy_type = world_setup::uniform_enemy_type(rng);
            let position = world_setup::random_edge_position(rng);
            let id = allocate_id(next_enemy_id);
            world_setup::spawn_enemy(world, rng, id, enemy_type, position, None)?;
            run.spawned += 1;
        }
        Objective::Escort { .. } => {
            let Some(escort_position) = run.escort.as_ref().map(|e| e.position) else {
                return Ok(());
            };
            if !spawn_due(&mut run.spawn_timer, SPAWN_INTERVAL, dt, live, ESCORT_ENEMY_CAP) {
                return Ok(());
            }
            let enemy_type = world_setup::uniform_enemy_type(rng);
            let position =
                world_setup::random_position_near(rng, escort_position, ESCORT_SPAWN_RADIUS);
            let id = allocate_id(next_enemy_id);
            world_setup::spawn_enemy(world, rng, id, enemy_type, position, None)?;
            run.spawned += 1;
        }
        Objective::Defense {
            base_position,
            enemy_waves,
            ..
        } => {
            if run.spawned >= enemy_waves
                || !spawn_due(&mut run.spawn_timer, SPAWN_INTERVAL, dt, live, DEFENSE_ENEMY_CAP)
            {
                return Ok(());
            }
            let enemy_type = world_setup::uniform_enemy_type(rng);
            let position = world_setup::random_edge_position(rng);
            let id = allocate_id(next_enemy_id);
            world_setup::spawn_enemy(world, rng, id, enemy_type, position, Some(base_position))?;
            run.spawned += 1;
            log::debug!("defense raider {}/{enemy_waves} launched", run.spawned);
        }
        Objective::Boss {
            boss_type,
            boss_health,
            size_scale,
        } => {
            if run.boss.is_some() {
                return Ok(());
            }
            let position = world_setup::random_edge_position(rng);
            let id = allocate_id(next_enemy_id);
            world_setup::spawn_boss(world, rng, id, boss_type, boss_health, size_scale, position)?;
            run.boss = Some(id);
            run.spawned += 1;
            events.push(GameEvent::BossSpawned { id });
            log::info!("boss {boss_type:?} #{} entered the arena", id.0);
        }
    }
    Ok(())
}

/// Free-play spawning: weighted random types from the world edge.
pub fn run_free_play(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawn_timer: &mut f64,
    next_enemy_id: &mut u32,
    dt: f64,
) -> Result<(), InvariantError> {
    let live = live_enemy_count(world);
    if !spawn_due(spawn_timer, SPAWN_INTERVAL, dt, live, FREE_PLAY_ENEMY_CAP) {
        return Ok(());
    }
    let enemy_type: EnemyType = world_setup::weighted_enemy_type(rng);
    let position = world_setup::random_edge_position(rng);
    let id = allocate_id(next_enemy_id);
    world_setup::spawn_enemy(world, rng, id, enemy_type, position, None)?;
    Ok(())
}
