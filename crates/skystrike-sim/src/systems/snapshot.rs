//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use skystrike_core::components::*;
use skystrike_core::enums::{CameraMode, GameState};
use skystrike_core::events::GameEvent;
use skystrike_core::state::*;
use skystrike_core::types::SimTime;

use crate::mission::{MissionCatalog, MissionRun};
use crate::player::PlayerAircraft;
use crate::scoring::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    state: GameState,
    camera: CameraMode,
    god_mode: bool,
    difficulty: f64,
    player: &PlayerAircraft,
    mission: Option<&MissionRun>,
    catalog: &MissionCatalog,
    score: &ScoreState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        state,
        camera,
        god_mode,
        difficulty,
        player: player.view(),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        explosions: build_explosions(world),
        clouds: build_clouds(world),
        mission: mission.map(|run| run.view(boss_health(world, run))),
        missions: catalog.summaries(),
        score: score.view(),
        events,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .filter(|(_, (_, _, health))| health.alive())
        .map(|(_, (enemy, pos, health))| EnemyView {
            id: enemy.id,
            enemy_type: enemy.enemy_type,
            position: pos.0,
            rotation: enemy.rotation,
            pitch: enemy.pitch,
            health: health.current(),
            max_health: health.max(),
            color: enemy.profile.color,
            size: enemy.profile.size,
            state: enemy.state,
            is_boss: enemy.is_boss,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position)>()
        .iter()
        .filter(|(_, (p, _))| p.alive)
        .map(|(_, (p, pos))| ProjectileView {
            position: pos.0,
            direction: p.direction,
            is_missile: p.is_missile,
            owner: p.owner,
        })
        .collect()
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    world
        .query::<(&Explosion, &Position)>()
        .iter()
        .map(|(_, (explosion, pos))| ExplosionView {
            position: pos.0,
            age: explosion.age,
            radius: explosion.radius,
        })
        .collect()
}

fn build_clouds(world: &World) -> Vec<CloudView> {
    world
        .query::<(&Cloud, &Position)>()
        .iter()
        .map(|(_, (cloud, pos))| CloudView {
            position: pos.0,
            size: cloud.size,
        })
        .collect()
}

/// (current, max) health of the mission boss while it is alive.
fn boss_health(world: &World, run: &MissionRun) -> Option<(f64, f64)> {
    let boss = run.boss?;
    world
        .query::<(&Enemy, &Health)>()
        .iter()
        .find(|(_, (enemy, health))| enemy.id == boss && health.alive())
        .map(|(_, (_, health))| (health.current(), health.max()))
}
