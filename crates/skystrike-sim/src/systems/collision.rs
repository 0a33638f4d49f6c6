//! Collision resolution: player fire against enemies, enemy fire against
//! the player and the escort, ramming, and defense-base breaches.
//!
//! Explosions are collected while the world is being read and spawned at
//! the end, once every borrow is released.

use hecs::{Entity, World};

use skystrike_core::components::{Enemy, EnemyId, Health, Position, Projectile};
use skystrike_core::constants::*;
use skystrike_core::enums::ProjectileOwner;
use skystrike_core::events::GameEvent;
use skystrike_core::types::Vector3;

use crate::mission::MissionRun;
use crate::player::PlayerAircraft;
use crate::scoring::ScoreState;
use crate::world_setup;

/// Everything outside the ECS world that collisions can change.
pub struct CollisionContext<'a> {
    pub player: &'a mut PlayerAircraft,
    /// Skips every check that would damage the player.
    pub god_mode: bool,
    pub score: &'a mut ScoreState,
    pub mission: Option<&'a mut MissionRun>,
    pub events: &'a mut Vec<GameEvent>,
}

/// Run all collision checks for one frame.
pub fn run(world: &mut World, ctx: &mut CollisionContext<'_>) {
    let mut explosions = Vec::new();

    player_fire(world, ctx, &mut explosions);
    enemy_fire_on_player(world, ctx, &mut explosions);
    enemy_fire_on_escort(world, ctx, &mut explosions);
    body_contact(world, ctx, &mut explosions);
    base_breaches(world, ctx);

    for position in explosions {
        world_setup::spawn_explosion(world, position);
    }
}

/// Player rounds against enemies. A round strikes the first live enemy
/// (in world order) whose collision radius contains it.
fn player_fire(world: &mut World, ctx: &mut CollisionContext<'_>, explosions: &mut Vec<Vector3>) {
    let shots: Vec<(Entity, Vector3, f64, bool)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .filter(|(_, (p, _))| p.alive && p.owner == ProjectileOwner::Player)
        .map(|(entity, (p, pos))| (entity, pos.0, p.damage, p.is_missile))
        .collect();
    if shots.is_empty() {
        return;
    }

    let targets: Vec<(Entity, Vector3, f64)> = world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .filter(|(_, (_, _, health))| health.alive())
        .map(|(entity, (enemy, pos, _))| (entity, pos.0, enemy.profile.size))
        .collect();

    for (shot, shot_pos, damage, missile) in shots {
        for &(target, target_pos, size) in &targets {
            if shot_pos.distance(target_pos) >= size {
                continue;
            }
            let killed = match world.get::<&mut Health>(target) {
                Ok(mut health) if health.alive() => health.apply_damage(damage),
                _ => continue,
            };

            if let Ok(mut projectile) = world.get::<&mut Projectile>(shot) {
                projectile.alive = false;
            }
            ctx.score.hits += 1;

            if killed {
                let Ok((id, enemy_type, score_value)) = world
                    .get::<&Enemy>(target)
                    .map(|e| (e.id, e.enemy_type, e.profile.score_value))
                else {
                    break;
                };
                let points = ctx.score.award_kill(score_value, missile);
                if let Some(run) = ctx.mission.as_deref_mut() {
                    run.record_kill(enemy_type);
                }
                explosions.push(target_pos);
                ctx.events.push(GameEvent::EnemyDestroyed {
                    id,
                    enemy_type,
                    position: target_pos,
                    points,
                    combo: ctx.score.combo,
                });
                log::debug!(
                    "{enemy_type:?} #{} destroyed for {points} (combo {})",
                    id.0,
                    ctx.score.combo
                );
            }
            break;
        }
    }
}

fn enemy_fire_on_player(
    world: &mut World,
    ctx: &mut CollisionContext<'_>,
    explosions: &mut Vec<Vector3>,
) {
    if ctx.god_mode {
        return;
    }
    let player_pos = ctx.player.position;

    for (_entity, (projectile, pos)) in world.query_mut::<(&mut Projectile, &Position)>() {
        if !ctx.player.alive() {
            break;
        }
        if !projectile.alive || projectile.owner != ProjectileOwner::Enemy {
            continue;
        }
        if pos.0.distance(player_pos) >= PLAYER_HIT_RADIUS {
            continue;
        }
        projectile.alive = false;
        ctx.events.push(GameEvent::PlayerHit {
            damage: projectile.damage,
        });
        if ctx.player.take_damage(projectile.damage) {
            explosions.push(player_pos);
            ctx.events.push(GameEvent::PlayerDestroyed {
                position: player_pos,
            });
            log::info!("player shot down");
        }
    }
}

fn enemy_fire_on_escort(
    world: &mut World,
    ctx: &mut CollisionContext<'_>,
    explosions: &mut Vec<Vector3>,
) {
    let Some(escort) = ctx.mission.as_deref_mut().and_then(|run| run.escort.as_mut()) else {
        return;
    };

    for (_entity, (projectile, pos)) in world.query_mut::<(&mut Projectile, &Position)>() {
        if !escort.health.alive() {
            break;
        }
        if !projectile.alive || projectile.owner != ProjectileOwner::Enemy {
            continue;
        }
        if pos.0.distance(escort.position) >= ESCORT_HIT_RADIUS {
            continue;
        }
        projectile.alive = false;
        ctx.events.push(GameEvent::EscortHit {
            damage: projectile.damage,
        });
        if escort.health.apply_damage(projectile.damage) {
            explosions.push(escort.position);
            log::info!("escort destroyed");
        }
    }
}

/// Enemies touching the player are destroyed outright and deal fixed
/// damage. Rammed enemies earn no score and no kill credit.
fn body_contact(world: &mut World, ctx: &mut CollisionContext<'_>, explosions: &mut Vec<Vector3>) {
    if ctx.god_mode || !ctx.player.alive() {
        return;
    }
    let player_pos = ctx.player.position;

    let rammers: Vec<(Entity, EnemyId, Vector3)> = world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .filter(|(_, (enemy, pos, health))| {
            health.alive() && pos.0.distance(player_pos) < enemy.profile.size + BODY_CONTACT_MARGIN
        })
        .map(|(entity, (enemy, pos, _))| (entity, enemy.id, pos.0))
        .collect();

    for (entity, id, position) in rammers {
        if let Ok(mut health) = world.get::<&mut Health>(entity) {
            let remaining = health.current();
            health.apply_damage(remaining);
        }
        // One blast for the wreck, one for the hit on the player.
        explosions.push(position);
        explosions.push(position);
        ctx.events.push(GameEvent::Collision { id, position });
        ctx.events.push(GameEvent::PlayerHit {
            damage: BODY_CONTACT_DAMAGE,
        });
        log::debug!("enemy #{} rammed the player", id.0);
        if ctx.player.take_damage(BODY_CONTACT_DAMAGE) {
            ctx.events.push(GameEvent::PlayerDestroyed {
                position: player_pos,
            });
            log::info!("player destroyed in a collision");
        }
    }
}

/// Each enemy entering the breach radius counts once.
fn base_breaches(world: &World, ctx: &mut CollisionContext<'_>) {
    let Some(run) = ctx.mission.as_deref_mut() else {
        return;
    };
    let Some((center, radius, max)) = run
        .base
        .as_ref()
        .map(|b| (b.position, b.breach_radius, b.max_breaches))
    else {
        return;
    };

    let inside: Vec<EnemyId> = world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .filter(|(_, (_, pos, health))| health.alive() && pos.0.distance(center) < radius)
        .map(|(_, (enemy, _, _))| enemy.id)
        .collect();

    for id in inside {
        if let Some(breaches) = run.register_breach(id) {
            ctx.events.push(GameEvent::BaseBreached { id, breaches });
            log::warn!("base breached by enemy #{} ({breaches}/{max})", id.0);
        }
    }
}
