//! Entity spawn factories for setting up the simulation world.
//!
//! Creates enemies, the boss, projectiles, explosions and scenery clouds
//! with their component bundles.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_ai::fsm::random_patrol_point;
use skystrike_ai::profiles::get_profile;
use skystrike_core::components::*;
use skystrike_core::constants::*;
use skystrike_core::enums::*;
use skystrike_core::error::InvariantError;
use skystrike_core::types::{clamp_to_world, Vector3};

/// Reset the world for a new session: everything despawned, fresh clouds.
pub fn setup_session(world: &mut World, rng: &mut ChaCha8Rng) {
    world.clear();
    spawn_clouds(world, rng);
}

/// Spawn an enemy of the given type at `position`.
///
/// `patrol_target` seeds its first waypoint; `None` picks a random one.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    id: EnemyId,
    enemy_type: EnemyType,
    position: Vector3,
    patrol_target: Option<Vector3>,
) -> Result<Entity, InvariantError> {
    let profile = get_profile(enemy_type);
    spawn_with_profile(world, rng, id, enemy_type, profile, position, patrol_target, false)
}

/// Spawn a boss: a regular type with overridden health and scaled size.
pub fn spawn_boss(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    id: EnemyId,
    enemy_type: EnemyType,
    boss_health: f64,
    size_scale: f64,
    position: Vector3,
) -> Result<Entity, InvariantError> {
    let mut profile = get_profile(enemy_type);
    profile.max_health = boss_health;
    profile.size *= size_scale;
    spawn_with_profile(world, rng, id, enemy_type, profile, position, None, true)
}

#[allow(clippy::too_many_arguments)]
fn spawn_with_profile(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    id: EnemyId,
    enemy_type: EnemyType,
    profile: EnemyProfile,
    position: Vector3,
    patrol_target: Option<Vector3>,
    is_boss: bool,
) -> Result<Entity, InvariantError> {
    let health = Health::new(profile.max_health)?;
    let patrol_target = patrol_target.unwrap_or_else(|| random_patrol_point(rng));
    let enemy = Enemy {
        id,
        enemy_type,
        profile,
        state: AiState::Patrol,
        state_time: 0.0,
        patrol_target,
        fire_cooldown: profile.fire_cooldown,
        rotation: 0.0,
        pitch: 0.0,
        is_boss,
    };
    log::debug!("spawned {enemy_type:?} #{} at {position:?}", id.0);
    Ok(world.spawn((enemy, Position(position), Velocity::default(), health)))
}

/// Random point on the world's edge at a mid-band altitude.
pub fn random_edge_position(rng: &mut ChaCha8Rng) -> Vector3 {
    let edge = WORLD_HALF_EXTENT * 0.95;
    let along: f64 = rng.gen_range(-edge..edge);
    let altitude: f64 = rng.gen_range(120.0..420.0);
    match rng.gen_range(0..4) {
        0 => Vector3::new(edge, altitude, along),
        1 => Vector3::new(-edge, altitude, along),
        2 => Vector3::new(along, altitude, edge),
        _ => Vector3::new(along, altitude, -edge),
    }
}

/// Random point within `radius` of `center` (horizontal ring, altitude jitter).
pub fn random_position_near(rng: &mut ChaCha8Rng, center: Vector3, radius: f64) -> Vector3 {
    let bearing: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let range: f64 = rng.gen_range(radius * 0.5..radius);
    let climb: f64 = rng.gen_range(-50.0..50.0);
    clamp_to_world(center + Vector3::new(bearing.sin() * range, climb, bearing.cos() * range))
}

/// Weighted free-play pick: mostly scouts, some jets, few bombers.
pub fn weighted_enemy_type(rng: &mut ChaCha8Rng) -> EnemyType {
    let total: u32 = FREE_PLAY_SPAWN_WEIGHTS.iter().sum();
    let mut roll = rng.gen_range(0..total);
    for (enemy_type, weight) in EnemyType::ALL.iter().zip(FREE_PLAY_SPAWN_WEIGHTS) {
        if roll < weight {
            return *enemy_type;
        }
        roll -= weight;
    }
    EnemyType::Scout
}

/// Uniform pick over all enemy types.
pub fn uniform_enemy_type(rng: &mut ChaCha8Rng) -> EnemyType {
    EnemyType::ALL[rng.gen_range(0..EnemyType::ALL.len())]
}

/// Spawn a projectile already flying along its direction.
pub fn spawn_projectile(world: &mut World, position: Vector3, projectile: Projectile) -> Entity {
    let velocity = Velocity(projectile.direction * projectile.speed);
    world.spawn((projectile, Position(position), velocity))
}

/// Enemy round aimed from `from` at `target`.
pub fn enemy_bullet(from: Vector3, target: Vector3, damage: f64) -> Projectile {
    Projectile {
        direction: (target - from).normalize_or_zero(),
        speed: ENEMY_BULLET_SPEED,
        damage,
        is_missile: false,
        owner: ProjectileOwner::Enemy,
        age: 0.0,
        max_lifetime: PROJECTILE_LIFETIME,
        alive: true,
    }
}

pub fn spawn_explosion(world: &mut World, position: Vector3) -> Entity {
    world.spawn((
        Explosion {
            age: 0.0,
            radius: EXPLOSION_START_RADIUS,
            max_age: EXPLOSION_LIFETIME,
        },
        Position(position),
    ))
}

/// Scatter the scenery clouds across the sky, drifting along +x.
pub fn spawn_clouds(world: &mut World, rng: &mut ChaCha8Rng) {
    for _ in 0..CLOUD_COUNT {
        let position = Vector3::new(
            rng.gen_range(-WORLD_HALF_EXTENT..WORLD_HALF_EXTENT),
            rng.gen_range(CLOUD_MIN_ALTITUDE..MAX_ALTITUDE - 50.0),
            rng.gen_range(-WORLD_HALF_EXTENT..WORLD_HALF_EXTENT),
        );
        let size: f64 = rng.gen_range(30.0..80.0);
        world.spawn((
            Cloud { size },
            Position(position),
            Velocity(Vector3::new(CLOUD_DRIFT_SPEED, 0.0, 0.0)),
        ));
    }
}
