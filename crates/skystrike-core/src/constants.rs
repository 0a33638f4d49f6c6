//! Simulation constants and tuning parameters.
//!
//! Distances are world units, times are seconds, angles are radians.

use crate::types::Vector3;

// --- World bounds ---

/// Horizontal half-extent of the playable area (x and z).
pub const WORLD_HALF_EXTENT: f64 = 1000.0;

/// Lowest permitted altitude.
pub const MIN_ALTITUDE: f64 = 10.0;

/// Highest permitted altitude.
pub const MAX_ALTITUDE: f64 = 600.0;

// --- Player flight model ---

/// Constant forward speed of the player aircraft.
pub const PLAYER_SPEED: f64 = 120.0;

/// Yaw rate while a turn control is held (rad/s).
pub const PLAYER_YAW_RATE: f64 = 1.5;

/// Pitch rate while a pitch control is held (rad/s).
pub const PLAYER_PITCH_RATE: f64 = 1.0;

/// Pitch is clamped to ±this value.
pub const PLAYER_MAX_PITCH: f64 = 0.8;

/// Vertical speed of the altitude up/down controls.
pub const PLAYER_ALTITUDE_RATE: f64 = 60.0;

pub const PLAYER_MAX_HEALTH: f64 = 100.0;

/// Missiles carried at session start.
pub const PLAYER_MISSILES: u32 = 12;

pub const MACHINE_GUN_COOLDOWN: f64 = 0.1;
pub const MISSILE_COOLDOWN: f64 = 1.0;

/// Player spawn point. The player starts facing +z.
pub const PLAYER_SPAWN: Vector3 = Vector3::new(0.0, 200.0, -600.0);

// --- Projectiles ---

pub const BULLET_SPEED: f64 = 400.0;
pub const BULLET_DAMAGE: f64 = 10.0;
pub const MISSILE_SPEED: f64 = 260.0;
pub const MISSILE_DAMAGE: f64 = 50.0;
pub const ENEMY_BULLET_SPEED: f64 = 220.0;

/// Projectiles expire once their age exceeds this.
pub const PROJECTILE_LIFETIME: f64 = 5.0;

/// Weight kept on the missile's current direction each guidance step.
pub const HOMING_KEEP_WEIGHT: f64 = 0.85;

/// Weight given to the direction toward the target each guidance step.
pub const HOMING_TURN_WEIGHT: f64 = 0.15;

// --- Enemy attributes ---

pub const SCOUT_HEALTH: f64 = 30.0;
pub const SCOUT_SPEED: f64 = 70.0;
pub const SCOUT_SIZE: f64 = 12.0;
pub const SCOUT_FIRE_COOLDOWN: f64 = 2.0;
pub const SCOUT_DAMAGE: f64 = 5.0;
pub const SCOUT_SCORE: u32 = 100;

pub const JET_HEALTH: f64 = 60.0;
pub const JET_SPEED: f64 = 95.0;
pub const JET_SIZE: f64 = 16.0;
pub const JET_FIRE_COOLDOWN: f64 = 1.5;
pub const JET_DAMAGE: f64 = 10.0;
pub const JET_SCORE: u32 = 200;

pub const BOMBER_HEALTH: f64 = 150.0;
pub const BOMBER_SPEED: f64 = 45.0;
pub const BOMBER_SIZE: f64 = 25.0;
pub const BOMBER_FIRE_COOLDOWN: f64 = 3.0;
pub const BOMBER_DAMAGE: f64 = 20.0;
pub const BOMBER_SCORE: u32 = 300;

// --- Enemy AI ---

/// Below this fraction of max health an enemy evades.
pub const AI_EVADE_HEALTH_FRACTION: f64 = 0.3;

/// Inside this distance to the player an enemy attacks.
pub const AI_ATTACK_RANGE: f64 = 100.0;

/// Inside this distance to the player an enemy chases.
pub const AI_CHASE_RANGE: f64 = 200.0;

/// Radius of the attack orbit around the player.
pub const AI_ORBIT_RADIUS: f64 = 80.0;

/// Angular speed of the attack orbit (rad/s of time in state).
pub const AI_ORBIT_RATE: f64 = 1.2;

/// How far past its own position an evading enemy aims, away from the player.
pub const AI_EVADE_DISTANCE: f64 = 100.0;

/// Distance at which a patrol waypoint counts as reached.
pub const AI_PATROL_ARRIVAL: f64 = 20.0;

/// Fraction of the world bounds patrol waypoints are drawn from.
pub const AI_PATROL_AREA_FRACTION: f64 = 0.8;

// --- Combat ---

/// Enemy projectile vs player hit radius.
pub const PLAYER_HIT_RADIUS: f64 = 15.0;

/// Enemy projectile vs escort hit radius.
pub const ESCORT_HIT_RADIUS: f64 = 10.0;

/// Added to enemy size for body contact with the player.
pub const BODY_CONTACT_MARGIN: f64 = 10.0;

/// Damage the player takes from a body contact.
pub const BODY_CONTACT_DAMAGE: f64 = 30.0;

/// Seconds a combo survives without a kill.
pub const COMBO_WINDOW: f64 = 3.0;

/// Score multiplier added per combo step.
pub const COMBO_STEP: f64 = 0.5;

/// Score multiplier for missile kills.
pub const MISSILE_SCORE_MULTIPLIER: f64 = 2.0;

// --- Effects ---

pub const EXPLOSION_LIFETIME: f64 = 1.0;
pub const EXPLOSION_START_RADIUS: f64 = 5.0;
pub const EXPLOSION_GROWTH_RATE: f64 = 40.0;

pub const CLOUD_COUNT: usize = 24;
pub const CLOUD_MIN_ALTITUDE: f64 = 250.0;
pub const CLOUD_DRIFT_SPEED: f64 = 6.0;

// --- Spawning ---

/// Base interval between spawns.
pub const SPAWN_INTERVAL: f64 = 3.0;
/// Survival missions spawn twice as often.
pub const SURVIVAL_SPAWN_INTERVAL: f64 = 1.5;

pub const ELIMINATION_ENEMY_CAP: usize = 5;
pub const SURVIVAL_ENEMY_CAP: usize = 8;
pub const ESCORT_ENEMY_CAP: usize = 6;
pub const DEFENSE_ENEMY_CAP: usize = 6;
pub const FREE_PLAY_ENEMY_CAP: usize = 10;

/// Escort-mission enemies spawn within this distance of the escort.
pub const ESCORT_SPAWN_RADIUS: f64 = 400.0;

/// The escort has arrived once this close to its destination.
pub const ESCORT_ARRIVAL_RADIUS: f64 = 20.0;

/// Free play: seconds of play per +1.0 difficulty.
pub const DIFFICULTY_RAMP_SECS: f64 = 60.0;

pub const MAX_DIFFICULTY: f64 = 3.0;

/// Free-play spawn weights: scout, jet, bomber.
pub const FREE_PLAY_SPAWN_WEIGHTS: [u32; 3] = [50, 35, 15];
