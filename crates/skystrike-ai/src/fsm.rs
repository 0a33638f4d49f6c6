//! Enemy behavior finite state machine.
//!
//! Pure functions that pick an enemy's state from its situation and compute
//! the point it should fly toward. No ECS dependency: operates on plain data.
//! The only side input is the RNG used for new patrol waypoints.

use rand::Rng;

use skystrike_core::constants::*;
use skystrike_core::enums::AiState;
use skystrike_core::types::Vector3;

/// Input to the FSM for a single enemy.
pub struct EnemyContext {
    pub state: AiState,
    pub position: Vector3,
    pub player_position: Vector3,
    /// Current health over max health.
    pub health_fraction: f64,
    /// Seconds already spent in `state`.
    pub state_time: f64,
    pub patrol_target: Vector3,
}

/// Output from the FSM.
pub struct EnemyDecision {
    pub new_state: AiState,
    pub state_changed: bool,
    /// Point to fly toward this frame.
    pub target: Vector3,
    /// Patrol waypoint to persist (unchanged unless it was reached).
    pub patrol_target: Vector3,
}

/// State selection, in precedence order: damaged → evade, close → attack,
/// near → chase, otherwise patrol.
pub fn select_state(distance_to_player: f64, health_fraction: f64) -> AiState {
    if health_fraction < AI_EVADE_HEALTH_FRACTION {
        AiState::Evade
    } else if distance_to_player < AI_ATTACK_RANGE {
        AiState::Attack
    } else if distance_to_player < AI_CHASE_RANGE {
        AiState::Chase
    } else {
        AiState::Patrol
    }
}

/// Evaluate the FSM for one enemy.
pub fn evaluate<R: Rng + ?Sized>(ctx: &EnemyContext, rng: &mut R) -> EnemyDecision {
    let distance = ctx.position.distance(ctx.player_position);
    let new_state = select_state(distance, ctx.health_fraction);
    let state_changed = new_state != ctx.state;
    // A fresh state starts its clock at zero.
    let state_time = if state_changed { 0.0 } else { ctx.state_time };

    let mut patrol_target = ctx.patrol_target;
    let target = match new_state {
        AiState::Patrol => {
            if ctx.position.distance(patrol_target) < AI_PATROL_ARRIVAL {
                patrol_target = random_patrol_point(rng);
            }
            patrol_target
        }
        AiState::Chase => ctx.player_position,
        AiState::Attack => orbit_point(ctx.player_position, state_time),
        AiState::Evade => evade_point(ctx.position, ctx.player_position),
    };

    EnemyDecision {
        new_state,
        state_changed,
        target,
        patrol_target,
    }
}

/// Point on the attack orbit around the player after `state_time` seconds.
pub fn orbit_point(player_position: Vector3, state_time: f64) -> Vector3 {
    let angle = state_time * AI_ORBIT_RATE;
    player_position + Vector3::new(angle.cos(), 0.0, angle.sin()) * AI_ORBIT_RADIUS
}

/// Point 100 units beyond `position`, directly away from the player.
pub fn evade_point(position: Vector3, player_position: Vector3) -> Vector3 {
    position + (position - player_position).normalize_or_zero() * AI_EVADE_DISTANCE
}

/// Random waypoint inside the central 80% of the world volume.
pub fn random_patrol_point<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    let half = WORLD_HALF_EXTENT * AI_PATROL_AREA_FRACTION;
    let mid_alt = (MIN_ALTITUDE + MAX_ALTITUDE) / 2.0;
    let half_alt = (MAX_ALTITUDE - MIN_ALTITUDE) / 2.0 * AI_PATROL_AREA_FRACTION;
    Vector3::new(
        rng.gen_range(-half..half),
        rng.gen_range(mid_alt - half_alt..mid_alt + half_alt),
        rng.gen_range(-half..half),
    )
}

/// Velocity flying straight at `target` at `speed`. Zero when already there.
pub fn steer(position: Vector3, target: Vector3, speed: f64) -> Vector3 {
    (target - position).normalize_or_zero() * speed
}
