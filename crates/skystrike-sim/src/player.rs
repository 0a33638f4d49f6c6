//! The player's aircraft: flight model, weapons and damage.

use skystrike_core::components::{ControlState, Health, Projectile};
use skystrike_core::constants::*;
use skystrike_core::enums::ProjectileOwner;
use skystrike_core::error::InvariantError;
use skystrike_core::state::PlayerView;
use skystrike_core::types::{clamp_to_world, heading_vector, Vector3};

/// Player aircraft state. Lives outside the ECS world; the engine owns it.
#[derive(Debug, Clone)]
pub struct PlayerAircraft {
    pub position: Vector3,
    /// Yaw (radians).
    pub rotation: f64,
    /// Pitch (radians), clamped to ±`PLAYER_MAX_PITCH`.
    pub pitch: f64,
    health: Health,
    pub missiles: u32,
    pub gun_cooldown: f64,
    pub missile_cooldown: f64,
}

impl PlayerAircraft {
    pub fn new(max_health: f64) -> Result<Self, InvariantError> {
        Ok(Self {
            position: PLAYER_SPAWN,
            rotation: 0.0,
            pitch: 0.0,
            health: Health::new(max_health)?,
            missiles: PLAYER_MISSILES,
            gun_cooldown: 0.0,
            missile_cooldown: 0.0,
        })
    }

    /// Back to the spawn point, fully repaired and rearmed.
    pub fn respawn(&mut self) {
        self.position = PLAYER_SPAWN;
        self.rotation = 0.0;
        self.pitch = 0.0;
        self.health = self.health.restored();
        self.missiles = PLAYER_MISSILES;
        self.gun_cooldown = 0.0;
        self.missile_cooldown = 0.0;
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn alive(&self) -> bool {
        self.health.alive()
    }

    /// Unit nose direction.
    pub fn heading(&self) -> Vector3 {
        heading_vector(self.rotation, self.pitch)
    }

    /// Apply held controls, fly forward at constant speed and tick the
    /// weapon cooldowns.
    pub fn update(&mut self, controls: &ControlState, dt: f64) {
        if controls.yaw_left {
            self.rotation += PLAYER_YAW_RATE * dt;
        }
        if controls.yaw_right {
            self.rotation -= PLAYER_YAW_RATE * dt;
        }
        if controls.pitch_up {
            self.pitch += PLAYER_PITCH_RATE * dt;
        }
        if controls.pitch_down {
            self.pitch -= PLAYER_PITCH_RATE * dt;
        }
        self.pitch = self.pitch.clamp(-PLAYER_MAX_PITCH, PLAYER_MAX_PITCH);

        let mut position = self.position + self.heading() * PLAYER_SPEED * dt;
        if controls.altitude_up {
            position.y += PLAYER_ALTITUDE_RATE * dt;
        }
        if controls.altitude_down {
            position.y -= PLAYER_ALTITUDE_RATE * dt;
        }
        self.position = clamp_to_world(position);

        self.gun_cooldown = (self.gun_cooldown - dt).max(0.0);
        self.missile_cooldown = (self.missile_cooldown - dt).max(0.0);
    }

    /// One machine-gun round along the nose, if the gun has cooled down.
    pub fn fire_machine_gun(&mut self) -> Option<(Vector3, Projectile)> {
        if !self.alive() || self.gun_cooldown > 0.0 {
            return None;
        }
        self.gun_cooldown = MACHINE_GUN_COOLDOWN;
        Some((
            self.position,
            player_projectile(self.heading(), BULLET_SPEED, BULLET_DAMAGE, false),
        ))
    }

    /// One homing missile, if any remain and the launcher has cooled down.
    pub fn fire_missile(&mut self) -> Option<(Vector3, Projectile)> {
        if !self.alive() || self.missiles == 0 || self.missile_cooldown > 0.0 {
            return None;
        }
        self.missiles -= 1;
        self.missile_cooldown = MISSILE_COOLDOWN;
        Some((
            self.position,
            player_projectile(self.heading(), MISSILE_SPEED, MISSILE_DAMAGE, true),
        ))
    }

    /// Returns true on the hit that destroys the aircraft.
    pub fn take_damage(&mut self, amount: f64) -> bool {
        self.health.apply_damage(amount)
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            position: self.position,
            rotation: self.rotation,
            pitch: self.pitch,
            health: self.health.current(),
            max_health: self.health.max(),
            alive: self.health.alive(),
            missiles: self.missiles,
            gun_cooldown: self.gun_cooldown,
            missile_cooldown: self.missile_cooldown,
        }
    }
}

fn player_projectile(direction: Vector3, speed: f64, damage: f64, is_missile: bool) -> Projectile {
    Projectile {
        direction,
        speed,
        damage,
        is_missile,
        owner: ProjectileOwner::Player,
        age: 0.0,
        max_lifetime: PROJECTILE_LIFETIME,
        alive: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> PlayerAircraft {
        PlayerAircraft::new(PLAYER_MAX_HEALTH).unwrap()
    }

    #[test]
    fn test_flies_forward_at_constant_speed() {
        let mut p = player();
        p.update(&ControlState::default(), 0.5);
        let moved = p.position - PLAYER_SPAWN;
        assert!((moved.length() - PLAYER_SPEED * 0.5).abs() < 1e-9);
        assert!(moved.z > 0.0, "yaw 0 flies toward +z");
    }

    #[test]
    fn test_pitch_clamped() {
        let mut p = player();
        let controls = ControlState {
            pitch_up: true,
            ..Default::default()
        };
        for _ in 0..10 {
            p.update(&controls, 0.5);
        }
        assert!((p.pitch - PLAYER_MAX_PITCH).abs() < 1e-12);
    }

    #[test]
    fn test_altitude_clamped() {
        let mut p = player();
        let controls = ControlState {
            altitude_down: true,
            pitch_down: true,
            ..Default::default()
        };
        for _ in 0..100 {
            p.update(&controls, 0.1);
        }
        assert!(p.position.y >= MIN_ALTITUDE);
        assert!((p.position.y - MIN_ALTITUDE).abs() < 1e-9);
    }

    #[test]
    fn test_gun_cooldown() {
        let mut p = player();
        assert!(p.fire_machine_gun().is_some());
        assert!(p.fire_machine_gun().is_none(), "still cooling down");
        p.update(&ControlState::default(), MACHINE_GUN_COOLDOWN);
        assert!(p.fire_machine_gun().is_some(), "cooldown exactly exhausted");
    }

    #[test]
    fn test_missile_ammo_and_cooldown() {
        let mut p = player();
        let (_, missile) = p.fire_missile().unwrap();
        assert!(missile.is_missile);
        assert_eq!(missile.owner, ProjectileOwner::Player);
        assert_eq!(p.missiles, PLAYER_MISSILES - 1);
        assert!(p.fire_missile().is_none());

        p.missiles = 0;
        p.missile_cooldown = 0.0;
        assert!(p.fire_missile().is_none(), "no rounds left");
    }

    #[test]
    fn test_take_damage_and_respawn() {
        let mut p = player();
        assert!(!p.take_damage(60.0));
        assert!(p.take_damage(60.0));
        assert!(!p.alive());
        assert!(p.fire_machine_gun().is_none());

        p.respawn();
        assert!(p.alive());
        assert_eq!(p.health().current(), PLAYER_MAX_HEALTH);
        assert_eq!(p.position, PLAYER_SPAWN);
    }
}
