//! Scripted pilot for headless runs.
//!
//! Reads snapshots, turns toward the nearest enemy, shoots when lined up,
//! and walks the menus between missions. Emits only control changes, the
//! way a keyboard would.

use std::f64::consts::{PI, TAU};

use skystrike_core::commands::PlayerCommand;
use skystrike_core::components::ControlState;
use skystrike_core::enums::{FlightControl, GameState};
use skystrike_core::state::GameStateSnapshot;
use skystrike_core::types::{pitch_of, yaw_of};

/// Heading error (radians) below which the pilot stops turning.
const AIM_DEADBAND: f64 = 0.05;
/// Heading error under which the gun is fired.
const GUN_CONE: f64 = 0.15;
const GUN_RANGE: f64 = 600.0;
const MISSILE_CONE: f64 = 0.4;
const MISSILE_RANGE: f64 = 400.0;

const FLIGHT_CONTROLS: [FlightControl; 6] = [
    FlightControl::PitchUp,
    FlightControl::PitchDown,
    FlightControl::YawLeft,
    FlightControl::YawRight,
    FlightControl::AltitudeUp,
    FlightControl::AltitudeDown,
];

fn is_held(controls: &ControlState, control: FlightControl) -> bool {
    match control {
        FlightControl::PitchUp => controls.pitch_up,
        FlightControl::PitchDown => controls.pitch_down,
        FlightControl::YawLeft => controls.yaw_left,
        FlightControl::YawRight => controls.yaw_right,
        FlightControl::AltitudeUp => controls.altitude_up,
        FlightControl::AltitudeDown => controls.altitude_down,
    }
}

/// Wrap an angle into (-π, π].
fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

#[derive(Debug, Default)]
pub struct DemoPilot {
    held: ControlState,
}

impl DemoPilot {
    /// Commands to send in response to the latest snapshot.
    pub fn react(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        match snapshot.state {
            GameState::Playing => self.fly(snapshot),
            GameState::MissionComplete => {
                self.held = ControlState::default();
                match snapshot
                    .missions
                    .iter()
                    .position(|m| m.unlocked && !m.completed)
                {
                    Some(index) => vec![
                        PlayerCommand::OpenMissionSelect,
                        PlayerCommand::SelectMission { index },
                        PlayerCommand::BeginMission,
                    ],
                    None => vec![PlayerCommand::ReturnToMenu],
                }
            }
            GameState::MissionFailed | GameState::GameOver => {
                self.held = ControlState::default();
                vec![PlayerCommand::Restart]
            }
            _ => Vec::new(),
        }
    }

    fn fly(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        let player = &snapshot.player;
        let target = snapshot
            .enemies
            .iter()
            .min_by(|a, b| {
                player
                    .position
                    .distance_squared(a.position)
                    .total_cmp(&player.position.distance_squared(b.position))
            })
            .map(|e| e.position);

        let mut wanted = ControlState::default();
        if let Some(target) = target {
            let to_target = target - player.position;
            let distance = to_target.length();
            let yaw_error = wrap_angle(yaw_of(to_target) - player.rotation);
            let pitch_error = pitch_of(to_target) - player.pitch;

            wanted.yaw_left = yaw_error > AIM_DEADBAND;
            wanted.yaw_right = yaw_error < -AIM_DEADBAND;
            wanted.pitch_up = pitch_error > AIM_DEADBAND;
            wanted.pitch_down = pitch_error < -AIM_DEADBAND;
            wanted.fire_primary = yaw_error.abs() < GUN_CONE && distance < GUN_RANGE;
            wanted.fire_secondary = yaw_error.abs() < MISSILE_CONE
                && distance < MISSILE_RANGE
                && player.missiles > 0
                && player.missile_cooldown <= 0.0;
        }

        let mut commands = Vec::new();
        for control in FLIGHT_CONTROLS {
            let active = is_held(&wanted, control);
            if active != is_held(&self.held, control) {
                commands.push(PlayerCommand::SetControl { control, active });
            }
        }
        if wanted.fire_primary != self.held.fire_primary {
            commands.push(PlayerCommand::SetFirePrimary {
                held: wanted.fire_primary,
            });
        }
        if wanted.fire_secondary {
            commands.push(PlayerCommand::FireSecondary);
        }

        wanted.fire_secondary = false;
        self.held = wanted;
        commands
    }
}
