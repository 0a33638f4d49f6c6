#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::{ControlState, EnemyId, Health};
    use crate::enums::*;
    use crate::error::InvariantError;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::*;

    #[test]
    fn test_game_state_serde() {
        let variants = vec![
            GameState::Menu,
            GameState::MissionSelect,
            GameState::MissionBriefing,
            GameState::Playing,
            GameState::Paused,
            GameState::MissionComplete,
            GameState::MissionFailed,
            GameState::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GameState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SetControl {
                control: FlightControl::YawLeft,
                active: true,
            },
            PlayerCommand::SetFirePrimary { held: true },
            PlayerCommand::FireSecondary,
            PlayerCommand::SelectMission { index: 3 },
            PlayerCommand::TogglePause,
            PlayerCommand::Quit,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::EnemyDestroyed {
                id: EnemyId(7),
                enemy_type: EnemyType::Jet,
                position: Vector3::new(1.0, 2.0, 3.0),
                points: 200,
                combo: 1,
            },
            GameEvent::MissionFailed {
                mission_id: 5,
                reason: FailureReason::BaseBreached,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.frame, back.time.frame);
        assert_eq!(snapshot.state, back.state);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    // ---- Vector primitive ----

    #[test]
    fn test_normalize_zero_vector_is_zero() {
        let n = Vector3::ZERO.normalize_or_zero();
        assert_eq!(n, Vector3::ZERO);
        assert!(!n.x.is_nan() && !n.y.is_nan() && !n.z.is_nan());
    }

    #[test]
    fn test_normalize_idempotent_on_unit() {
        let v = Vector3::new(3.0, -4.0, 12.0).normalize_or_zero();
        assert!((v.length() - 1.0).abs() < 1e-12);
        let again = v.normalize_or_zero();
        assert!((again - v).length() < 1e-12);
    }

    #[test]
    fn test_vector_distance() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(3.0, 4.0, 0.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-10);
        assert!((((b - a) * 2.0).length() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_heading_vector_axes() {
        let forward = heading_vector(0.0, 0.0);
        assert!((forward - Vector3::Z).length() < 1e-12);

        let right = heading_vector(std::f64::consts::FRAC_PI_2, 0.0);
        assert!((right - Vector3::X).length() < 1e-12);

        let up = heading_vector(0.0, std::f64::consts::FRAC_PI_2);
        assert!((up - Vector3::Y).length() < 1e-12);
    }

    #[test]
    fn test_yaw_pitch_round_trip() {
        let dir = heading_vector(0.7, -0.3);
        assert!((yaw_of(dir) - 0.7).abs() < 1e-12);
        assert!((pitch_of(dir) + 0.3).abs() < 1e-12);
        assert_eq!(pitch_of(Vector3::ZERO), 0.0);
    }

    #[test]
    fn test_clamp_to_world() {
        let p = clamp_to_world(Vector3::new(5000.0, -20.0, -5000.0));
        assert!(in_world(p));
        assert_eq!(p.x, crate::constants::WORLD_HALF_EXTENT);
        assert_eq!(p.y, crate::constants::MIN_ALTITUDE);
        assert_eq!(p.z, -crate::constants::WORLD_HALF_EXTENT);
    }

    // ---- Health invariants ----

    #[test]
    fn test_health_rejects_invalid_max() {
        assert_eq!(Health::new(0.0), Err(InvariantError::InvalidMaxHealth(0.0)));
        assert!(Health::new(-5.0).is_err());
        assert!(Health::new(f64::NAN).is_err());
        assert!(Health::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_health_dies_exactly_once() {
        let mut health = Health::new(30.0).unwrap();
        assert!(!health.apply_damage(20.0));
        assert!(health.alive());
        assert!(health.apply_damage(25.0), "killing blow reports the kill");
        assert_eq!(health.current(), 0.0, "health clamps at zero");
        assert!(!health.alive());
        assert!(!health.apply_damage(10.0), "no second kill");
        assert_eq!(health.current(), 0.0);
    }

    #[test]
    fn test_health_ignores_negative_damage() {
        let mut health = Health::new(50.0).unwrap();
        health.apply_damage(10.0);
        assert!(!health.apply_damage(-100.0));
        assert!(!health.apply_damage(f64::NAN));
        assert!((health.current() - 40.0).abs() < 1e-12);
        assert!((health.fraction() - 0.8).abs() < 1e-12);
    }

    // ---- Controls / camera ----

    #[test]
    fn test_control_state_set_and_clear() {
        let mut controls = ControlState::default();
        controls.set(FlightControl::PitchUp, true);
        controls.set(FlightControl::AltitudeDown, true);
        assert!(controls.pitch_up && controls.altitude_down);
        controls.set(FlightControl::PitchUp, false);
        assert!(!controls.pitch_up);
    }

    #[test]
    fn test_camera_mode_cycle() {
        let mut mode = CameraMode::default();
        for _ in 0..3 {
            mode = mode.next();
        }
        assert_eq!(mode, CameraMode::Chase);
        assert_eq!(CameraMode::Chase.next(), CameraMode::Cockpit);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..4 {
            time.advance(0.25);
        }
        assert_eq!(time.frame, 4);
        assert_eq!(time.elapsed_secs, 1.0);
    }
}
