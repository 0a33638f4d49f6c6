#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use skystrike_core::constants::*;
    use skystrike_core::enums::{AiState, EnemyType};
    use skystrike_core::types::{in_world, Vector3};

    use crate::fsm::{evaluate, orbit_point, select_state, steer, EnemyContext};
    use crate::profiles::get_profile;

    fn make_context(state: AiState, distance: f64, health_fraction: f64) -> EnemyContext {
        // Enemy on the +x axis from a player at the origin.
        EnemyContext {
            state,
            position: Vector3::new(distance, 200.0, 0.0),
            player_position: Vector3::new(0.0, 200.0, 0.0),
            health_fraction,
            state_time: 0.0,
            patrol_target: Vector3::new(500.0, 300.0, 500.0),
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_state_precedence() {
        assert_eq!(select_state(500.0, 1.0), AiState::Patrol);
        assert_eq!(select_state(150.0, 1.0), AiState::Chase);
        assert_eq!(select_state(50.0, 1.0), AiState::Attack);
        // Low health wins over everything, even point blank.
        assert_eq!(select_state(10.0, 0.29), AiState::Evade);
        assert_eq!(select_state(1000.0, 0.1), AiState::Evade);
    }

    #[test]
    fn test_state_thresholds_are_strict() {
        assert_eq!(select_state(AI_ATTACK_RANGE, 1.0), AiState::Chase);
        assert_eq!(select_state(AI_CHASE_RANGE, 1.0), AiState::Patrol);
        assert_eq!(select_state(500.0, AI_EVADE_HEALTH_FRACTION), AiState::Patrol);
    }

    #[test]
    fn test_chase_targets_player() {
        let ctx = make_context(AiState::Patrol, 150.0, 1.0);
        let decision = evaluate(&ctx, &mut rng());
        assert!(decision.state_changed);
        assert_eq!(decision.new_state, AiState::Chase);
        assert_eq!(decision.target, ctx.player_position);
    }

    #[test]
    fn test_attack_orbits_at_fixed_radius() {
        let mut ctx = make_context(AiState::Attack, 60.0, 1.0);
        ctx.state_time = 2.0;
        let decision = evaluate(&ctx, &mut rng());
        assert!(!decision.state_changed);
        let radius = decision.target.distance(ctx.player_position);
        assert!((radius - AI_ORBIT_RADIUS).abs() < 1e-9);
        assert_eq!(decision.target, orbit_point(ctx.player_position, 2.0));
    }

    #[test]
    fn test_attack_orbit_angle_advances() {
        let player = Vector3::ZERO;
        let a = orbit_point(player, 0.0);
        let b = orbit_point(player, 1.0);
        assert!((a - Vector3::new(AI_ORBIT_RADIUS, 0.0, 0.0)).length() < 1e-9);
        assert!(a.distance(b) > 1.0, "orbit point must move with state time");
    }

    #[test]
    fn test_entering_attack_restarts_orbit_clock() {
        let mut ctx = make_context(AiState::Chase, 60.0, 1.0);
        ctx.state_time = 5.0;
        let decision = evaluate(&ctx, &mut rng());
        assert_eq!(decision.new_state, AiState::Attack);
        assert_eq!(decision.target, orbit_point(ctx.player_position, 0.0));
    }

    #[test]
    fn test_evade_runs_directly_away() {
        let ctx = make_context(AiState::Chase, 150.0, 0.2);
        let decision = evaluate(&ctx, &mut rng());
        assert_eq!(decision.new_state, AiState::Evade);
        let expected = ctx.position + Vector3::new(AI_EVADE_DISTANCE, 0.0, 0.0);
        assert!((decision.target - expected).length() < 1e-9);
    }

    #[test]
    fn test_patrol_keeps_waypoint_until_reached() {
        let ctx = make_context(AiState::Patrol, 900.0, 1.0);
        let decision = evaluate(&ctx, &mut rng());
        assert!(!decision.state_changed);
        assert_eq!(decision.patrol_target, ctx.patrol_target);
        assert_eq!(decision.target, ctx.patrol_target);
    }

    #[test]
    fn test_patrol_picks_new_waypoint_on_arrival() {
        let mut ctx = make_context(AiState::Patrol, 900.0, 1.0);
        ctx.patrol_target = ctx.position + Vector3::new(5.0, 0.0, 5.0);
        let decision = evaluate(&ctx, &mut rng());
        assert_ne!(decision.patrol_target, ctx.patrol_target);
        assert_eq!(decision.target, decision.patrol_target);
        let p = decision.patrol_target;
        assert!(in_world(p));
        assert!(p.x.abs() <= WORLD_HALF_EXTENT * AI_PATROL_AREA_FRACTION);
        assert!(p.z.abs() <= WORLD_HALF_EXTENT * AI_PATROL_AREA_FRACTION);
    }

    #[test]
    fn test_steer_speed_and_zero_case() {
        let v = steer(Vector3::ZERO, Vector3::new(0.0, 0.0, 50.0), 70.0);
        assert!((v - Vector3::new(0.0, 0.0, 70.0)).length() < 1e-12);
        let still = steer(Vector3::ONE, Vector3::ONE, 70.0);
        assert_eq!(still, Vector3::ZERO);
    }

    #[test]
    fn test_profiles_are_distinct_and_valid() {
        let scout = get_profile(EnemyType::Scout);
        let jet = get_profile(EnemyType::Jet);
        let bomber = get_profile(EnemyType::Bomber);

        assert_eq!(scout.score_value, 100);
        assert_eq!(jet.score_value, 200);
        assert_eq!(bomber.score_value, 300);
        assert!(jet.speed > scout.speed && scout.speed > bomber.speed);
        assert!(bomber.max_health > jet.max_health && jet.max_health > scout.max_health);
        for p in [scout, jet, bomber] {
            assert!(p.size > 0.0 && p.fire_cooldown > 0.0 && p.damage > 0.0);
        }
    }
}
