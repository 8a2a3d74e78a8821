use approx::assert_abs_diff_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rocket_flight::{
    FlightConfig, FlightController, LaunchPhase, RocketConfig, RocketState, SimulationError,
    Telemetry, ThrottleSchedule, ThrustModel,
};

fn rocket_with_engines(engine_count: usize) -> RocketState {
    RocketState::new(&RocketConfig::with_engines(engine_count))
}

fn random_throttles(rng: &mut StdRng, engine_count: usize) -> Vec<f64> {
    (0..engine_count)
        .map(|_| rng.gen_range(-20.0..140.0))
        .collect()
}

#[test]
fn test_single_engine_burn_then_coast() {
    let mut rocket = rocket_with_engines(1);

    rocket.apply_thrust(&[100.0], 1.0);
    assert_abs_diff_eq!(rocket.velocity().y, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rocket.fuel(), 90.0, epsilon = 1e-9);

    rocket.update(1.0);
    assert_abs_diff_eq!(rocket.velocity().y, 90.19, epsilon = 1e-9);
    // Position advances with the velocity after gravity has been applied
    assert_abs_diff_eq!(rocket.position().y, 90.19, epsilon = 1e-9);
    assert_eq!(rocket.position().x, 0.0);
    assert_eq!(rocket.position().z, 0.0);
}

#[test]
fn test_empty_tank_ignores_thrust() {
    let mut rocket = rocket_with_engines(5);

    while rocket.fuel() > 0.0 {
        rocket.apply_thrust(&[50.0; 5], 1.0);
    }
    let velocity = rocket.velocity();

    rocket.apply_thrust(&[50.0, 50.0, 50.0, 50.0, 50.0], 1.0);

    assert_eq!(rocket.fuel(), 0.0);
    assert_eq!(rocket.velocity(), velocity);
}

#[test]
fn test_falling_rocket_is_clamped_to_ground() {
    let mut rocket = rocket_with_engines(1);
    rocket.kinematics.position.y = 5.0;
    rocket.kinematics.velocity.y = -20.0;

    rocket.update(1.0);

    assert_eq!(rocket.position().y, 0.0);
    assert_eq!(rocket.velocity().y, 0.0);
}

#[test]
fn test_nan_time_step_keeps_rocket_above_ground() {
    let mut rocket = rocket_with_engines(1);
    rocket.apply_thrust(&[100.0], 1.0);
    rocket.update(1.0);

    assert!(rocket.update(f64::NAN));
    assert_eq!(rocket.get_altitude(), 0.0);
    assert_eq!(rocket.velocity().y, 0.0);
}

#[test]
fn test_fuel_never_increases_and_never_goes_negative() {
    let mut rng = StdRng::seed_from_u64(17);

    for engine_count in [1, 4, 5] {
        let mut rocket = rocket_with_engines(engine_count);
        for _ in 0..2_000 {
            let before = rocket.fuel();
            let throttles = random_throttles(&mut rng, engine_count);
            let dt = rng.gen_range(0.0..0.5);

            rocket.apply_thrust(&throttles, dt);

            assert!(rocket.fuel() <= before);
            assert!(rocket.fuel() >= 0.0);

            rocket.update(dt);
            assert!(rocket.fuel() >= 0.0);
        }
    }
}

#[test]
fn test_altitude_never_negative() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut rocket = rocket_with_engines(4);

    for _ in 0..5_000 {
        if rng.gen_bool(0.3) {
            let throttles = random_throttles(&mut rng, 4);
            rocket.apply_thrust(&throttles, rng.gen_range(0.0..0.2));
        }

        let before = rocket.kinematics;
        let dt = rng.gen_range(0.0..2.0);
        rocket.update(dt);

        assert!(rocket.position().y >= 0.0);
        let predicted = before.position.y + (before.velocity.y - 9.81 * dt) * dt;
        if predicted < 0.0 {
            assert_eq!(rocket.velocity().y, 0.0);
            assert_eq!(rocket.position().y, 0.0);
        }
    }
}

#[test]
fn test_no_fuel_thrust_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut rocket = rocket_with_engines(4);
    rocket.cut_engines();
    rocket.kinematics.position.y = 500.0;
    rocket.kinematics.velocity.y = 30.0;

    for _ in 0..100 {
        let velocity = rocket.velocity();
        let throttles = random_throttles(&mut rng, 4);

        rocket.apply_thrust(&throttles, 0.1);

        assert_eq!(rocket.velocity(), velocity);
        assert_eq!(rocket.fuel(), 0.0);
        assert_eq!(rocket.engine_thrust(), &[0.0; 4]);

        rocket.update(0.1);
    }
    // Gravity kept working the whole time
    assert!(rocket.velocity().y < 30.0);
}

#[test]
fn test_engine_record_length_is_fixed() {
    let mut rocket = rocket_with_engines(4);
    rocket.apply_thrust(&[10.0, 20.0], 0.1);
    assert_eq!(rocket.engine_thrust(), &[10.0, 20.0, 0.0, 0.0]);
    rocket.apply_thrust(&[10.0; 9], 0.1);
    assert_eq!(rocket.engine_thrust().len(), 4);
}

#[test]
fn test_mass_scaled_rocket_speeds_up_as_it_burns() {
    let config = RocketConfig {
        thrust_model: ThrustModel::MassScaled {
            dry_mass: 5.0,
            propellant_mass_per_unit: 0.1,
        },
        ..RocketConfig::default()
    };
    let mut rocket = RocketState::new(&config);

    let mut previous_gain = 0.0;
    for _ in 0..5 {
        let before = rocket.velocity().y;
        rocket.apply_thrust(&[100.0], 1.0);
        let gain = rocket.velocity().y - before;
        assert!(gain > previous_gain);
        previous_gain = gain;
    }
}

#[test]
fn test_full_mission_with_telemetry() {
    let config = FlightConfig::from_json_str(
        r#"{
            "rocket": { "engine_count": 4, "consumption_rate": 0.25 },
            "countdown_duration": 10.0,
            "time_step": 0.05,
            "throttle": { "kind": "altitude_ramp", "start": 25.0, "end": 10.0, "ramp_altitude": 3000.0 }
        }"#,
    )
    .expect("valid config");

    let mut controller = FlightController::new(config.clone());
    let mut telemetry = Telemetry::new();
    controller.launch();

    while controller.mission_time() < config.max_mission_time && !controller.is_flight_over() {
        controller.tick(config.time_step);
        telemetry.collect_data(&controller);
        assert!(controller.rocket().get_altitude() >= 0.0);
        assert!(controller.rocket().fuel() >= 0.0);
    }

    assert!(controller.is_flight_over());
    assert!(controller.has_landed());
    assert!(telemetry.get_max_altitude() > 1_000.0);
    assert!(telemetry.get_max_altitude() < config.altitude_ceiling);

    let liftoff_at = telemetry
        .get_phase_times()
        .iter()
        .find(|(phase, _)| *phase == LaunchPhase::Liftoff)
        .map(|(_, time)| *time)
        .expect("rocket lifted off");
    assert!(liftoff_at >= 10.0);
    assert_eq!(
        telemetry.get_phase_times().first(),
        Some(&(LaunchPhase::LoadFuel, 0.0))
    );
}

#[test]
fn test_throttle_schedule_can_change_mid_flight() {
    let mut controller = FlightController::new(FlightConfig {
        countdown_duration: 0.0,
        throttle: ThrottleSchedule::uniform(60.0),
        ..FlightConfig::default()
    });
    controller.launch();
    for _ in 0..10 {
        controller.tick(0.1);
    }
    assert_eq!(controller.phase(), LaunchPhase::Liftoff);

    controller.set_throttle_schedule(ThrottleSchedule::uniform(0.0));
    let fuel = controller.rocket().fuel();
    controller.tick(0.1);
    assert_eq!(controller.rocket().fuel(), fuel);
    assert_eq!(controller.rocket().engine_thrust(), &[0.0]);
}

#[test]
fn test_invalid_config_is_rejected() {
    let result = FlightConfig::from_json_str(r#"{ "time_step": 0.0 }"#);
    assert!(matches!(
        result,
        Err(SimulationError::ConfigurationError(_))
    ));
}
