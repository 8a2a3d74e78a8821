use rocket_flight::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => FlightConfig::load(&path).inspect_err(|e| {
            error!("Could not load flight configuration from {}: {}", path, e);
        })?,
        None => FlightConfig::default(),
    };
    config.validate()?;

    let time_step = config.time_step;
    let max_mission_time = config.max_mission_time;

    let mut controller = FlightController::new(config);
    let mut telemetry = Telemetry::new();

    controller.launch();

    while controller.mission_time() < max_mission_time {
        controller.tick(time_step);
        telemetry.collect_data(&controller);

        if controller.is_flight_over() {
            info!("Rocket is back on the ground. Ending simulation.");
            break;
        }
    }

    if !controller.is_flight_over() {
        warning!(
            "Mission time limit of {:.0}s reached in phase {}",
            max_mission_time,
            controller.phase()
        );
    }

    telemetry.display_data();

    Ok(())
}
