use crate::control::{launch_sequence::LaunchPhase, mission::FlightController};

#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySample {
    pub time: f64,
    pub phase: LaunchPhase,
    pub altitude: f64,
    pub vertical_speed: f64,
    pub fuel: f64,
    pub fuel_fraction: f64,
    pub total_throttle: f64,
}

pub struct Telemetry {
    pub samples: Vec<TelemetrySample>,
    max_vertical_speed: f64,
    max_altitude: f64,
    min_fuel: f64,
    phase_times: Vec<(LaunchPhase, f64)>,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            samples: Vec::new(),
            max_vertical_speed: 0.0,
            max_altitude: 0.0,
            min_fuel: f64::MAX,
            phase_times: Vec::new(),
        }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn collect_data(&mut self, controller: &FlightController) {
        let rocket = controller.rocket();
        let sample = TelemetrySample {
            time: controller.mission_time(),
            phase: controller.phase(),
            altitude: rocket.get_altitude(),
            vertical_speed: rocket.velocity().y,
            fuel: rocket.fuel(),
            fuel_fraction: rocket.fuel_tank.get_fraction(),
            total_throttle: rocket.get_total_thrust(),
        };

        self.max_altitude = self.max_altitude.max(sample.altitude);
        self.max_vertical_speed = self.max_vertical_speed.max(sample.vertical_speed);
        self.min_fuel = self.min_fuel.min(sample.fuel);

        // The controller logs transitions inside a tick, LoadFuel included.
        self.phase_times = controller.phase_history().to_vec();

        self.samples.push(sample);
    }

    pub fn get_max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn get_max_vertical_speed(&self) -> f64 {
        self.max_vertical_speed
    }

    /// Lowest fuel level seen, or `None` before the first sample.
    pub fn get_min_fuel(&self) -> Option<f64> {
        if self.samples.is_empty() {
            None
        } else {
            Some(self.min_fuel)
        }
    }

    pub fn get_phase_times(&self) -> &[(LaunchPhase, f64)] {
        &self.phase_times
    }

    pub fn summary(&self) -> String {
        let mut report = String::from("--- Flight Summary ---\n");
        report.push_str(&format!(
            "Max Altitude: {}\n",
            Self::format_altitude(self.max_altitude)
        ));
        report.push_str(&format!(
            "Max Vertical Speed: {:.2} m/s\n",
            self.max_vertical_speed
        ));
        report.push_str(&format!(
            "Min Fuel: {:.2}%\n",
            self.get_min_fuel().unwrap_or(0.0)
        ));
        if let Some(last) = self.samples.last() {
            report.push_str(&format!(
                "Fuel Remaining: {:.0}% of tank\n",
                last.fuel_fraction * 100.0
            ));
            report.push_str(&format!("Flight Time: {}\n", Self::format_time(last.time)));
        }

        report.push_str("\n--- Phase Transitions ---\n");
        for (phase, time) in &self.phase_times {
            report.push_str(&format!(
                "Phase {} reached at: {}\n",
                phase,
                Self::format_time(*time)
            ));
        }
        report
    }

    pub fn display_data(&self) {
        println!("{}", self.summary());
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Telemetry::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::FlightConfig, control::guidance::ThrottleSchedule};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_time_and_altitude_formatting() {
        assert_eq!(Telemetry::format_time(12.5), "12.50s");
        assert_eq!(Telemetry::format_time(75.0), "1m 15.00s");
        assert_eq!(Telemetry::format_time(3725.0), "1h 2m 5.00s");
        assert_eq!(Telemetry::format_altitude(950.0), "950.00 m");
        assert_eq!(Telemetry::format_altitude(12_500.0), "12.50 km");
    }

    #[test]
    fn test_empty_telemetry() {
        let telemetry = Telemetry::new();
        assert_eq!(telemetry.get_min_fuel(), None);
        assert!(telemetry.get_phase_times().is_empty());
        assert!(telemetry.summary().contains("Min Fuel: 0.00%"));
    }

    #[test]
    fn test_collects_extrema_and_phase_changes() {
        let mut controller = FlightController::new(FlightConfig {
            countdown_duration: 1.0,
            ..FlightConfig::default()
        });
        let mut telemetry = Telemetry::new();

        controller.launch();
        for _ in 0..200 {
            controller.tick(0.1);
            telemetry.collect_data(&controller);
        }

        assert_eq!(telemetry.samples.len(), 200);
        assert!(telemetry.get_max_altitude() > 0.0);
        assert!(telemetry.get_max_vertical_speed() > 0.0);
        assert!(telemetry.get_min_fuel().unwrap_or(100.0) < 100.0);

        let phases: Vec<LaunchPhase> = telemetry
            .get_phase_times()
            .iter()
            .map(|(phase, _)| *phase)
            .collect();
        assert_eq!(
            phases,
            vec![
                LaunchPhase::LoadFuel,
                LaunchPhase::Countdown,
                LaunchPhase::StartEngines,
                LaunchPhase::Liftoff
            ]
        );

        assert_eq!(telemetry.get_phase_times()[0], (LaunchPhase::LoadFuel, 0.0));

        let report = telemetry.summary();
        assert!(report.contains("Phase LOAD_FUEL reached at: 0.00s"));
        assert!(report.contains("Phase LIFTOFF reached at"));
    }

    #[test]
    fn test_reports_fuel_fraction() {
        let mut controller = FlightController::new(FlightConfig {
            countdown_duration: 0.0,
            throttle: ThrottleSchedule::uniform(100.0),
            ..FlightConfig::default()
        });
        let mut telemetry = Telemetry::new();

        controller.launch();
        // LoadFuel, then Countdown, then StartEngines
        for _ in 0..2 {
            controller.tick(0.5);
            telemetry.collect_data(&controller);
        }
        assert!(telemetry.summary().contains("Fuel Remaining: 100% of tank"));

        // One second of full throttle burns a tenth of the tank
        controller.tick(1.0);
        telemetry.collect_data(&controller);

        let last = telemetry.samples.last().map_or(1.0, |s| s.fuel_fraction);
        assert_abs_diff_eq!(last, 0.9, epsilon = 1e-9);
        assert!(telemetry.summary().contains("Fuel Remaining: 90% of tank"));
    }
}
