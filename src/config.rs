use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ALTITUDE_CEILING, COUNTDOWN_DURATION, DEFAULT_ENGINE_COUNT, FUEL_CONSUMPTION_RATE, GRAVITY,
    INITIAL_FUEL, MAX_MISSION_TIME, MAX_THROTTLE, TIME_STEP,
};
use crate::control::guidance::ThrottleSchedule;
use crate::control::propulsion::ThrustModel;
use crate::errors::SimulationError;

/// Parameters of a single rocket, fixed for the lifetime of a `RocketState`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketConfig {
    pub engine_count: usize,
    pub initial_fuel: f64,
    pub gravity: f64,
    pub consumption_rate: f64,
    pub max_throttle: f64,
    pub thrust_model: ThrustModel,
}

impl RocketConfig {
    pub fn with_engines(engine_count: usize) -> Self {
        RocketConfig {
            engine_count,
            ..RocketConfig::default()
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.engine_count == 0 {
            return Err(invalid("engine_count must be at least 1"));
        }
        if !self.initial_fuel.is_finite() || self.initial_fuel <= 0.0 {
            return Err(invalid(format!(
                "initial_fuel must be positive, got {}",
                self.initial_fuel
            )));
        }
        if !self.gravity.is_finite() || self.gravity > 0.0 {
            return Err(invalid(format!(
                "gravity must be zero or negative (downward), got {}",
                self.gravity
            )));
        }
        if !self.consumption_rate.is_finite() || self.consumption_rate < 0.0 {
            return Err(invalid(format!(
                "consumption_rate must be non-negative, got {}",
                self.consumption_rate
            )));
        }
        if !self.max_throttle.is_finite() || self.max_throttle <= 0.0 {
            return Err(invalid(format!(
                "max_throttle must be positive, got {}",
                self.max_throttle
            )));
        }
        if let ThrustModel::MassScaled {
            dry_mass,
            propellant_mass_per_unit,
        } = self.thrust_model
        {
            if !dry_mass.is_finite() || dry_mass <= 0.0 {
                return Err(invalid(format!("dry_mass must be positive, got {dry_mass}")));
            }
            if !propellant_mass_per_unit.is_finite() || propellant_mass_per_unit < 0.0 {
                return Err(invalid(format!(
                    "propellant_mass_per_unit must be non-negative, got {propellant_mass_per_unit}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for RocketConfig {
    fn default() -> Self {
        RocketConfig {
            engine_count: DEFAULT_ENGINE_COUNT,
            initial_fuel: INITIAL_FUEL,
            gravity: GRAVITY,
            consumption_rate: FUEL_CONSUMPTION_RATE,
            max_throttle: MAX_THROTTLE,
            thrust_model: ThrustModel::Direct,
        }
    }
}

/// Everything the launch controller and the headless runner need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub rocket: RocketConfig,
    pub countdown_duration: f64,
    pub altitude_ceiling: f64,
    pub time_step: f64,
    pub max_mission_time: f64,
    pub throttle: ThrottleSchedule,
}

impl FlightConfig {
    pub fn from_json_str(json: &str) -> Result<Self, SimulationError> {
        let config: FlightConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        self.rocket.validate()?;

        if !self.countdown_duration.is_finite() || self.countdown_duration < 0.0 {
            return Err(invalid(format!(
                "countdown_duration must be non-negative, got {}",
                self.countdown_duration
            )));
        }
        if self.altitude_ceiling.is_nan() || self.altitude_ceiling <= 0.0 {
            return Err(invalid(format!(
                "altitude_ceiling must be positive, got {}",
                self.altitude_ceiling
            )));
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(invalid(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        if self.max_mission_time.is_nan() || self.max_mission_time <= 0.0 {
            return Err(invalid(format!(
                "max_mission_time must be positive, got {}",
                self.max_mission_time
            )));
        }
        if let Some(levels) = self.throttle.explicit_engine_count() {
            if levels != self.rocket.engine_count {
                return Err(invalid(format!(
                    "throttle schedule lists {levels} engines but the rocket has {}",
                    self.rocket.engine_count
                )));
            }
        }
        Ok(())
    }
}

impl Default for FlightConfig {
    fn default() -> Self {
        FlightConfig {
            rocket: RocketConfig::default(),
            countdown_duration: COUNTDOWN_DURATION,
            altitude_ceiling: ALTITUDE_CEILING,
            time_step: TIME_STEP,
            max_mission_time: MAX_MISSION_TIME,
            throttle: ThrottleSchedule::default(),
        }
    }
}

fn invalid(message: impl Into<String>) -> SimulationError {
    SimulationError::ConfigurationError(message.into())
}
