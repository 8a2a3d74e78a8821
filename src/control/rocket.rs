use crate::{
    config::RocketConfig,
    trajectory_system::kinematics::Kinematics,
    utils::vector3d::Vector3D,
};

use super::{
    fuel_management::FuelTank,
    propulsion::{EngineCluster, ThrustModel},
};

/// Kinematic and propellant state of one rocket for one flight.
///
/// Each tick the owner calls [`RocketState::apply_thrust`] followed by
/// [`RocketState::update`]. Neither call can fail: bad input is clamped and
/// the state stays consistent (fuel never negative, altitude never negative).
#[derive(Debug, Clone, PartialEq)]
pub struct RocketState {
    pub kinematics: Kinematics,
    pub fuel_tank: FuelTank,
    pub engines: EngineCluster,
    pub gravity: f64,
    pub thrust_model: ThrustModel,
}

impl RocketState {
    pub fn new(config: &RocketConfig) -> Self {
        RocketState {
            kinematics: Kinematics::at_rest(),
            fuel_tank: FuelTank::new(config.initial_fuel, config.consumption_rate),
            engines: EngineCluster::new(config.engine_count, config.max_throttle),
            gravity: config.gravity,
            thrust_model: config.thrust_model,
        }
    }

    /// Fires the engines for `delta_time` seconds. Does nothing at all once the
    /// tank is empty.
    pub fn apply_thrust(&mut self, throttles: &[f64], delta_time: f64) {
        if self.fuel_tank.is_empty() {
            return;
        }

        let total_thrust = self.engines.set_throttles(throttles);
        let acceleration = self
            .thrust_model
            .acceleration(total_thrust, self.fuel_tank.get_level());

        self.kinematics.accelerate_vertical(acceleration, delta_time);
        self.fuel_tank.consume(total_thrust, delta_time);
    }

    /// Gravity, then position, then the ground clamp. Returns `true` when the
    /// rocket ends the step on the ground.
    pub fn update(&mut self, delta_time: f64) -> bool {
        self.kinematics.update(delta_time, self.gravity)
    }

    /// Back to the launch pad: at rest at the origin with a full tank.
    pub fn reset(&mut self) {
        self.kinematics = Kinematics::at_rest();
        self.fuel_tank.refill();
        self.engines.shutdown();
    }

    pub fn refuel(&mut self) {
        self.fuel_tank.refill();
    }

    pub fn cut_engines(&mut self) {
        self.fuel_tank.drain();
        self.engines.shutdown();
    }

    pub fn position(&self) -> Vector3D {
        self.kinematics.position
    }

    pub fn velocity(&self) -> Vector3D {
        self.kinematics.velocity
    }

    pub fn fuel(&self) -> f64 {
        self.fuel_tank.get_level()
    }

    pub fn engine_thrust(&self) -> &[f64] {
        self.engines.get_engine_thrust()
    }

    pub fn get_altitude(&self) -> f64 {
        self.kinematics.get_altitude()
    }

    pub fn get_total_thrust(&self) -> f64 {
        self.engines.get_total_thrust()
    }

    pub fn get_mass(&self) -> Option<f64> {
        self.thrust_model.get_mass(self.fuel())
    }
}

impl Default for RocketState {
    fn default() -> Self {
        RocketState::new(&RocketConfig::default())
    }
}
