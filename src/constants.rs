// Physical Constants
pub const GRAVITY: f64 = -9.81; // m/s², negative is down along y

// Rocket Constants
pub const DEFAULT_ENGINE_COUNT: usize = 1;
pub const INITIAL_FUEL: f64 = 100.0; // percent of a full tank
pub const FUEL_CONSUMPTION_RATE: f64 = 0.1; // fuel per unit thrust per second
pub const MAX_THROTTLE: f64 = 100.0; // percent
pub const DEFAULT_THROTTLE: f64 = 50.0; // percent

// Launch Sequence
pub const COUNTDOWN_DURATION: f64 = 10.0; // s
pub const ALTITUDE_CEILING: f64 = 10_000.0; // m

// Simulation Parameters
pub const TIME_STEP: f64 = 1.0 / 60.0; // s
pub const MAX_MISSION_TIME: f64 = 600.0; // s

// Logging
pub const EVENT_LOG_ENV: &str = "LOG_FLIGHT_EVENTS";
