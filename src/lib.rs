pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod logger;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use config::{FlightConfig, RocketConfig};
pub use constants::*;
pub use control::guidance::ThrottleSchedule;
pub use control::launch_sequence::LaunchPhase;
pub use control::mission::FlightController;
pub use control::propulsion::ThrustModel;
pub use control::rocket::RocketState;
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::kinematics::Kinematics;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector3d::Vector3D;
