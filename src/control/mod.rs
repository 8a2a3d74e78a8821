pub mod fuel_management;
pub mod guidance;
pub mod launch_sequence;
pub mod mission;
pub mod propulsion;
pub mod rocket;
