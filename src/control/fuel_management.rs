use crate::constants::{FUEL_CONSUMPTION_RATE, INITIAL_FUEL};

/// Propellant bookkeeping for one flight. The level never goes below zero and
/// only ever rises through `refill`.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelTank {
    level: f64,
    capacity: f64,
    consumption_rate: f64,
}

impl FuelTank {
    pub fn new(capacity: f64, consumption_rate: f64) -> Self {
        FuelTank {
            level: capacity,
            capacity,
            consumption_rate,
        }
    }

    // Burns fuel proportional to total thrust and returns the amount actually consumed
    pub fn consume(&mut self, total_thrust: f64, delta_time: f64) -> f64 {
        let requested = (total_thrust * self.consumption_rate * delta_time).max(0.0);
        let consumed = requested.min(self.level);
        self.level = (self.level - requested).max(0.0);
        consumed
    }

    pub fn refill(&mut self) {
        self.level = self.capacity;
    }

    pub fn drain(&mut self) {
        self.level = 0.0;
    }

    pub fn get_level(&self) -> f64 {
        self.level
    }

    // Remaining fuel as a fraction of a full tank, 0.0 to 1.0
    pub fn get_fraction(&self) -> f64 {
        if self.capacity > 0.0 {
            self.level / self.capacity
        } else {
            0.0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.level <= 0.0
    }
}

impl Default for FuelTank {
    fn default() -> Self {
        FuelTank::new(INITIAL_FUEL, FUEL_CONSUMPTION_RATE)
    }
}
