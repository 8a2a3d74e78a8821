use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ENGINE_COUNT, MAX_THROTTLE};

/// How summed engine throttle turns into vertical acceleration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ThrustModel {
    /// Throttle units double as m/s².
    #[default]
    Direct,
    /// Acceleration is thrust over the current vehicle mass, where mass is the
    /// dry mass plus the mass of the remaining fuel.
    MassScaled {
        dry_mass: f64,
        propellant_mass_per_unit: f64,
    },
}

impl ThrustModel {
    pub fn get_mass(&self, fuel: f64) -> Option<f64> {
        match *self {
            ThrustModel::Direct => None,
            ThrustModel::MassScaled {
                dry_mass,
                propellant_mass_per_unit,
            } => Some(dry_mass + fuel.max(0.0) * propellant_mass_per_unit),
        }
    }

    pub fn acceleration(&self, total_thrust: f64, fuel: f64) -> f64 {
        match self.get_mass(fuel) {
            None => total_thrust,
            Some(mass) if mass > 0.0 => total_thrust / mass,
            Some(_) => 0.0,
        }
    }
}

/// Per-engine throttle record. The number of engines is fixed when the
/// cluster is built.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineCluster {
    engine_thrust: Vec<f64>,
    max_throttle: f64,
}

impl EngineCluster {
    pub fn new(engine_count: usize, max_throttle: f64) -> Self {
        EngineCluster {
            engine_thrust: vec![0.0; engine_count],
            max_throttle,
        }
    }

    /// Mirrors the commanded throttles into the record, clamped to
    /// `[0, max_throttle]`, and returns their sum. Extra entries are ignored and
    /// missing ones count as zero.
    pub fn set_throttles(&mut self, throttles: &[f64]) -> f64 {
        let max_throttle = self.max_throttle;
        let mut commanded = throttles.iter().copied();

        for slot in self.engine_thrust.iter_mut() {
            *slot = Self::clamp_throttle(commanded.next().unwrap_or(0.0), max_throttle);
        }

        self.get_total_thrust()
    }

    pub fn shutdown(&mut self) {
        self.engine_thrust.iter_mut().for_each(|slot| *slot = 0.0);
    }

    fn clamp_throttle(throttle: f64, max_throttle: f64) -> f64 {
        if throttle.is_nan() {
            0.0
        } else {
            throttle.clamp(0.0, max_throttle)
        }
    }

    pub fn get_engine_thrust(&self) -> &[f64] {
        &self.engine_thrust
    }

    pub fn get_total_thrust(&self) -> f64 {
        self.engine_thrust.iter().sum()
    }

    pub fn engine_count(&self) -> usize {
        self.engine_thrust.len()
    }
}

impl Default for EngineCluster {
    fn default() -> Self {
        EngineCluster::new(DEFAULT_ENGINE_COUNT, MAX_THROTTLE)
    }
}
