use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_THROTTLE;

/// Source of per-engine throttle commands for each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ThrottleSchedule {
    /// Fixed per-engine levels. An empty list runs every engine at the default throttle.
    Static {
        #[serde(default)]
        levels: Vec<f64>,
    },
    /// Every engine moves linearly from `start` to `end` as altitude climbs to
    /// `ramp_altitude`, then holds `end`.
    AltitudeRamp {
        start: f64,
        end: f64,
        ramp_altitude: f64,
    },
}

impl ThrottleSchedule {
    pub fn uniform(level: f64) -> Self {
        ThrottleSchedule::Static {
            levels: vec![level],
        }
    }

    /// Throttle command for the given altitude. Always `engine_count` entries long.
    pub fn throttles(&self, altitude: f64, engine_count: usize) -> Vec<f64> {
        match self {
            ThrottleSchedule::Static { levels } if levels.is_empty() => {
                vec![DEFAULT_THROTTLE; engine_count]
            }
            // A single level applies to every engine
            ThrottleSchedule::Static { levels } if levels.len() == 1 => {
                vec![levels[0]; engine_count]
            }
            ThrottleSchedule::Static { levels } => (0..engine_count)
                .map(|i| levels.get(i).copied().unwrap_or(0.0))
                .collect(),
            ThrottleSchedule::AltitudeRamp {
                start,
                end,
                ramp_altitude,
            } => {
                let progress = if *ramp_altitude > 0.0 {
                    (altitude / ramp_altitude).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                vec![start + (end - start) * progress; engine_count]
            }
        }
    }

    /// Number of explicit per-engine levels, if the schedule pins them.
    pub fn explicit_engine_count(&self) -> Option<usize> {
        match self {
            ThrottleSchedule::Static { levels } if levels.len() > 1 => Some(levels.len()),
            _ => None,
        }
    }
}

impl Default for ThrottleSchedule {
    fn default() -> Self {
        ThrottleSchedule::Static { levels: Vec::new() }
    }
}
