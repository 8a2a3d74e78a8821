use std::fmt;

/// Where a flight is in its launch sequence. Flights run
/// `LoadFuel -> Countdown -> StartEngines -> Liftoff`; `Idle` and `Aborted`
/// sit outside that order.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum LaunchPhase {
    Idle,
    LoadFuel,
    Countdown,
    StartEngines,
    Liftoff,
    Aborted,
}

impl LaunchPhase {
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            LaunchPhase::LoadFuel
                | LaunchPhase::Countdown
                | LaunchPhase::StartEngines
                | LaunchPhase::Liftoff
        )
    }

    /// Phases in which the rocket is integrated every tick.
    pub fn is_flying(&self) -> bool {
        matches!(self, LaunchPhase::Liftoff | LaunchPhase::Aborted)
    }
}

impl fmt::Display for LaunchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LaunchPhase::Idle => "IDLE",
            LaunchPhase::LoadFuel => "LOAD_FUEL",
            LaunchPhase::Countdown => "COUNTDOWN",
            LaunchPhase::StartEngines => "START_ENGINES",
            LaunchPhase::Liftoff => "LIFTOFF",
            LaunchPhase::Aborted => "ABORTED",
        };
        f.write_str(label)
    }
}

/// Countdown clock measured against mission time handed in by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    pub duration: f64,
    started_at: Option<f64>,
}

impl Countdown {
    pub fn new(duration: f64) -> Self {
        Countdown {
            duration,
            started_at: None,
        }
    }

    pub fn start(&mut self, mission_time: f64) {
        self.started_at = Some(mission_time);
    }

    pub fn clear(&mut self) {
        self.started_at = None;
    }

    pub fn remaining(&self, mission_time: f64) -> Option<f64> {
        self.started_at
            .map(|start| (self.duration - (mission_time - start)).max(0.0))
    }

    pub fn is_complete(&self, mission_time: f64) -> bool {
        self.started_at
            .is_some_and(|start| mission_time - start >= self.duration)
    }
}
