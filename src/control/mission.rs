use crate::{
    config::FlightConfig,
    control::{
        guidance::ThrottleSchedule,
        launch_sequence::{Countdown, LaunchPhase},
        rocket::RocketState,
    },
    event, info, warning,
};

/// Orchestrates one rocket through launch, powered flight and landing.
///
/// The controller owns all mutable flight state and is advanced by the caller
/// with the time elapsed since the previous tick. It never reads a clock.
pub struct FlightController {
    config: FlightConfig,
    rocket: RocketState,
    phase: LaunchPhase,
    countdown: Countdown,
    mission_time: f64,
    phase_history: Vec<(LaunchPhase, f64)>,
    left_ground: bool,
    landed: bool,
}

impl FlightController {
    pub fn new(config: FlightConfig) -> Self {
        let rocket = RocketState::new(&config.rocket);
        let countdown = Countdown::new(config.countdown_duration);
        FlightController {
            config,
            rocket,
            phase: LaunchPhase::Idle,
            countdown,
            mission_time: 0.0,
            phase_history: Vec::new(),
            left_ground: false,
            landed: false,
        }
    }

    /// Starts a new flight with a fresh rocket. Ignored while a flight is
    /// still in progress.
    pub fn launch(&mut self) -> bool {
        if self.phase.is_in_progress() && !self.is_flight_over() {
            warning!("Launch ignored, flight already in {}", self.phase);
            return false;
        }

        self.rocket = RocketState::new(&self.config.rocket);
        self.countdown.start(self.mission_time);
        self.phase_history.clear();
        self.left_ground = false;
        self.landed = false;
        info!("Liftoff initiated, countdown started!");
        self.transition(LaunchPhase::LoadFuel);
        true
    }

    /// Cuts the engines and drains the tank. The rocket keeps coasting until
    /// it reaches the ground.
    pub fn abort(&mut self) -> bool {
        if !self.phase.is_in_progress() {
            return false;
        }

        self.rocket.cut_engines();
        self.countdown.clear();
        warning!(
            "Flight aborted at altitude {:.2} m",
            self.rocket.get_altitude()
        );
        self.transition(LaunchPhase::Aborted);
        true
    }

    /// Discards the current flight entirely.
    pub fn reset(&mut self) {
        self.rocket = RocketState::new(&self.config.rocket);
        self.countdown.clear();
        self.mission_time = 0.0;
        self.phase_history.clear();
        self.left_ground = false;
        self.landed = false;
        self.phase = LaunchPhase::Idle;
    }

    pub fn tick(&mut self, delta_time: f64) {
        self.mission_time += delta_time;

        let ground_contact = match self.phase {
            LaunchPhase::Idle => false,
            LaunchPhase::LoadFuel => {
                self.rocket.refuel();
                self.transition(LaunchPhase::Countdown);
                false
            }
            LaunchPhase::Countdown => {
                if self.countdown.is_complete(self.mission_time) {
                    self.transition(LaunchPhase::StartEngines);
                }
                false
            }
            LaunchPhase::StartEngines => {
                let ignition = self
                    .commanded_throttles()
                    .iter()
                    .any(|throttle| *throttle > 0.0);
                if ignition && !self.rocket.fuel_tank.is_empty() {
                    info!("Liftoff complete!");
                    self.transition(LaunchPhase::Liftoff);
                    self.fly(delta_time)
                } else {
                    false
                }
            }
            LaunchPhase::Liftoff => self.fly(delta_time),
            LaunchPhase::Aborted => self.rocket.update(delta_time),
        };

        self.track_ground_contact(ground_contact);
    }

    /// One powered tick. Returns `true` when the rocket ended it on the ground.
    fn fly(&mut self, delta_time: f64) -> bool {
        let throttles = self.commanded_throttles();
        self.rocket.apply_thrust(&throttles, delta_time);
        let ground_contact = self.rocket.update(delta_time);

        event!(
            "t={:.2}s alt={:.2}m vy={:.2}m/s fuel={:.2}",
            self.mission_time,
            self.rocket.get_altitude(),
            self.rocket.velocity().y,
            self.rocket.fuel()
        );
        ground_contact
    }

    /// Throttle for this tick; zero on every engine at or above the ceiling.
    pub fn commanded_throttles(&self) -> Vec<f64> {
        let engine_count = self.rocket.engines.engine_count();
        let altitude = self.rocket.get_altitude();
        if altitude >= self.config.altitude_ceiling {
            return vec![0.0; engine_count];
        }
        self.config.throttle.throttles(altitude, engine_count)
    }

    // A touchdown only counts as a landing once the tank is dry; with fuel
    // left the engines may still carry the rocket back up.
    fn track_ground_contact(&mut self, ground_contact: bool) {
        if !self.phase.is_flying() {
            return;
        }
        if self.rocket.get_altitude() > 0.0 {
            self.left_ground = true;
            self.landed = false;
        } else if ground_contact
            && self.left_ground
            && !self.landed
            && self.rocket.fuel_tank.is_empty()
        {
            self.landed = true;
            info!("Touchdown at t={:.2}s", self.mission_time);
        }
    }

    fn transition(&mut self, next: LaunchPhase) {
        if self.phase != next {
            info!("{} -> {}", self.phase, next);
            self.phase = next;
            self.phase_history.push((next, self.mission_time));
        }
    }

    pub fn set_throttle_schedule(&mut self, schedule: ThrottleSchedule) {
        self.config.throttle = schedule;
    }

    pub fn phase(&self) -> LaunchPhase {
        self.phase
    }

    pub fn rocket(&self) -> &RocketState {
        &self.rocket
    }

    pub fn mission_time(&self) -> f64 {
        self.mission_time
    }

    /// Seconds until ignition, while the countdown is running.
    pub fn countdown_remaining(&self) -> Option<f64> {
        match self.phase {
            LaunchPhase::LoadFuel | LaunchPhase::Countdown => {
                self.countdown.remaining(self.mission_time)
            }
            _ => None,
        }
    }

    /// Every phase entered since the last launch, with the mission time it
    /// was entered at.
    pub fn phase_history(&self) -> &[(LaunchPhase, f64)] {
        &self.phase_history
    }

    /// True once the rocket has left the ground and come back down with an
    /// empty tank.
    pub fn has_landed(&self) -> bool {
        self.landed
    }

    /// Nothing left to simulate: the rocket is on the ground with no fuel.
    pub fn is_flight_over(&self) -> bool {
        self.phase.is_flying()
            && self.rocket.fuel_tank.is_empty()
            && self.rocket.kinematics.is_on_ground()
    }
}
