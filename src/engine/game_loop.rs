/// Fixed timestep simulation clock
///
/// Frame durations are fed in by the host instead of being read from the
/// wall clock, so the same sequence of frames always yields the same
/// sequence of simulation ticks. Each tick advances physics and the
/// character controller by exactly `FIXED_TIMESTEP`.
use std::time::Duration;

/// Target physics/update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
pub const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of simulation steps per frame to prevent spiral of death
const MAX_SIMULATION_STEPS: u32 = 5;

/// Fixed-step clock state
#[derive(Debug)]
pub struct FixedStepClock {
    /// Length of one simulation tick
    step: Duration,

    /// Frame time not yet consumed by ticks
    accumulator: Duration,

    /// Whether simulation is paused
    paused: bool,

    /// Frames fed into the clock
    frame_count: u64,

    /// Total ticks handed out
    tick_count: u64,
}

impl FixedStepClock {
    /// Create a clock ticking at 60 Hz
    pub fn new() -> Self {
        Self::with_step(FIXED_TIMESTEP_DURATION)
    }

    /// Create a clock with a custom tick length
    pub fn with_step(step: Duration) -> Self {
        Self {
            step,
            accumulator: Duration::ZERO,
            paused: false,
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Feed one rendered frame's duration, returns the number of ticks to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        // If paused, don't accumulate time for updates
        if self.paused || self.step.is_zero() {
            return 0;
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < MAX_SIMULATION_STEPS {
            self.accumulator -= self.step;
            ticks += 1;
        }

        // Drop the backlog we refused to simulate
        if ticks == MAX_SIMULATION_STEPS && self.accumulator >= self.step {
            log::debug!(
                "Dropping {:?} of simulation backlog",
                self.accumulator - self.accumulator.min(self.step)
            );
            self.accumulator = self.accumulator.min(self.step);
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Length of one tick
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Length of one tick in seconds (for the physics solver)
    pub fn step_secs(&self) -> f32 {
        self.step.as_secs_f32()
    }

    /// Simulated time covered by all ticks so far
    pub fn simulated(&self) -> Duration {
        let nanos = self.step.as_nanos().saturating_mul(u128::from(self.tick_count));
        u64::try_from(nanos).map_or(Duration::MAX, Duration::from_nanos)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the simulation
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Simulation paused");
        }
    }

    /// Resume the simulation
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            log::info!("Simulation resumed");
        }
    }
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_creation() {
        let clock = FixedStepClock::new();
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.tick_count(), 0);
        assert!(!clock.is_paused());
        assert!((clock.step_secs() - FIXED_TIMESTEP).abs() < 0.0001);
    }

    #[test]
    fn test_exact_frames_yield_one_tick_each() {
        let mut clock = FixedStepClock::with_step(Duration::from_millis(10));
        for _ in 0..5 {
            assert_eq!(clock.advance(Duration::from_millis(10)), 1);
        }
        assert_eq!(clock.tick_count(), 5);
        assert_eq!(clock.simulated(), Duration::from_millis(50));
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut clock = FixedStepClock::with_step(Duration::from_millis(10));
        assert_eq!(clock.advance(Duration::from_millis(6)), 0);
        assert_eq!(clock.advance(Duration::from_millis(6)), 1);
        assert_eq!(clock.advance(Duration::from_millis(8)), 1);
        assert_eq!(clock.tick_count(), 2);
    }

    #[test]
    fn test_pause_resume() {
        let mut clock = FixedStepClock::new();
        clock.pause();
        assert!(clock.is_paused());
        assert_eq!(clock.advance(Duration::from_millis(50)), 0);
        assert_eq!(clock.frame_count(), 1);

        clock.resume();
        assert!(!clock.is_paused());
        // Time fed while paused is not replayed
        assert_eq!(clock.advance(Duration::ZERO), 0);
        assert_eq!(clock.tick_count(), 0);
    }

    #[test]
    fn test_simulated_past_u32_ticks() {
        let mut clock = FixedStepClock::with_step(Duration::from_millis(1));
        clock.tick_count = u64::from(u32::MAX) + 10;
        assert_eq!(
            clock.simulated(),
            Duration::from_millis(u64::from(u32::MAX) + 10)
        );

        clock.tick_count = u64::MAX;
        assert_eq!(clock.simulated(), Duration::MAX);
    }

    #[test]
    fn test_max_steps_limit() {
        let mut clock = FixedStepClock::with_step(Duration::from_millis(10));

        // 300ms would allow 30 ticks
        let ticks = clock.advance(Duration::from_millis(300));
        assert_eq!(ticks, MAX_SIMULATION_STEPS);

        // Backlog is dropped rather than replayed
        assert!(clock.advance(Duration::ZERO) <= 1);
    }
}
