//! Self-contained timers driven by frame time in milliseconds

use std::time::Duration;

/// Fixed timestep accumulator with a per-frame step cap
///
/// Frame time is added once per iteration and drained in whole timesteps.
/// At most `max_steps` are drained per iteration; anything left over stays in
/// the accumulator instead of forcing more catch-up work.
#[derive(Debug, Clone)]
pub struct FixedStep {
    timestep_ms: f32,
    accumulator_ms: f64,
    max_steps: u8,
}

impl FixedStep {
    /// Create accumulator with fixed timestep and step cap
    pub fn new(timestep_ms: f32, max_steps: u8) -> Self {
        Self {
            timestep_ms,
            accumulator_ms: 0.0,
            max_steps,
        }
    }

    /// Add this iteration's frame time
    pub fn accumulate(&mut self, frame_ms: f64) {
        self.accumulator_ms += frame_ms;
    }

    /// Consume one timestep if enough time is banked and the cap allows it
    pub fn try_step(&mut self, steps_taken: u8) -> bool {
        let timestep = self.timestep_ms as f64;

        if steps_taken < self.max_steps && self.accumulator_ms >= timestep {
            self.accumulator_ms -= timestep;
            true
        } else {
            false
        }
    }

    pub fn timestep_ms(&self) -> f32 {
        self.timestep_ms
    }

    pub fn max_steps(&self) -> u8 {
        self.max_steps
    }

    pub fn accumulator_ms(&self) -> f64 {
        self.accumulator_ms
    }

    /// Fraction of a timestep left in the accumulator, for interpolation
    pub fn alpha(&self) -> f64 {
        self.accumulator_ms / self.timestep_ms as f64
    }
}

/// Minimum frame interval derived from a frames-per-second cap
#[derive(Debug, Clone, Copy)]
pub struct FrameLimiter {
    min_frame_ms: Option<f64>,
}

impl FrameLimiter {
    /// `fps == 0` disables the limit
    pub fn new(fps: u32) -> Self {
        Self {
            min_frame_ms: (fps > 0).then(|| 1000.0 / fps as f64),
        }
    }

    pub fn min_frame_ms(&self) -> Option<f64> {
        self.min_frame_ms
    }

    /// Time still to wait after a frame that took `elapsed_ms`
    pub fn remaining(&self, elapsed_ms: f64) -> Option<Duration> {
        let min = self.min_frame_ms?;
        let left = min - elapsed_ms;

        (left > 0.0).then(|| Duration::from_secs_f64(left / 1000.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(step: &mut FixedStep) -> u8 {
        let mut taken = 0;
        while step.try_step(taken) {
            taken += 1;
        }
        taken
    }

    #[test]
    fn small_delta_yields_no_steps() {
        let mut step = FixedStep::new(20.0, 10);
        step.accumulate(10.0);

        assert_eq!(drain(&mut step), 0);
        assert_eq!(step.accumulator_ms(), 10.0);
    }

    #[test]
    fn leftover_carries_to_next_frame() {
        let mut step = FixedStep::new(20.0, 10);

        step.accumulate(55.0);
        assert_eq!(drain(&mut step), 2);
        assert_eq!(step.accumulator_ms(), 15.0);

        step.accumulate(5.0);
        assert_eq!(drain(&mut step), 1);
        assert_eq!(step.accumulator_ms(), 0.0);
    }

    #[test]
    fn steps_are_capped() {
        let mut step = FixedStep::new(20.0, 10);
        step.accumulate(1000.0);

        assert_eq!(drain(&mut step), 10);
        assert_eq!(step.accumulator_ms(), 800.0);
    }

    #[test]
    fn cap_bounds_non_positive_timestep() {
        let mut step = FixedStep::new(0.0, 4);
        step.accumulate(1.0);

        assert_eq!(drain(&mut step), 4);
    }

    #[test]
    fn alpha_is_fraction_of_timestep() {
        let mut step = FixedStep::new(20.0, 10);
        step.accumulate(25.0);
        drain(&mut step);

        assert!((step.alpha() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn limiter_waits_out_short_frames() {
        let limiter = FrameLimiter::new(100); // 10ms frames

        let wait = limiter.remaining(4.0).unwrap();
        assert!((wait.as_secs_f64() - 0.006).abs() < 1e-9);
        assert!(limiter.remaining(10.0).is_none());
        assert!(limiter.remaining(25.0).is_none());
    }

    #[test]
    fn zero_fps_is_unlimited() {
        let limiter = FrameLimiter::new(0);

        assert!(limiter.min_frame_ms().is_none());
        assert!(limiter.remaining(0.0).is_none());
    }
}
