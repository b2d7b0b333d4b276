use std::time::Instant;

use crate::traits::FrameSource;

/// Wall-clock frame timer in milliseconds
///
/// `restart_ms` reads and restarts from a single `Instant::now()` so no time
/// is lost between the read and the reset.
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Elapsed ms since the previous restart, then restart
    pub fn restart_ms(&mut self) -> f64 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f64() * 1000.0;
        self.last_tick = now;
        delta
    }

    /// Elapsed ms since the previous restart, without restarting
    pub fn elapsed_ms(&self) -> f64 {
        self.last_tick.elapsed().as_secs_f64() * 1000.0
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for FrameClock {
    fn next_frame_ms(&mut self) -> f64 {
        self.restart_ms()
    }
}
