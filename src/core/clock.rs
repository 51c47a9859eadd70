use std::time::Instant;

/// Upper bound on a single frame delta, seconds. A window drag or
/// debugger stall yields one long frame, not a camera teleport.
const MAX_DELTA: f32 = 0.1;

/// Delta-time source for the frame loop
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    /// Create a clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Seconds since the previous tick, capped at `MAX_DELTA`
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta.min(MAX_DELTA)
    }

    /// Forget elapsed time so the next tick starts from now
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
