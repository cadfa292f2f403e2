//! Variable-rate frame clock.
//!
//! The scene animates once per rendered frame with the measured delta, so there
//! is no fixed-step accumulator. Long stalls are clamped so a resumed process
//! does not apply minutes of rotation in one frame.

use std::time::{Duration, Instant};

use tracing::warn;

/// Maximum frame time fed to the scene.
pub const MAX_FRAME_TIME: f64 = 0.25;

pub struct FrameClock {
    previous_time: Instant,
    elapsed: f64,
    frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// Measure the wall-clock time since the previous tick and advance by it.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.advance(frame_time)
    }

    /// Advance by an explicit frame time, returning the clamped delta.
    pub fn advance(&mut self, frame_time: f64) -> f64 {
        let dt = if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            MAX_FRAME_TIME
        } else {
            frame_time.max(0.0)
        };

        self.elapsed += dt;
        self.frame_count += 1;
        dt
    }

    /// Time left in the frame budget for `target_fps` since the last tick.
    pub fn remaining_budget(&self, target_fps: u32) -> Duration {
        let budget = Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)));
        budget.saturating_sub(self.previous_time.elapsed())
    }

    /// Total clamped time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
