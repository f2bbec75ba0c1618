//! Frame clock.
//!
//! Measures real time between frames and tells the event loop when the next
//! frame is due, which caps the frame rate.

use crate::constants::MAX_FRAME_DT;
use std::time::{Duration, Instant};

pub struct FrameClock {
    last_tick: Instant,
    frame_duration: Duration,
    /// Seconds since the clock started (sum of capped deltas)
    pub elapsed: f32,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(Instant::now(), target_fps)
    }

    pub fn starting_at(start: Instant, target_fps: u32) -> Self {
        Self {
            last_tick: start,
            frame_duration: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            elapsed: 0.0,
        }
    }

    /// Start a new frame at `now`, returning the delta since the previous one.
    /// The delta is capped so a stalled frame does not fast-forward animations.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let raw_dt = now.saturating_duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        let dt = raw_dt.min(MAX_FRAME_DT);
        self.elapsed += dt;
        dt
    }

    /// When the next frame should start
    pub fn next_deadline(&self) -> Instant {
        self.last_tick + self.frame_duration
    }

    /// True once the next frame is due
    pub fn frame_due(&self, now: Instant) -> bool {
        now >= self.next_deadline()
    }
}
