//! Frame timing
//!
//! Turns `requestAnimationFrame` timestamps into simulation deltas and keeps
//! the game at (roughly) its target rate on high refresh displays.

/// Slack so a 60 Hz display isn't throttled by timestamp jitter
const JITTER_MS: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    next_due_ms: f64,
    min_frame_ms: f64,
}

impl FrameClock {
    pub fn new(target_fps: f32) -> Self {
        Self {
            last_ms: None,
            next_due_ms: 0.0,
            min_frame_ms: 1000.0 / target_fps.max(1.0) as f64,
        }
    }

    /// Seconds since the last accepted frame, or `None` if this frame is
    /// too early and should be skipped.
    ///
    /// Deadlines advance by a whole frame period, so displays that are not
    /// a multiple of the target rate still average the target rate.
    pub fn tick(&mut self, now_ms: f64) -> Option<f32> {
        let Some(last) = self.last_ms else {
            self.resync(now_ms);
            return Some(0.0);
        };

        let elapsed = now_ms - last;
        if !elapsed.is_finite() || elapsed < 0.0 {
            // Clock went backwards; resync without moving the simulation
            self.resync(now_ms);
            return Some(0.0);
        }
        if now_ms < self.next_due_ms - JITTER_MS {
            return None;
        }

        self.last_ms = Some(now_ms);
        self.next_due_ms += self.min_frame_ms;
        if self.next_due_ms < now_ms {
            // Fell behind (slow display or a stall); don't try to catch up
            self.next_due_ms = now_ms + self.min_frame_ms;
        }
        Some((elapsed / 1000.0) as f32)
    }

    fn resync(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
        self.next_due_ms = now_ms + self.min_frame_ms;
    }
}
