//! Fixed-rate frame pacing.

use std::time::Duration;

/// Turns a frame rate into a per-frame sleep budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    frame: Duration,
}

impl FramePacer {
    /// `fps` must be at least 1; zero is clamped to 1.
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time left in the frame once `elapsed` has already been spent.
    ///
    /// Returns zero when the frame ran over budget.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame.checked_sub(elapsed).unwrap_or(Duration::ZERO)
    }
}
