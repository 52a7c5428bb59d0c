use std::time::Duration;

/// Fixed-timestep frame pacing.
///
/// The loop samples a clock at the start of each frame, does its work, then
/// asks how long to sleep. Frames that overrun the budget are not compensated
/// for: no catch-up, no skipped frames.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameTimer {
    frame_budget: Duration,
}

impl FrameTimer {
    /// Budget of `1000 / fps` whole milliseconds (16 ms at 60 fps).
    ///
    /// An `fps` of 0 is clamped to 1, giving a one-second budget.
    /// `GameConfig::validate` rejects 0 before it ever gets here.
    pub fn from_fps(fps: u32) -> Self {
        Self { frame_budget: Duration::from_millis(1000 / fps.max(1) as u64) }
    }

    pub fn from_budget(frame_budget: Duration) -> Self {
        Self { frame_budget }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Time left in the budget after `elapsed`, or `None` if the frame used
    /// all of it.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.frame_budget
            .checked_sub(elapsed)
            .filter(|left| !left.is_zero())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
