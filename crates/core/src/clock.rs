//! Gravity cadence
//!
//! The render loop runs at a fixed frame rate and gravity advances once every
//! `frames_per_step` frames, starting on the very first frame.

/// Counts frames and says when to run a gravity step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityClock {
    frames_per_step: u32,
    frame: u64,
}

impl GravityClock {
    /// `frames_per_step` of 0 is treated as 1 (gravity every frame)
    pub fn new(frames_per_step: u32) -> Self {
        Self {
            frames_per_step: frames_per_step.max(1),
            frame: 0,
        }
    }

    /// Advance one frame. Returns true when this frame runs a gravity step.
    pub fn advance(&mut self) -> bool {
        let due = self.frame % self.frames_per_step as u64 == 0;
        self.frame += 1;
        due
    }
}
