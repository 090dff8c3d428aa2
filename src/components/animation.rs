//! Walk cycle playback state.

/// Frames in one walk cycle (sprite sheet columns used).
pub const WALK_FRAME_COUNT: usize = 4;
/// Seconds a walk frame stays on screen before the next one.
pub const WALK_FRAME_DURATION: f32 = 0.12;

/// Current walk frame and time spent on it.
///
/// Owned by [`Player`](super::player::Player); only advances while moving.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WalkAnimation {
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl WalkAnimation {
    /// Accumulate `dt`; once past [`WALK_FRAME_DURATION`] step to the next frame.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed_time += dt;
        if self.elapsed_time > WALK_FRAME_DURATION {
            self.frame_index = (self.frame_index + 1) % WALK_FRAME_COUNT;
            self.elapsed_time = 0.0;
        }
    }

    /// Back to the standing frame. The timer keeps its value.
    pub fn rest(&mut self) {
        self.frame_index = 0;
    }
}
