// Sprite frame clock

use std::time::Duration;

use crate::engine::render::TextureRegion;

/// Steps through a set of sprite frames on a fixed delay
///
/// Time is passed in by the caller, so the clock behaves the same under a
/// real or a hand-stepped time source. At most one frame is advanced per
/// `update`; a slow tick does not skip frames.
#[derive(Debug, Clone, Default)]
pub struct Animation {
    frames: Vec<TextureRegion>,
    current_frame: usize,
    /// `None` holds the current frame forever
    delay: Option<Duration>,
    frame_started: Duration,
    played_once: bool,
}

impl Animation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a new frame set and restart from its first frame
    pub fn set_frames(&mut self, frames: &[TextureRegion], now: Duration) {
        self.frames = frames.to_vec();
        self.current_frame = 0;
        self.frame_started = now;
        self.played_once = false;
    }

    pub fn set_delay(&mut self, delay: Option<Duration>) {
        self.delay = delay;
    }

    /// Advance the clock
    pub fn update(&mut self, now: Duration) {
        let Some(delay) = self.delay else {
            return;
        };
        if self.frames.is_empty() {
            return;
        }

        if now.saturating_sub(self.frame_started) > delay {
            self.current_frame += 1;
            self.frame_started = now;
        }
        if self.current_frame >= self.frames.len() {
            self.current_frame = 0;
            self.played_once = true;
        }
    }

    /// True once every frame has been shown at least once since `set_frames`
    pub fn has_played_once(&self) -> bool {
        self.played_once
    }

    pub fn frame(&self) -> usize {
        self.current_frame
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn delay(&self) -> Option<Duration> {
        self.delay
    }

    /// Region of the sheet to draw right now
    pub fn frame_region(&self) -> Option<TextureRegion> {
        self.frames.get(self.current_frame).copied()
    }
}
