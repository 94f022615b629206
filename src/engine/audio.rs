// Audio cue playback

use super::assets::SoundHandle;

/// Fire-and-forget sound playback provided by the host
pub trait AudioSink {
    /// Start playing a sound; nothing is reported back
    fn play(&mut self, sound: SoundHandle);
}

/// Sink that drops every cue (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _sound: SoundHandle) {}
}
