use trace_engine::{AudioQueue, AudioSource, SoundId};

use crate::assets::MUSIC_CHANNEL;

/// Looping background track shared by every screen.
///
/// Owned by the game and outlives screen changes, so the menu and the tracing
/// screen hear one continuous track.
#[derive(Debug)]
pub struct BackgroundMusic {
    source: AudioSource,
}

impl BackgroundMusic {
    pub fn new() -> Self {
        Self {
            source: AudioSource::new(MUSIC_CHANNEL),
        }
    }

    /// Bind the track. A track that is already playing keeps playing.
    pub fn bind(&mut self, clip: Option<SoundId>) {
        self.source.set_clip(clip);
    }

    /// Start the track unless it is already running. Returns whether a play
    /// command was issued.
    pub fn ensure_playing(&mut self, audio: &mut AudioQueue) -> bool {
        if self.source.clip().is_none() || self.source.is_playing() {
            return false;
        }
        self.source.set_looping(true);
        let started = self.source.play(audio);
        if started {
            log::info!("background music started");
        }
        started
    }

    pub fn is_playing(&self) -> bool {
        self.source.is_playing()
    }
}

impl Default for BackgroundMusic {
    fn default() -> Self {
        Self::new()
    }
}
