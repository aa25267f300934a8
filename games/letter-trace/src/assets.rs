//! Named sprites, sounds and audio channels used by the game.
//!
//! Everything is optional: a name missing from the manifest simply leaves the
//! matching visual or sound out.

use trace_engine::{AssetManifest, ChannelId, SoundId, SoundRegistry, SpriteComponent, SpriteRegistry};

pub const SPRITE_BACKGROUND: &str = "background";
pub const SPRITE_TITLE: &str = "title";
pub const SPRITE_PLAY: &str = "play_button";
pub const SPRITE_QUIT: &str = "quit_button";
pub const SPRITE_DOT: &str = "dot";
pub const SPRITE_DOT_HIGHLIGHTED: &str = "dot_highlighted";
pub const SPRITE_HAND: &str = "hand";
pub const SPRITE_GOOD_JOB: &str = "good_job";

pub const SOUND_MUSIC: &str = "music";
pub const SOUND_CLICK: &str = "click";
pub const SOUND_DOT_HIT: &str = "dot_hit";
pub const SOUND_SEGMENT_COMPLETE: &str = "segment_complete";
pub const SOUND_LETTER_COMPLETE: &str = "letter_complete";
pub const SOUND_CHEER: &str = "cheer";

pub const MUSIC_CHANNEL: ChannelId = ChannelId(0);
pub const DOT_HIT_CHANNEL: ChannelId = ChannelId(1);
pub const SFX_CHANNEL: ChannelId = ChannelId(2);

/// Ghost outline of segment `i`.
pub fn segment_empty_sprite(i: usize) -> String {
    format!("segment_empty_{i}")
}

/// Filled stroke of segment `i`.
pub fn segment_filled_sprite(i: usize) -> String {
    format!("segment_filled_{i}")
}

#[derive(Debug, Default)]
pub struct Assets {
    sprites: SpriteRegistry,
    sounds: SoundRegistry,
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        Self {
            sprites: SpriteRegistry::from_manifest(manifest),
            sounds: SoundRegistry::from_manifest(manifest),
        }
    }

    pub fn sprite(&self, name: &str) -> Option<SpriteComponent> {
        self.sprites.get(name)
    }

    pub fn sound(&self, name: &str) -> Option<SoundId> {
        self.sounds.get(name)
    }
}
