//! Audio channels mirrored on the Rust side.
//!
//! The host owns the real Web Audio nodes. Rust keeps a small `AudioSource`
//! per channel (clip, pitch, loop flag) and records `AudioCommand`s that the
//! runner packs into the shared buffer every frame.

use crate::api::types::{ChannelId, SoundId};

/// A single instruction for the host sound manager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCommand {
    /// (Re)start the channel's assigned clip.
    Play { channel: ChannelId, clip: SoundId, pitch: f32, looping: bool },
    /// Fire-and-forget playback layered on top of whatever the channel plays.
    PlayOneShot { channel: ChannelId, clip: SoundId, pitch: f32 },
    /// Stop the channel's clip.
    Stop { channel: ChannelId },
}

impl AudioCommand {
    /// Floats per packed command: op, channel, clip, pitch.
    pub const FLOATS: usize = 4;

    pub const OP_PLAY: f32 = 1.0;
    pub const OP_PLAY_LOOPED: f32 = 2.0;
    pub const OP_ONE_SHOT: f32 = 3.0;
    pub const OP_STOP: f32 = 4.0;

    /// Pack into the wire format read by TypeScript.
    pub fn pack(&self) -> [f32; Self::FLOATS] {
        match *self {
            AudioCommand::Play { channel, clip, pitch, looping } => {
                let op = if looping { Self::OP_PLAY_LOOPED } else { Self::OP_PLAY };
                [op, channel.0 as f32, clip.0 as f32, pitch]
            }
            AudioCommand::PlayOneShot { channel, clip, pitch } => {
                [Self::OP_ONE_SHOT, channel.0 as f32, clip.0 as f32, pitch]
            }
            AudioCommand::Stop { channel } => [Self::OP_STOP, channel.0 as f32, 0.0, 0.0],
        }
    }
}

/// Per-frame list of audio commands, cleared by the runner before each tick.
#[derive(Debug, Default)]
pub struct AudioQueue {
    commands: Vec<AudioCommand>,
}

impl AudioQueue {
    pub fn new() -> Self {
        Self { commands: Vec::with_capacity(16) }
    }

    pub fn push(&mut self, command: AudioCommand) {
        self.commands.push(command);
    }

    pub fn iter(&self) -> impl Iterator<Item = &AudioCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Append packed commands to a flat float buffer, at most `max` of them.
    pub fn pack_into(&self, out: &mut Vec<f32>, max: usize) {
        for command in self.commands.iter().take(max) {
            out.extend_from_slice(&command.pack());
        }
    }
}

/// Rust-side view of one host audio channel.
///
/// `playing` means a `Play` was issued and not stopped since; the host does not
/// report clip ends, so only looping channels keep it meaningful over time.
#[derive(Debug, Clone)]
pub struct AudioSource {
    pub channel: ChannelId,
    clip: Option<SoundId>,
    pitch: f32,
    looping: bool,
    playing: bool,
}

impl AudioSource {
    pub fn new(channel: ChannelId) -> Self {
        Self {
            channel,
            clip: None,
            pitch: 1.0,
            looping: false,
            playing: false,
        }
    }

    pub fn with_clip(mut self, clip: Option<SoundId>) -> Self {
        self.clip = clip;
        self
    }

    pub fn clip(&self) -> Option<SoundId> {
        self.clip
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn set_clip(&mut self, clip: Option<SoundId>) {
        self.clip = clip;
    }

    /// Pitch applies to the next `play`.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Play the assigned clip. Without a clip this does nothing and returns false.
    pub fn play(&mut self, audio: &mut AudioQueue) -> bool {
        let Some(clip) = self.clip else {
            return false;
        };
        audio.push(AudioCommand::Play {
            channel: self.channel,
            clip,
            pitch: self.pitch,
            looping: self.looping,
        });
        self.playing = true;
        true
    }

    /// Layer a clip on this channel without touching its assigned clip.
    pub fn play_one_shot(&mut self, clip: SoundId, audio: &mut AudioQueue) {
        audio.push(AudioCommand::PlayOneShot {
            channel: self.channel,
            clip,
            pitch: self.pitch,
        });
    }

    pub fn stop(&mut self, audio: &mut AudioQueue) {
        if self.playing {
            audio.push(AudioCommand::Stop { channel: self.channel });
            self.playing = false;
        }
    }
}
