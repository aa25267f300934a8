/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values f32):
/// ```text
/// [Header: 16 floats]
/// [Instances: max_instances × 8 floats]
/// [Effects: max_effects_vertices × 6 floats]
/// [Audio: max_audio_commands × 4 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header once; the host derives offsets from them.

use crate::api::game::GameConfig;
use crate::audio::AudioCommand;
use crate::api::types::GameEvent;
use crate::renderer::instance::RenderInstance;
use crate::systems::effects::VERTEX_FLOATS;

pub const HEADER_FLOATS: usize = 16;

pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_ATLAS_SPLIT: usize = 4;
pub const HEADER_MAX_EFFECTS_VERTICES: usize = 5;
pub const HEADER_EFFECTS_VERTEX_COUNT: usize = 6;
pub const HEADER_WORLD_WIDTH: usize = 7;
pub const HEADER_WORLD_HEIGHT: usize = 8;
pub const HEADER_MAX_AUDIO: usize = 9;
pub const HEADER_AUDIO_COUNT: usize = 10;
pub const HEADER_MAX_EVENTS: usize = 11;
pub const HEADER_EVENT_COUNT: usize = 12;
pub const HEADER_PROTOCOL_VERSION: usize = 13;

/// Bumped whenever a section's stride changes.
pub const PROTOCOL_VERSION: f32 = 2.0;

/// Per-frame counts written into the header next to the capacities.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameCounts {
    pub instances: u32,
    pub atlas_split: u32,
    pub effects_vertices: u32,
    pub audio_commands: u32,
    pub events: u32,
}

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_effects_vertices: usize,
    pub max_audio_commands: usize,
    pub max_events: usize,

    pub instance_data_offset: usize,
    pub effects_data_offset: usize,
    pub audio_data_offset: usize,
    pub event_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(
        max_instances: usize,
        max_effects_vertices: usize,
        max_audio_commands: usize,
        max_events: usize,
    ) -> Self {
        let instance_data_offset = HEADER_FLOATS;
        let effects_data_offset = instance_data_offset + max_instances * RenderInstance::FLOATS;
        let audio_data_offset = effects_data_offset + max_effects_vertices * VERTEX_FLOATS;
        let event_data_offset = audio_data_offset + max_audio_commands * AudioCommand::FLOATS;
        let buffer_total_floats = event_data_offset + max_events * GameEvent::FLOATS;

        Self {
            max_instances,
            max_effects_vertices,
            max_audio_commands,
            max_events,
            instance_data_offset,
            effects_data_offset,
            audio_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_effects_vertices,
            config.max_audio_commands,
            config.max_events,
        )
    }
}

impl ProtocolLayout {
    /// Header block for one frame. The lock slot is left at 0 for the host.
    pub fn header(&self, frame: u32, world: (f32, f32), counts: &FrameCounts) -> [f32; HEADER_FLOATS] {
        let mut h = [0.0; HEADER_FLOATS];
        h[HEADER_LOCK] = 0.0;
        h[HEADER_FRAME_COUNTER] = frame as f32;
        h[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        h[HEADER_INSTANCE_COUNT] = counts.instances as f32;
        h[HEADER_ATLAS_SPLIT] = counts.atlas_split as f32;
        h[HEADER_MAX_EFFECTS_VERTICES] = self.max_effects_vertices as f32;
        h[HEADER_EFFECTS_VERTEX_COUNT] = counts.effects_vertices as f32;
        h[HEADER_WORLD_WIDTH] = world.0;
        h[HEADER_WORLD_HEIGHT] = world.1;
        h[HEADER_MAX_AUDIO] = self.max_audio_commands as f32;
        h[HEADER_AUDIO_COUNT] = counts.audio_commands as f32;
        h[HEADER_MAX_EVENTS] = self.max_events as f32;
        h[HEADER_EVENT_COUNT] = counts.events as f32;
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h
    }
}
