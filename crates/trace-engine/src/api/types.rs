use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Identifies an audio clip known to the host's sound manager.
/// The value comes from the asset manifest (`event_id`) or the sound's index in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SoundId(pub u32);

/// Identifies a host audio channel (one Web Audio source node per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ChannelId(pub u32);

/// A game event communicated from Rust to TypeScript via SharedArrayBuffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    /// Kind reserved by the engine: the game asked to be closed.
    pub const QUIT: f32 = 255.0;

    pub fn new(kind: f32) -> Self {
        Self { kind, ..Default::default() }
    }
}

/// A request to leave the current scene, raised by game code during `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneRequest {
    /// Tear down the current scene and build the named one.
    Load(String),
    /// Ask the host to close the game.
    Quit,
}
