pub mod api;
pub mod assets;
pub mod audio;
pub mod bridge;
pub mod components;
pub mod core;
pub mod extensions;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{EntityId, SoundId, ChannelId, GameEvent, SceneRequest};
pub use assets::manifest::AssetManifest;
pub use assets::registry::{SpriteRegistry, SoundRegistry};
pub use audio::{AudioCommand, AudioQueue, AudioSource};
pub use bridge::protocol::{ProtocolLayout, FrameCounts};
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::sprite::{SpriteComponent, AtlasId, BlendMode};
pub use crate::core::scene::Scene;
pub use crate::core::time::FixedTimestep;
pub use input::pointer::PointerState;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use systems::effects::{
    EffectsState, EmitterId, ConfettiEmitter, BurstStyle, Particle, TrailLine, RibbonStyle, Rgba,
};

pub use extensions::{
    Easing, lerp, lerp_vec2, ease, ease_vec2, move_towards,
    TimerState, Tween, TweenId, TweenLoop, TweenProperty, TweenState,
};
