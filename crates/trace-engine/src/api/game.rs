use crate::api::types::{EntityId, GameEvent, SceneRequest};
use crate::assets::manifest::AssetManifest;
use crate::audio::AudioQueue;
use crate::core::scene::Scene;
use crate::input::pointer::PointerState;
use crate::input::queue::InputQueue;
use crate::renderer::instance::RenderBuffer;
use crate::systems::effects::EffectsState;

/// Engine configuration, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Maximum number of sprite instances (default: 256).
    pub max_instances: usize,
    /// Maximum number of effects vertices (default: 16384).
    pub max_effects_vertices: usize,
    /// Maximum number of audio commands per frame (default: 32).
    pub max_audio_commands: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Seed for effect randomness.
    pub effects_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_instances: 256,
            max_effects_vertices: 16384,
            max_audio_commands: 32,
            max_events: 32,
            effects_seed: 42,
        }
    }
}

/// The contract every game fulfils.
pub trait Game {
    /// Engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the first scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed step of game logic.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Build the scene named by a `SceneRequest::Load`. The scene, effects and
    /// pointer have already been reset when this is called.
    fn load_scene(&mut self, _ctx: &mut EngineContext, _name: &str) {}

    /// Receive the asset manifest supplied by the host.
    fn load_manifest(&mut self, _manifest: &AssetManifest) {}

    /// Receive game-specific tunables as JSON.
    fn load_settings(&mut self, _json: &str) -> Result<(), serde_json::Error> {
        Ok(())
    }

    /// Optional read-only pass for extra render commands.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable engine state handed to `Game::init` and `Game::update`.
pub struct EngineContext {
    pub scene: Scene,
    pub effects: EffectsState,
    pub audio: AudioQueue,
    pub events: Vec<GameEvent>,
    /// Polled pointer, refreshed from the input queue before every update.
    pub pointer: PointerState,
    /// World size from the game's config.
    pub world_size: glam::Vec2,
    next_id: u32,
    scene_request: Option<SceneRequest>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            effects: EffectsState::with_capacity(config.effects_seed, config.max_effects_vertices),
            audio: AudioQueue::new(),
            events: Vec::new(),
            pointer: PointerState::new(),
            world_size: glam::Vec2::new(config.world_width, config.world_height),
            next_id: 1,
            scene_request: None,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Ask for a scene change after the current update. A later request in the
    /// same step replaces an earlier one.
    pub fn request_scene(&mut self, request: SceneRequest) {
        self.scene_request = Some(request);
    }

    pub fn take_scene_request(&mut self) -> Option<SceneRequest> {
        self.scene_request.take()
    }

    /// Drop everything that belongs to the current scene.
    pub fn reset_scene(&mut self) {
        self.scene.clear();
        self.effects.clear();
        self.pointer.release();
    }

    /// Clear per-frame transient data (audio commands, events).
    pub fn clear_frame_data(&mut self) {
        self.audio.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for optional custom render commands.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
}
