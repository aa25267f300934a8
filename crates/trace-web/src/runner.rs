use trace_engine::{
    Game, GameConfig, GameEvent, EngineContext, RenderContext, SceneRequest,
    InputEvent, InputQueue, RenderBuffer, FixedTimestep, ProtocolLayout, FrameCounts,
    AssetManifest,
};
use trace_engine::bridge::protocol::HEADER_FLOATS;
use trace_engine::systems::render::build_render_buffer;

/// Generic game runner that wires up the engine loop.
///
/// wasm-bindgen cannot export generic structs, so each game keeps one runner in
/// a `thread_local!` (see `export_game!`) and exports free functions around it.
/// Nothing in here touches wasm APIs, which lets games drive it in native tests.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    frame: u32,
    /// Packed audio commands for SharedArrayBuffer reads.
    audio_buffer: Vec<f32>,
    header: [f32; HEADER_FLOATS],
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        Self {
            ctx: EngineContext::from_config(&config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            timestep: FixedTimestep::new(config.fixed_dt),
            audio_buffer: Vec::with_capacity(config.max_audio_commands * trace_engine::AudioCommand::FLOATS),
            header: [0.0; HEADER_FLOATS],
            game,
            layout,
            config,
            initialized: false,
            frame: 0,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.apply_scene_request();
        self.initialized = true;
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Parse and forward the asset manifest. Malformed JSON is logged and ignored.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                log::info!(
                    "manifest: {} sprites, {} sounds",
                    manifest.sprites.len(),
                    manifest.sounds.len()
                );
                self.game.load_manifest(&manifest);
            }
            Err(err) => log::warn!("ignoring malformed asset manifest: {err}"),
        }
    }

    /// Forward game tunables. Malformed JSON is logged and the game keeps its settings.
    pub fn load_settings(&mut self, json: &str) {
        if let Err(err) = self.game.load_settings(json) {
            log::warn!("ignoring malformed settings: {err}");
        }
    }

    /// Run one host frame: fixed updates, effects, then rebuild all output buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Audio recorded since the last pack (including during init) is kept.
        self.ctx.events.clear();

        let steps = self.timestep.accumulate(dt);
        if steps > 0 {
            // Events are delivered to the first step only; later catch-up steps
            // see an empty queue so nothing is handled twice.
            let input = std::mem::take(&mut self.input);
            let empty = InputQueue::new();
            for step in 0..steps {
                let step_input = if step == 0 { &input } else { &empty };
                self.ctx.pointer.apply(step_input);
                self.game.update(&mut self.ctx, step_input);
                self.apply_scene_request();
                self.ctx.effects.tick(self.timestep.dt());
            }
        }

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        if self.render_buffer.instances.len() > self.layout.max_instances {
            log::warn!("{} sprites exceed capacity {}", self.render_buffer.instances.len(), self.layout.max_instances);
            self.render_buffer.instances.truncate(self.layout.max_instances);
        }
        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
            };
            self.game.render(&mut render_ctx);
        }

        self.ctx.effects.rebuild_effects_buffer(self.layout.max_effects_vertices);

        self.audio_buffer.clear();
        self.ctx.audio.pack_into(&mut self.audio_buffer, self.layout.max_audio_commands);
        self.ctx.audio.clear();

        if self.ctx.events.len() > self.layout.max_events {
            log::warn!("dropping {} game events", self.ctx.events.len() - self.layout.max_events);
            self.ctx.events.truncate(self.layout.max_events);
        }

        self.frame = self.frame.wrapping_add(1);
        let counts = FrameCounts {
            instances: self.render_buffer.instance_count(),
            atlas_split: self.render_buffer.atlas_split.min(self.render_buffer.instance_count()),
            effects_vertices: self.ctx.effects.effects_vertex_count() as u32,
            audio_commands: self.audio_commands_len(),
            events: self.ctx.events.len() as u32,
        };
        self.header = self.layout.header(self.frame, (self.config.world_width, self.config.world_height), &counts);
    }

    fn apply_scene_request(&mut self) {
        match self.ctx.take_scene_request() {
            Some(SceneRequest::Load(name)) => {
                log::info!("loading scene '{name}'");
                self.ctx.reset_scene();
                self.game.load_scene(&mut self.ctx, &name);
            }
            Some(SceneRequest::Quit) => {
                log::info!("quit requested");
                self.ctx.emit_event(GameEvent::new(GameEvent::QUIT));
            }
            None => {}
        }
    }

    // ---- Native access (tests, tooling) ----

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn ctx(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut EngineContext {
        &mut self.ctx
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn audio_buffer(&self) -> &[f32] {
        &self.audio_buffer
    }

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn atlas_split(&self) -> u32 {
        self.render_buffer.atlas_split
    }

    pub fn effects_ptr(&self) -> *const f32 {
        self.ctx.effects.effects_buffer_ptr()
    }

    pub fn effects_vertex_count(&self) -> u32 {
        self.ctx.effects.effects_vertex_count() as u32
    }

    pub fn audio_commands_ptr(&self) -> *const f32 {
        self.audio_buffer.as_ptr()
    }

    pub fn audio_commands_len(&self) -> u32 {
        (self.audio_buffer.len() / trace_engine::AudioCommand::FLOATS) as u32
    }

    /// `GameEvent` is `repr(C)` with four f32 fields, so the slice reads as flat floats.
    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_effects_vertices(&self) -> u32 {
        self.layout.max_effects_vertices as u32
    }

    pub fn max_audio_commands(&self) -> u32 {
        self.layout.max_audio_commands as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
