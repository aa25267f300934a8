use trace_engine::*;

use crate::assets::{self, Assets};
use crate::layout::{self, WORLD_H, WORLD_W};
use crate::menu::{MainMenu, GAME_SCENE};
use crate::music::BackgroundMusic;
use crate::segments::SegmentManager;
use crate::settings::TraceSettings;
use crate::trace_input::TraceInput;

const FIXED_DT: f32 = 1.0 / 60.0;

pub const MENU_SCENE: &str = "Menu";

// Game event kinds (Rust → host)
pub const EVENT_LETTER_COMPLETE: f32 = 1.0;

// Custom event kinds (host → Rust), besides the menu's
pub const CUSTOM_BACK_TO_MENU: u32 = 3;

struct Tracing {
    segments: SegmentManager,
    input: TraceInput,
}

enum Screen {
    Menu(MainMenu),
    Tracing(Tracing),
}

pub struct LetterTrace {
    settings: TraceSettings,
    assets: Assets,
    music: BackgroundMusic,
    screen: Option<Screen>,
    /// Assets changed after the current screen was built.
    rebuild: bool,
}

impl LetterTrace {
    pub fn new() -> Self {
        Self {
            settings: TraceSettings::default(),
            assets: Assets::new(),
            music: BackgroundMusic::new(),
            screen: None,
            rebuild: false,
        }
    }

    fn build_menu(&self, ctx: &mut EngineContext) -> Screen {
        self.spawn_background(ctx);
        Screen::Menu(MainMenu::build(ctx, &self.assets))
    }

    fn build_tracing(&self, ctx: &mut EngineContext) -> Screen {
        self.spawn_background(ctx);
        ctx.effects.trail = TrailLine::new(self.settings.trail_style());
        Screen::Tracing(Tracing {
            segments: SegmentManager::start(ctx, &self.assets, &self.settings),
            input: TraceInput::new(&self.assets),
        })
    }

    fn spawn_background(&self, ctx: &mut EngineContext) {
        if let Some(sprite) = self.assets.sprite(assets::SPRITE_BACKGROUND) {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("background")
                    .with_pos(layout::center())
                    .with_size(WORLD_W.max(WORLD_H))
                    .with_sprite(sprite)
                    .with_layer(RenderLayer::Background),
            );
        }
    }

    pub fn is_tracing(&self) -> bool {
        matches!(self.screen, Some(Screen::Tracing(_)))
    }

    pub fn is_menu(&self) -> bool {
        matches!(self.screen, Some(Screen::Menu(_)))
    }

    pub fn segments(&self) -> Option<&SegmentManager> {
        match &self.screen {
            Some(Screen::Tracing(t)) => Some(&t.segments),
            _ => None,
        }
    }

    pub fn settings(&self) -> &TraceSettings {
        &self.settings
    }

    pub fn music(&self) -> &BackgroundMusic {
        &self.music
    }
}

impl Default for LetterTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for LetterTrace {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: FIXED_DT,
            world_width: WORLD_W,
            world_height: WORLD_H,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.screen = Some(self.build_menu(ctx));
        self.music.ensure_playing(&mut ctx.audio);
        log::info!("letter-trace: menu ready");
    }

    fn load_manifest(&mut self, manifest: &AssetManifest) {
        self.assets = Assets::from_manifest(manifest);
        self.music.bind(self.assets.sound(assets::SOUND_MUSIC));
        self.rebuild = self.screen.is_some();
    }

    fn load_settings(&mut self, json: &str) -> Result<(), serde_json::Error> {
        self.settings = TraceSettings::from_json(json)?;
        log::info!("settings loaded");
        Ok(())
    }

    fn load_scene(&mut self, ctx: &mut EngineContext, name: &str) {
        let screen = match name {
            GAME_SCENE => self.build_tracing(ctx),
            MENU_SCENE => self.build_menu(ctx),
            other => {
                log::warn!("unknown scene '{other}', showing the menu");
                self.build_menu(ctx)
            }
        };
        self.screen = Some(screen);
        self.music.ensure_playing(&mut ctx.audio);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        if self.rebuild {
            self.rebuild = false;
            let name = if self.is_tracing() { GAME_SCENE } else { MENU_SCENE };
            log::info!("assets changed, rebuilding '{name}'");
            ctx.reset_scene();
            self.load_scene(ctx, name);
        }
        self.music.ensure_playing(&mut ctx.audio);

        let settings = &self.settings;
        match self.screen.as_mut() {
            Some(Screen::Menu(menu)) => menu.update(FIXED_DT, ctx, input, settings),
            Some(Screen::Tracing(tracing)) => {
                if input.custom_kinds().any(|k| k == CUSTOM_BACK_TO_MENU) {
                    ctx.request_scene(SceneRequest::Load(MENU_SCENE.to_string()));
                }
                let done = tracing.input.tick(FIXED_DT, ctx, &mut tracing.segments, settings);
                tracing.segments.tick(FIXED_DT, ctx);
                if done {
                    log::info!("letter complete");
                    ctx.emit_event(GameEvent::new(EVENT_LETTER_COMPLETE));
                }
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use trace_web::GameRunner;

    const DT: f32 = FIXED_DT;

    fn manifest_json() -> String {
        // same bindings as `full_assets`, spelled out for the runner
        let mut sprites = vec![
            "background", "title", "play_button", "quit_button", "dot", "dot_highlighted", "hand", "good_job",
        ]
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
        for i in 0..3 {
            sprites.push(assets::segment_empty_sprite(i));
            sprites.push(assets::segment_filled_sprite(i));
        }
        let sprite_json: Vec<String> = sprites
            .iter()
            .enumerate()
            .map(|(i, n)| format!(r#""{n}": {{ "atlas": 0, "col": {i}, "row": 0 }}"#))
            .collect();
        format!(
            r#"{{ "sprites": {{ {} }}, "sounds": {{
                "music": {{ "path": "music.mp3", "event_id": 1 }},
                "click": {{ "path": "click.mp3", "event_id": 2 }},
                "dot_hit": {{ "path": "dot.mp3", "event_id": 3 }},
                "segment_complete": {{ "path": "seg.mp3", "event_id": 4 }},
                "letter_complete": {{ "path": "letter.mp3", "event_id": 5 }},
                "cheer": {{ "path": "cheer.mp3", "event_id": 6 }}
            }} }}"#,
            sprite_json.join(",")
        )
    }

    fn dot_world(seg: usize, i: usize) -> Vec2 {
        crate::segments::letter_a()[seg][i]
    }

    fn runner() -> GameRunner<LetterTrace> {
        let mut r = GameRunner::new(LetterTrace::new());
        r.init();
        r.load_manifest(&manifest_json());
        r
    }

    /// Tick and count looping music starts and letter-complete events seen.
    fn tick(r: &mut GameRunner<LetterTrace>, frames: usize, music_starts: &mut usize, completions: &mut usize) {
        for _ in 0..frames {
            r.tick(DT);
            *music_starts += r
                .audio_buffer()
                .chunks(AudioCommand::FLOATS)
                .filter(|c| c[0] == AudioCommand::OP_PLAY_LOOPED)
                .count();
            *completions += r.ctx().events.iter().filter(|e| e.kind == EVENT_LETTER_COMPLETE).count();
        }
    }

    fn press(r: &mut GameRunner<LetterTrace>, p: Vec2) {
        r.push_input(InputEvent::PointerDown { x: p.x, y: p.y });
    }

    #[test]
    fn starts_on_the_menu() {
        let r = runner();
        assert!(r.game().is_menu());
        assert!(r.game().segments().is_none());
    }

    #[test]
    fn full_play_through() {
        let mut r = runner();
        let (mut music, mut done) = (0, 0);

        tick(&mut r, 1, &mut music, &mut done);
        assert_eq!(music, 1);
        assert!(r.game().music().is_playing());

        r.push_input(InputEvent::Custom { kind: crate::menu::CUSTOM_PLAY, a: 0.0, b: 0.0, c: 0.0 });
        tick(&mut r, 60, &mut music, &mut done);
        assert!(r.game().is_tracing());
        // music carried over, not restarted
        assert_eq!(music, 1);

        for (seg, len) in [(0, 5), (1, 5), (2, 3)] {
            press(&mut r, dot_world(seg, 0));
            tick(&mut r, 1, &mut music, &mut done);
            for i in 1..len {
                let p = dot_world(seg, i);
                r.push_input(InputEvent::PointerMove { x: p.x, y: p.y });
                tick(&mut r, 1, &mut music, &mut done);
            }
            let last = dot_world(seg, len - 1);
            r.push_input(InputEvent::PointerUp { x: last.x, y: last.y });
            tick(&mut r, 40, &mut music, &mut done);
            assert_eq!(r.game().segments().unwrap().current_segment(), seg + 1);
        }

        assert_eq!(done, 1);
        let segments = r.game().segments().unwrap();
        assert!(segments.is_complete());
        assert!(r.ctx().scene.is_visible(segments.good_job().unwrap()));

        tick(&mut r, 120, &mut music, &mut done);
        assert_eq!(done, 1);
        assert_eq!(music, 1);
    }

    #[test]
    fn out_of_order_tracing_does_not_progress() {
        let mut r = runner();
        r.push_input(InputEvent::Custom { kind: crate::menu::CUSTOM_PLAY, a: 0.0, b: 0.0, c: 0.0 });
        r.tick(DT);
        for _ in 0..60 {
            r.tick(DT);
        }
        assert!(r.game().is_tracing());

        press(&mut r, dot_world(0, 4));
        r.tick(DT);
        let p = dot_world(0, 2);
        r.push_input(InputEvent::PointerMove { x: p.x, y: p.y });
        r.tick(DT);
        for _ in 0..60 {
            r.tick(DT);
        }
        let segments = r.game().segments().unwrap();
        assert_eq!(segments.current_segment(), 0);
        assert!(segments.active_dots().iter().all(|d| !d.is_highlighted()));
    }

    #[test]
    fn quit_reaches_the_host() {
        let mut r = runner();
        r.push_input(InputEvent::Custom { kind: crate::menu::CUSTOM_QUIT, a: 0.0, b: 0.0, c: 0.0 });
        let mut quit = false;
        for _ in 0..90 {
            r.tick(DT);
            quit |= r.ctx().events.iter().any(|e| e.kind == GameEvent::QUIT);
        }
        assert!(quit);
        assert!(r.game().is_menu());
    }

    #[test]
    fn back_to_menu_from_tracing() {
        let mut r = runner();
        r.push_input(InputEvent::Custom { kind: crate::menu::CUSTOM_PLAY, a: 0.0, b: 0.0, c: 0.0 });
        for _ in 0..60 {
            r.tick(DT);
        }
        assert!(r.game().is_tracing());

        r.push_input(InputEvent::Custom { kind: CUSTOM_BACK_TO_MENU, a: 0.0, b: 0.0, c: 0.0 });
        r.tick(DT);
        assert!(r.game().is_menu());
        assert!(r.ctx().effects.trail.is_empty());
    }

    #[test]
    fn late_manifest_rebuilds_with_sprites() {
        let mut r = GameRunner::new(LetterTrace::new());
        r.init();
        r.tick(DT);
        assert_eq!(r.instance_count(), 0);

        r.load_manifest(&manifest_json());
        r.tick(DT);
        // background, title and two buttons
        assert_eq!(r.instance_count(), 4);
    }

    #[test]
    fn bad_settings_keep_defaults() {
        let mut r = runner();
        r.load_settings("{ not json");
        assert_eq!(r.game().settings(), &TraceSettings::default());
        r.load_settings(r#"{ "dot_hit_radius": 0.5 }"#);
        assert_eq!(r.game().settings().dot_hit_radius, 0.5);
    }
}
