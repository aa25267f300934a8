//! Title screen with Play and Quit buttons.

use glam::Vec2;
use trace_engine::{
    AudioSource, EngineContext, Entity, EntityId, InputQueue, RenderLayer, SceneRequest, SoundId,
    TimerState, Tween, TweenLoop, TweenState, Easing,
};

use crate::assets::{self, Assets};
use crate::layout;
use crate::settings::TraceSettings;

// Custom event kinds (host → Rust)
pub const CUSTOM_PLAY: u32 = 1;
pub const CUSTOM_QUIT: u32 = 2;

/// Name of the tracing scene loaded by Play.
pub const GAME_SCENE: &str = "Game";

const BUTTON_SIZE: f32 = 160.0;
const TITLE_SIZE: f32 = 320.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuCue {
    /// The button pop finished; wait, then act.
    Popped(MenuAction),
    Act(MenuAction),
}

#[derive(Debug, Clone, Copy)]
struct Button {
    id: EntityId,
    action: MenuAction,
    rest_scale: Vec2,
    has_visual: bool,
}

pub struct MainMenu {
    buttons: Vec<Button>,
    click: AudioSource,
    click_clip: Option<SoundId>,
    tweens: TweenState<MenuCue>,
    timers: TimerState<MenuCue>,
}

impl MainMenu {
    pub fn build(ctx: &mut EngineContext, assets: &Assets) -> Self {
        if let Some(title) = assets.sprite(assets::SPRITE_TITLE) {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("title")
                    .with_pos(Vec2::new(layout::WORLD_W * 0.5, 150.0))
                    .with_size(TITLE_SIZE)
                    .with_sprite(title)
                    .with_layer(RenderLayer::Ui),
            );
        }

        let buttons = [
            (MenuAction::Play, assets::SPRITE_PLAY, 330.0),
            (MenuAction::Quit, assets::SPRITE_QUIT, 470.0),
        ]
        .into_iter()
        .map(|(action, sprite_name, y)| {
            let sprite = assets.sprite(sprite_name);
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(sprite_name)
                    .with_pos(Vec2::new(layout::WORLD_W * 0.5, y))
                    .with_size(BUTTON_SIZE)
                    .with_sprite_opt(sprite)
                    .with_layer(RenderLayer::Ui),
            );
            Button { id, action, rest_scale: Vec2::ONE, has_visual: sprite.is_some() }
        })
        .collect();

        Self {
            buttons,
            click: AudioSource::new(assets::SFX_CHANNEL),
            click_clip: assets.sound(assets::SOUND_CLICK),
            tweens: TweenState::new(),
            timers: TimerState::new(),
        }
    }

    pub fn update(&mut self, dt: f32, ctx: &mut EngineContext, input: &InputQueue, settings: &TraceSettings) {
        for kind in input.custom_kinds() {
            match kind {
                CUSTOM_PLAY => self.click(MenuAction::Play, ctx, settings),
                CUSTOM_QUIT => self.click(MenuAction::Quit, ctx, settings),
                _ => {}
            }
        }

        if let Some(pos) = ctx.pointer.pressed_position() {
            let hit = self
                .buttons
                .iter()
                .find(|b| ctx.scene.get(b.id).is_some_and(|e| e.contains(pos)))
                .map(|b| b.action);
            if let Some(action) = hit {
                self.click(action, ctx, settings);
            }
        }

        self.tweens.tick(dt, &mut ctx.scene);
        let popped: Vec<MenuCue> = self.tweens.drain_completed().collect();
        for cue in popped.into_iter().chain(self.timers.tick(dt)) {
            self.handle_cue(cue, ctx, settings);
        }
    }

    /// Press a button as if it had been tapped.
    pub fn click(&mut self, action: MenuAction, ctx: &mut EngineContext, settings: &TraceSettings) {
        log::info!("menu: {action:?} pressed");
        if let Some(clip) = self.click_clip {
            self.click.play_one_shot(clip, &mut ctx.audio);
        }

        let Some(button) = self.button(action) else {
            return;
        };
        if !button.has_visual {
            self.timers.schedule(settings.menu_action_delay, MenuCue::Act(action));
            return;
        }

        self.stop_all(ctx);
        let rest = button.rest_scale;
        self.tweens.add(
            button.id,
            Tween::scale(rest, rest * settings.menu_pop_scale, settings.menu_pop_duration, Easing::Linear)
                .with_loop(TweenLoop::Yoyo)
                .with_on_complete(MenuCue::Popped(action)),
            &mut ctx.scene,
        );
    }

    fn handle_cue(&mut self, cue: MenuCue, ctx: &mut EngineContext, settings: &TraceSettings) {
        match cue {
            MenuCue::Popped(action) => {
                if let Some(button) = self.button(action) {
                    if let Some(e) = ctx.scene.get_mut(button.id) {
                        e.scale = button.rest_scale;
                    }
                }
                self.timers.schedule(settings.menu_action_delay, MenuCue::Act(action));
            }
            MenuCue::Act(MenuAction::Play) => ctx.request_scene(SceneRequest::Load(GAME_SCENE.to_string())),
            MenuCue::Act(MenuAction::Quit) => ctx.request_scene(SceneRequest::Quit),
        }
    }

    /// Cancel pending pops and actions, putting every button back at rest.
    fn stop_all(&mut self, ctx: &mut EngineContext) {
        self.tweens.clear();
        self.timers.cancel_all();
        for b in &self.buttons {
            if let Some(e) = ctx.scene.get_mut(b.id) {
                e.scale = b.rest_scale;
            }
        }
    }

    fn button(&self, action: MenuAction) -> Option<Button> {
        self.buttons.iter().find(|b| b.action == action).copied()
    }

    pub fn button_id(&self, action: MenuAction) -> Option<EntityId> {
        self.button(action).map(|b| b.id)
    }
}
