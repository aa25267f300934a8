//! The letter's strokes: dots, ghost and filled visuals, the hand prompt and
//! the end-of-letter sequence.

use glam::Vec2;
use trace_engine::{
    AudioSource, ConfettiEmitter, Easing, EmitterId, EngineContext, Entity, EntityId, RenderLayer,
    SoundId, SpriteComponent, Tween, TweenState,
};

use crate::assets::{self, Assets};
use crate::celebration::celebrate;
use crate::dot::Dot;
use crate::hand_prompt::HandPrompt;
use crate::layout::{self, UNIT};
use crate::settings::TraceSettings;

/// Strokes of the letter A in design units, in tracing order.
pub const LETTER_A: [&[[f32; 2]]; 3] = [
    &[[-1.87, -2.15], [-1.52, -1.14], [-1.17, -0.05], [-0.86, 0.98], [-0.39, 1.95]],
    &[[0.35, 1.95], [0.56, 0.98], [0.99, -0.05], [1.28, -1.14], [1.73, -2.15]],
    &[[-0.84, -1.15], [-0.06, -1.15], [0.84, -1.15]],
];

/// `LETTER_A` in world coordinates.
pub fn letter_a() -> Vec<Vec<Vec2>> {
    LETTER_A
        .iter()
        .map(|seg| seg.iter().map(|&[x, y]| layout::to_world(Vec2::new(x, y))).collect())
        .collect()
}

const STROKE_THICKNESS: f32 = 40.0;
const GOOD_JOB_SIZE: f32 = 40.0;
const CONFETTI_SPAWN_Y: f32 = -20.0;

pub struct SegmentManager {
    segments: Vec<Vec<Vec2>>,
    /// Segments finished so far; the one being traced while below the count.
    current: usize,
    dots: Vec<Dot>,
    hand: Option<HandPrompt>,
    empty_visuals: Vec<Option<EntityId>>,
    filled_visuals: Vec<Option<EntityId>>,
    good_job: Option<EntityId>,
    confetti: Option<EmitterId>,
    tweens: TweenState<()>,
    dot_sprite: Option<SpriteComponent>,
    dot_highlighted_sprite: Option<SpriteComponent>,
    hand_sprite: Option<SpriteComponent>,
    sfx: AudioSource,
    letter_complete_clip: Option<SoundId>,
    cheer_clip: Option<SoundId>,
    hand_speed: f32,
    hand_arrive_epsilon: f32,
    completed: bool,
}

impl SegmentManager {
    /// Build the letter A scene pieces and the dots of the first segment.
    pub fn start(ctx: &mut EngineContext, assets: &Assets, settings: &TraceSettings) -> Self {
        Self::with_segments(ctx, letter_a(), assets, settings)
    }

    /// Same as `start` with arbitrary world-space segments.
    pub fn with_segments(
        ctx: &mut EngineContext,
        segments: Vec<Vec<Vec2>>,
        assets: &Assets,
        settings: &TraceSettings,
    ) -> Self {
        let mut empty_visuals = Vec::with_capacity(segments.len());
        let mut filled_visuals = Vec::with_capacity(segments.len());
        for (i, points) in segments.iter().enumerate() {
            let empty = spawn_stroke(ctx, points, assets.sprite(&assets::segment_empty_sprite(i)), RenderLayer::Background);
            let filled = spawn_stroke(ctx, points, assets.sprite(&assets::segment_filled_sprite(i)), RenderLayer::Strokes);
            if let Some(id) = empty {
                ctx.scene.set_visible(id, true);
            }
            if let Some(id) = filled {
                ctx.scene.set_visible(id, false);
            }
            empty_visuals.push(empty);
            filled_visuals.push(filled);
        }

        let good_job = assets.sprite(assets::SPRITE_GOOD_JOB).map(|sprite| {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("good_job")
                    .with_pos(layout::center())
                    .with_size(GOOD_JOB_SIZE)
                    .with_sprite(sprite)
                    .with_layer(RenderLayer::Ui)
                    .with_visible(false),
            );
            id
        });

        let world = ctx.world_size;
        let confetti = Some(ctx.effects.add_emitter(ConfettiEmitter::new((0.0, world.x), CONFETTI_SPAWN_Y)));

        let mut manager = Self {
            segments,
            current: 0,
            dots: Vec::new(),
            hand: None,
            empty_visuals,
            filled_visuals,
            good_job,
            confetti,
            tweens: TweenState::new(),
            dot_sprite: assets.sprite(assets::SPRITE_DOT),
            dot_highlighted_sprite: assets.sprite(assets::SPRITE_DOT_HIGHLIGHTED),
            hand_sprite: assets.sprite(assets::SPRITE_HAND),
            sfx: AudioSource::new(assets::SFX_CHANNEL),
            letter_complete_clip: assets.sound(assets::SOUND_LETTER_COMPLETE),
            cheer_clip: assets.sound(assets::SOUND_CHEER),
            hand_speed: settings.hand_speed * UNIT,
            hand_arrive_epsilon: settings.hand_arrive_epsilon * UNIT,
            completed: false,
        };
        manager.spawn_segment_dots(ctx, 0);
        manager
    }

    /// Replace the dots and hand with those of segment `index`. Out of range
    /// only clears.
    pub fn spawn_segment_dots(&mut self, ctx: &mut EngineContext, index: usize) {
        self.clear_dots(ctx);
        let Some(points) = self.segments.get(index) else {
            return;
        };

        self.dots = points
            .iter()
            .map(|&p| Dot::spawn(ctx, p, self.dot_sprite, self.dot_highlighted_sprite))
            .collect();

        if let Some(&first) = points.first() {
            let mut hand = HandPrompt::spawn(ctx, first, self.hand_sprite, self.hand_speed, self.hand_arrive_epsilon);
            hand.start_moving(points.clone());
            self.hand = Some(hand);
        }
    }

    /// Finish the current segment: swap its ghost for the filled stroke and
    /// move on. Returns true only for the call that finishes the letter.
    pub fn segment_complete(&mut self, ctx: &mut EngineContext, settings: &TraceSettings) -> bool {
        if self.completed {
            return false;
        }

        if let Some(&Some(empty)) = self.empty_visuals.get(self.current) {
            ctx.scene.set_visible(empty, false);
        }
        if let Some(&Some(filled)) = self.filled_visuals.get(self.current) {
            ctx.scene.set_visible(filled, true);
            self.tweens.add(
                filled,
                Tween::scale_uniform(0.0, settings.filled_pop_scale, settings.filled_pop_duration, Easing::Linear),
                &mut ctx.scene,
            );
        }

        self.current = (self.current + 1).min(self.segments.len());
        if self.current < self.segments.len() {
            self.spawn_segment_dots(ctx, self.current);
            return false;
        }

        log::info!("All segments done!");
        self.completed = true;
        self.clear_dots(ctx);
        celebrate(ctx, self.confetti, self.good_job, &mut self.tweens, settings);
        for clip in [self.letter_complete_clip, self.cheer_clip].into_iter().flatten() {
            self.sfx.play_one_shot(clip, &mut ctx.audio);
        }
        true
    }

    /// Advance the hand and running pops.
    pub fn tick(&mut self, dt: f32, ctx: &mut EngineContext) {
        if let Some(hand) = self.hand.as_mut() {
            hand.tick(dt, &mut ctx.scene);
        }
        self.tweens.tick(dt, &mut ctx.scene);
        self.tweens.drain_completed().for_each(drop);
    }

    fn clear_dots(&mut self, ctx: &mut EngineContext) {
        for dot in self.dots.drain(..) {
            ctx.scene.despawn(dot.id);
        }
        if let Some(hand) = self.hand.take() {
            ctx.scene.despawn(hand.id);
        }
    }

    /// Highlight dot `index` of the current segment.
    pub fn highlight_dot(&mut self, index: usize, ctx: &mut EngineContext) -> bool {
        match self.dots.get_mut(index) {
            Some(dot) => dot.highlight(&mut ctx.scene),
            None => false,
        }
    }

    /// Dots of the segment being traced, in order.
    pub fn active_dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn current_segment(&self) -> usize {
        self.current
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn hand(&self) -> Option<&HandPrompt> {
        self.hand.as_ref()
    }

    pub fn good_job(&self) -> Option<EntityId> {
        self.good_job
    }

    pub fn confetti(&self) -> Option<EmitterId> {
        self.confetti
    }

    pub fn empty_visual(&self, index: usize) -> Option<EntityId> {
        self.empty_visuals.get(index).copied().flatten()
    }

    pub fn filled_visual(&self, index: usize) -> Option<EntityId> {
        self.filled_visuals.get(index).copied().flatten()
    }
}

/// Straight stroke sprite laid from the first to the last point.
fn spawn_stroke(
    ctx: &mut EngineContext,
    points: &[Vec2],
    sprite: Option<SpriteComponent>,
    layer: RenderLayer,
) -> Option<EntityId> {
    let sprite = sprite?;
    let (&first, &last) = (points.first()?, points.last()?);
    let along = last - first;
    let id = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag("stroke")
            .with_pos((first + last) * 0.5)
            .with_size(along.length().max(STROKE_THICKNESS))
            .with_sprite(sprite)
            .with_layer(layer),
    );
    if let Some(e) = ctx.scene.get_mut(id) {
        e.rotation = along.y.atan2(along.x);
    }
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::test_support::full_assets;
    use trace_engine::AudioCommand;

    fn start_full() -> (EngineContext, SegmentManager, TraceSettings) {
        let mut ctx = EngineContext::new();
        let settings = TraceSettings::default();
        let manager = SegmentManager::start(&mut ctx, &full_assets(), &settings);
        (ctx, manager, settings)
    }

    #[test]
    fn letter_a_maps_into_the_world() {
        let segs = letter_a();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs.iter().map(Vec::len).collect::<Vec<_>>(), vec![5, 5, 3]);
        assert!((segs[0][0] - Vec2::new(213.0, 515.0)).length() < 1e-3);
        // apex strokes start at the bottom and end near the top
        assert!(segs[0][4].y < segs[0][0].y);
    }

    #[test]
    fn start_shows_ghosts_and_first_dots() {
        let (ctx, m, _) = start_full();
        for i in 0..3 {
            assert!(ctx.scene.is_visible(m.empty_visual(i).unwrap()));
            assert!(!ctx.scene.is_visible(m.filled_visual(i).unwrap()));
        }
        assert!(!ctx.scene.is_visible(m.good_job().unwrap()));
        assert!(!ctx.effects.emitter(m.confetti().unwrap()).unwrap().is_playing());

        assert_eq!(m.active_dots().len(), 5);
        assert_eq!(m.current_segment(), 0);
        let hand = m.hand().unwrap();
        assert_eq!(hand.pos(), m.active_dots()[0].pos);
    }

    #[test]
    fn missing_sprites_leave_visuals_out() {
        let mut ctx = EngineContext::new();
        let m = SegmentManager::start(&mut ctx, &Assets::new(), &TraceSettings::default());
        assert!(m.empty_visual(0).is_none());
        assert!(m.filled_visual(0).is_none());
        assert!(m.good_job().is_none());
        assert_eq!(m.active_dots().len(), 5);
        assert!(m.hand().is_some());
    }

    #[test]
    fn completing_a_segment_pops_the_filled_stroke() {
        let (mut ctx, mut m, settings) = start_full();
        let first_dot = m.active_dots()[0].id;
        assert!(!m.segment_complete(&mut ctx, &settings));

        assert!(!ctx.scene.is_visible(m.empty_visual(0).unwrap()));
        let filled = m.filled_visual(0).unwrap();
        assert!(ctx.scene.is_visible(filled));
        assert_eq!(ctx.scene.get(filled).unwrap().scale, Vec2::ZERO);

        for _ in 0..30 {
            m.tick(1.0 / 60.0, &mut ctx);
        }
        assert!((ctx.scene.get(filled).unwrap().scale.x - 1.5).abs() < 1e-4);

        assert_eq!(m.current_segment(), 1);
        assert_eq!(m.active_dots().len(), 5);
        assert!(ctx.scene.get(first_dot).is_none());
    }

    #[test]
    fn last_segment_celebrates_once() {
        let (mut ctx, mut m, settings) = start_full();
        assert!(!m.segment_complete(&mut ctx, &settings));
        assert!(!m.segment_complete(&mut ctx, &settings));
        ctx.audio.clear();

        assert!(m.segment_complete(&mut ctx, &settings));
        assert!(m.is_complete());
        assert!(m.active_dots().is_empty());
        assert!(m.hand().is_none());
        assert!(ctx.scene.is_visible(m.good_job().unwrap()));
        assert!(ctx.effects.emitter(m.confetti().unwrap()).unwrap().is_playing());

        let ops: Vec<f32> = ctx.audio.iter().map(|c| c.pack()[0]).collect();
        assert_eq!(ops, vec![AudioCommand::OP_ONE_SHOT, AudioCommand::OP_ONE_SHOT]);

        ctx.audio.clear();
        assert!(!m.segment_complete(&mut ctx, &settings));
        assert!(ctx.audio.is_empty());
        assert_eq!(m.current_segment(), 3);
    }

    #[test]
    fn out_of_range_spawn_only_clears() {
        let (mut ctx, mut m, _) = start_full();
        let before = ctx.scene.len();
        m.spawn_segment_dots(&mut ctx, 7);
        assert!(m.active_dots().is_empty());
        assert!(m.hand().is_none());
        assert_eq!(ctx.scene.len(), before - 6);
    }

    #[test]
    fn highlight_dot_is_bounded() {
        let (mut ctx, mut m, _) = start_full();
        assert!(m.highlight_dot(0, &mut ctx));
        assert!(!m.highlight_dot(0, &mut ctx));
        assert!(!m.highlight_dot(9, &mut ctx));
    }
}
