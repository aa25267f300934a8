//! Pointer tracing: trail drawing, in-order dot hits and delayed segment
//! completion.

use glam::Vec2;
use trace_engine::{AudioSource, BurstStyle, EngineContext, SoundId, TimerState};

use crate::assets::{self, Assets};
use crate::layout::UNIT;
use crate::segments::SegmentManager;
use crate::settings::TraceSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TraceCue {
    CompleteSegment,
}

pub struct TraceInput {
    /// Positions of the dots being traced, snapshotted from the segment manager.
    dots: Vec<Vec2>,
    next_dot: usize,
    dot_hit: AudioSource,
    sfx: AudioSource,
    segment_complete_clip: Option<SoundId>,
    timers: TimerState<TraceCue>,
    burst: BurstStyle,
}

impl TraceInput {
    pub fn new(assets: &Assets) -> Self {
        Self {
            dots: Vec::new(),
            next_dot: 0,
            dot_hit: AudioSource::new(assets::DOT_HIT_CHANNEL).with_clip(assets.sound(assets::SOUND_DOT_HIT)),
            sfx: AudioSource::new(assets::SFX_CHANNEL),
            segment_complete_clip: assets.sound(assets::SOUND_SEGMENT_COMPLETE),
            timers: TimerState::new(),
            burst: BurstStyle::sparkle(),
        }
    }

    /// One fixed step. Returns true on the step that finishes the letter.
    pub fn tick(
        &mut self,
        dt: f32,
        ctx: &mut EngineContext,
        segments: &mut SegmentManager,
        settings: &TraceSettings,
    ) -> bool {
        let mut letter_done = false;
        for cue in self.timers.tick(dt) {
            match cue {
                TraceCue::CompleteSegment => letter_done |= self.complete_segment(ctx, segments, settings),
            }
        }

        if self.dots.is_empty() {
            self.dots = segments.active_dots().iter().map(|d| d.pos).collect();
            self.next_dot = 0;
            ctx.effects.trail.clear();
        }

        let Some(pos) = ctx.pointer.held_position() else {
            if !ctx.effects.trail.is_empty() {
                ctx.effects.trail.clear();
            }
            return letter_done;
        };

        ctx.effects.trail.push_point(pos, settings.line_min_spacing * UNIT);

        let Some(&target) = self.dots.get(self.next_dot) else {
            return letter_done;
        };
        if pos.distance(target) < settings.dot_hit_radius * UNIT {
            self.hit_dot(target, ctx, segments, settings);
        }
        letter_done
    }

    fn hit_dot(&mut self, at: Vec2, ctx: &mut EngineContext, segments: &mut SegmentManager, settings: &TraceSettings) {
        segments.highlight_dot(self.next_dot, ctx);
        self.next_dot += 1;
        let total = self.dots.len();
        log::debug!("dot {}/{} hit", self.next_dot, total);

        ctx.effects.spawn_burst(at, &self.burst);
        self.dot_hit.set_pitch(settings.dot_hit_pitch(self.next_dot, total));
        self.dot_hit.play(&mut ctx.audio);

        if self.next_dot == total {
            self.timers.schedule(settings.segment_complete_delay, TraceCue::CompleteSegment);
        }
    }

    fn complete_segment(
        &mut self,
        ctx: &mut EngineContext,
        segments: &mut SegmentManager,
        settings: &TraceSettings,
    ) -> bool {
        if let Some(clip) = self.segment_complete_clip {
            self.sfx.play_one_shot(clip, &mut ctx.audio);
        }
        let letter_done = segments.segment_complete(ctx, settings);
        self.dots.clear();
        self.next_dot = 0;
        ctx.effects.trail.clear();
        self.dot_hit.set_pitch(1.0);
        letter_done
    }

    /// Index of the next dot to hit.
    pub fn next_dot(&self) -> usize {
        self.next_dot
    }

    /// A segment-completion is waiting on its delay.
    pub fn is_completing(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn dot_hit_pitch(&self) -> f32 {
        self.dot_hit.pitch()
    }
}
