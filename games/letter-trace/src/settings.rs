//! Gameplay tunables.
//!
//! Distances are in design units (1 unit = `layout::UNIT` world pixels) so the
//! numbers stay readable next to the letter data. The host may override any
//! subset of fields with JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use trace_engine::{lerp, Easing, RibbonStyle, Rgba};

use crate::layout::UNIT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceSettings {
    // === Hand prompt ===
    /// Travel speed along the segment (units per second).
    pub hand_speed: f32,
    /// Distance at which the hand counts as having reached a point (units).
    pub hand_arrive_epsilon: f32,

    // === Tracing ===
    /// How close the pointer must get to the next dot (units).
    pub dot_hit_radius: f32,
    /// Minimum spacing between trail points (units).
    pub line_min_spacing: f32,
    /// Pause between the last dot of a segment and its completion (seconds).
    pub segment_complete_delay: f32,
    /// Dot-hit pitch for the first dot of a segment.
    pub start_pitch: f32,
    /// Dot-hit pitch for the last dot of a segment.
    pub end_pitch: f32,

    // === Pops ===
    pub filled_pop_duration: f32,
    pub filled_pop_scale: f32,
    pub good_job_pop_duration: f32,
    pub good_job_pop_scale: f32,
    pub good_job_easing: Easing,
    pub menu_pop_duration: f32,
    pub menu_pop_scale: f32,
    /// Wait after a menu button pop before acting (seconds).
    pub menu_action_delay: f32,

    // === Trail ===
    /// Trail width at its oldest point (units).
    pub trail_start_width: f32,
    /// Trail width at the pointer (units).
    pub trail_end_width: f32,
    pub trail_start_color: Rgba,
    pub trail_end_color: Rgba,
    pub trail_cap_vertices: u32,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            hand_speed: 3.0,
            hand_arrive_epsilon: 0.05,

            dot_hit_radius: 0.3,
            line_min_spacing: 0.02,
            segment_complete_delay: 0.5,
            start_pitch: 1.0,
            end_pitch: 1.3,

            filled_pop_duration: 0.3,
            filled_pop_scale: 1.5,
            good_job_pop_duration: 0.7,
            good_job_pop_scale: 6.0,
            good_job_easing: Easing::SmoothStep,
            menu_pop_duration: 0.2,
            menu_pop_scale: 1.2,
            menu_action_delay: 0.35,

            trail_start_width: 0.2,
            trail_end_width: 0.1,
            trail_start_color: [1.0, 0.6, 0.8, 0.8],
            trail_end_color: [1.0, 0.9, 0.5, 0.7],
            trail_cap_vertices: 8,
        }
    }
}

impl TraceSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Pitch for the `hit`-th dot (1-based) of a segment with `total` dots.
    pub fn dot_hit_pitch(&self, hit: usize, total: usize) -> f32 {
        let t = if total <= 1 {
            0.0
        } else {
            ((hit as f32 - 1.0) / (total as f32 - 1.0)).clamp(0.0, 1.0)
        };
        lerp(self.start_pitch, self.end_pitch, t)
    }

    /// Trail ribbon in world units.
    pub fn trail_style(&self) -> RibbonStyle {
        RibbonStyle {
            start_width: self.trail_start_width * UNIT,
            end_width: self.trail_end_width * UNIT,
            start_color: self.trail_start_color,
            end_color: self.trail_end_color,
            cap_vertices: self.trail_cap_vertices,
        }
    }
}
