// extensions/mod.rs
//
// Time-driven helpers that sit beside the scene rather than inside it.
// Screens own their own TweenState/TimerState and tick them from `update`.

pub mod easing;
pub mod timer;
pub mod tween;

pub use easing::{Easing, lerp, lerp_vec2, ease, ease_vec2, move_towards};
pub use timer::TimerState;
pub use tween::{Tween, TweenId, TweenLoop, TweenProperty, TweenState};
