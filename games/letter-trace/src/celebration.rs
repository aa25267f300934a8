use trace_engine::{EmitterId, EngineContext, EntityId, Tween, TweenState};

use crate::settings::TraceSettings;

/// End-of-letter celebration: confetti plus the "good job" banner popping in.
///
/// Needs both pieces; with either one missing nothing happens and `false` is
/// returned.
pub fn celebrate<C>(
    ctx: &mut EngineContext,
    confetti: Option<EmitterId>,
    good_job: Option<EntityId>,
    tweens: &mut TweenState<C>,
    settings: &TraceSettings,
) -> bool {
    let (Some(confetti), Some(good_job)) = (confetti, good_job) else {
        return false;
    };
    let Some(emitter) = ctx.effects.emitter_mut(confetti) else {
        return false;
    };
    emitter.play();

    ctx.scene.set_visible(good_job, true);
    tweens.add(
        good_job,
        Tween::scale_uniform(
            0.0,
            settings.good_job_pop_scale,
            settings.good_job_pop_duration,
            settings.good_job_easing,
        ),
        &mut ctx.scene,
    );
    true
}
