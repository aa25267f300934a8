// extensions/tween.rs
//
// Scale, position and alpha tweens keyed by EntityId. The owner ticks them against the scene and
// drains the cues of tweens that finished, which is how pop animations hand
// control to whatever comes next.

use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::core::scene::Scene;
use super::easing::{Easing, ease_vec2};

/// What happens when a tween reaches its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenLoop {
    /// Stop on the target value and finish.
    #[default]
    Once,
    /// Restart from the beginning forever.
    Loop,
    /// Play forward, then back to the start value, then finish.
    Yoyo,
}

/// Entity property a tween drives. Alpha uses the `x` lane of from/to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenProperty {
    #[default]
    Scale,
    Position,
    /// Sprite alpha; entities without a sprite are left alone.
    Alpha,
}

impl TweenProperty {
    fn read(self, entity: &Entity) -> Vec2 {
        match self {
            TweenProperty::Scale => entity.scale,
            TweenProperty::Position => entity.pos,
            TweenProperty::Alpha => Vec2::splat(entity.sprite.map_or(1.0, |s| s.alpha)),
        }
    }

    fn write(self, entity: &mut Entity, value: Vec2) {
        match self {
            TweenProperty::Scale => entity.scale = value,
            TweenProperty::Position => entity.pos = value,
            TweenProperty::Alpha => {
                if let Some(sprite) = entity.sprite.as_mut() {
                    sprite.alpha = value.x;
                }
            }
        }
    }
}

/// Animates one property of an entity.
#[derive(Debug, Clone)]
pub struct Tween<C> {
    pub property: TweenProperty,
    pub from: Vec2,
    pub to: Vec2,
    /// Seconds for one forward pass.
    pub duration: f32,
    pub elapsed: f32,
    pub easing: Easing,
    pub loop_mode: TweenLoop,
    returning: bool,
    /// Delivered through `drain_completed` when the tween finishes.
    pub on_complete: Option<C>,
}

impl<C> Tween<C> {
    pub fn scale(from: Vec2, to: Vec2, duration: f32, easing: Easing) -> Self {
        Self {
            property: TweenProperty::Scale,
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
            loop_mode: TweenLoop::Once,
            returning: false,
            on_complete: None,
        }
    }

    pub fn scale_uniform(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::scale(Vec2::splat(from), Vec2::splat(to), duration, easing)
    }

    pub fn position(from: Vec2, to: Vec2, duration: f32, easing: Easing) -> Self {
        Self { property: TweenProperty::Position, ..Self::scale(from, to, duration, easing) }
    }

    pub fn alpha(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self { property: TweenProperty::Alpha, ..Self::scale_uniform(from, to, duration, easing) }
    }

    /// Start from the entity's current value instead of `from`.
    pub fn from_current(mut self, entity: &Entity) -> Self {
        self.from = self.property.read(entity);
        self
    }

    pub fn with_loop(mut self, mode: TweenLoop) -> Self {
        self.loop_mode = mode;
        self
    }

    pub fn with_on_complete(mut self, cue: C) -> Self {
        self.on_complete = Some(cue);
        self
    }

    /// Progress through the current pass, [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    fn value(&self) -> Vec2 {
        if self.returning {
            ease_vec2(self.to, self.from, self.progress(), self.easing)
        } else {
            ease_vec2(self.from, self.to, self.progress(), self.easing)
        }
    }

    /// Advance time. Returns the scale to apply and whether the tween finished.
    fn advance(&mut self, dt: f32) -> (Vec2, bool) {
        self.elapsed += dt;
        if self.elapsed < self.duration {
            return (self.value(), false);
        }
        match self.loop_mode {
            TweenLoop::Once => (self.to, true),
            TweenLoop::Loop => {
                self.elapsed = 0.0;
                (self.to, false)
            }
            TweenLoop::Yoyo if !self.returning => {
                self.returning = true;
                self.elapsed = 0.0;
                (self.to, false)
            }
            TweenLoop::Yoyo => (self.from, true),
        }
    }
}

/// Handle to a running tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(pub u32);

/// All running tweens of one owner (a screen, a menu).
#[derive(Debug)]
pub struct TweenState<C> {
    tweens: Vec<(TweenId, EntityId, Tween<C>)>,
    next_id: u32,
    completed: Vec<C>,
}

impl<C> TweenState<C> {
    pub fn new() -> Self {
        Self {
            tweens: Vec::new(),
            next_id: 0,
            completed: Vec::new(),
        }
    }

    /// Start a tween. The property is set to the start value right away.
    pub fn add(&mut self, entity: EntityId, tween: Tween<C>, scene: &mut Scene) -> TweenId {
        if let Some(e) = scene.get_mut(entity) {
            tween.property.write(e, tween.from);
        }
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.push((id, entity, tween));
        id
    }

    pub fn remove(&mut self, id: TweenId) -> bool {
        let before = self.tweens.len();
        self.tweens.retain(|(tid, _, _)| *tid != id);
        self.tweens.len() != before
    }

    /// Drop every tween driving `entity`, leaving its scale where it is.
    pub fn remove_entity(&mut self, entity: EntityId) {
        self.tweens.retain(|(_, e, _)| *e != entity);
    }

    pub fn is_animating(&self, entity: EntityId) -> bool {
        self.tweens.iter().any(|(_, e, _)| *e == entity)
    }

    /// Advance all tweens and write their values into the scene.
    /// Tweens whose entity no longer exists are dropped without a cue.
    pub fn tick(&mut self, dt: f32, scene: &mut Scene) {
        let mut i = 0;
        while i < self.tweens.len() {
            let (_, entity_id, tween) = &mut self.tweens[i];
            let Some(entity) = scene.get_mut(*entity_id) else {
                self.tweens.swap_remove(i);
                continue;
            };
            let (value, finished) = tween.advance(dt);
            tween.property.write(entity, value);
            if finished {
                let (_, _, tween) = self.tweens.remove(i);
                if let Some(cue) = tween.on_complete {
                    self.completed.push(cue);
                }
            } else {
                i += 1;
            }
        }
    }

    /// Cues of tweens that finished since the last drain, in finishing order.
    pub fn drain_completed(&mut self) -> impl Iterator<Item = C> + '_ {
        self.completed.drain(..)
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Stop everything; pending cues are discarded too.
    pub fn clear(&mut self) {
        self.tweens.clear();
        self.completed.clear();
    }
}

impl<C> Default for TweenState<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::SpriteComponent;

    fn scene_with(id: EntityId) -> Scene {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(id));
        scene
    }

    #[test]
    fn once_lands_exactly_on_target() {
        let id = EntityId(1);
        let mut scene = scene_with(id);
        let mut tweens: TweenState<u32> = TweenState::new();
        tweens.add(id, Tween::scale_uniform(0.0, 1.5, 0.3, Easing::Linear).with_on_complete(7), &mut scene);
        assert_eq!(scene.get(id).unwrap().scale, Vec2::ZERO);

        tweens.tick(0.15, &mut scene);
        assert!((scene.get(id).unwrap().scale.x - 0.75).abs() < 1e-4);

        tweens.tick(0.2, &mut scene);
        assert_eq!(scene.get(id).unwrap().scale, Vec2::splat(1.5));
        assert!(tweens.is_empty());
        assert_eq!(tweens.drain_completed().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn yoyo_returns_to_start_then_completes() {
        let id = EntityId(1);
        let mut scene = scene_with(id);
        let mut tweens: TweenState<&str> = TweenState::new();
        tweens.add(
            id,
            Tween::scale_uniform(1.0, 1.2, 0.2, Easing::Linear)
                .with_loop(TweenLoop::Yoyo)
                .with_on_complete("done"),
            &mut scene,
        );

        tweens.tick(0.2, &mut scene);
        assert_eq!(scene.get(id).unwrap().scale, Vec2::splat(1.2));
        assert_eq!(tweens.drain_completed().count(), 0);

        tweens.tick(0.1, &mut scene);
        assert!((scene.get(id).unwrap().scale.x - 1.1).abs() < 1e-4);

        tweens.tick(0.1, &mut scene);
        assert_eq!(scene.get(id).unwrap().scale, Vec2::splat(1.0));
        assert_eq!(tweens.drain_completed().collect::<Vec<_>>(), vec!["done"]);
    }

    #[test]
    fn loop_never_completes() {
        let id = EntityId(1);
        let mut scene = scene_with(id);
        let mut tweens: TweenState<()> = TweenState::new();
        tweens.add(id, Tween::scale_uniform(1.0, 2.0, 0.5, Easing::Linear).with_loop(TweenLoop::Loop), &mut scene);
        for _ in 0..10 {
            tweens.tick(0.5, &mut scene);
        }
        assert_eq!(tweens.len(), 1);
    }

    #[test]
    fn despawned_entity_drops_tween_silently() {
        let id = EntityId(1);
        let mut scene = scene_with(id);
        let mut tweens: TweenState<u32> = TweenState::new();
        tweens.add(id, Tween::scale_uniform(0.0, 1.0, 1.0, Easing::Linear).with_on_complete(1), &mut scene);
        scene.despawn(id);
        tweens.tick(2.0, &mut scene);
        assert!(tweens.is_empty());
        assert_eq!(tweens.drain_completed().count(), 0);
    }

    #[test]
    fn clear_stops_everything() {
        let id = EntityId(1);
        let mut scene = scene_with(id);
        let mut tweens: TweenState<u32> = TweenState::new();
        tweens.add(id, Tween::scale_uniform(0.0, 1.0, 1.0, Easing::Linear), &mut scene);
        assert!(tweens.is_animating(id));
        tweens.clear();
        assert!(!tweens.is_animating(id));
    }

    #[test]
    fn position_tween_moves_the_entity() {
        let id = EntityId(1);
        let mut scene = scene_with(id);
        let mut tweens: TweenState<()> = TweenState::new();
        tweens.add(id, Tween::position(Vec2::ZERO, Vec2::new(100.0, 50.0), 1.0, Easing::Linear), &mut scene);
        tweens.tick(0.5, &mut scene);
        assert!((scene.get(id).unwrap().pos - Vec2::new(50.0, 25.0)).length() < 1e-3);
        assert_eq!(scene.get(id).unwrap().scale, Vec2::ONE);
    }

    #[test]
    fn alpha_tween_fades_the_sprite() {
        let id = EntityId(1);
        let mut scene = Scene::new();
        scene.spawn(Entity::new(id).with_sprite(SpriteComponent::default()));
        let mut tweens: TweenState<()> = TweenState::new();
        let tween = Tween::alpha(0.7, 0.0, 0.4, Easing::Linear).from_current(scene.get(id).unwrap());
        tweens.add(id, tween, &mut scene);

        tweens.tick(0.2, &mut scene);
        assert!((scene.get(id).unwrap().sprite.unwrap().alpha - 0.5).abs() < 1e-4);
        tweens.tick(0.3, &mut scene);
        assert_eq!(scene.get(id).unwrap().sprite.unwrap().alpha, 0.0);
    }
}
