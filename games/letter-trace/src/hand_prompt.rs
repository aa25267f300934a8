use glam::Vec2;
use trace_engine::{move_towards, EngineContext, Entity, EntityId, RenderLayer, Scene, SpriteComponent};

pub const HAND_SIZE: f32 = 64.0;

/// Animated hand that walks the current segment's points in a loop.
#[derive(Debug, Clone)]
pub struct HandPrompt {
    pub id: EntityId,
    pos: Vec2,
    path: Vec<Vec2>,
    target: usize,
    /// World units per second.
    speed: f32,
    /// World units.
    arrive_epsilon: f32,
}

impl HandPrompt {
    pub fn spawn(
        ctx: &mut EngineContext,
        pos: Vec2,
        sprite: Option<SpriteComponent>,
        speed: f32,
        arrive_epsilon: f32,
    ) -> Self {
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("hand")
                .with_pos(pos)
                .with_size(HAND_SIZE)
                .with_sprite_opt(sprite)
                .with_layer(RenderLayer::Guides),
        );
        Self {
            id,
            pos,
            path: Vec::new(),
            target: 0,
            speed,
            arrive_epsilon,
        }
    }

    /// Follow `points` from the first one, dropping any previous path.
    pub fn start_moving(&mut self, points: Vec<Vec2>) {
        self.path = points;
        self.target = 0;
    }

    /// One step of motion. Reaching a point costs the step: the target moves
    /// on (wrapping to the start) and the hand holds still until next tick.
    pub fn tick(&mut self, dt: f32, scene: &mut Scene) {
        let Some(&target) = self.path.get(self.target) else {
            return;
        };
        if self.pos.distance(target) > self.arrive_epsilon {
            self.pos = move_towards(self.pos, target, self.speed * dt);
            if let Some(entity) = scene.get_mut(self.id) {
                entity.pos = self.pos;
            }
        } else {
            self.target = (self.target + 1) % self.path.len();
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn target_index(&self) -> usize {
        self.target
    }
}
