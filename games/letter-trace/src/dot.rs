use glam::Vec2;
use trace_engine::{EngineContext, Entity, EntityId, RenderLayer, Scene, SpriteComponent};

/// World size of a dot sprite.
pub const DOT_SIZE: f32 = 36.0;

/// One traceable marker on a segment.
#[derive(Debug, Clone)]
pub struct Dot {
    pub id: EntityId,
    pub pos: Vec2,
    highlighted_sprite: Option<SpriteComponent>,
    highlighted: bool,
}

impl Dot {
    /// Spawn at `pos` showing `normal` (if bound).
    pub fn spawn(
        ctx: &mut EngineContext,
        pos: Vec2,
        normal: Option<SpriteComponent>,
        highlighted: Option<SpriteComponent>,
    ) -> Self {
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("dot")
                .with_pos(pos)
                .with_size(DOT_SIZE)
                .with_sprite_opt(normal)
                .with_layer(RenderLayer::Markers),
        );
        Self {
            id,
            pos,
            highlighted_sprite: highlighted,
            highlighted: false,
        }
    }

    /// Switch to the highlighted look. Only the first call does anything;
    /// returns whether this call changed the dot.
    pub fn highlight(&mut self, scene: &mut Scene) -> bool {
        if self.highlighted {
            return false;
        }
        self.highlighted = true;
        if let (Some(frame), Some(entity)) = (self.highlighted_sprite, scene.get_mut(self.id)) {
            match entity.sprite.as_mut() {
                Some(sprite) => sprite.set_frame(&frame),
                None => entity.sprite = Some(frame),
            }
        }
        true
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(col: f32) -> SpriteComponent {
        SpriteComponent { col, ..Default::default() }
    }

    #[test]
    fn highlight_happens_once() {
        let mut ctx = EngineContext::new();
        let mut dot = Dot::spawn(&mut ctx, Vec2::new(10.0, 20.0), Some(frame(1.0)), Some(frame(2.0)));
        assert!(!dot.is_highlighted());

        assert!(dot.highlight(&mut ctx.scene));
        assert_eq!(ctx.scene.get(dot.id).unwrap().sprite.unwrap().col, 2.0);

        assert!(!dot.highlight(&mut ctx.scene));
        assert!(dot.is_highlighted());
    }

    #[test]
    fn highlight_without_sprites_still_marks() {
        let mut ctx = EngineContext::new();
        let mut dot = Dot::spawn(&mut ctx, Vec2::ZERO, None, None);
        assert!(dot.highlight(&mut ctx.scene));
        assert!(dot.is_highlighted());
        assert!(ctx.scene.get(dot.id).unwrap().sprite.is_none());
    }

    #[test]
    fn highlighted_sprite_alone_is_shown() {
        let mut ctx = EngineContext::new();
        let mut dot = Dot::spawn(&mut ctx, Vec2::ZERO, None, Some(frame(5.0)));
        dot.highlight(&mut ctx.scene);
        assert_eq!(ctx.scene.get(dot.id).unwrap().sprite.unwrap().col, 5.0);
    }
}
