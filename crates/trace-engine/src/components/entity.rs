use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::layer::RenderLayer;
use crate::components::sprite::SpriteComponent;

/// Fat entity: one struct with optional parts, no ECS.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    /// Name used to look entities up (e.g. "dot", "hand").
    pub tag: String,
    /// Hidden entities stay in the scene but are neither drawn nor hit-tested.
    pub visible: bool,
    /// Position in world space.
    pub pos: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// Rendered size in world units at scale 1.
    pub size: f32,
    /// Local scale multiplier, animated by pop effects.
    pub scale: Vec2,
    pub sprite: Option<SpriteComponent>,
    pub layer: RenderLayer,
}

impl Entity {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            visible: true,
            pos: Vec2::ZERO,
            rotation: 0.0,
            size: 1.0,
            scale: Vec2::ONE,
            sprite: None,
            layer: RenderLayer::default(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    /// Attach a sprite only if one was resolved (e.g. from the asset registry).
    pub fn with_sprite_opt(mut self, sprite: Option<SpriteComponent>) -> Self {
        self.sprite = sprite;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// World-space extent after scaling.
    pub fn world_size(&self) -> Vec2 {
        self.scale * self.size
    }

    /// Axis-aligned hit test against the scaled square footprint.
    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.world_size().abs() * 0.5;
        let d = (point - self.pos).abs();
        d.x <= half.x && d.y <= half.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_size_applies_scale() {
        let e = Entity::new(EntityId(1))
            .with_size(40.0)
            .with_scale(Vec2::splat(1.5));
        assert_eq!(e.world_size(), Vec2::splat(60.0));
    }

    #[test]
    fn contains_uses_scaled_bounds() {
        let e = Entity::new(EntityId(1))
            .with_pos(Vec2::new(100.0, 100.0))
            .with_size(50.0);
        assert!(e.contains(Vec2::new(120.0, 80.0)));
        assert!(!e.contains(Vec2::new(130.0, 100.0)));
    }
}
