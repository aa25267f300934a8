use crate::components::entity::Entity;
use crate::components::sprite::BlendMode;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from the scene's entities.
///
/// Visible sprites are ordered by layer (back to front); within the buffer all
/// alpha-blended instances come first and additive ones after `atlas_split`,
/// each group keeping layer order.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    let mut drawable: Vec<&Entity> = entities
        .filter(|e| e.visible && e.sprite.is_some())
        .collect();
    // stable: spawn order breaks ties inside a layer
    drawable.sort_by_key(|e| e.layer);

    let mut additive: Vec<RenderInstance> = Vec::new();
    let mut alpha_count = 0u32;

    for entity in drawable {
        let Some(sprite) = &entity.sprite else {
            continue;
        };
        let instance = RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            rotation: entity.rotation,
            scale: entity.size * entity.scale.x,
            sprite_col: sprite.col,
            alpha: sprite.alpha,
            cell_span: sprite.cell_span,
            atlas_row: sprite.row,
        };
        match sprite.blend {
            BlendMode::Alpha => {
                buffer.push(instance);
                alpha_count += 1;
            }
            BlendMode::Additive => additive.push(instance),
        }
    }

    buffer.set_atlas_split(alpha_count);
    for instance in additive {
        buffer.push(instance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::layer::RenderLayer;
    use crate::components::sprite::SpriteComponent;
    use glam::Vec2;

    fn sprite_entity(id: u32, layer: RenderLayer, blend: BlendMode) -> Entity {
        Entity::new(EntityId(id))
            .with_pos(Vec2::splat(id as f32))
            .with_size(10.0)
            .with_layer(layer)
            .with_sprite(SpriteComponent { blend, ..Default::default() })
    }

    #[test]
    fn orders_by_layer_and_splits_additive() {
        let entities = vec![
            sprite_entity(1, RenderLayer::Ui, BlendMode::Alpha),
            sprite_entity(2, RenderLayer::Background, BlendMode::Alpha),
            sprite_entity(3, RenderLayer::Markers, BlendMode::Additive),
        ];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 3);
        assert_eq!(buffer.atlas_split, 2);
        assert_eq!(buffer.instances[0].x, 2.0);
        assert_eq!(buffer.instances[1].x, 1.0);
        assert_eq!(buffer.instances[2].x, 3.0);
    }

    #[test]
    fn hidden_and_spriteless_entities_are_skipped() {
        let hidden = sprite_entity(1, RenderLayer::Markers, BlendMode::Alpha).with_visible(false);
        let bare = Entity::new(EntityId(2));
        let entities = vec![hidden, bare];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }

    #[test]
    fn instance_size_includes_scale() {
        let popped = sprite_entity(1, RenderLayer::Strokes, BlendMode::Alpha).with_scale(Vec2::splat(1.5));
        let mut buffer = RenderBuffer::new();
        build_render_buffer(std::iter::once(&popped), &mut buffer);
        assert_eq!(buffer.instances[0].scale, 15.0);
    }
}
