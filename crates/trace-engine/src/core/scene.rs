use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Flat entity storage. A tracing screen holds a few dozen entities at most.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
        }
    }

    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by ID. Draw order within a layer is not preserved.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.swap_remove(idx))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Show or hide an entity. Unknown ids are ignored.
    pub fn set_visible(&mut self, id: EntityId, visible: bool) {
        if let Some(entity) = self.get_mut(id) {
            entity.visible = visible;
        }
    }

    pub fn is_visible(&self, id: EntityId) -> bool {
        self.get(id).is_some_and(|e| e.visible)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Entity> {
        self.entities.iter().filter(|e| e.tag == tag).collect()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_pos(Vec2::new(10.0, 20.0)));
        assert_eq!(scene.get(id).unwrap().pos, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn despawn_removes_entity() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)));
        assert!(scene.despawn(EntityId(1)).is_some());
        assert!(scene.despawn(EntityId(1)).is_none());
        assert!(scene.is_empty());
    }

    #[test]
    fn visibility_toggles() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(4)));
        scene.set_visible(EntityId(4), false);
        assert!(!scene.is_visible(EntityId(4)));
        scene.set_visible(EntityId(4), true);
        assert!(scene.is_visible(EntityId(4)));
        // unknown ids are neither visible nor a panic
        scene.set_visible(EntityId(99), true);
        assert!(!scene.is_visible(EntityId(99)));
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("dot"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("hand"));
        scene.spawn(Entity::new(EntityId(3)).with_tag("dot"));
        assert_eq!(scene.find_by_tag("hand").unwrap().id, EntityId(2));
        assert_eq!(scene.find_all_by_tag("dot").len(), 2);
    }
}
