use std::collections::HashMap;
use crate::api::types::SoundId;
use crate::assets::manifest::AssetManifest;
use crate::components::sprite::{AtlasId, BlendMode, SpriteComponent};

/// Name → sprite lookup built from a manifest.
#[derive(Debug, Default)]
pub struct SpriteRegistry {
    sprites: HashMap<String, SpriteComponent>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let sprites = manifest
            .sprites
            .iter()
            .map(|(name, desc)| {
                let sprite = SpriteComponent {
                    atlas: AtlasId(desc.atlas),
                    col: desc.col as f32,
                    row: desc.row as f32,
                    cell_span: desc.span as f32,
                    alpha: 1.0,
                    blend: BlendMode::Alpha,
                };
                (name.clone(), sprite)
            })
            .collect();
        Self { sprites }
    }

    /// Sprite by name, copied so callers can tweak alpha or blend.
    pub fn get(&self, name: &str) -> Option<SpriteComponent> {
        self.sprites.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// Name → sound id lookup. Only sounds with an `event_id` are registered.
#[derive(Debug, Default)]
pub struct SoundRegistry {
    sounds: HashMap<String, SoundId>,
}

impl SoundRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let sounds = manifest
            .sounds
            .iter()
            .filter_map(|(name, desc)| desc.event_id.map(|id| (name.clone(), SoundId(id))))
            .collect();
        Self { sounds }
    }

    pub fn get(&self, name: &str) -> Option<SoundId> {
        self.sounds.get(name).copied()
    }
}
