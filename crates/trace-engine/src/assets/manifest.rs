use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Atlases, named sprites and named sounds for a game, loaded from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub atlases: Vec<AtlasDescriptor>,
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDescriptor>,
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    pub name: String,
    pub cols: u32,
    pub rows: u32,
    /// Relative path to the PNG file.
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Index into the atlases array.
    pub atlas: u32,
    pub col: u32,
    pub row: u32,
    #[serde(default = "default_span")]
    pub span: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    pub path: String,
    /// Numeric id Rust uses to trigger this sound. Sounds without one are
    /// host-only and cannot be played from game code.
    #[serde(default)]
    pub event_id: Option<u32>,
}

fn default_span() -> u32 {
    1
}

impl AssetManifest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sprites_and_sounds() {
        let json = r#"{
            "atlases": [
                { "name": "trace", "cols": 8, "rows": 4, "path": "trace.png" }
            ],
            "sprites": {
                "dot": { "atlas": 0, "col": 0, "row": 0 },
                "good_job": { "atlas": 0, "col": 0, "row": 2, "span": 2 }
            },
            "sounds": {
                "dot_hit": { "path": "pop.mp3", "event_id": 1 },
                "ambience": { "path": "birds.ogg" }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.atlases[0].cols, 8);
        assert_eq!(manifest.sprites["dot"].span, 1);
        assert_eq!(manifest.sprites["good_job"].span, 2);
        assert_eq!(manifest.sounds["dot_hit"].event_id, Some(1));
        assert_eq!(manifest.sounds["ambience"].event_id, None);
    }

    #[test]
    fn empty_object_is_valid() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert!(manifest.sprites.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AssetManifest::from_json("{ \"sprites\": [").is_err());
    }
}
