//! The embedded asset manifest

use serde::{Deserialize, Serialize};

/// The fixed, ordered resource list for the game: every image the renderer
/// may draw, plus the one background-music track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Image paths, in load order
    pub images: Vec<String>,
    /// Background music path
    pub music: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The manifest compiled into the binary. Startup-only: a malformed
    /// embedded manifest is a build defect, not a runtime condition.
    pub fn embedded() -> Self {
        Self::from_json(include_str!("../../assets/manifest.json"))
            .expect("embedded manifest is valid JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::asset_key;

    #[test]
    fn test_parse_manifest() {
        let json = r#"{
            "images": ["assets/img/plaza_bg.png", "assets/img/player_idle.png"],
            "music": "assets/audio/festival_theme.mp3"
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.images.len(), 2);
        assert_eq!(manifest.images[0], "assets/img/plaza_bg.png");
        assert_eq!(manifest.music, "assets/audio/festival_theme.mp3");
    }

    #[test]
    fn test_malformed_manifest_is_an_error() {
        assert!(AssetManifest::from_json("{ \"images\": 3 }").is_err());
        assert!(AssetManifest::from_json("not json").is_err());
    }

    #[test]
    fn test_embedded_manifest_covers_every_sprite_key() {
        use crate::sim::{Facing, ToyKind};

        let manifest = AssetManifest::embedded();
        let keys: Vec<&str> = manifest.images.iter().map(|p| asset_key(p)).collect();

        for facing in [Facing::Idle, Facing::Left, Facing::Right] {
            assert!(keys.contains(&facing.sprite_key()), "{:?}", facing);
        }
        for kind in [ToyKind::Teddy, ToyKind::Robot, ToyKind::Duck] {
            assert!(keys.contains(&kind.sprite_key()), "{:?}", kind);
        }
        for bg in ["splash_bg", "plaza_bg", "booth_bg"] {
            assert!(keys.contains(&bg), "{}", bg);
        }
    }
}
