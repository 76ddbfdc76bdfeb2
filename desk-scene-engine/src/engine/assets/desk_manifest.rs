use bevy::asset::AssetPath;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use constants::paths::DEFAULT_DESK_MODEL_PATH;
use constants::render_settings::{DEFAULT_DESK_OFFSET, DEFAULT_DESK_SCALE};
use serde::{Deserialize, Serialize};

/// Desk scene description loaded from JSON: which glTF to show and how to
/// place it. Every field is optional in the file.
#[derive(Asset, Debug, Clone, PartialEq, Serialize, Deserialize, TypePath)]
pub struct DeskSceneManifest {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub scene_index: usize,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default = "default_offset")]
    pub offset: [f32; 3],
}

fn default_model() -> String {
    DEFAULT_DESK_MODEL_PATH.to_string()
}

fn default_scale() -> f32 {
    DEFAULT_DESK_SCALE
}

fn default_offset() -> [f32; 3] {
    DEFAULT_DESK_OFFSET.to_array()
}

impl Default for DeskSceneManifest {
    fn default() -> Self {
        Self {
            model: default_model(),
            scene_index: 0,
            scale: default_scale(),
            offset: default_offset(),
        }
    }
}

impl DeskSceneManifest {
    /// Uniform scale plus translation applied to the scene root.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(Vec3::from_array(self.offset))
            .with_scale(Vec3::splat(self.scale))
    }

    /// Asset path of the scene inside the glTF file.
    pub fn scene_asset_path(&self) -> AssetPath<'static> {
        GltfAssetLabel::Scene(self.scene_index).from_asset(self.model.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let manifest: DeskSceneManifest = serde_json::from_str("{}").unwrap();
        assert_eq!(manifest, DeskSceneManifest::default());
        assert_eq!(manifest.model, DEFAULT_DESK_MODEL_PATH);
    }

    #[test]
    fn test_partial_manifest() {
        let manifest: DeskSceneManifest =
            serde_json::from_str(r#"{"model": "models/other.glb", "scale": 2.0}"#).unwrap();
        assert_eq!(manifest.model, "models/other.glb");
        assert_eq!(manifest.scale, 2.0);
        assert_eq!(manifest.offset, DEFAULT_DESK_OFFSET.to_array());
    }

    #[test]
    fn test_transform_places_desk() {
        let manifest = DeskSceneManifest::default();
        let transform = manifest.transform();
        assert_eq!(transform.translation, Vec3::new(-100.0, -690.0, 0.0));
        assert_eq!(transform.scale, Vec3::splat(350.0));
    }

    #[test]
    fn test_scene_asset_path_carries_label() {
        let manifest = DeskSceneManifest {
            scene_index: 1,
            ..default()
        };
        assert_eq!(
            manifest.scene_asset_path().to_string(),
            "models/cyberroom_2.glb#Scene1"
        );
    }
}
