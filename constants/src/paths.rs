/// Manifest describing which model populates the desk scene.
pub const DESK_MANIFEST_PATH: &str = "desk/desk_scene.json";

/// Model used when the manifest does not name one.
pub const DEFAULT_DESK_MODEL_PATH: &str = "models/cyberroom_2.glb";
