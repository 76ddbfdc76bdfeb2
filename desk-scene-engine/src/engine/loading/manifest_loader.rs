use crate::engine::assets::desk_manifest::DeskSceneManifest;
use crate::engine::loading::desk_content::spawn_desk_content;
use crate::engine::loading::progress::LoadingProgress;
use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::paths::DESK_MANIFEST_PATH;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<DeskSceneManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading desk manifest from {}", DESK_MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(DESK_MANIFEST_PATH));
}

/// Spawn the desk once its manifest is available. A missing or malformed
/// manifest falls back to the built-in placement.
pub fn load_desk_manifest(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<DeskSceneManifest>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    let Some(manifest) =
        resolve_manifest(manifests.get(handle), asset_server.get_load_state(handle))
    else {
        return;
    };

    loading_progress.manifest_loaded = true;
    spawn_desk_content(&mut commands, &asset_server, &manifest);
    loading_progress.content_spawned = true;
}

/// The manifest to place the desk with, or `None` while it is still loading.
pub fn resolve_manifest(
    loaded: Option<&DeskSceneManifest>,
    load_state: Option<LoadState>,
) -> Option<DeskSceneManifest> {
    if let Some(manifest) = loaded {
        info!("✓ Desk manifest loaded: {}", manifest.model);
        return Some(manifest.clone());
    }
    match load_state {
        Some(LoadState::Failed(err)) => {
            warn!(
                "Desk manifest unavailable ({}), using built-in placement",
                err
            );
            Some(DeskSceneManifest::default())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::AssetLoadError;
    use bevy::asset::io::AssetReaderError;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[test]
    fn test_waits_while_manifest_loads() {
        assert_eq!(resolve_manifest(None, Some(LoadState::Loading)), None);
        assert_eq!(resolve_manifest(None, None), None);
    }

    #[test]
    fn test_missing_manifest_falls_back_to_built_in_placement() {
        let error = AssetLoadError::AssetReaderError(AssetReaderError::NotFound(PathBuf::from(
            DESK_MANIFEST_PATH,
        )));

        let manifest = resolve_manifest(None, Some(LoadState::Failed(Arc::new(error))));

        assert_eq!(manifest, Some(DeskSceneManifest::default()));
    }

    #[test]
    fn test_loaded_manifest_is_used() {
        let custom = DeskSceneManifest {
            scale: 2.0,
            ..DeskSceneManifest::default()
        };
        assert_eq!(
            resolve_manifest(Some(&custom), Some(LoadState::Loaded)),
            Some(custom)
        );
    }
}
