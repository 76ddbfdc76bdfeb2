use crate::engine::assets::desk_manifest::DeskSceneManifest;
use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::asset::{LoadState, RecursiveDependencyLoadState};
use bevy::gltf::Gltf;
use bevy::prelude::*;

/// Marker on the root entity of the desk model.
#[derive(Component)]
pub struct DeskContent;

/// Handles tracked while the desk model streams in.
#[derive(Resource)]
pub struct DeskContentHandles {
    pub model_path: String,
    pub gltf: Handle<Gltf>,
    pub scene: Handle<Scene>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentStatus {
    Pending,
    Loaded,
    Failed(String),
}

/// Fold the file and scene load states into a single status.
pub fn content_status(
    gltf_state: Option<LoadState>,
    scene_state: Option<RecursiveDependencyLoadState>,
) -> ContentStatus {
    if let Some(LoadState::Failed(err)) = gltf_state {
        return ContentStatus::Failed(err.to_string());
    }
    match scene_state {
        Some(RecursiveDependencyLoadState::Loaded) => ContentStatus::Loaded,
        Some(RecursiveDependencyLoadState::Failed(err)) => ContentStatus::Failed(err.to_string()),
        _ => ContentStatus::Pending,
    }
}

/// Spawn the scene root for the desk model. The scene fills in once loaded.
pub fn spawn_desk_content(
    commands: &mut Commands,
    asset_server: &AssetServer,
    manifest: &DeskSceneManifest,
) {
    let gltf = asset_server.load(manifest.model.clone());
    let scene = asset_server.load(manifest.scene_asset_path());

    commands.spawn((
        SceneRoot(scene.clone()),
        manifest.transform(),
        DeskContent,
        Name::new("Desk"),
    ));
    commands.insert_resource(DeskContentHandles {
        model_path: manifest.model.clone(),
        gltf,
        scene,
    });
}

/// Watch the desk model until it settles and tell the page how it went.
/// A failed model leaves an empty room; the session keeps running.
pub fn check_desk_content(
    mut loading_progress: ResMut<LoadingProgress>,
    handles: Option<Res<DeskContentHandles>>,
    asset_server: Res<AssetServer>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if loading_progress.content_settled {
        return;
    }
    let Some(handles) = handles else {
        return;
    };

    let status = content_status(
        asset_server.get_load_state(&handles.gltf),
        asset_server.get_recursive_dependency_load_state(&handles.scene),
    );
    if status == ContentStatus::Pending {
        return;
    }

    settle_desk_content(
        status,
        &handles.model_path,
        &mut loading_progress,
        &mut rpc_interface,
    );
}

/// Record how the desk model ended up and notify the page.
pub fn settle_desk_content(
    status: ContentStatus,
    model_path: &str,
    loading_progress: &mut LoadingProgress,
    rpc_interface: &mut WebRpcInterface,
) {
    match status {
        ContentStatus::Pending => {}
        ContentStatus::Loaded => {
            info!("✓ Desk model loaded: {}", model_path);
            loading_progress.content_settled = true;
            rpc_interface.send_notification(
                "scene_content_loaded",
                serde_json::json!({ "model": model_path }),
            );
        }
        ContentStatus::Failed(reason) => {
            error!("Desk model failed to load ({}): {}", model_path, reason);
            loading_progress.content_settled = true;
            loading_progress.failed = true;
            rpc_interface.send_notification(
                "scene_content_failed",
                serde_json::json!({ "model": model_path, "error": reason }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::AssetLoadError;
    use bevy::asset::io::AssetReaderError;
    use std::path::PathBuf;
    use std::sync::Arc;

    const MODEL: &str = "models/cyberroom_2.glb";

    fn not_found() -> Arc<AssetLoadError> {
        Arc::new(AssetLoadError::AssetReaderError(AssetReaderError::NotFound(
            PathBuf::from(MODEL),
        )))
    }

    #[test]
    fn test_pending_until_scene_dependencies_load() {
        assert_eq!(content_status(None, None), ContentStatus::Pending);
        assert_eq!(
            content_status(
                Some(LoadState::Loaded),
                Some(RecursiveDependencyLoadState::Loading)
            ),
            ContentStatus::Pending
        );
    }

    #[test]
    fn test_loaded_when_scene_ready() {
        assert_eq!(
            content_status(
                Some(LoadState::Loaded),
                Some(RecursiveDependencyLoadState::Loaded)
            ),
            ContentStatus::Loaded
        );
    }

    #[test]
    fn test_missing_model_file_fails() {
        let status = content_status(Some(LoadState::Failed(not_found())), None);
        let ContentStatus::Failed(reason) = status else {
            panic!("expected failure, got {:?}", status);
        };
        assert!(reason.contains(MODEL));
    }

    #[test]
    fn test_failed_scene_dependency_fails() {
        let status = content_status(
            Some(LoadState::Loaded),
            Some(RecursiveDependencyLoadState::Failed(not_found())),
        );
        assert!(matches!(status, ContentStatus::Failed(_)));
    }

    #[test]
    fn test_file_failure_wins_over_pending_scene() {
        let status = content_status(
            Some(LoadState::Failed(not_found())),
            Some(RecursiveDependencyLoadState::Loading),
        );
        assert!(matches!(status, ContentStatus::Failed(_)));
    }

    #[test]
    fn test_failed_content_settles_loading_and_notifies() {
        let mut progress = LoadingProgress::default();
        let mut rpc_interface = WebRpcInterface::default();

        settle_desk_content(
            ContentStatus::Failed("Path not found".to_string()),
            MODEL,
            &mut progress,
            &mut rpc_interface,
        );

        assert!(progress.content_settled);
        assert!(progress.failed);
        let notifications = rpc_interface.pending_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].method, "scene_content_failed");
        assert_eq!(notifications[0].params["model"], MODEL);
        assert_eq!(notifications[0].params["error"], "Path not found");
    }

    #[test]
    fn test_loaded_content_settles_without_failure() {
        let mut progress = LoadingProgress::default();
        let mut rpc_interface = WebRpcInterface::default();

        settle_desk_content(ContentStatus::Loaded, MODEL, &mut progress, &mut rpc_interface);

        assert!(progress.content_settled);
        assert!(!progress.failed);
        assert_eq!(
            rpc_interface.pending_notifications()[0].method,
            "scene_content_loaded"
        );
    }
}
