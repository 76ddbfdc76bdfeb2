use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Where a navigation or shell command originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSource {
    Rpc,
    Keyboard,
}

/// Per-frame ordering of the interactive systems.
///
/// Input is gathered and dispatched before the camera moves, the session
/// evaluates proximity against the moved camera, and the shell fires its
/// timers last so a boot triggered this frame is already visible to it.
/// Outgoing RPC traffic is flushed once everything has published.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Dispatch,
    Camera,
    Session,
    Shell,
    Publish,
    Transmit,
}

/// Chain the frame sets in declaration order on the `Update` schedule.
pub fn configure_frame_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            FrameSet::Input,
            FrameSet::Dispatch,
            FrameSet::Camera,
            FrameSet::Session,
            FrameSet::Shell,
            FrameSet::Publish,
            FrameSet::Transmit,
        )
            .chain(),
    );
}

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct SessionStatusText;

/// Leave the loading state once the desk content has settled, loaded or not.
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.content_settled {
        info!("→ Desk content settled, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

/// Report loading milestones to the page as they change.
pub fn update_loading_frontend(
    loading_progress: Res<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !loading_progress.is_changed() {
        return;
    }

    rpc_interface.send_notification(
        "loading_progress",
        serde_json::json!({
            "manifest_loaded": loading_progress.manifest_loaded,
            "content_spawned": loading_progress.content_spawned,
            "content_settled": loading_progress.content_settled,
            "failed": loading_progress.failed,
        }),
    );
}
