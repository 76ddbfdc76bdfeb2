use crate::engine::camera::desk_camera::DeskCamera;
use crate::engine::core::app_state::SessionStatusText;
use crate::session::orchestrator::{SessionOrchestrator, SessionSnapshot};
use crate::shell::os_shell::OsShell;
use bevy::prelude::*;

/// One-line summary of where the camera is and what the shell shows.
pub fn format_session_status(session: &SessionSnapshot, shell: &OsShell) -> String {
    let foreground = shell
        .foreground()
        .map(|app| app.label())
        .unwrap_or("-");
    let boot = if session.boot_pending || shell.is_boot_pending() {
        " (booting)"
    } else {
        ""
    };

    format!(
        "View: {} | Ring: {} | OS: {:?}{} | App: {}",
        session.viewpoint.as_str(),
        session.rotation_index,
        shell.phase(),
        boot,
        foreground
    )
}

/// Native status line; the page renders its own in WASM builds.
pub fn session_status_text_system(
    session: Res<SessionOrchestrator>,
    desk_camera: Res<DeskCamera>,
    shell: Res<OsShell>,
    mut query: Query<&mut Text, With<SessionStatusText>>,
) {
    if !session.is_changed() && !shell.is_changed() {
        return;
    }

    let status = format_session_status(&session.snapshot(&desk_camera), &shell);
    for mut text in &mut query {
        if text.0 != status {
            text.0 = status.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_fresh_session() {
        let session = SessionOrchestrator::default();
        let camera = DeskCamera::default();
        let shell = OsShell::default();

        let status = format_session_status(&session.snapshot(&camera), &shell);
        assert_eq!(status, "View: overview | Ring: 0 | OS: Off | App: -");
    }
}
