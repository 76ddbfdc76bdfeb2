use crate::engine::camera::desk_camera::DeskCamera;
use crate::engine::core::app_state::FrameSet;
use crate::rpc::web_rpc::WebRpcInterface;
use crate::session::navigation::{NavigationEvent, handle_navigation_keyboard};
use crate::session::orchestrator::{SessionOrchestrator, SessionSettings, SessionSnapshot};
use crate::shell::os_shell::OsShell;
use bevy::prelude::*;

/// Plugin wiring navigation input and the per-frame proximity check.
#[derive(Default)]
pub struct SessionPlugin {
    pub settings: SessionSettings,
}

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SessionOrchestrator::new(self.settings))
            .add_event::<NavigationEvent>()
            .add_systems(
                Update,
                (
                    handle_navigation_keyboard.in_set(FrameSet::Input),
                    handle_navigation_events.in_set(FrameSet::Dispatch),
                    evaluate_session_frame.in_set(FrameSet::Session),
                    publish_session_state.in_set(FrameSet::Publish),
                ),
            );
    }
}

/// Apply navigation input to the session, camera target and shell.
pub fn handle_navigation_events(
    mut events: EventReader<NavigationEvent>,
    mut session: ResMut<SessionOrchestrator>,
    mut desk_camera: ResMut<DeskCamera>,
    mut shell: ResMut<OsShell>,
) {
    for event in events.read() {
        let applied = session.handle_navigation(event.direction, &mut desk_camera, &mut shell);
        if !applied {
            debug!(
                "Navigation {:?} from {:?} ignored in {:?} mode",
                event.direction,
                event.source,
                session.mode()
            );
        }
    }
}

/// Proximity-gated boot and teardown, evaluated after the camera has moved.
pub fn evaluate_session_frame(
    time: Res<Time>,
    mut session: ResMut<SessionOrchestrator>,
    desk_camera: Res<DeskCamera>,
    mut shell: ResMut<OsShell>,
) {
    session.evaluate_frame(time.elapsed(), &desk_camera, &mut shell);
}

/// Push session state to the page whenever it changes.
pub fn publish_session_state(
    session: Res<SessionOrchestrator>,
    desk_camera: Res<DeskCamera>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut last_published: Local<Option<SessionSnapshot>>,
) {
    let snapshot = session.snapshot(&desk_camera);
    if last_published.as_ref() == Some(&snapshot) {
        return;
    }

    match serde_json::to_value(&snapshot) {
        Ok(params) => rpc_interface.send_notification("session_state_changed", params),
        Err(e) => error!("Failed to serialise session state: {}", e),
    }
    *last_published = Some(snapshot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::camera::desk_camera::{Smoothing, update_desk_camera};
    use crate::engine::core::app_state::{CommandSource, configure_frame_sets};
    use crate::session::navigation::NavigationDirection;
    use crate::engine::camera::viewpoint::ViewpointId;
    use crate::session::orchestrator::SessionMode;
    use crate::shell::systems::ShellPlugin;
    use std::time::Duration;

    fn frame_app(settings: SessionSettings) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<WebRpcInterface>()
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(DeskCamera::new(Smoothing::PerUpdate(1.0)))
            .add_plugins((ShellPlugin::default(), SessionPlugin { settings }))
            .add_systems(Update, update_desk_camera.in_set(FrameSet::Camera));
        configure_frame_sets(&mut app);
        app
    }

    #[test]
    fn test_camera_moves_before_session_evaluates_in_same_frame() {
        let mut app = frame_app(SessionSettings::default());
        app.world_mut().send_event(NavigationEvent {
            direction: NavigationDirection::Up,
            source: CommandSource::Keyboard,
        });

        app.update();

        let camera = app.world().resource::<DeskCamera>();
        assert!(camera.distance_to(ViewpointId::Monitor) < 1e-3);
        let session = app.world().resource::<SessionOrchestrator>();
        assert_eq!(session.mode(), SessionMode::Monitor);
        assert!(session.is_boot_pending());
        assert!(!session.os_visible());
    }

    #[test]
    fn test_plugin_settings_reach_orchestrator() {
        let settings = SessionSettings {
            proximity_threshold: 0.0,
            boot_delay: Duration::from_millis(500),
        };
        let mut app = frame_app(settings);
        app.world_mut().send_event(NavigationEvent {
            direction: NavigationDirection::Up,
            source: CommandSource::Rpc,
        });

        app.update();

        let session = app.world().resource::<SessionOrchestrator>();
        assert_eq!(session.mode(), SessionMode::Monitor);
        assert!(!session.is_boot_pending());
    }
}
