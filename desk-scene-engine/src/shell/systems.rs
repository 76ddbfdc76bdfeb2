use crate::engine::core::app_state::{CommandSource, FrameSet};
use crate::rpc::web_rpc::WebRpcInterface;
use crate::shell::os_shell::{OsShell, ShellCommand, ShellTimings};
use crate::shell::snapshot::ShellSnapshot;
use crate::shell::surface::ShellSurface;
use crate::shell::window::WindowGeometry;
use bevy::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use crate::shell::apps::AppId;
#[cfg(not(target_arch = "wasm32"))]
use crate::shell::os_shell::OsPhase;
#[cfg(not(target_arch = "wasm32"))]
use crate::shell::start_menu::StartMenuKey;

/// Event fired when the shell page (or a native shortcut) raises a UI action.
#[derive(Event, Debug, Clone, Copy)]
pub struct ShellCommandEvent {
    pub command: ShellCommand,
    pub source: CommandSource,
}

/// Plugin owning the simulated OS shell and its frontend publication.
#[derive(Default)]
pub struct ShellPlugin {
    pub timings: ShellTimings,
}

impl Plugin for ShellPlugin {
    fn build(&self, app: &mut App) {
        // Every element is assumed present until the page registers its surface.
        app.insert_resource(OsShell::new(
            ShellSurface::complete(),
            self.timings,
            WindowGeometry::default(),
        ))
            .add_event::<ShellCommandEvent>()
            .add_systems(
                Update,
                (
                    handle_shell_keyboard_shortcuts.in_set(FrameSet::Input),
                    (handle_shell_command_events, advance_shell_timers)
                        .chain()
                        .in_set(FrameSet::Shell),
                    publish_shell_state.in_set(FrameSet::Publish),
                ),
            );
    }
}

/// Apply queued UI actions to the shell.
pub fn handle_shell_command_events(
    time: Res<Time>,
    mut events: EventReader<ShellCommandEvent>,
    mut shell: ResMut<OsShell>,
) {
    let now = time.elapsed();
    for event in events.read() {
        if !shell.apply(event.command, now) {
            debug!(
                "Shell command {:?} from {:?} had no effect",
                event.command, event.source
            );
        }
    }
}

/// Fire boot and window animation timers against the frame clock.
pub fn advance_shell_timers(time: Res<Time>, mut shell: ResMut<OsShell>) {
    shell.advance(time.elapsed());
}

/// Push the shell state to the page whenever it changes.
pub fn publish_shell_state(
    shell: Res<OsShell>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut last_published: Local<Option<ShellSnapshot>>,
) {
    let snapshot = shell.snapshot();
    if last_published.as_ref() == Some(&snapshot) {
        return;
    }

    match serde_json::to_value(&snapshot) {
        Ok(params) => rpc_interface.send_notification("os_state_changed", params),
        Err(e) => error!("Failed to serialise shell state: {}", e),
    }
    *last_published = Some(snapshot);
}

/// Native stand-ins for the page's clicks (native builds only).
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_shell_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    shell: Res<OsShell>,
    mut shell_events: EventWriter<ShellCommandEvent>,
) {
    const APP_KEYS: [KeyCode; 6] = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
    ];

    let mut commands = Vec::new();

    let confirm = keyboard.any_just_pressed([KeyCode::Enter, KeyCode::Space]);
    if confirm && shell.phase() == OsPhase::Login {
        commands.push(ShellCommand::Login);
    } else if keyboard.just_pressed(KeyCode::Enter) && shell.start_menu().is_open() {
        commands.push(ShellCommand::StartMenuKey(StartMenuKey::Enter));
    }

    for (key, app) in APP_KEYS.iter().zip(AppId::ALL) {
        if keyboard.just_pressed(*key) {
            commands.push(ShellCommand::ActivateIcon(app));
        }
    }

    if keyboard.just_pressed(KeyCode::Tab) {
        commands.push(ShellCommand::ToggleStartMenu);
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        commands.push(ShellCommand::StartMenuKey(StartMenuKey::Escape));
    }
    if keyboard.just_pressed(KeyCode::KeyL) {
        commands.push(ShellCommand::Logoff);
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        commands.push(ShellCommand::Shutdown);
    }

    if let Some(app) = shell.foreground() {
        if keyboard.just_pressed(KeyCode::KeyX) {
            commands.push(ShellCommand::CloseApp(app));
        }
        if keyboard.just_pressed(KeyCode::KeyM) {
            commands.push(ShellCommand::MinimizeApp(app));
        }
        if keyboard.just_pressed(KeyCode::KeyF) {
            commands.push(ShellCommand::ToggleMaximize(app));
        }
    }

    for command in commands {
        shell_events.write(ShellCommandEvent {
            command,
            source: CommandSource::Keyboard,
        });
    }
}

/// Placeholder for WASM builds, where the page sends shell actions over RPC.
#[cfg(target_arch = "wasm32")]
pub fn handle_shell_keyboard_shortcuts() {
    // Shell input arrives from the page in WASM builds.
}
