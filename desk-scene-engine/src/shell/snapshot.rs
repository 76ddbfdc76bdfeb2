use crate::shell::apps::AppId;
use crate::shell::os_shell::{OsPhase, OsShell};
use crate::shell::window::WindowState;
use serde::Serialize;

/// Everything the page needs to render the shell for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellSnapshot {
    pub phase: OsPhase,
    pub os_screen_visible: bool,
    pub boot_screen_visible: bool,
    pub login_screen_visible: bool,
    pub windows: Vec<WindowSnapshot>,
    pub taskbar: Option<TaskbarEntry>,
    pub start_menu_open: bool,
    pub start_menu_focus: Option<AppId>,
    pub selected_icon: Option<AppId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowSnapshot {
    pub app: AppId,
    pub element_id: String,
    pub state: WindowState,
    /// Visible class applied.
    pub visible: bool,
    /// Element still displayed (visible or mid exit animation).
    pub displayed: bool,
    pub inset: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskbarEntry {
    pub app: AppId,
    pub label: &'static str,
    pub icon: &'static str,
}

impl TaskbarEntry {
    pub fn for_app(app: AppId) -> Self {
        Self {
            app,
            label: app.label(),
            icon: app.icon(),
        }
    }
}

impl OsShell {
    pub fn snapshot(&self) -> ShellSnapshot {
        let phase = self.phase();
        let windows = AppId::ALL
            .into_iter()
            .filter(|app| self.surface().has_window(*app))
            .map(|app| {
                let window = self.window(app);
                WindowSnapshot {
                    app,
                    element_id: app.window_element_id(),
                    state: window.state(),
                    visible: window.is_visible(),
                    displayed: window.is_displayed(),
                    inset: self.geometry().css_inset(window.sizing()),
                }
            })
            .collect();

        ShellSnapshot {
            phase,
            os_screen_visible: phase != OsPhase::Off,
            boot_screen_visible: phase == OsPhase::Booting,
            login_screen_visible: phase == OsPhase::Login,
            windows,
            taskbar: self.taskbar().map(TaskbarEntry::for_app),
            start_menu_open: self.start_menu().is_open(),
            start_menu_focus: self.start_menu().focused(),
            selected_icon: self.selected_icon(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_snapshot_of_hidden_shell() {
        let snapshot = OsShell::default().snapshot();
        assert_eq!(snapshot.phase, OsPhase::Off);
        assert!(!snapshot.os_screen_visible);
        assert_eq!(snapshot.windows.len(), AppId::ALL.len());
        assert!(snapshot.taskbar.is_none());
    }

    #[test]
    fn test_snapshot_reflects_foreground_window() {
        let mut shell = OsShell::default();
        shell.trigger_boot(Duration::ZERO);
        shell.advance(Duration::from_millis(1500));
        shell.login();
        shell.open_app(AppId::Github);
        shell.toggle_maximize(AppId::Github);

        let snapshot = shell.snapshot();
        let github = snapshot
            .windows
            .iter()
            .find(|window| window.app == AppId::Github)
            .expect("github window");

        assert_eq!(github.state, WindowState::OpenMaximized);
        assert_eq!(github.inset, "0px 0px 0px 0px");
        assert_eq!(
            snapshot.taskbar,
            Some(TaskbarEntry {
                app: AppId::Github,
                label: "GitHub",
                icon: "/icons/github-logo.png",
            })
        );
    }

    #[test]
    fn test_snapshot_serialises_wire_names() {
        let mut shell = OsShell::default();
        shell.trigger_boot(Duration::ZERO);

        let value = serde_json::to_value(shell.snapshot()).expect("serialise");
        assert_eq!(value["phase"], "booting");
        assert_eq!(value["boot_screen_visible"], true);
        assert_eq!(value["windows"][0]["app"], "resume");
        assert_eq!(value["windows"][0]["state"], "closed");
    }
}
