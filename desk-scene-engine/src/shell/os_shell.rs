use crate::engine::timing::timer_queue::{TimerHandle, TimerQueue};
use crate::shell::apps::AppId;
use crate::shell::start_menu::{StartMenu, StartMenuKey};
use crate::shell::surface::ShellSurface;
use crate::shell::window::{AppWindow, WindowGeometry, WindowSizing, WindowVisibility};
use bevy::prelude::*;
use constants::timing::{BOOT_SEQUENCE_MS, WINDOW_EXIT_ANIMATION_MS};
use serde::Serialize;
use std::time::Duration;

/// Which shell screen is showing. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsPhase {
    #[default]
    Off,
    Booting,
    Login,
    Desktop,
}

/// Delays used by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellTimings {
    /// Boot screen duration before the login screen appears.
    pub boot_sequence: Duration,
    /// Exit animation for closed and minimised windows.
    pub window_exit: Duration,
}

impl Default for ShellTimings {
    fn default() -> Self {
        Self {
            boot_sequence: Duration::from_millis(BOOT_SEQUENCE_MS),
            window_exit: Duration::from_millis(WINDOW_EXIT_ANIMATION_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellTask {
    CompleteBoot,
    FinishExit(AppId),
}

/// UI-level actions raised by the shell page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    OpenApp(AppId),
    CloseApp(AppId),
    MinimizeApp(AppId),
    ToggleMaximize(AppId),
    SelectIcon(AppId),
    /// Double-click or Enter on a desktop icon.
    ActivateIcon(AppId),
    ToggleStartMenu,
    CloseStartMenu,
    ClickOutsideStartMenu,
    StartMenuKey(StartMenuKey),
    Login,
    Logoff,
    Shutdown,
    /// Click on the desktop background.
    ClickDesktop,
    /// The page announcing which shell elements it renders.
    RegisterSurface(ShellSurface),
}

/// State of the simulated operating system shown on the monitor.
///
/// Holds the boot/login/desktop phase, one window record per app, the
/// foreground app (mirrored by the taskbar), the start menu and the desktop
/// icon selection. Opening an app closes every other window, so at most one
/// window is ever in the foreground.
#[derive(Resource, Debug)]
pub struct OsShell {
    surface: ShellSurface,
    timings: ShellTimings,
    geometry: WindowGeometry,
    phase: OsPhase,
    windows: [AppWindow; 6],
    foreground: Option<AppId>,
    start_menu: StartMenu,
    selected_icon: Option<AppId>,
    boot_timer: Option<TimerHandle>,
    timers: TimerQueue<ShellTask>,
    clock: Duration,
}

impl Default for OsShell {
    fn default() -> Self {
        Self::new(
            ShellSurface::complete(),
            ShellTimings::default(),
            WindowGeometry::default(),
        )
    }
}

impl OsShell {
    pub fn new(surface: ShellSurface, timings: ShellTimings, geometry: WindowGeometry) -> Self {
        Self {
            surface,
            timings,
            geometry,
            phase: OsPhase::Off,
            windows: Default::default(),
            foreground: None,
            start_menu: StartMenu::default(),
            selected_icon: None,
            boot_timer: None,
            timers: TimerQueue::new(),
            clock: Duration::ZERO,
        }
    }

    pub fn phase(&self) -> OsPhase {
        self.phase
    }

    pub fn surface(&self) -> &ShellSurface {
        &self.surface
    }

    /// Replace the set of drivable elements. Windows whose element vanished are closed.
    pub fn set_surface(&mut self, surface: ShellSurface) {
        for app in AppId::ALL {
            if !surface.has_window(app) {
                self.reset_window(app);
                if self.foreground == Some(app) {
                    self.foreground = None;
                }
            }
        }
        if !surface.start_menu {
            self.start_menu.close();
        }
        self.surface = surface;
        info!("Shell surface registered: {:?}", surface);
    }

    pub fn geometry(&self) -> &WindowGeometry {
        &self.geometry
    }

    pub fn window(&self, app: AppId) -> &AppWindow {
        &self.windows[app.index()]
    }

    /// App owning the single foreground window, if any.
    pub fn foreground(&self) -> Option<AppId> {
        self.foreground
    }

    /// Taskbar contents, derived from the foreground app.
    pub fn taskbar(&self) -> Option<AppId> {
        if self.surface.taskbar {
            self.foreground
        } else {
            None
        }
    }

    pub fn start_menu(&self) -> &StartMenu {
        &self.start_menu
    }

    pub fn selected_icon(&self) -> Option<AppId> {
        self.selected_icon
    }

    pub fn is_boot_pending(&self) -> bool {
        self.boot_timer.is_some()
    }

    /// Begin the boot sequence. Ignored while a boot is already running.
    pub fn trigger_boot(&mut self, now: Duration) -> bool {
        if !self.surface.os_screen {
            debug!("No OS screen present, boot skipped");
            return false;
        }
        if self.phase == OsPhase::Booting {
            return false;
        }

        self.clock = self.clock.max(now);
        self.hide_all_windows();
        self.start_menu.close();
        self.cancel_boot_timer();
        self.boot_timer = Some(self.timers.schedule(
            now,
            self.timings.boot_sequence,
            ShellTask::CompleteBoot,
        ));
        self.phase = OsPhase::Booting;

        info!("→ OS booting");
        true
    }

    /// Tear the shell down immediately, aborting any boot in flight.
    pub fn force_hide(&mut self) -> bool {
        if !self.surface.os_screen {
            return false;
        }

        let previous = self.phase;
        self.cancel_boot_timer();
        self.hide_all_windows();
        self.timers.clear();
        self.start_menu.close();
        self.selected_icon = None;
        self.phase = OsPhase::Off;

        if previous != OsPhase::Off {
            info!("→ OS hidden (was {:?})", previous);
        }
        previous != OsPhase::Off
    }

    /// Fire every shell timer due at `now`.
    pub fn advance(&mut self, now: Duration) {
        while let Some((deadline, task)) = self.timers.pop_due(now) {
            self.clock = self.clock.max(deadline);
            match task {
                ShellTask::CompleteBoot => self.complete_boot(),
                ShellTask::FinishExit(app) => {
                    self.windows[app.index()].exit_animation = None;
                }
            }
        }
        self.clock = self.clock.max(now);
    }

    fn complete_boot(&mut self) {
        self.boot_timer = None;
        if self.phase != OsPhase::Booting {
            return;
        }

        // Without a login screen the desktop underneath is shown directly.
        self.phase = if self.surface.login_screen {
            OsPhase::Login
        } else {
            OsPhase::Desktop
        };
        info!("→ OS boot complete, showing {:?}", self.phase);
    }

    pub fn login(&mut self) -> bool {
        if self.phase != OsPhase::Login {
            debug!("Login ignored in {:?} phase", self.phase);
            return false;
        }
        self.phase = OsPhase::Desktop;
        info!("→ Logged in");
        true
    }

    pub fn logoff(&mut self) -> bool {
        if !self.on_desktop("logoff") || !self.surface.login_screen {
            return false;
        }
        self.hide_all_windows();
        self.start_menu.close();
        self.selected_icon = None;
        self.phase = OsPhase::Login;
        info!("→ Logged off");
        true
    }

    /// Close everything and run the boot sequence again, starting at the shell clock.
    pub fn shutdown(&mut self) -> bool {
        if !self.on_desktop("shutdown") {
            return false;
        }
        self.hide_all_windows();
        self.start_menu.close();
        self.selected_icon = None;
        self.phase = OsPhase::Off;
        info!("→ Shutting down");
        self.trigger_boot(self.clock)
    }

    /// Show `app` as the only window, in normal sizing, and put it on the taskbar.
    pub fn open_app(&mut self, app: AppId) -> bool {
        if !self.on_desktop("open_app") || !self.has_window(app) {
            return false;
        }

        for other in AppId::ALL.into_iter().filter(|other| *other != app) {
            self.reset_window(other);
        }

        self.cancel_exit_animation(app);
        let window = &mut self.windows[app.index()];
        window.visibility = WindowVisibility::Open;
        window.sizing = WindowSizing::Normal;

        self.foreground = Some(app);
        self.start_menu.close();
        true
    }

    pub fn close_app(&mut self, app: AppId) -> bool {
        if !self.on_desktop("close_app") || !self.has_window(app) {
            return false;
        }

        let was_visible = self.window(app).is_visible();
        self.windows[app.index()].visibility = WindowVisibility::Closed;
        if was_visible {
            self.start_exit_animation(app);
        }
        if self.foreground == Some(app) {
            self.foreground = None;
        }
        self.selected_icon = None;
        true
    }

    /// Hide the window but keep its taskbar entry.
    pub fn minimize_app(&mut self, app: AppId) -> bool {
        if !self.on_desktop("minimize_app") || !self.has_window(app) {
            return false;
        }
        if !self.window(app).is_visible() {
            return false;
        }

        self.windows[app.index()].visibility = WindowVisibility::Minimized;
        self.start_exit_animation(app);
        true
    }

    pub fn toggle_maximize(&mut self, app: AppId) -> bool {
        if !self.on_desktop("toggle_maximize") || !self.has_window(app) {
            return false;
        }
        let window = &mut self.windows[app.index()];
        window.sizing = window.sizing.toggled();
        true
    }

    pub fn toggle_start_menu(&mut self) -> bool {
        if !self.on_desktop("toggle_start_menu") || !self.surface.start_menu {
            return false;
        }
        self.start_menu.toggle();
        true
    }

    pub fn close_start_menu(&mut self) -> bool {
        if !self.start_menu.is_open() {
            return false;
        }
        self.start_menu.close();
        true
    }

    pub fn click_outside_start_menu(&mut self) -> bool {
        self.close_start_menu()
    }

    pub fn start_menu_key(&mut self, key: StartMenuKey) -> bool {
        if !self.on_desktop("start_menu_key") || !self.start_menu.is_open() {
            return false;
        }

        match key {
            StartMenuKey::Up => {
                self.start_menu.focus_previous();
                true
            }
            StartMenuKey::Down => {
                self.start_menu.focus_next();
                true
            }
            StartMenuKey::Enter => match self.start_menu.focused() {
                Some(app) => self.open_app(app),
                None => false,
            },
            StartMenuKey::Escape => self.close_start_menu(),
        }
    }

    /// Select one desktop icon, deselecting any other.
    pub fn select_icon(&mut self, app: AppId) -> bool {
        if !self.on_desktop("select_icon") {
            return false;
        }
        self.selected_icon = Some(app);
        true
    }

    /// Select the icon and open its app. False when the app has no window to show.
    pub fn activate_icon(&mut self, app: AppId) -> bool {
        if !self.select_icon(app) {
            return false;
        }
        self.open_app(app)
    }

    pub fn clear_icon_selection(&mut self) -> bool {
        if !self.on_desktop("clear_icon_selection") {
            return false;
        }
        self.selected_icon.take().is_some()
    }

    /// Apply a page command at `now`. Timers due by then fire first, so
    /// delays started by the command are measured from `now`.
    pub fn apply(&mut self, command: ShellCommand, now: Duration) -> bool {
        self.advance(now);
        match command {
            ShellCommand::OpenApp(app) => self.open_app(app),
            ShellCommand::CloseApp(app) => self.close_app(app),
            ShellCommand::MinimizeApp(app) => self.minimize_app(app),
            ShellCommand::ToggleMaximize(app) => self.toggle_maximize(app),
            ShellCommand::SelectIcon(app) => self.select_icon(app),
            ShellCommand::ActivateIcon(app) => self.activate_icon(app),
            ShellCommand::ToggleStartMenu => self.toggle_start_menu(),
            ShellCommand::CloseStartMenu => self.close_start_menu(),
            ShellCommand::ClickOutsideStartMenu => self.click_outside_start_menu(),
            ShellCommand::StartMenuKey(key) => self.start_menu_key(key),
            ShellCommand::Login => self.login(),
            ShellCommand::Logoff => self.logoff(),
            ShellCommand::Shutdown => self.shutdown(),
            ShellCommand::ClickDesktop => self.clear_icon_selection(),
            ShellCommand::RegisterSurface(surface) => {
                self.set_surface(surface);
                true
            }
        }
    }

    fn on_desktop(&self, operation: &str) -> bool {
        if self.phase == OsPhase::Desktop {
            return true;
        }
        debug!("{} ignored in {:?} phase", operation, self.phase);
        false
    }

    fn has_window(&self, app: AppId) -> bool {
        if self.surface.has_window(app) {
            return true;
        }
        debug!("No window element for {}", app.as_str());
        false
    }

    fn hide_all_windows(&mut self) {
        for app in AppId::ALL {
            self.reset_window(app);
        }
        self.foreground = None;
    }

    fn reset_window(&mut self, app: AppId) {
        self.cancel_exit_animation(app);
        let window = &mut self.windows[app.index()];
        window.visibility = WindowVisibility::Closed;
        window.sizing = WindowSizing::Normal;
    }

    fn start_exit_animation(&mut self, app: AppId) {
        self.cancel_exit_animation(app);
        let handle = self.timers.schedule(
            self.clock,
            self.timings.window_exit,
            ShellTask::FinishExit(app),
        );
        self.windows[app.index()].exit_animation = Some(handle);
    }

    fn cancel_exit_animation(&mut self, app: AppId) {
        if let Some(handle) = self.windows[app.index()].exit_animation.take() {
            self.timers.cancel(handle);
        }
    }

    fn cancel_boot_timer(&mut self) {
        if let Some(handle) = self.boot_timer.take() {
            self.timers.cancel(handle);
        }
    }
}
