use crate::engine::camera::desk_camera::DeskCamera;
use crate::engine::camera::viewpoint::ViewpointId;
use crate::engine::timing::timer_queue::{TimerHandle, TimerQueue};
use crate::session::navigation::{DeskRotation, NavigationDirection};
use crate::shell::os_shell::OsShell;
use bevy::prelude::*;
use constants::timing::{BOOT_TRIGGER_DELAY_MS, PROXIMITY_THRESHOLD};
use serde::Serialize;
use std::time::Duration;

/// Macro state of the desk: looking at it from outside, or at the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    #[default]
    Overview,
    Monitor,
}

/// Tunables for the proximity-gated boot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    /// Distance under which the camera counts as arrived at a viewpoint.
    pub proximity_threshold: f32,
    /// Pause between arriving at the monitor and triggering the boot.
    pub boot_delay: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            proximity_threshold: PROXIMITY_THRESHOLD,
            boot_delay: Duration::from_millis(BOOT_TRIGGER_DELAY_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionTask {
    TriggerBoot,
}

/// Serialisable view of the session for the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub mode: SessionMode,
    pub rotation_index: u8,
    pub viewpoint: ViewpointId,
    pub os_visible: bool,
    pub boot_pending: bool,
}

/// Top-level driver tying navigation input, the camera and the OS shell together.
///
/// Navigation moves the camera target. Each frame, once the camera has
/// moved, [`SessionOrchestrator::evaluate_frame`] checks proximity: arriving
/// at the monitor schedules a delayed boot, arriving back at the overview
/// hides the shell. At most one boot is ever pending, and every mode change
/// cancels it before it can fire.
#[derive(Resource, Debug, Default)]
pub struct SessionOrchestrator {
    settings: SessionSettings,
    mode: SessionMode,
    rotation: DeskRotation,
    os_visible: bool,
    pending_boot: Option<TimerHandle>,
    timers: TimerQueue<SessionTask>,
}

impl SessionOrchestrator {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn rotation_index(&self) -> u8 {
        self.rotation.index()
    }

    pub fn os_visible(&self) -> bool {
        self.os_visible
    }

    pub fn is_boot_pending(&self) -> bool {
        self.pending_boot.is_some()
    }

    pub fn snapshot(&self, camera: &DeskCamera) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            rotation_index: self.rotation.index(),
            viewpoint: camera.target(),
            os_visible: self.os_visible,
            boot_pending: self.is_boot_pending(),
        }
    }

    pub fn handle_navigation(
        &mut self,
        direction: NavigationDirection,
        camera: &mut DeskCamera,
        shell: &mut OsShell,
    ) -> bool {
        match direction {
            NavigationDirection::Up => self.enter_monitor(camera),
            NavigationDirection::Down => {
                self.leave_monitor(camera, shell);
                true
            }
            NavigationDirection::Left | NavigationDirection::Right => {
                self.rotate_desk(direction, camera)
            }
        }
    }

    /// Fly to the monitor. The boot itself waits for the camera to arrive.
    pub fn enter_monitor(&mut self, camera: &mut DeskCamera) -> bool {
        if self.mode == SessionMode::Monitor {
            return false;
        }

        self.cancel_pending_boot();
        self.mode = SessionMode::Monitor;
        self.os_visible = false;
        camera.set_target(ViewpointId::Monitor);

        info!("→ Session entering monitor view");
        true
    }

    /// Return to the front of the desk and tear the shell down immediately.
    pub fn leave_monitor(&mut self, camera: &mut DeskCamera, shell: &mut OsShell) {
        self.cancel_pending_boot();
        if self.mode == SessionMode::Monitor {
            info!("→ Session returning to overview");
        }

        self.mode = SessionMode::Overview;
        self.rotation = DeskRotation::default();
        camera.set_target(self.rotation.viewpoint());
        shell.force_hide();
        self.os_visible = false;
    }

    /// Step around the desk ring. Only accepted in overview mode.
    pub fn rotate_desk(&mut self, direction: NavigationDirection, camera: &mut DeskCamera) -> bool {
        if self.mode != SessionMode::Overview {
            return false;
        }

        self.rotation = match direction {
            NavigationDirection::Left => self.rotation.stepped_left(),
            NavigationDirection::Right => self.rotation.stepped_right(),
            NavigationDirection::Up | NavigationDirection::Down => return false,
        };
        camera.set_target(self.rotation.viewpoint());
        true
    }

    /// Per-frame proximity evaluation. Must run after the camera update.
    pub fn evaluate_frame(&mut self, now: Duration, camera: &DeskCamera, shell: &mut OsShell) {
        self.fire_due_timers(now, shell);

        match self.mode {
            SessionMode::Monitor => {
                let distance = camera.distance_to(ViewpointId::Monitor);
                if distance < self.settings.proximity_threshold
                    && !self.os_visible
                    && self.pending_boot.is_none()
                {
                    self.pending_boot = Some(self.timers.schedule(
                        now,
                        self.settings.boot_delay,
                        SessionTask::TriggerBoot,
                    ));
                    debug!("Camera at monitor, boot scheduled");
                }
            }
            SessionMode::Overview => {
                let distance = camera.distance_to(ViewpointId::Overview);
                if self.os_visible && distance < self.settings.proximity_threshold {
                    shell.force_hide();
                    self.os_visible = false;
                }
            }
        }
    }

    fn fire_due_timers(&mut self, now: Duration, shell: &mut OsShell) {
        while let Some((deadline, task)) = self.timers.pop_due(now) {
            match task {
                SessionTask::TriggerBoot => {
                    self.pending_boot = None;
                    if self.mode != SessionMode::Monitor || self.os_visible {
                        continue;
                    }
                    shell.trigger_boot(deadline);
                    self.os_visible = true;
                }
            }
        }
    }

    fn cancel_pending_boot(&mut self) {
        if let Some(handle) = self.pending_boot.take() {
            self.timers.cancel(handle);
            debug!("Pending boot canceled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::os_shell::OsPhase;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    struct Harness {
        session: SessionOrchestrator,
        camera: DeskCamera,
        shell: OsShell,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                session: SessionOrchestrator::default(),
                camera: DeskCamera::default(),
                shell: OsShell::default(),
            }
        }

        fn navigate(&mut self, direction: NavigationDirection) -> bool {
            self.session
                .handle_navigation(direction, &mut self.camera, &mut self.shell)
        }

        /// One frame in the same order as the app schedule.
        fn frame(&mut self, now: Duration) {
            self.camera.update(1.0 / 60.0);
            self.session.evaluate_frame(now, &self.camera, &mut self.shell);
            self.shell.advance(now);
        }

        fn arrive_at_monitor(&mut self) {
            self.navigate(NavigationDirection::Up);
            while self.camera.distance_to(ViewpointId::Monitor) >= PROXIMITY_THRESHOLD {
                self.camera.update(1.0 / 60.0);
            }
        }
    }

    #[test]
    fn test_rotation_stays_in_ring_and_closes() {
        let mut harness = Harness::new();
        for _ in 0..4 {
            assert!(harness.navigate(NavigationDirection::Left));
            assert!(harness.session.rotation_index() < 4);
        }
        assert_eq!(harness.session.rotation_index(), 0);
        assert_eq!(harness.camera.target(), ViewpointId::Overview);

        harness.navigate(NavigationDirection::Right);
        assert_eq!(harness.session.rotation_index(), 3);
        assert_eq!(harness.camera.target(), ViewpointId::FrontRight);
    }

    #[test]
    fn test_rotation_ignored_in_monitor_mode() {
        let mut harness = Harness::new();
        harness.navigate(NavigationDirection::Up);

        assert!(!harness.navigate(NavigationDirection::Left));
        assert_eq!(harness.session.rotation_index(), 0);
        assert_eq!(harness.camera.target(), ViewpointId::Monitor);
    }

    #[test]
    fn test_enter_monitor_does_not_boot_immediately() {
        let mut harness = Harness::new();
        harness.navigate(NavigationDirection::Up);

        assert_eq!(harness.session.mode(), SessionMode::Monitor);
        assert!(!harness.session.is_boot_pending());
        harness.frame(ms(0));
        assert!(!harness.session.is_boot_pending());
        assert_eq!(harness.shell.phase(), OsPhase::Off);
    }

    #[test]
    fn test_arrival_boots_then_reaches_login() {
        let mut harness = Harness::new();
        harness.arrive_at_monitor();

        harness.frame(ms(0));
        assert!(harness.session.is_boot_pending());

        harness.frame(ms(499));
        assert_eq!(harness.shell.phase(), OsPhase::Off);

        harness.frame(ms(500));
        assert_eq!(harness.shell.phase(), OsPhase::Booting);
        assert!(harness.session.os_visible());

        harness.frame(ms(1999));
        assert_eq!(harness.shell.phase(), OsPhase::Booting);
        harness.frame(ms(2000));
        assert_eq!(harness.shell.phase(), OsPhase::Login);
    }

    #[test]
    fn test_login_time_is_exact_despite_frame_jitter() {
        let mut harness = Harness::new();
        harness.arrive_at_monitor();

        harness.frame(ms(0));
        harness.frame(ms(517));
        assert_eq!(harness.shell.phase(), OsPhase::Booting);

        harness.frame(ms(1999));
        assert_eq!(harness.shell.phase(), OsPhase::Booting);
        harness.frame(ms(2001));
        assert_eq!(harness.shell.phase(), OsPhase::Login);
    }

    #[test]
    fn test_only_one_boot_pending() {
        let mut harness = Harness::new();
        harness.arrive_at_monitor();

        harness.frame(ms(0));
        harness.frame(ms(100));
        harness.frame(ms(200));
        assert_eq!(
            harness.session.timers.pop_due(ms(500)),
            Some((ms(500), SessionTask::TriggerBoot))
        );
        assert_eq!(harness.session.timers.pop_due(ms(10_000)), None);
    }

    #[test]
    fn test_leave_before_delay_never_boots() {
        let mut harness = Harness::new();
        harness.arrive_at_monitor();
        harness.frame(ms(0));
        assert!(harness.session.is_boot_pending());

        harness.navigate(NavigationDirection::Down);
        assert!(!harness.session.is_boot_pending());

        for step in 1..=50 {
            harness.frame(ms(step * 100));
            assert_eq!(harness.shell.phase(), OsPhase::Off);
        }
        assert!(!harness.session.os_visible());
    }

    #[test]
    fn test_rapid_toggling_does_not_fire_stale_boot() {
        let mut harness = Harness::new();
        harness.arrive_at_monitor();
        harness.frame(ms(0));

        harness.navigate(NavigationDirection::Down);
        harness.frame(ms(100));
        harness.arrive_at_monitor();
        harness.frame(ms(200));

        // The first approach would have fired at 500.
        harness.frame(ms(500));
        assert_eq!(harness.shell.phase(), OsPhase::Off);

        harness.frame(ms(700));
        assert_eq!(harness.shell.phase(), OsPhase::Booting);
    }

    #[test]
    fn test_repeated_enter_monitor_is_idempotent() {
        let mut harness = Harness::new();
        harness.arrive_at_monitor();
        harness.frame(ms(0));
        harness.frame(ms(500));
        harness.frame(ms(2000));
        harness.shell.login();

        assert!(!harness.navigate(NavigationDirection::Up));
        harness.frame(ms(3000));
        harness.frame(ms(4000));

        assert!(harness.session.os_visible());
        assert_eq!(harness.shell.phase(), OsPhase::Desktop);
    }

    #[test]
    fn test_leave_monitor_hides_shell_immediately() {
        let mut harness = Harness::new();
        harness.arrive_at_monitor();
        harness.frame(ms(0));
        harness.frame(ms(500));
        assert_eq!(harness.shell.phase(), OsPhase::Booting);

        harness.navigate(NavigationDirection::Down);

        assert_eq!(harness.shell.phase(), OsPhase::Off);
        assert!(!harness.session.os_visible());
        assert_eq!(harness.camera.target(), ViewpointId::Overview);

        harness.frame(ms(5000));
        assert_eq!(harness.shell.phase(), OsPhase::Off);
    }

    #[test]
    fn test_leave_monitor_in_overview_resets_rotation() {
        let mut harness = Harness::new();
        harness.navigate(NavigationDirection::Left);
        harness.navigate(NavigationDirection::Left);
        assert_eq!(harness.session.rotation_index(), 2);

        assert!(harness.navigate(NavigationDirection::Down));

        assert_eq!(harness.session.mode(), SessionMode::Overview);
        assert_eq!(harness.session.rotation_index(), 0);
        assert_eq!(harness.camera.target(), ViewpointId::Overview);
        assert_eq!(harness.shell.phase(), OsPhase::Off);
    }

    #[test]
    fn test_enter_monitor_keeps_rotation_until_leaving() {
        let mut harness = Harness::new();
        harness.navigate(NavigationDirection::Right);
        harness.navigate(NavigationDirection::Up);
        assert_eq!(harness.session.rotation_index(), 3);

        harness.navigate(NavigationDirection::Down);
        assert_eq!(harness.session.rotation_index(), 0);
    }

    #[test]
    fn test_overview_arrival_hides_visible_shell() {
        let mut harness = Harness::new();
        harness.session.os_visible = true;
        harness.shell.trigger_boot(ms(0));

        harness.frame(ms(16));

        assert!(!harness.session.os_visible());
        assert_eq!(harness.shell.phase(), OsPhase::Off);
    }

    #[test]
    fn test_far_from_monitor_does_not_schedule_boot() {
        let mut harness = Harness::new();
        harness.navigate(NavigationDirection::Up);

        for step in 0..5 {
            harness.frame(ms(step * 16));
        }

        assert!(harness.camera.distance_to(ViewpointId::Monitor) > PROXIMITY_THRESHOLD);
        assert!(!harness.session.is_boot_pending());
    }

    #[test]
    fn test_camera_flight_eventually_boots() {
        let mut harness = Harness::new();
        harness.navigate(NavigationDirection::Up);

        let mut now = Duration::ZERO;
        while harness.shell.phase() != OsPhase::Login && now < Duration::from_secs(30) {
            now += ms(16);
            harness.frame(now);
        }

        assert_eq!(harness.shell.phase(), OsPhase::Login);
        assert!(harness.session.os_visible());
    }

    #[test]
    fn test_snapshot_reports_state() {
        let mut harness = Harness::new();
        harness.navigate(NavigationDirection::Left);

        let snapshot = harness.session.snapshot(&harness.camera);
        assert_eq!(snapshot.mode, SessionMode::Overview);
        assert_eq!(snapshot.rotation_index, 1);
        assert_eq!(snapshot.viewpoint, ViewpointId::BackLeft);
        assert!(!snapshot.boot_pending);
    }
}
