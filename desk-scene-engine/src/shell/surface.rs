use crate::shell::apps::AppId;

/// Which page elements the shell can drive.
///
/// The page may carry only part of the shell markup. Operations that target
/// an element listed as absent here are silent no-ops. The page declares
/// its elements with the `register_surface` request; until then every
/// element is assumed present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellSurface {
    pub os_screen: bool,
    pub login_screen: bool,
    pub start_menu: bool,
    pub taskbar: bool,
    pub(crate) windows: [bool; 6],
}

impl ShellSurface {
    /// Every element present.
    pub fn complete() -> Self {
        Self {
            os_screen: true,
            login_screen: true,
            start_menu: true,
            taskbar: true,
            windows: [true; 6],
        }
    }

    /// Nothing present; every shell operation becomes a no-op.
    pub fn empty() -> Self {
        Self {
            os_screen: false,
            login_screen: false,
            start_menu: false,
            taskbar: false,
            windows: [false; 6],
        }
    }

    pub fn has_window(&self, app: AppId) -> bool {
        self.windows[app.index()]
    }

    pub fn with_window(mut self, app: AppId, present: bool) -> Self {
        self.windows[app.index()] = present;
        self
    }
}

impl Default for ShellSurface {
    fn default() -> Self {
        Self::complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_window_toggles_single_app() {
        let surface = ShellSurface::empty().with_window(AppId::Projects, true);
        assert!(surface.has_window(AppId::Projects));
        assert!(!surface.has_window(AppId::Resume));

        let surface = ShellSurface::complete().with_window(AppId::Resume, false);
        assert!(!surface.has_window(AppId::Resume));
        assert!(surface.has_window(AppId::Contact));
    }
}
