use crate::engine::timing::timer_queue::TimerHandle;
use constants::shell::{InsetPx, MAXIMISED_WINDOW_INSET, NORMAL_WINDOW_INSET};
use serde::Serialize;

/// Whether an app window is logically open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowVisibility {
    #[default]
    Closed,
    Open,
    /// Hidden but still owning the taskbar entry.
    Minimized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowSizing {
    #[default]
    Normal,
    Maximized,
}

impl WindowSizing {
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Maximized,
            Self::Maximized => Self::Normal,
        }
    }
}

/// Combined window state as seen by the rest of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowState {
    Closed,
    OpenNormal,
    OpenMaximized,
    Minimized,
}

/// Insets applied to the window element for each sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub normal: InsetPx,
    pub maximized: InsetPx,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            normal: NORMAL_WINDOW_INSET,
            maximized: MAXIMISED_WINDOW_INSET,
        }
    }
}

impl WindowGeometry {
    pub fn inset(&self, sizing: WindowSizing) -> InsetPx {
        match sizing {
            WindowSizing::Normal => self.normal,
            WindowSizing::Maximized => self.maximized,
        }
    }

    /// CSS `inset` value, e.g. `20px 24px 32px 24px`.
    pub fn css_inset(&self, sizing: WindowSizing) -> String {
        let [top, right, bottom, left] = self.inset(sizing);
        format!("{top}px {right}px {bottom}px {left}px")
    }
}

/// Per-app window record.
#[derive(Debug, Clone, Default)]
pub struct AppWindow {
    pub(crate) visibility: WindowVisibility,
    pub(crate) sizing: WindowSizing,
    /// Pending exit animation; the element stays displayed until it fires.
    pub(crate) exit_animation: Option<TimerHandle>,
}

impl AppWindow {
    pub fn visibility(&self) -> WindowVisibility {
        self.visibility
    }

    pub fn sizing(&self) -> WindowSizing {
        self.sizing
    }

    pub fn state(&self) -> WindowState {
        match (self.visibility(), self.sizing) {
            (WindowVisibility::Closed, _) => WindowState::Closed,
            (WindowVisibility::Minimized, _) => WindowState::Minimized,
            (WindowVisibility::Open, WindowSizing::Normal) => WindowState::OpenNormal,
            (WindowVisibility::Open, WindowSizing::Maximized) => WindowState::OpenMaximized,
        }
    }

    /// Shown on screen with the visible class applied.
    pub fn is_visible(&self) -> bool {
        self.visibility() == WindowVisibility::Open
    }

    /// Still occupying layout, either visible or playing its exit animation.
    pub fn is_displayed(&self) -> bool {
        self.is_visible() || self.exit_animation.is_some()
    }
}
