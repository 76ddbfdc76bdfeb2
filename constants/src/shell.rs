/// Static description of one desktop application.
pub struct AppInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Applications in desktop, start menu and taskbar order.
pub const APP_CATALOGUE: &[AppInfo] = &[
    AppInfo {
        id: "resume",
        label: "CV",
        icon: "/icons/cv_logo.png",
    },
    AppInfo {
        id: "github",
        label: "GitHub",
        icon: "/icons/github-logo.png",
    },
    AppInfo {
        id: "linkedin",
        label: "LinkedIn",
        icon: "/icons/linkedin_logo.png",
    },
    AppInfo {
        id: "projects",
        label: "Projects",
        icon: "/icons/proj.png",
    },
    AppInfo {
        id: "certs",
        label: "Certs & Studies",
        icon: "/icons/cert.png",
    },
    AppInfo {
        id: "contact",
        label: "Contact",
        icon: "/icons/contact_me.png",
    },
];

/// Window inset in pixels as (top, right, bottom, left).
pub type InsetPx = [u16; 4];

/// Inset of a window in its normal (restored) sizing.
pub const NORMAL_WINDOW_INSET: InsetPx = [20, 24, 32, 24];

/// Inset of a maximised window, filling the whole screen.
pub const MAXIMISED_WINDOW_INSET: InsetPx = [0, 0, 0, 0];

pub fn get_app_info(id: &str) -> Option<&'static AppInfo> {
    APP_CATALOGUE.iter().find(|app| app.id == id)
}
