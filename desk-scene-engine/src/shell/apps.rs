use constants::shell::{APP_CATALOGUE, AppInfo, get_app_info};
use serde::{Deserialize, Serialize};

/// Applications available on the simulated desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    Resume,
    Github,
    Linkedin,
    Projects,
    Certs,
    Contact,
}

impl AppId {
    /// Desktop, start menu and taskbar order.
    pub const ALL: [AppId; 6] = [
        Self::Resume,
        Self::Github,
        Self::Linkedin,
        Self::Projects,
        Self::Certs,
        Self::Contact,
    ];

    /// Convert string identifier to an app for RPC compatibility.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "resume" => Some(Self::Resume),
            "github" => Some(Self::Github),
            "linkedin" => Some(Self::Linkedin),
            "projects" => Some(Self::Projects),
            "certs" => Some(Self::Certs),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Projects => "projects",
            Self::Certs => "certs",
            Self::Contact => "contact",
        }
    }

    /// DOM id of the window element rendering this app.
    pub fn window_element_id(&self) -> String {
        format!("app-{}", self.as_str())
    }

    pub fn info(&self) -> &'static AppInfo {
        // Every variant has a catalogue entry; see test_every_app_has_catalogue_entry.
        get_app_info(self.as_str()).unwrap_or(&APP_CATALOGUE[0])
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }

    pub fn icon(&self) -> &'static str {
        self.info().icon
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Resume => 0,
            Self::Github => 1,
            Self::Linkedin => 2,
            Self::Projects => 3,
            Self::Certs => 4,
            Self::Contact => 5,
        }
    }
}
