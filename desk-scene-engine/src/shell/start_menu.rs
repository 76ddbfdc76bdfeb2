use crate::shell::apps::AppId;
use serde::{Deserialize, Serialize};

/// Keys handled while the start menu has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartMenuKey {
    Up,
    Down,
    Enter,
    Escape,
}

impl StartMenuKey {
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "arrowup" => Some(Self::Up),
            "down" | "arrowdown" => Some(Self::Down),
            "enter" => Some(Self::Enter),
            "escape" | "esc" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Open/closed state and keyboard focus of the start menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartMenu {
    open: bool,
    focus: Option<usize>,
}

impl StartMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
            self.focus = None;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.focus = None;
    }

    /// Entry currently holding keyboard focus.
    pub fn focused(&self) -> Option<AppId> {
        self.focus.and_then(|index| Self::entries().get(index).copied())
    }

    /// Move focus to the next entry, wrapping past the end.
    /// With nothing focused yet, focus lands on the first entry.
    pub fn focus_next(&mut self) {
        let count = Self::entries().len();
        self.focus = Some(match self.focus {
            None => 0,
            Some(index) => (index + 1) % count,
        });
    }

    /// Move focus to the previous entry, wrapping past the start.
    /// With nothing focused yet, focus lands on the first entry.
    pub fn focus_previous(&mut self) {
        let count = Self::entries().len();
        self.focus = Some(match self.focus {
            None => 0,
            Some(index) => (index + count - 1) % count,
        });
    }

    pub fn entries() -> &'static [AppId] {
        &AppId::ALL
    }
}
