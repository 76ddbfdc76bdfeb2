use bevy::prelude::*;
use constants::viewpoints::{
    BACK_LEFT_POSITION, BACK_RIGHT_POSITION, FRONT_RIGHT_POSITION, MONITOR_POSITION,
    OVERVIEW_POSITION,
};
use serde::{Deserialize, Serialize};

/// Named camera positions around the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewpointId {
    Overview,
    Monitor,
    BackLeft,
    BackRight,
    FrontRight,
}

impl ViewpointId {
    pub const ALL: [ViewpointId; 5] = [
        Self::Overview,
        Self::Monitor,
        Self::BackLeft,
        Self::BackRight,
        Self::FrontRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Monitor => "monitor",
            Self::BackLeft => "back-left",
            Self::BackRight => "back-right",
            Self::FrontRight => "front-right",
        }
    }

    /// Fixed world position of this viewpoint.
    pub fn default_position(&self) -> Vec3 {
        match self {
            Self::Overview => OVERVIEW_POSITION,
            Self::Monitor => MONITOR_POSITION,
            Self::BackLeft => BACK_LEFT_POSITION,
            Self::BackRight => BACK_RIGHT_POSITION,
            Self::FrontRight => FRONT_RIGHT_POSITION,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Monitor => 1,
            Self::BackLeft => 2,
            Self::BackRight => 3,
            Self::FrontRight => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_names_match_wire_names() {
        for viewpoint in ViewpointId::ALL {
            assert_eq!(
                serde_json::to_value(viewpoint).unwrap(),
                serde_json::json!(viewpoint.as_str())
            );
        }
    }

    #[test]
    fn test_viewpoint_indices_are_unique() {
        let mut seen = [false; 5];
        for viewpoint in ViewpointId::ALL {
            assert!(!seen[viewpoint.index()]);
            seen[viewpoint.index()] = true;
        }
    }
}
