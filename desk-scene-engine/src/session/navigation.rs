use crate::engine::camera::viewpoint::ViewpointId;
use crate::engine::core::app_state::CommandSource;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Discrete navigation signals (arrow keys or the page's `navigate` RPC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationDirection {
    /// Fly to the monitor.
    Up,
    /// Return to the front of the desk.
    Down,
    Left,
    Right,
}

impl NavigationDirection {
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "arrowup" => Some(Self::Up),
            "down" | "arrowdown" => Some(Self::Down),
            "left" | "arrowleft" => Some(Self::Left),
            "right" | "arrowright" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Event fired for each discrete navigation input.
#[derive(Event, Debug, Clone, Copy)]
pub struct NavigationEvent {
    pub direction: NavigationDirection,
    pub source: CommandSource,
}

/// Position on the ring of four non-monitor viewpoints.
///
/// 0 = front (overview), 1 = back-left, 2 = back-right, 3 = front-right.
/// Left walks the ring forwards, right walks it backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DeskRotation(u8);

impl DeskRotation {
    const RING: [ViewpointId; 4] = [
        ViewpointId::Overview,
        ViewpointId::BackLeft,
        ViewpointId::BackRight,
        ViewpointId::FrontRight,
    ];

    pub fn index(&self) -> u8 {
        self.0
    }

    pub fn viewpoint(&self) -> ViewpointId {
        Self::RING[self.0 as usize]
    }

    pub fn stepped_left(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    pub fn stepped_right(self) -> Self {
        Self((self.0 + 3) % 4)
    }
}

/// Turn arrow key presses into navigation events.
pub fn handle_navigation_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut navigation_events: EventWriter<NavigationEvent>,
) {
    let bindings = [
        (KeyCode::ArrowUp, NavigationDirection::Up),
        (KeyCode::ArrowDown, NavigationDirection::Down),
        (KeyCode::ArrowLeft, NavigationDirection::Left),
        (KeyCode::ArrowRight, NavigationDirection::Right),
    ];

    for (key, direction) in bindings {
        if keyboard.just_pressed(key) {
            navigation_events.write(NavigationEvent {
                direction,
                source: CommandSource::Keyboard,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_walks_ring_in_order() {
        let mut rotation = DeskRotation::default();
        let mut visited = Vec::new();
        for _ in 0..4 {
            rotation = rotation.stepped_left();
            visited.push(rotation.viewpoint());
        }
        assert_eq!(
            visited,
            vec![
                ViewpointId::BackLeft,
                ViewpointId::BackRight,
                ViewpointId::FrontRight,
                ViewpointId::Overview,
            ]
        );
    }

    #[test]
    fn test_right_walks_ring_in_reverse() {
        let rotation = DeskRotation::default().stepped_right();
        assert_eq!(rotation.index(), 3);
        assert_eq!(rotation.viewpoint(), ViewpointId::FrontRight);
        assert_eq!(rotation.stepped_right().viewpoint(), ViewpointId::BackRight);
    }

    #[test]
    fn test_ring_closure_and_bounds() {
        for start in 0..4u8 {
            let origin = DeskRotation(start);
            let mut left = origin;
            let mut right = origin;
            for _ in 0..4 {
                left = left.stepped_left();
                right = right.stepped_right();
                assert!(left.index() < 4 && right.index() < 4);
            }
            assert_eq!(left, origin);
            assert_eq!(right, origin);
        }
    }

    #[test]
    fn test_left_then_right_is_identity() {
        let rotation = DeskRotation(2);
        assert_eq!(rotation.stepped_left().stepped_right(), rotation);
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!(
            NavigationDirection::from_string("ArrowLeft"),
            Some(NavigationDirection::Left)
        );
        assert_eq!(NavigationDirection::from_string("up"), Some(NavigationDirection::Up));
        assert_eq!(NavigationDirection::from_string("forward"), None);
    }
}
