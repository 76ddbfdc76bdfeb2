use crate::engine::camera::desk_camera::DeskViewCamera;
use bevy::prelude::*;
use bevy::window::WindowResized;

/// Output dimensions of the render surface, tracked from window resizes.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct RenderSurface {
    pub width: f32,
    pub height: f32,
}

impl Default for RenderSurface {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl RenderSurface {
    /// Record new dimensions. Degenerate sizes (minimised windows) are ignored.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if width <= 0.0 || height <= 0.0 {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// Recompute aspect ratio and projection when the window changes size.
pub fn handle_window_resize(
    mut resize_events: EventReader<WindowResized>,
    mut surface: ResMut<RenderSurface>,
    mut projections: Query<&mut Projection, With<DeskViewCamera>>,
) {
    let Some(resize) = resize_events.read().last() else {
        return;
    };

    if !surface.resize(resize.width, resize.height) {
        return;
    }

    let aspect_ratio = surface.aspect_ratio();
    for mut projection in &mut projections {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect_ratio;
        }
    }

    debug!(
        "Render surface resized to {}x{} (aspect {:.3})",
        resize.width, resize.height, aspect_ratio
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_updates_aspect_ratio() {
        let mut surface = RenderSurface::default();
        assert!(surface.resize(1920.0, 1080.0));
        assert!((surface.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_sized_resize_is_ignored() {
        let mut surface = RenderSurface::default();
        assert!(!surface.resize(0.0, 600.0));
        assert_eq!(surface, RenderSurface::default());
    }
}
