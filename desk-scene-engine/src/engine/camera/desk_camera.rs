use crate::engine::camera::viewpoint::ViewpointId;
use bevy::prelude::*;
use constants::timing::CAMERA_SMOOTHING_FACTOR;
use constants::viewpoints::LOOK_AT_TARGET;

/// How far the camera closes the gap to its target on each update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Smoothing {
    /// Fixed fraction per update call. Frame-rate dependent.
    PerUpdate(f32),
    /// `1 - exp(-rate * dt)`, independent of frame rate.
    FrameRateIndependent { rate: f32 },
}

impl Smoothing {
    pub fn alpha(&self, delta_secs: f32) -> f32 {
        let alpha = match *self {
            Self::PerUpdate(factor) => factor,
            Self::FrameRateIndependent { rate } => 1.0 - (-rate * delta_secs.max(0.0)).exp(),
        };
        alpha.clamp(0.0, 1.0)
    }
}

impl Default for Smoothing {
    fn default() -> Self {
        Self::PerUpdate(CAMERA_SMOOTHING_FACTOR)
    }
}

/// Marker for the camera entity driven by [`DeskCamera`].
#[derive(Component)]
pub struct DeskViewCamera;

/// Camera pose between fixed viewpoints.
///
/// Only the position is smoothed; the orientation is derived from it every
/// update so the camera always looks exactly at the shared look-at target.
#[derive(Resource, Debug, Clone)]
pub struct DeskCamera {
    viewpoints: [Vec3; 5],
    look_at: Vec3,
    current: Vec3,
    target: ViewpointId,
    smoothing: Smoothing,
}

impl DeskCamera {
    pub fn new(smoothing: Smoothing) -> Self {
        let viewpoints = ViewpointId::ALL.map(|viewpoint| viewpoint.default_position());
        Self {
            current: viewpoints[ViewpointId::Overview.index()],
            viewpoints,
            look_at: LOOK_AT_TARGET,
            target: ViewpointId::Overview,
            smoothing,
        }
    }

    /// Record the destination. The camera moves on subsequent updates.
    pub fn set_target(&mut self, viewpoint: ViewpointId) {
        if self.target != viewpoint {
            debug!("Camera target: {}", viewpoint.as_str());
        }
        self.target = viewpoint;
    }

    /// Advance the position toward the target.
    pub fn update(&mut self, delta_secs: f32) {
        let alpha = self.smoothing.alpha(delta_secs);
        let target = self.viewpoint_position(self.target);
        self.current += (target - self.current) * alpha;
    }

    pub fn position(&self) -> Vec3 {
        self.current
    }

    pub fn target(&self) -> ViewpointId {
        self.target
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn viewpoint_position(&self, viewpoint: ViewpointId) -> Vec3 {
        self.viewpoints[viewpoint.index()]
    }

    /// Euclidean distance from the current position to a viewpoint.
    pub fn distance_to(&self, viewpoint: ViewpointId) -> f32 {
        self.current.distance(self.viewpoint_position(viewpoint))
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.current).looking_at(self.look_at, Vec3::Y)
    }
}

impl Default for DeskCamera {
    fn default() -> Self {
        Self::new(Smoothing::default())
    }
}

/// Advance the pose once per frame and copy it onto the camera entity.
pub fn update_desk_camera(
    time: Res<Time>,
    mut desk_camera: ResMut<DeskCamera>,
    mut camera_query: Query<&mut Transform, With<DeskViewCamera>>,
) {
    desk_camera.update(time.delta_secs());

    if let Ok(mut camera_transform) = camera_query.single_mut() {
        *camera_transform = desk_camera.transform();
    }
}
