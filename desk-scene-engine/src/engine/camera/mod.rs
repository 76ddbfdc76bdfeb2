//! Desk camera: fixed viewpoints, eased movement and viewport sizing.
//!
//! The camera never takes free-look input. It only ever travels towards one
//! of five named viewpoints while staying aimed at the desk.

/// Eased camera state and the system that applies it to the camera entity.
pub mod desk_camera;

/// Render surface size tracking and projection aspect updates.
pub mod render_surface;

/// Named viewpoints and their world positions.
pub mod viewpoint;
