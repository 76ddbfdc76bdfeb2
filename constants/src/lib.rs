//! Shared constants for the desk scene and its simulated desktop shell.

/// Asset locations for the desk model and its manifest.
pub mod paths;

/// Camera, lighting and projection settings for the desk scene.
pub mod render_settings;

/// Application catalogue and window geometry for the desktop shell.
pub mod shell;

/// Delays and thresholds that gate session and shell transitions.
pub mod timing;

/// Fixed camera viewpoints around the desk.
pub mod viewpoints;
