//! Runtime diagnostics for the page and native builds.
//!
//! Provides FPS tracking and a native status overlay describing the session.

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to frontend via RPC and updates native UI overlays.
pub mod fps_tracking;

/// Native overlay text describing viewpoint, shell phase and foreground app.
pub mod status_overlay;
