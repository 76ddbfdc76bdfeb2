//! Loading pipeline for the desk scene.
//!
//! The manifest is read first, then the glTF scene it names is spawned and
//! watched until it settles. Failure at either step is logged and reported
//! to the page, never fatal.

/// Desk model spawning and load-state monitoring.
pub mod desk_content;

/// Desk manifest loading with fallback to built-in placement.
pub mod manifest_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
