//! Asset definitions for the desk scene.

/// JSON manifest naming the desk model and its placement.
pub mod desk_manifest;
