//! Static scene dressing around the desk model.

/// Ambient and directional lighting plus the background colour.
pub mod lighting;
