//! Session orchestration between desk navigation and the monitor's OS shell.
//!
//! Owns the session mode, the desk rotation ring and the proximity-gated
//! boot timer. Arrow keys (or the page's `navigate` RPC) drive the camera
//! target; the per-frame evaluation boots the shell once the camera settles
//! at the monitor and tears it down when the camera leaves.

/// Navigation directions, events and the desk rotation ring.
pub mod navigation;

/// Session state machine and proximity evaluation.
pub mod orchestrator;

/// Bevy plugin and per-frame systems.
pub mod systems;
