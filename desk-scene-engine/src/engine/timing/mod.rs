//! Deferred task scheduling driven by the frame clock.
//!
//! Session and shell transitions that must wait (boot trigger, boot
//! sequence, window exit animations) are queued here instead of being
//! run from detached callbacks, so they can be canceled and tested
//! against explicit timestamps.

/// Cancelable one-shot timers keyed by deadline.
pub mod timer_queue;
