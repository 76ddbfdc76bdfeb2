/// Fraction of the remaining distance the camera covers per update.
pub const CAMERA_SMOOTHING_FACTOR: f32 = 0.08;

/// Distance (world units) under which the camera counts as arrived at a viewpoint.
pub const PROXIMITY_THRESHOLD: f32 = 5.0;

/// Pause between arriving at the monitor and starting the boot sequence.
pub const BOOT_TRIGGER_DELAY_MS: u64 = 500;

/// Length of the boot screen before the login screen appears.
pub const BOOT_SEQUENCE_MS: u64 = 1500;

/// Exit animation for closed and minimised windows. Cosmetic only.
pub const WINDOW_EXIT_ANIMATION_MS: u64 = 160;

/// Interval between FPS notifications sent to the frontend.
pub const FPS_NOTIFICATION_INTERVAL_SECS: f32 = 0.5;
