use bevy::math::Vec3;

/// Centre of the main monitor. Every viewpoint looks at this point.
pub const LOOK_AT_TARGET: Vec3 = Vec3::new(0.0, -50.0, 0.0);

/// Front of the desk, the starting viewpoint.
pub const OVERVIEW_POSITION: Vec3 = Vec3::new(-800.0, 500.0, 1000.0);

/// Close to the monitor, where the desktop shell boots.
pub const MONITOR_POSITION: Vec3 = Vec3::new(-2.6, -50.0, 100.0);

pub const BACK_LEFT_POSITION: Vec3 = Vec3::new(-900.0, 450.0, -800.0);

pub const BACK_RIGHT_POSITION: Vec3 = Vec3::new(900.0, 450.0, -800.0);

pub const FRONT_RIGHT_POSITION: Vec3 = Vec3::new(900.0, 500.0, 900.0);
