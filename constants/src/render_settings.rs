use bevy::math::Vec3;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 5000.0;

/// Scene background (#AAAAAA).
pub const CLEAR_COLOUR_RGB: [u8; 3] = [0xAA, 0xAA, 0xAA];

pub const AMBIENT_BRIGHTNESS: f32 = 400.0;
pub const DIRECTIONAL_ILLUMINANCE: f32 = 6_000.0;
pub const DIRECTIONAL_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 50.0, 80.0);

/// Uniform scale applied to the desk model when the manifest omits one.
pub const DEFAULT_DESK_SCALE: f32 = 350.0;

/// Offset applied to the desk model when the manifest omits one.
pub const DEFAULT_DESK_OFFSET: Vec3 = Vec3::new(-100.0, -690.0, 0.0);
