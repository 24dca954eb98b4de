//! Default tunables for the sphere controller.
//!
//! These are the values a freshly constructed [`crate::ControllerConfig`]
//! starts from. Hosts override them through TOML or by editing the config
//! before handing it to the controller.

/// Gravitational acceleration magnitude.
pub const DEFAULT_GRAVITY: f32 = 9.81;
/// Coefficient scaling velocity into friction deceleration.
pub const DEFAULT_FRICTION_COEFFICIENT: f32 = 0.03;
/// Horizontal steering force magnitude.
pub const DEFAULT_STEERING_FORCE: f32 = 6.0;
/// Vertical force applied while the jump input fires on the ground.
pub const DEFAULT_JUMP_IMPULSE: f32 = 2000.0;
/// Body mass.
pub const DEFAULT_MASS: f32 = 10.0;
/// Yaw, in degrees per tick, produced by a fully deflected steering stick.
pub const DEFAULT_STEERING_ROTATION_RATE: f32 = 2.0;

/// Gravity multiplier while the body moves downwards.
pub const FALLING_GRAVITY_COEFFICIENT: f32 = 4.0;
/// Gravity multiplier while the body rises or rests.
pub const RISING_GRAVITY_COEFFICIENT: f32 = 2.0;

/// Fixed simulation rate used by the demo binary when none is supplied.
pub const DEFAULT_TICK_HZ: f32 = 50.0;
