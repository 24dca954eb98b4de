//! Steering force and yaw rotation.
//!
//! Steering turns the movement stick into a horizontal acceleration. In the
//! world-relative variant the stick maps straight onto world `x`/`z`; in the
//! facing-relative variant the stick is interpreted in the body's frame and
//! rotated into world space by the body's current yaw.

use glam::{Vec2, Vec3};

use crate::config::SteeringMode;
use crate::state::Facing;
use crate::vector_math::{angle_degrees, horizontal, rotate_degrees, WORLD_FORWARD};

/// Signed yaw, in degrees, used to rotate facing-relative input.
///
/// The magnitude is the angle between body forward and world forward. The
/// sign is `-1` when body right lies within 90° of world forward, else `+1`.
///
/// # Examples
/// ```
/// use sphere_controller::state::Facing;
/// use sphere_controller::steering::signed_forward_angle;
/// assert_eq!(signed_forward_angle(&Facing::IDENTITY), 0.0);
/// ```
#[must_use]
pub fn signed_forward_angle(facing: &Facing) -> f32 {
    let forward_angle = angle_degrees(facing.forward, WORLD_FORWARD);
    let sign = if angle_degrees(facing.right, WORLD_FORWARD) < 90.0 {
        -1.0
    } else {
        1.0
    };
    sign * forward_angle
}

/// World-relative steering: normalised stick times `force` on `x`/`z`.
///
/// A zero stick yields zero acceleration.
#[must_use]
pub fn world_relative(movement: Vec2, force: f32) -> Vec3 {
    horizontal(movement.normalize_or_zero() * force)
}

/// Facing-relative steering: raw stick times `force`, rotated by yaw.
///
/// The stick is not normalised, so partial deflection yields partial force.
#[must_use]
pub fn facing_relative(movement: Vec2, force: f32, facing: &Facing) -> Vec3 {
    let local = movement * force;
    horizontal(rotate_degrees(local, signed_forward_angle(facing)))
}

/// Steering acceleration for the configured policy.
#[must_use]
pub fn steering_acceleration(
    mode: SteeringMode,
    movement: Vec2,
    force: f32,
    facing: &Facing,
) -> Vec3 {
    match mode {
        SteeringMode::WorldRelative => world_relative(movement, force),
        SteeringMode::FacingRelative => facing_relative(movement, force, facing),
    }
}

/// Adds the steering acceleration to the accumulator.
#[must_use]
pub fn apply_steering(
    acceleration: Vec3,
    mode: SteeringMode,
    movement: Vec2,
    force: f32,
    facing: &Facing,
) -> Vec3 {
    acceleration + steering_acceleration(mode, movement, force, facing)
}

/// Yaw delta in degrees for this tick.
///
/// Linear in both the stick's `x` channel and the rotation rate; there is no
/// inertia or smoothing.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use sphere_controller::steering::yaw_delta;
/// assert_eq!(yaw_delta(Some(Vec2::new(0.5, 1.0)), 4.0), 2.0);
/// assert_eq!(yaw_delta(None, 4.0), 0.0);
/// ```
#[must_use]
pub fn yaw_delta(steering: Option<Vec2>, rotation_rate: f32) -> f32 {
    steering.map_or(0.0, |stick| stick.x * rotation_rate)
}

/// Yaw delta as a rotation vector `(0, yaw, 0)` in degrees.
#[must_use]
pub fn yaw_rotation(steering: Option<Vec2>, rotation_rate: f32) -> Vec3 {
    Vec3::new(0.0, yaw_delta(steering, rotation_rate), 0.0)
}
