//! Force composition for the sphere controller.
//!
//! Each stage is a pure transform of an acceleration accumulator. The
//! stages read only the tick-start [`BodySnapshot`], never the accumulator's
//! history or the live host body, and [`compose_acceleration`] folds them in
//! the fixed order gravity, jump, steering, friction.

use glam::{Vec2, Vec3};
use log::trace;

use crate::config::{ControllerConfig, SurfaceModel};
use crate::constants::{FALLING_GRAVITY_COEFFICIENT, RISING_GRAVITY_COEFFICIENT};
use crate::state::{BodySnapshot, Facing};
use crate::steering::apply_steering;
use crate::vector_math::project_onto_plane;

/// Gravity multiplier for the given last-tick velocity.
///
/// Falling bodies (`velocity.y < 0`) get a larger coefficient than rising or
/// resting ones, so falls are faster than rises.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use sphere_controller::gravity_coefficient;
/// assert_eq!(gravity_coefficient(Vec3::new(0.0, -1.0, 0.0)), 4.0);
/// assert_eq!(gravity_coefficient(Vec3::ZERO), 2.0);
/// ```
#[must_use]
pub fn gravity_coefficient(velocity: Vec3) -> f32 {
    if velocity.y < 0.0 {
        FALLING_GRAVITY_COEFFICIENT
    } else {
        RISING_GRAVITY_COEFFICIENT
    }
}

/// Gravity stage.
///
/// Airborne bodies lose `gravity * coefficient` on `y`. Grounded bodies
/// gain `gravity * coefficient` along the contact normal: per component
/// with [`SurfaceModel::PerAxis`], or as the downward pull projected onto
/// the contact plane with [`SurfaceModel::TangentPlane`].
#[must_use]
pub fn apply_gravity(acceleration: Vec3, state: &BodySnapshot, config: &ControllerConfig) -> Vec3 {
    let pull = config.gravity * gravity_coefficient(state.velocity);
    if !state.grounded {
        return acceleration - Vec3::Y * pull;
    }
    match config.surface {
        SurfaceModel::PerAxis => acceleration + state.contact_normal * pull,
        SurfaceModel::TangentPlane => {
            acceleration + project_onto_plane(Vec3::NEG_Y * pull, state.contact_normal)
        }
    }
}

/// Jump stage.
///
/// Adds `jump_impulse / mass` to `y` when grounded and `fires` is set. The
/// caller decides whether a held button fires (see [`crate::JumpLatch`]).
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use sphere_controller::{apply_jump, BodySnapshot, ControllerConfig};
/// let config = ControllerConfig { mass: 10.0, jump_impulse: 2000.0, ..ControllerConfig::default() };
/// let grounded = BodySnapshot::grounded_on(Vec3::Y);
/// assert_eq!(apply_jump(Vec3::ZERO, &grounded, true, &config).y, 200.0);
/// ```
#[must_use]
pub fn apply_jump(
    acceleration: Vec3,
    state: &BodySnapshot,
    fires: bool,
    config: &ControllerConfig,
) -> Vec3 {
    if state.grounded && fires {
        acceleration + Vec3::Y * (config.jump_impulse / config.mass)
    } else {
        acceleration
    }
}

/// Normal force proxy used to scale friction.
#[must_use]
pub fn normal_force(contact_normal: Vec3, config: &ControllerConfig) -> f32 {
    contact_normal.y * config.mass * config.gravity
}

/// Friction stage.
///
/// Skipped while airborne or when last tick's speed is exactly zero.
/// Otherwise subtracts `velocity * friction_coefficient * normal_force`:
/// on all three axes with [`SurfaceModel::PerAxis`], or on the tangential
/// part of the velocity only with [`SurfaceModel::TangentPlane`].
#[must_use]
pub fn apply_friction(
    acceleration: Vec3,
    state: &BodySnapshot,
    config: &ControllerConfig,
) -> Vec3 {
    if !state.grounded || state.velocity.length() == 0.0 {
        return acceleration;
    }
    let damped = match config.surface {
        SurfaceModel::PerAxis => state.velocity,
        SurfaceModel::TangentPlane => project_onto_plane(state.velocity, state.contact_normal),
    };
    let friction =
        damped * config.friction_coefficient * normal_force(state.contact_normal, config);
    trace!("friction {friction:?}");
    acceleration - friction
}

/// Folds every stage over a zero accumulator in the fixed order.
#[must_use]
pub fn compose_acceleration(
    state: &BodySnapshot,
    facing: &Facing,
    movement: Vec2,
    jump_fires: bool,
    config: &ControllerConfig,
) -> Vec3 {
    let with_gravity = apply_gravity(Vec3::ZERO, state, config);
    let with_jump = apply_jump(with_gravity, state, jump_fires, config);
    let with_steering = apply_steering(
        with_jump,
        config.steering,
        movement,
        config.steering_force,
        facing,
    );
    apply_friction(with_steering, state, config)
}
