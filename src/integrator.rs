//! Velocity and displacement integration.
//!
//! The controller never writes velocity back to the host. It integrates a
//! velocity estimate only to derive this tick's displacement; the host
//! reports the resulting velocity at the start of the next tick.

use glam::Vec3;

use crate::config::MoveDeltaMode;

/// Semi-implicit Euler velocity step: `v0 + a * dt`.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use sphere_controller::next_velocity;
/// let v = next_velocity(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, -10.0, 0.0), 0.5);
/// assert_eq!(v, Vec3::new(1.0, -5.0, 0.0));
/// ```
#[must_use]
pub fn next_velocity(last_velocity: Vec3, acceleration: Vec3, dt: f32) -> Vec3 {
    last_velocity + acceleration * dt
}

/// Displacement over one tick using the average of start and end velocity.
///
/// This is a per-tick offset, not an absolute position.
#[must_use]
pub fn displacement(last_velocity: Vec3, acceleration: Vec3, dt: f32) -> Vec3 {
    0.5 * (last_velocity + next_velocity(last_velocity, acceleration, dt)) * dt
}

/// Delta handed to the host's `move_by`.
///
/// [`MoveDeltaMode::SubtractPosition`] subtracts the tick-start position from
/// the displacement, mixing an offset with an absolute position.
/// [`MoveDeltaMode::Displacement`] passes the displacement through.
#[must_use]
pub fn move_delta(displacement: Vec3, last_position: Vec3, mode: MoveDeltaMode) -> Vec3 {
    match mode {
        MoveDeltaMode::SubtractPosition => displacement - last_position,
        MoveDeltaMode::Displacement => displacement,
    }
}

/// Everything the integrator derived in one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Integration {
    /// Velocity estimate at the end of the tick.
    pub next_velocity: Vec3,
    /// Trapezoidal displacement.
    pub displacement: Vec3,
    /// Delta to hand to the host.
    pub move_delta: Vec3,
}

/// Runs the full integrator for one tick.
#[must_use]
pub fn integrate(
    last_position: Vec3,
    last_velocity: Vec3,
    acceleration: Vec3,
    dt: f32,
    mode: MoveDeltaMode,
) -> Integration {
    let next_velocity = next_velocity(last_velocity, acceleration, dt);
    let displacement = 0.5 * (last_velocity + next_velocity) * dt;
    Integration {
        next_velocity,
        displacement,
        move_delta: move_delta(displacement, last_position, mode),
    }
}
