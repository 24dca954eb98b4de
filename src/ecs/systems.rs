//! Systems bridging Bevy transforms with the sphere controller.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::warn;

use crate::host::{CharacterBody, Orientation};

use super::{ControllerInput, SphereBody, SphereMotor, SurfaceContact};

/// Presents a `Transform` and its [`SphereBody`] through the host traits.
///
/// Controller space treats local `+Z` as forward and local `+X` as right.
pub struct TransformHost<'a> {
    transform: &'a mut Transform,
    body: &'a mut SphereBody,
}

impl<'a> TransformHost<'a> {
    /// Wraps a transform and its body state.
    pub const fn new(transform: &'a mut Transform, body: &'a mut SphereBody) -> Self {
        Self { transform, body }
    }
}

impl CharacterBody for TransformHost<'_> {
    fn position(&self) -> Vec3 {
        self.body.collider_center
    }

    fn velocity(&self) -> Vec3 {
        self.body.velocity
    }

    fn is_grounded(&self) -> bool {
        self.body.grounded
    }

    fn move_by(&mut self, delta: Vec3) {
        self.body.move_origin = Some(self.transform.translation);
        self.transform.translation += delta;
    }
}

impl Orientation for TransformHost<'_> {
    fn forward(&self) -> Vec3 {
        self.transform.rotation * Vec3::Z
    }

    fn right(&self) -> Vec3 {
        self.transform.rotation * Vec3::X
    }

    fn rotate_yaw(&mut self, degrees: f32) {
        self.transform.rotate_y(degrees.to_radians());
    }
}

/// Ticks every motor once per fixed step.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems receive resources by value."
)]
pub fn sphere_motor_system(
    time: Res<Time<Fixed>>,
    input: Res<ControllerInput>,
    mut motors: Query<(&mut Transform, &mut SphereBody, &mut SphereMotor)>,
) {
    let dt = time.timestep().as_secs_f32();
    for (mut transform, mut body, mut motor) in &mut motors {
        let mut host = TransformHost::new(&mut transform, &mut body);
        let outcome = motor.controller.tick(&mut host, input.0.as_ref(), dt);
        motor.last_outcome = Some(outcome);
    }
}

/// Re-derives each moved body's velocity from its actual displacement.
///
/// Runs after the fixed step so host collision systems can correct the
/// translation first.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems receive resources by value."
)]
pub fn derive_body_velocity_system(
    time: Res<Time<Fixed>>,
    mut bodies: Query<(&Transform, &mut SphereBody)>,
) {
    let dt = time.timestep().as_secs_f32();
    for (transform, mut body) in &mut bodies {
        let Some(origin) = body.move_origin.take() else {
            continue;
        };
        body.velocity = if dt > 0.0 {
            (transform.translation - origin) / dt
        } else {
            Vec3::ZERO
        };
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
pub(crate) fn record_surface_contact(
    event: On<SurfaceContact>,
    mut motors: Query<&mut SphereMotor>,
) {
    let SurfaceContact { entity, normal } = *event.event();
    match motors.get_mut(entity) {
        Ok(mut motor) => motor.controller.record_contact(normal),
        Err(_) => warn!("surface contact for {entity:?} without a SphereMotor ignored"),
    }
}
