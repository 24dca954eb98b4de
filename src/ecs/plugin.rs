//! Bevy plugin wiring the sphere controller into the fixed schedule.

use bevy::prelude::*;

use super::systems::record_surface_contact;
use super::{derive_body_velocity_system, sphere_motor_system, ControllerInput};

/// Ordering label for the controller's fixed-step system.
///
/// Host collision systems that correct translation or update grounded state
/// should run `.after(SphereMotorSet::Integrate)`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SphereMotorSet {
    /// Runs every motor's tick.
    Integrate,
}

/// Bevy plugin installing the controller's resource, observer and systems.
#[derive(Default)]
pub struct SphereControllerPlugin;

impl Plugin for SphereControllerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerInput>();
        app.add_observer(record_surface_contact);
        app.add_systems(
            FixedUpdate,
            sphere_motor_system.in_set(SphereMotorSet::Integrate),
        );
        app.add_systems(FixedPostUpdate, derive_body_velocity_system);
    }
}
