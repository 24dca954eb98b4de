//! Bevy host adapter for the sphere controller.
//!
//! This module re-exports the plugin, the components a controlled entity
//! carries, and the systems that adapt `Transform` to the controller's host
//! traits.

mod components;
mod plugin;
mod systems;

pub use components::{ControllerInput, SphereBody, SphereMotor, SurfaceContact};
pub use plugin::{SphereControllerPlugin, SphereMotorSet};
pub use systems::{derive_body_velocity_system, sphere_motor_system, TransformHost};
