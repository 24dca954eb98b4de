#![cfg_attr(docsrs, feature(doc_cfg))]
//! Per-tick physics integrator for a sphere-shaped player character.
//!
//! Each fixed step the [`SphereController`] snapshots the host body, folds
//! gravity, jump, steering and friction into a net acceleration, integrates
//! it into a displacement, and hands the host exactly one move (plus a yaw
//! rotation in the facing-relative variant).
pub mod config;
pub mod constants;
pub mod contact;
pub mod controller;
pub mod ecs;
pub mod flat_ground;
pub mod host;
pub mod input;
pub mod integrator;
pub mod logging;
pub mod physics;
pub mod state;
pub mod steering;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use config::{
    ConfigError, ControllerConfig, JumpTrigger, MoveDeltaMode, SteeringMode, SurfaceModel,
};
pub use contact::ContactMailbox;
pub use controller::{SphereController, TickOutcome, TickReport};
pub use ecs::{ControllerInput, SphereBody, SphereControllerPlugin, SphereMotor, SurfaceContact};
pub use flat_ground::FlatGroundBody;
pub use host::{CharacterBody, Orientation};
pub use input::{InputSample, InputSource, JumpLatch, ScriptedInput};
pub use integrator::{displacement, integrate, move_delta, next_velocity, Integration};
pub use logging::init as init_logging;
pub use physics::{
    apply_friction, apply_gravity, apply_jump, compose_acceleration, gravity_coefficient,
    normal_force,
};
pub use state::{BodySnapshot, Facing};
pub use steering::{apply_steering, steering_acceleration, yaw_delta};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use sphere_controller::prelude::*;
    //! ```

    pub use crate::CharacterBody;
    pub use crate::ControllerConfig;
    pub use crate::InputSample;
    pub use crate::Orientation;
    pub use crate::SphereController;
    pub use crate::SphereControllerPlugin;
    pub use crate::TickOutcome;
    pub use glam::{Vec2, Vec3};
}
