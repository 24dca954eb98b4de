//! Components, resources and events used by the Bevy adapter.

use bevy::prelude::*;

use crate::config::ControllerConfig;
use crate::controller::{SphereController, TickOutcome};
use crate::input::InputSample;

/// Host-owned collider state for a controlled sphere.
///
/// Host collision systems write `grounded`; the adapter derives `velocity`
/// from how far the entity actually moved during the fixed step.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct SphereBody {
    /// Velocity over the previous fixed step.
    pub velocity: Vec3,
    /// Whether the collider touches a surface.
    pub grounded: bool,
    /// Local centre of the collider; reported to the controller as the
    /// body's position.
    pub collider_center: Vec3,
    pub(crate) move_origin: Option<Vec3>,
}

impl SphereBody {
    /// A body that starts on the ground.
    #[must_use]
    pub fn grounded() -> Self {
        Self {
            grounded: true,
            ..Self::default()
        }
    }
}

/// Drives a [`SphereBody`] with its own [`SphereController`].
#[derive(Component, Debug, Clone, Default)]
pub struct SphereMotor {
    pub(crate) controller: SphereController,
    pub(crate) last_outcome: Option<TickOutcome>,
}

impl SphereMotor {
    /// Creates a motor with the given configuration.
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            controller: SphereController::new(config),
            last_outcome: None,
        }
    }

    /// The wrapped controller.
    #[must_use]
    pub const fn controller(&self) -> &SphereController {
        &self.controller
    }

    /// Outcome of the most recent fixed step, if any ran.
    #[must_use]
    pub const fn last_outcome(&self) -> Option<&TickOutcome> {
        self.last_outcome.as_ref()
    }
}

/// Input sample for the current fixed step.
///
/// The host overwrites this every step; `None` means no device is
/// connected and every motor skips the step.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerInput(pub Option<InputSample>);

/// Raised by the host when a controlled entity's collider touches a surface.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SurfaceContact {
    /// Entity carrying the [`SphereMotor`].
    pub entity: Entity,
    /// Surface normal pointing away from the touched surface.
    pub normal: Vec3,
}
