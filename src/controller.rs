//! The per-tick sphere controller.
//!
//! [`SphereController`] owns the contact mailbox and the jump latch and runs
//! one fixed sequence per tick: capture, compose, integrate, apply.

use glam::Vec3;
use log::{debug, trace};

use crate::config::{ControllerConfig, SteeringMode};
use crate::contact::ContactMailbox;
use crate::host::{CharacterBody, Orientation};
use crate::input::{InputSample, JumpLatch};
use crate::integrator::{integrate, Integration};
use crate::physics::compose_acceleration;
use crate::state::{BodySnapshot, Facing};
use crate::steering::yaw_delta;

/// What one tick produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No input source was available; nothing moved or rotated.
    Skipped,
    /// The body was moved (and possibly rotated).
    Applied(TickReport),
}

impl TickOutcome {
    /// Returns the report if the tick was applied.
    #[must_use]
    pub const fn report(&self) -> Option<&TickReport> {
        match self {
            Self::Skipped => None,
            Self::Applied(report) => Some(report),
        }
    }

    /// Whether the tick was skipped.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// Intermediate and final values of an applied tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// State captured at the start of the tick.
    pub snapshot: BodySnapshot,
    /// Net acceleration after every force stage.
    pub acceleration: Vec3,
    /// Whether the jump stage saw a firing jump.
    pub jump_fired: bool,
    /// Velocity, displacement and move delta.
    pub integration: Integration,
    /// Yaw applied this tick in degrees; `None` outside facing-relative mode.
    pub yaw_delta: Option<f32>,
}

/// Integrates one controlled body per tick.
#[derive(Debug, Clone, Default)]
pub struct SphereController {
    config: ControllerConfig,
    contact: ContactMailbox,
    jump: JumpLatch,
}

impl SphereController {
    /// Creates a controller with the given configuration.
    ///
    /// `config.mass` must be strictly positive; see
    /// [`ControllerConfig::validate`].
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        debug_assert!(config.mass > 0.0, "mass must be positive");
        Self {
            config,
            contact: ContactMailbox::new(),
            jump: JumpLatch::new(),
        }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Contact normal the next tick will read.
    #[must_use]
    pub const fn contact_normal(&self) -> Vec3 {
        self.contact.latest()
    }

    /// Collision callback entry point; the latest normal wins.
    pub fn record_contact(&mut self, normal: Vec3) {
        self.contact.record(normal);
    }

    /// Runs one tick against `body`.
    ///
    /// A `None` input means no device is connected: the tick is skipped with
    /// no move, no rotation and no change to the jump latch.
    pub fn tick<B>(&mut self, body: &mut B, input: Option<&InputSample>, dt: f32) -> TickOutcome
    where
        B: CharacterBody + Orientation + ?Sized,
    {
        let snapshot = BodySnapshot::capture(&*body, &self.contact);
        let facing = Facing::capture(&*body);

        let Some(sample) = input else {
            debug!("no input source available; skipping tick");
            return TickOutcome::Skipped;
        };

        let jump_fired = self.jump.update(sample.jump, self.config.jump_trigger);
        let acceleration = compose_acceleration(
            &snapshot,
            &facing,
            sample.movement,
            jump_fired,
            &self.config,
        );
        let integration = integrate(
            snapshot.position,
            snapshot.velocity,
            acceleration,
            dt,
            self.config.move_delta,
        );

        body.move_by(integration.move_delta);

        let yaw = match self.config.steering {
            SteeringMode::WorldRelative => None,
            SteeringMode::FacingRelative => {
                let degrees = yaw_delta(sample.steering, self.config.steering_rotation_rate);
                body.rotate_yaw(degrees);
                Some(degrees)
            }
        };

        let report = TickReport {
            snapshot,
            acceleration,
            jump_fired,
            integration,
            yaw_delta: yaw,
        };
        trace!("tick applied: {report:?}");
        TickOutcome::Applied(report)
    }
}
