//! Tick-start snapshots of the host body.
//!
//! Force stages read only these snapshots, never the live host state, so a
//! host that mutates the body mid-tick cannot change the outcome.

use glam::Vec3;

use crate::contact::ContactMailbox;
use crate::host::{CharacterBody, Orientation};

/// Position, velocity and contact state captured at the start of a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodySnapshot {
    /// Position reported by the host.
    pub position: Vec3,
    /// Velocity reported by the host, i.e. last tick's velocity.
    pub velocity: Vec3,
    /// Whether the body touched a surface.
    pub grounded: bool,
    /// Latest normal from the contact mailbox; may be stale while airborne.
    pub contact_normal: Vec3,
}

impl BodySnapshot {
    /// Reads the host body and the mailbox.
    #[must_use]
    pub fn capture<B>(body: &B, mailbox: &ContactMailbox) -> Self
    where
        B: CharacterBody + ?Sized,
    {
        Self {
            position: body.position(),
            velocity: body.velocity(),
            grounded: body.is_grounded(),
            contact_normal: mailbox.latest(),
        }
    }

    /// A grounded snapshot at rest on a surface with the given normal.
    #[must_use]
    pub const fn grounded_on(normal: Vec3) -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            grounded: true,
            contact_normal: normal,
        }
    }

    /// An airborne snapshot at rest.
    #[must_use]
    pub const fn airborne() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            grounded: false,
            contact_normal: Vec3::ZERO,
        }
    }

    /// Returns a copy with the given velocity.
    #[must_use]
    pub const fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Returns a copy with the given position.
    #[must_use]
    pub const fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}

/// Forward and right directions captured at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facing {
    /// Body forward.
    pub forward: Vec3,
    /// Body right.
    pub right: Vec3,
}

impl Default for Facing {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Facing {
    /// Facing aligned with the world axes: forward `+Z`, right `+X`.
    pub const IDENTITY: Self = Self {
        forward: Vec3::Z,
        right: Vec3::X,
    };

    /// Reads the host orientation.
    #[must_use]
    pub fn capture<O>(orientation: &O) -> Self
    where
        O: Orientation + ?Sized,
    {
        Self {
            forward: orientation.forward(),
            right: orientation.right(),
        }
    }

    /// Facing after yawing `degrees` from [`Facing::IDENTITY`].
    ///
    /// Positive yaw turns forward from `+Z` towards `+X`.
    #[must_use]
    pub fn from_yaw_degrees(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            forward: Vec3::new(sin, 0.0, cos),
            right: Vec3::new(cos, 0.0, -sin),
        }
    }
}
