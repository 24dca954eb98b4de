//! Minimal host: a sphere moving over an infinite horizontal plane.
//!
//! `FlatGroundBody` plays the role of the engine's character collider for
//! the demo binary and tests. It keeps world position separately from the
//! position it reports to the controller, which is the collider's local
//! centre offset.

use glam::Vec3;

use crate::host::{CharacterBody, Orientation};
use crate::state::Facing;

/// Upward normal reported for every ground contact.
pub const GROUND_NORMAL: Vec3 = Vec3::Y;

/// A sphere collider resting on or flying above a ground plane.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatGroundBody {
    world_position: Vec3,
    velocity: Vec3,
    yaw_degrees: f32,
    radius: f32,
    ground_height: f32,
    collider_center: Vec3,
    grounded: bool,
    dt: f32,
    pending_contact: Option<Vec3>,
}

impl FlatGroundBody {
    /// Places a sphere of `radius` at `world_position` above a plane at
    /// `ground_height`; `dt` is the tick length used to derive velocity.
    #[must_use]
    pub fn new(world_position: Vec3, radius: f32, ground_height: f32, dt: f32) -> Self {
        let mut body = Self {
            world_position,
            velocity: Vec3::ZERO,
            yaw_degrees: 0.0,
            radius,
            ground_height,
            collider_center: Vec3::ZERO,
            grounded: false,
            dt,
            pending_contact: None,
        };
        body.resolve_ground();
        body
    }

    /// Returns a copy whose collider centre is offset by `center`.
    #[must_use]
    pub const fn with_collider_center(mut self, center: Vec3) -> Self {
        self.collider_center = center;
        self
    }

    /// Position in the world.
    #[must_use]
    pub const fn world_position(&self) -> Vec3 {
        self.world_position
    }

    /// Current yaw in degrees.
    #[must_use]
    pub const fn yaw_degrees(&self) -> f32 {
        self.yaw_degrees
    }

    /// Takes the contact raised by the last move, if any.
    ///
    /// Hosts forward this to [`crate::SphereController::record_contact`].
    pub const fn take_contact(&mut self) -> Option<Vec3> {
        self.pending_contact.take()
    }

    fn resolve_ground(&mut self) {
        let floor = self.ground_height + self.radius;
        if self.world_position.y <= floor {
            self.world_position.y = floor;
            self.grounded = true;
            self.pending_contact = Some(GROUND_NORMAL);
        } else {
            self.grounded = false;
        }
    }
}

impl CharacterBody for FlatGroundBody {
    fn position(&self) -> Vec3 {
        self.collider_center
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, delta: Vec3) {
        let start = self.world_position;
        self.world_position += delta;
        self.resolve_ground();
        self.velocity = if self.dt > 0.0 {
            (self.world_position - start) / self.dt
        } else {
            Vec3::ZERO
        };
    }
}

impl Orientation for FlatGroundBody {
    fn forward(&self) -> Vec3 {
        Facing::from_yaw_degrees(self.yaw_degrees).forward
    }

    fn right(&self) -> Vec3 {
        Facing::from_yaw_degrees(self.yaw_degrees).right
    }

    fn rotate_yaw(&mut self, degrees: f32) {
        self.yaw_degrees = (self.yaw_degrees + degrees).rem_euclid(360.0);
    }
}
