//! A host body that records what the controller asked of it.

use glam::Vec3;
use sphere_controller::{CharacterBody, Facing, Orientation};

/// Scripted body: reports fixed state and records moves and rotations.
#[derive(Clone, Debug, Default)]
pub struct RecordingBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub grounded: bool,
    pub facing: Facing,
    pub moves: Vec<Vec3>,
    pub rotations: Vec<f32>,
}

impl RecordingBody {
    /// A grounded body at rest facing world forward.
    ///
    /// # Examples
    /// ```
    /// use test_utils::host::RecordingBody;
    /// let body = RecordingBody::grounded();
    /// assert!(body.grounded);
    /// assert!(body.moves.is_empty());
    /// ```
    pub fn grounded() -> Self {
        Self {
            grounded: true,
            ..Self::default()
        }
    }

    /// An airborne body at rest facing world forward.
    pub fn airborne() -> Self {
        Self::default()
    }

    /// Returns a copy reporting `velocity`.
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Returns a copy reporting `position`.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Returns a copy facing `degrees` of yaw from world forward.
    pub fn with_yaw(mut self, degrees: f32) -> Self {
        self.facing = Facing::from_yaw_degrees(degrees);
        self
    }

    /// The most recent move, if any.
    pub fn last_move(&self) -> Option<Vec3> {
        self.moves.last().copied()
    }
}

impl CharacterBody for RecordingBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, delta: Vec3) {
        self.moves.push(delta);
    }
}

impl Orientation for RecordingBody {
    fn forward(&self) -> Vec3 {
        self.facing.forward
    }

    fn right(&self) -> Vec3 {
        self.facing.right
    }

    fn rotate_yaw(&mut self, degrees: f32) {
        self.rotations.push(degrees);
    }
}
