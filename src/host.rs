//! Interfaces the host environment implements for the controlled body.
//!
//! The controller never owns the body. It reads a snapshot through these
//! traits at the start of each tick and writes back exactly one move and,
//! in the facing-relative variant, one yaw rotation.

use glam::Vec3;

/// The collider-backed body being steered.
pub trait CharacterBody {
    /// Current position as the host reports it.
    fn position(&self) -> Vec3;
    /// Velocity the host derived from the previous move.
    fn velocity(&self) -> Vec3;
    /// Whether the collider currently touches a surface.
    fn is_grounded(&self) -> bool;
    /// Displaces the body; the host re-derives velocity and grounded state.
    fn move_by(&mut self, delta: Vec3);
}

/// Facing of the controlled body.
pub trait Orientation {
    /// Body forward direction in world space.
    fn forward(&self) -> Vec3;
    /// Body right direction in world space.
    fn right(&self) -> Vec3;
    /// Applies an incremental rotation of `degrees` about world up.
    fn rotate_yaw(&mut self, degrees: f32);
}
