//! Convenience constructors for controller state used in tests.

use glam::{Vec2, Vec3};
use sphere_controller::{BodySnapshot, ControllerConfig, InputSample};

#[derive(Clone, Copy, Debug)]
pub struct Coords3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Coords3D {
    /// Create new 3D coordinates.
    ///
    /// # Examples
    /// ```
    /// use test_utils::physics::Coords3D;
    /// let c = Coords3D::new(1.0, 2.0, 3.0);
    /// assert_eq!(c.x, 1.0);
    /// ```
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<(f32, f32, f32)> for Coords3D {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3> for Coords3D {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Coords3D> for Vec3 {
    fn from(c: Coords3D) -> Self {
        Self::new(c.x, c.y, c.z)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Stick {
    pub x: f32,
    pub y: f32,
}

impl From<(f32, f32)> for Stick {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Stick> for Vec2 {
    fn from(s: Stick) -> Self {
        Self::new(s.x, s.y)
    }
}

/// Grounded snapshot with the given contact normal and last-tick velocity.
///
/// # Examples
/// ```rust
/// use test_utils::physics::grounded;
/// let s = grounded((0.0, 1.0, 0.0), (2.0, 0.0, 0.0));
/// assert!(s.grounded);
/// assert_eq!(s.velocity.x, 2.0);
/// ```
pub fn grounded<N, V>(normal: N, velocity: V) -> BodySnapshot
where
    N: Into<Coords3D>,
    V: Into<Coords3D>,
{
    let normal: Coords3D = normal.into();
    let velocity: Coords3D = velocity.into();
    BodySnapshot::grounded_on(normal.into()).with_velocity(velocity.into())
}

/// Airborne snapshot with the given last-tick velocity and a stale normal.
///
/// # Examples
/// ```rust
/// use test_utils::physics::airborne;
/// let s = airborne((0.0, -3.0, 0.0));
/// assert!(!s.grounded);
/// assert_eq!(s.velocity.y, -3.0);
/// ```
pub fn airborne<V>(velocity: V) -> BodySnapshot
where
    V: Into<Coords3D>,
{
    let velocity: Coords3D = velocity.into();
    let mut snapshot = BodySnapshot::airborne().with_velocity(velocity.into());
    snapshot.contact_normal = Vec3::Y;
    snapshot
}

/// Input sample holding the movement stick and jump state.
///
/// # Examples
/// ```rust
/// use test_utils::physics::stick;
/// let s = stick((0.0, 1.0), true);
/// assert!(s.jump);
/// assert!(s.steering.is_none());
/// ```
pub fn stick<S>(movement: S, jump: bool) -> InputSample
where
    S: Into<Stick>,
{
    let movement: Stick = movement.into();
    InputSample::moving(movement.into()).with_jump(jump)
}

/// Config with the tunables used across the behavioural tests: mass 10,
/// jump impulse 2000, everything else default.
///
/// # Examples
/// ```rust
/// use test_utils::physics::reference_config;
/// let c = reference_config();
/// assert_eq!(c.jump_impulse / c.mass, 200.0);
/// ```
pub fn reference_config() -> ControllerConfig {
    ControllerConfig {
        mass: 10.0,
        jump_impulse: 2000.0,
        ..ControllerConfig::default()
    }
}
