//! Basic vector math helper functions.
//! Angles, planar rotation and plane projection used by the force stages.
use glam::{Vec2, Vec3};

/// Direction the controller treats as "world forward".
pub const WORLD_FORWARD: Vec3 = Vec3::Z;

/// Lengths below this are treated as degenerate when measuring angles.
const ANGLE_EPSILON: f32 = 1e-15;

/// Returns the unsigned angle between two vectors in degrees.
///
/// The result lies in `[0, 180]`. If either vector is degenerate (zero or
/// non-finite length) the angle is reported as `0.0`.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use sphere_controller::vector_math::angle_degrees;
/// let angle = angle_degrees(Vec3::X, Vec3::Z);
/// assert!((angle - 90.0).abs() < 1e-4);
/// assert_eq!(angle_degrees(Vec3::ZERO, Vec3::Z), 0.0);
/// ```
#[must_use]
pub fn angle_degrees(from: Vec3, to: Vec3) -> f32 {
    let denominator = (from.length_squared() * to.length_squared()).sqrt();
    if !denominator.is_finite() || denominator < ANGLE_EPSILON {
        return 0.0;
    }
    let cosine = (from.dot(to) / denominator).clamp(-1.0, 1.0);
    cosine.acos().to_degrees()
}

/// Rotates a planar vector counter-clockwise by `degrees`.
///
/// Uses the standard rotation matrix
/// `[cos -sin; sin cos]`.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use sphere_controller::vector_math::rotate_degrees;
/// let rotated = rotate_degrees(Vec2::X, 90.0);
/// assert!((rotated - Vec2::Y).length() < 1e-6);
/// ```
#[must_use]
pub fn rotate_degrees(vector: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(
        vector.x * cos - vector.y * sin,
        vector.x * sin + vector.y * cos,
    )
}

/// Removes the component of `vector` along `normal`.
///
/// `normal` is expected to be unit length. A zero normal leaves the vector
/// unchanged.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use sphere_controller::vector_math::project_onto_plane;
/// let tangent = project_onto_plane(Vec3::new(1.0, -2.0, 3.0), Vec3::Y);
/// assert_eq!(tangent, Vec3::new(1.0, 0.0, 3.0));
/// ```
#[must_use]
pub fn project_onto_plane(vector: Vec3, normal: Vec3) -> Vec3 {
    vector - vector.dot(normal) * normal
}

/// Lifts a planar `(x, y)` vector onto the horizontal `x`/`z` plane.
#[must_use]
pub const fn horizontal(planar: Vec2) -> Vec3 {
    Vec3::new(planar.x, 0.0, planar.y)
}
