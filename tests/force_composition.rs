//! Unit tests for the force composition stages.
//! Covers the gravity asymmetry, jump impulse, friction skips and slope models.
use approx::assert_relative_eq;
use glam::{Vec2, Vec3};
use rstest::rstest;
use sphere_controller::{
    apply_friction, apply_gravity, apply_jump, compose_acceleration, BodySnapshot,
    ControllerConfig, Facing, SurfaceModel,
};
use test_utils::physics::{airborne, grounded, reference_config};

#[rstest]
fn grounded_jump_adds_impulse_over_mass() {
    let config = reference_config();
    let state = grounded((0.0, 1.0, 0.0), (0.0, 0.0, 0.0));
    let acc = apply_jump(Vec3::ZERO, &state, true, &config);
    assert_relative_eq!(acc.y, 200.0);
    assert_eq!(acc.x, 0.0);
    assert_eq!(acc.z, 0.0);
}

#[rstest]
#[case::released(true, false)]
#[case::airborne(false, true)]
fn jump_needs_ground_and_button(#[case] on_ground: bool, #[case] fires: bool) {
    let config = reference_config();
    let state = if on_ground {
        grounded((0.0, 1.0, 0.0), (0.0, 0.0, 0.0))
    } else {
        airborne((0.0, 0.0, 0.0))
    };
    assert_eq!(apply_jump(Vec3::ZERO, &state, fires, &config), Vec3::ZERO);
}

#[rstest]
#[case::small_gravity(1.0)]
#[case::earth(9.81)]
#[case::heavy(30.0)]
fn falling_gravity_is_double_rising_gravity(#[case] gravity: f32) {
    let config = ControllerConfig {
        gravity,
        ..ControllerConfig::default()
    };
    let falling = apply_gravity(Vec3::ZERO, &airborne((0.0, -0.5, 0.0)), &config);
    let rising = apply_gravity(Vec3::ZERO, &airborne((0.0, 0.5, 0.0)), &config);
    let resting = apply_gravity(Vec3::ZERO, &airborne((0.0, 0.0, 0.0)), &config);
    assert_relative_eq!(falling.y, 2.0 * rising.y);
    assert_eq!(rising, resting);
    assert!(falling.y < 0.0);
}

#[rstest]
#[case::grounded_flat(grounded((0.0, 1.0, 0.0), (0.0, 0.0, 0.0)))]
#[case::grounded_slope(grounded((0.6, 0.8, 0.0), (0.0, 0.0, 0.0)))]
#[case::grounded_no_contact_yet(grounded((0.0, 0.0, 0.0), (0.0, 0.0, 0.0)))]
#[case::airborne(airborne((0.0, 0.0, 0.0)))]
fn friction_leaves_acceleration_alone_at_zero_velocity(#[case] state: BodySnapshot) {
    let acc = Vec3::new(1.5, -2.0, 3.0);
    for surface in [SurfaceModel::PerAxis, SurfaceModel::TangentPlane] {
        let config = ControllerConfig::default().with_surface(surface);
        assert_eq!(apply_friction(acc, &state, &config), acc);
    }
}

#[rstest]
#[case::slow((0.1, 0.0, 0.0))]
#[case::fast((30.0, -12.0, 4.0))]
fn friction_is_skipped_while_airborne(#[case] velocity: (f32, f32, f32)) {
    let config = ControllerConfig {
        friction_coefficient: 5.0,
        ..ControllerConfig::default()
    };
    let acc = Vec3::new(0.0, -19.62, 6.0);
    assert_eq!(apply_friction(acc, &airborne(velocity), &config), acc);
}

#[rstest]
fn per_axis_friction_damps_every_axis() {
    let config = reference_config();
    let state = grounded((0.0, 1.0, 0.0), (2.0, -1.0, 0.5));
    let acc = apply_friction(Vec3::ZERO, &state, &config);
    let scale = config.friction_coefficient * config.mass * config.gravity;
    assert_relative_eq!(acc.x, -2.0 * scale, epsilon = 1e-5);
    assert_relative_eq!(acc.y, 1.0 * scale, epsilon = 1e-5);
    assert_relative_eq!(acc.z, -0.5 * scale, epsilon = 1e-5);
}

#[rstest]
fn tangent_friction_spares_the_normal_component() {
    let config = reference_config().with_surface(SurfaceModel::TangentPlane);
    let state = grounded((0.0, 1.0, 0.0), (2.0, -1.0, 0.0));
    let acc = apply_friction(Vec3::ZERO, &state, &config);
    assert!(acc.x < 0.0);
    assert_eq!(acc.y, 0.0);
}

#[rstest]
fn per_axis_gravity_pushes_up_on_flat_ground() {
    let config = ControllerConfig::default();
    let acc = apply_gravity(Vec3::ZERO, &grounded((0.0, 1.0, 0.0), (0.0, 0.0, 0.0)), &config);
    assert_relative_eq!(acc.y, 2.0 * config.gravity);
}

#[rstest]
fn tangent_gravity_vanishes_on_flat_ground() {
    let config = ControllerConfig::default().with_surface(SurfaceModel::TangentPlane);
    let acc = apply_gravity(Vec3::ZERO, &grounded((0.0, 1.0, 0.0), (0.0, 0.0, 0.0)), &config);
    assert_relative_eq!(acc.length(), 0.0);
}

#[rstest]
fn tangent_gravity_slides_downhill() {
    let config = ControllerConfig::default().with_surface(SurfaceModel::TangentPlane);
    let normal = Vec3::new(0.6, 0.8, 0.0);
    let acc = apply_gravity(Vec3::ZERO, &grounded(normal, (0.0, 0.0, 0.0)), &config);
    let pull = 2.0 * config.gravity;
    assert_relative_eq!(acc.x, 0.48 * pull, epsilon = 1e-4);
    assert_relative_eq!(acc.y, -0.36 * pull, epsilon = 1e-4);
    assert_relative_eq!(acc.dot(normal), 0.0, epsilon = 1e-4);
}

#[rstest]
fn composition_sums_every_stage_in_order() {
    let config = reference_config();
    let state = grounded((0.0, 1.0, 0.0), (1.0, 0.0, 0.0));
    let acc = compose_acceleration(&state, &Facing::IDENTITY, Vec2::Y, true, &config);
    let gravity = 2.0 * config.gravity;
    let friction = config.friction_coefficient * config.mass * config.gravity;
    assert_relative_eq!(acc.x, -friction, epsilon = 1e-4);
    assert_relative_eq!(acc.y, gravity + 200.0, epsilon = 1e-3);
    assert_relative_eq!(acc.z, config.steering_force, epsilon = 1e-5);
}

#[rstest]
fn friction_reads_last_velocity_not_the_accumulator() {
    let config = reference_config();
    let still = grounded((0.0, 1.0, 0.0), (0.0, 0.0, 0.0));
    let huge_steering = Vec2::new(1.0, 0.0);
    let acc = compose_acceleration(&still, &Facing::IDENTITY, huge_steering, false, &config);
    assert_relative_eq!(acc.x, config.steering_force);
}
