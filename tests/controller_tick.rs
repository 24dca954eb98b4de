//! Behavioural tests for a full controller tick against scripted hosts.
use approx::assert_relative_eq;
use glam::{Vec2, Vec3};
use mockall::mock;
use rstest::{fixture, rstest};
use sphere_controller::{
    displacement, CharacterBody, ControllerConfig, InputSample, JumpTrigger, MoveDeltaMode,
    Orientation, SphereController, SteeringMode, TickOutcome,
};
use test_utils::host::RecordingBody;
use test_utils::physics::{reference_config, stick};
use test_utils::assert_vec3_near;

const DT: f32 = 0.02;

mock! {
    pub Body {}

    impl CharacterBody for Body {
        fn position(&self) -> Vec3;
        fn velocity(&self) -> Vec3;
        fn is_grounded(&self) -> bool;
        fn move_by(&mut self, delta: Vec3);
    }

    impl Orientation for Body {
        fn forward(&self) -> Vec3;
        fn right(&self) -> Vec3;
        fn rotate_yaw(&mut self, degrees: f32);
    }
}

/// Mock body at rest on the ground that expects to be read exactly once.
fn resting_mock() -> MockBody {
    let mut body = MockBody::new();
    body.expect_position().times(1).return_const(Vec3::ZERO);
    body.expect_velocity().times(1).return_const(Vec3::ZERO);
    body.expect_is_grounded().times(1).return_const(true);
    body.expect_forward().times(1).return_const(Vec3::Z);
    body.expect_right().times(1).return_const(Vec3::X);
    body
}

#[fixture]
fn controller() -> SphereController {
    let mut controller = SphereController::new(reference_config());
    controller.record_contact(Vec3::Y);
    controller
}

#[rstest]
fn missing_input_skips_without_touching_body(mut controller: SphereController) {
    let mut body = resting_mock();
    body.expect_move_by().never();
    body.expect_rotate_yaw().never();
    let outcome = controller.tick(&mut body, None, DT);
    assert_eq!(outcome, TickOutcome::Skipped);
}

#[rstest]
fn applied_tick_reads_state_once_and_moves_once() {
    let mut controller = SphereController::new(
        reference_config().with_steering(SteeringMode::FacingRelative),
    );
    let mut body = resting_mock();
    body.expect_move_by().times(1).return_const(());
    body.expect_rotate_yaw()
        .withf(|degrees| (*degrees - 1.0).abs() < 1e-6)
        .times(1)
        .return_const(());
    let sample = InputSample::moving(Vec2::Y).with_steering(Vec2::new(0.5, 0.0));
    let outcome = controller.tick(&mut body, Some(&sample), DT);
    assert!(!outcome.is_skipped());
}

#[rstest]
fn literal_move_is_displacement_minus_position(mut controller: SphereController) {
    let position = Vec3::new(1.0, 2.0, 3.0);
    let mut body = RecordingBody::grounded().with_position(position);
    let outcome = controller.tick(&mut body, Some(&stick((0.0, 1.0), false)), DT);

    let report = outcome.report().copied().expect("tick should apply");
    let expected_acc = Vec3::new(0.0, 2.0 * 9.81, 6.0);
    assert_vec3_near(report.acceleration, expected_acc, 1e-4);

    let d = displacement(Vec3::ZERO, report.acceleration, DT);
    assert_eq!(body.moves.len(), 1);
    assert_vec3_near(body.last_move().expect("one move"), d - position, 1e-6);
    assert!(body.rotations.is_empty());
}

#[rstest]
fn displacement_mode_moves_by_displacement() {
    let mut controller = SphereController::new(
        reference_config().with_move_delta(MoveDeltaMode::Displacement),
    );
    let mut body = RecordingBody::airborne().with_position(Vec3::new(40.0, 5.0, -7.0));
    controller.tick(&mut body, Some(&InputSample::default()), DT);
    let moved = body.last_move().expect("one move");
    assert_eq!(moved.x, 0.0);
    assert!(moved.y < 0.0);
    assert!(moved.y > -0.01);
}

#[rstest]
#[case::held(JumpTrigger::Held, [true, true, true])]
#[case::pressed(JumpTrigger::Pressed, [true, false, false])]
fn held_button_fires_per_trigger(#[case] trigger: JumpTrigger, #[case] expected: [bool; 3]) {
    let mut controller =
        SphereController::new(reference_config().with_jump_trigger(trigger));
    controller.record_contact(Vec3::Y);
    let mut body = RecordingBody::grounded();
    let jump = stick((0.0, 0.0), true);
    let fired: Vec<bool> = (0..3)
        .map(|_| {
            controller
                .tick(&mut body, Some(&jump), DT)
                .report()
                .is_some_and(|r| r.jump_fired)
        })
        .collect();
    assert_eq!(fired, expected.to_vec());
}

#[rstest]
fn held_jump_adds_impulse_every_grounded_tick(mut controller: SphereController) {
    let mut body = RecordingBody::grounded();
    let jump = stick((0.0, 0.0), true);
    for _ in 0..3 {
        let outcome = controller.tick(&mut body, Some(&jump), DT);
        let report = outcome.report().copied().expect("tick should apply");
        assert_relative_eq!(report.acceleration.y, 200.0 + 2.0 * 9.81, epsilon = 1e-3);
    }
}

#[rstest]
fn skipped_tick_leaves_jump_latch_alone() {
    let mut controller = SphereController::new(
        reference_config().with_jump_trigger(JumpTrigger::Pressed),
    );
    let mut body = RecordingBody::grounded();
    let jump = stick((0.0, 0.0), true);
    let first = controller.tick(&mut body, Some(&jump), DT);
    let skipped = controller.tick(&mut body, None, DT);
    let third = controller.tick(&mut body, Some(&jump), DT);
    assert!(first.report().is_some_and(|r| r.jump_fired));
    assert!(skipped.is_skipped());
    assert!(third.report().is_some_and(|r| !r.jump_fired));
    assert_eq!(body.moves.len(), 2);
}

#[rstest]
fn latest_contact_wins() {
    let mut controller = SphereController::new(reference_config());
    let slope = Vec3::new(0.6, 0.8, 0.0);
    controller.record_contact(Vec3::Y);
    controller.record_contact(Vec3::X);
    controller.record_contact(slope);
    let mut body = RecordingBody::grounded();
    let outcome = controller.tick(&mut body, Some(&InputSample::default()), DT);
    let report = outcome.report().copied().expect("tick should apply");
    assert_eq!(report.snapshot.contact_normal, slope);
}

#[rstest]
fn first_tick_sees_zero_normal() {
    let mut controller = SphereController::new(ControllerConfig::default());
    let mut body = RecordingBody::grounded();
    let outcome = controller.tick(&mut body, Some(&InputSample::default()), DT);
    let report = outcome.report().copied().expect("tick should apply");
    assert_eq!(report.snapshot.contact_normal, Vec3::ZERO);
    assert_eq!(report.acceleration, Vec3::ZERO);
}

#[rstest]
fn non_finite_contact_is_ignored(mut controller: SphereController) {
    controller.record_contact(Vec3::new(f32::NAN, 1.0, 0.0));
    assert_eq!(controller.contact_normal(), Vec3::Y);
}

#[rstest]
#[case::world(SteeringMode::WorldRelative, None)]
#[case::facing(SteeringMode::FacingRelative, Some(-1.5))]
fn yaw_only_rotates_in_facing_mode(
    #[case] mode: SteeringMode,
    #[case] expected: Option<f32>,
) {
    let mut controller = SphereController::new(reference_config().with_steering(mode));
    let mut body = RecordingBody::grounded();
    let sample = InputSample::default().with_steering(Vec2::new(-0.75, 0.0));
    let outcome = controller.tick(&mut body, Some(&sample), DT);
    let report = outcome.report().copied().expect("tick should apply");
    assert_eq!(report.yaw_delta, expected);
    assert_eq!(body.rotations, expected.into_iter().collect::<Vec<_>>());
}

#[rstest]
fn facing_mode_without_steering_stick_rotates_by_zero() {
    let mut controller = SphereController::new(
        reference_config().with_steering(SteeringMode::FacingRelative),
    );
    let mut body = RecordingBody::grounded();
    controller.tick(&mut body, Some(&InputSample::moving(Vec2::Y)), DT);
    assert_eq!(body.rotations, vec![0.0]);
}

#[rstest]
fn facing_mode_steers_along_the_body_forward() {
    let mut controller = SphereController::new(
        reference_config()
            .with_steering(SteeringMode::FacingRelative)
            .with_move_delta(MoveDeltaMode::Displacement),
    );
    let mut body = RecordingBody::airborne().with_yaw(180.0);
    let outcome = controller.tick(&mut body, Some(&InputSample::moving(Vec2::Y)), DT);
    let report = outcome.report().copied().expect("tick should apply");
    assert_relative_eq!(report.acceleration.z, -6.0, epsilon = 1e-4);
    assert_relative_eq!(report.acceleration.x, 0.0, epsilon = 1e-4);
}
