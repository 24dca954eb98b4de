//! Headless Bevy apps with the controller plugin installed.

use bevy::prelude::*;
use sphere_controller::{
    ControllerConfig, ControllerInput, InputSample, SphereBody, SphereControllerPlugin,
    SphereMotor,
};

/// Fixed rate used by test apps.
pub const TEST_HZ: f64 = 50.0;

/// Builder for test `App` instances driving one controlled sphere.
pub struct SphereTestAppBuilder {
    app: App,
}

impl Default for SphereTestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SphereTestAppBuilder {
    /// Create a new test app with `MinimalPlugins` and the controller plugin.
    #[must_use]
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(SphereControllerPlugin);
        app.insert_resource(Time::<Fixed>::from_hz(TEST_HZ));
        Self { app }
    }

    /// Spawn a controlled sphere at `translation`.
    #[must_use]
    pub fn spawn_sphere(
        mut self,
        translation: Vec3,
        body: SphereBody,
        config: ControllerConfig,
    ) -> (Self, Entity) {
        let entity = self
            .app
            .world_mut()
            .spawn((
                Transform::from_translation(translation),
                body,
                SphereMotor::new(config),
            ))
            .id();
        (self, entity)
    }

    /// Build and return the configured `App`.
    #[must_use]
    pub fn build(self) -> App {
        self.app
    }
}

/// Sets the input sample every motor sees on the next step.
pub fn set_input(app: &mut App, sample: Option<InputSample>) {
    app.world_mut().resource_mut::<ControllerInput>().0 = sample;
}

/// Runs one fixed step: the controller tick, then velocity derivation.
pub fn fixed_step(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
    app.world_mut().run_schedule(FixedPostUpdate);
}

/// Seconds per fixed step in test apps.
pub fn fixed_dt(app: &App) -> f32 {
    app.world().resource::<Time<Fixed>>().timestep().as_secs_f32()
}
