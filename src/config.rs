//! Controller configuration.
//!
//! [`ControllerConfig`] bundles the scalar tunables with the policy switches
//! that select between the literal behaviour and its corrected variants. A
//! config is immutable once handed to a [`crate::SphereController`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_FRICTION_COEFFICIENT, DEFAULT_GRAVITY, DEFAULT_JUMP_IMPULSE, DEFAULT_MASS,
    DEFAULT_STEERING_FORCE, DEFAULT_STEERING_ROTATION_RATE,
};

/// How the movement axis is mapped into world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SteeringMode {
    /// Normalised input applied directly along world `x`/`z`.
    #[default]
    WorldRelative,
    /// Raw input rotated by the body's yaw; also enables stick rotation.
    FacingRelative,
}

/// When the jump input contributes its impulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpTrigger {
    /// Every grounded tick the button reads as held.
    #[default]
    Held,
    /// Only on the tick the button goes from released to held.
    Pressed,
}

/// How the per-tick displacement becomes the delta handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDeltaMode {
    /// `displacement - last_position`.
    #[default]
    SubtractPosition,
    /// The displacement alone.
    Displacement,
}

/// How grounded gravity and friction relate to the contact surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceModel {
    /// Gravity added along every normal component; friction damps all axes.
    #[default]
    PerAxis,
    /// Gravity and friction projected onto the contact plane.
    TangentPlane,
}

/// Errors raised while loading or validating a [`ControllerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The config text is not valid TOML for this schema.
    #[error("invalid controller config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Mass must be strictly positive.
    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f32),
    /// A tunable is NaN or infinite.
    #[error("tunable `{field}` must be finite")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Tunables and policies for one controlled body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    /// Gravitational acceleration magnitude.
    pub gravity: f32,
    /// Scales last tick's velocity into friction deceleration.
    pub friction_coefficient: f32,
    /// Magnitude of the steering force.
    pub steering_force: f32,
    /// Force applied upwards while the jump fires on the ground.
    pub jump_impulse: f32,
    /// Body mass; must be strictly positive.
    pub mass: f32,
    /// Degrees of yaw per tick at full steering deflection.
    pub steering_rotation_rate: f32,
    /// Steering policy.
    pub steering: SteeringMode,
    /// Jump policy.
    pub jump_trigger: JumpTrigger,
    /// Move delta policy.
    pub move_delta: MoveDeltaMode,
    /// Slope policy for gravity and friction.
    pub surface: SurfaceModel,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            friction_coefficient: DEFAULT_FRICTION_COEFFICIENT,
            steering_force: DEFAULT_STEERING_FORCE,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            mass: DEFAULT_MASS,
            steering_rotation_rate: DEFAULT_STEERING_ROTATION_RATE,
            steering: SteeringMode::default(),
            jump_trigger: JumpTrigger::default(),
            move_delta: MoveDeltaMode::default(),
            surface: SurfaceModel::default(),
        }
    }
}

impl ControllerConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys, and
    /// the [`ControllerConfig::validate`] errors for bad values.
    ///
    /// # Examples
    /// ```
    /// use sphere_controller::{ControllerConfig, SteeringMode};
    /// let config = ControllerConfig::from_toml_str("mass = 5.0\nsteering = \"facing_relative\"")
    ///     .expect("valid config");
    /// assert_eq!(config.mass, 5.0);
    /// assert_eq!(config.steering, SteeringMode::FacingRelative);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML config file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`ControllerConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks that every tunable is finite and that mass is positive.
    ///
    /// # Errors
    /// Returns [`ConfigError::NonFinite`] naming the first non-finite field,
    /// or [`ConfigError::NonPositiveMass`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("gravity", self.gravity),
            ("friction_coefficient", self.friction_coefficient),
            ("steering_force", self.steering_force),
            ("jump_impulse", self.jump_impulse),
            ("mass", self.mass),
            ("steering_rotation_rate", self.steering_rotation_rate),
        ];
        if let Some((field, _)) = fields.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }
        if self.mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(self.mass));
        }
        Ok(())
    }

    /// Returns a copy using the given steering policy.
    #[must_use]
    pub const fn with_steering(mut self, steering: SteeringMode) -> Self {
        self.steering = steering;
        self
    }

    /// Returns a copy using the given jump policy.
    #[must_use]
    pub const fn with_jump_trigger(mut self, jump_trigger: JumpTrigger) -> Self {
        self.jump_trigger = jump_trigger;
        self
    }

    /// Returns a copy using the given move delta policy.
    #[must_use]
    pub const fn with_move_delta(mut self, move_delta: MoveDeltaMode) -> Self {
        self.move_delta = move_delta;
        self
    }

    /// Returns a copy using the given slope policy.
    #[must_use]
    pub const fn with_surface(mut self, surface: SurfaceModel) -> Self {
        self.surface = surface;
        self
    }
}
