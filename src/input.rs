//! Per-tick input samples and jump edge tracking.

use std::collections::VecDeque;

use glam::Vec2;

use crate::config::JumpTrigger;

/// One tick's worth of controller input.
///
/// Samples are read fresh every tick. There is no buffering: a button held
/// across several ticks appears as `jump == true` in each of them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// Movement stick, conventionally within `[-1, 1]` per component.
    pub movement: Vec2,
    /// Optional second stick; its `x` channel drives yaw.
    pub steering: Option<Vec2>,
    /// Whether the jump button currently reads as held.
    pub jump: bool,
}

impl InputSample {
    /// Creates a sample with only the movement axis set.
    #[must_use]
    pub const fn moving(movement: Vec2) -> Self {
        Self {
            movement,
            steering: None,
            jump: false,
        }
    }

    /// Returns a copy with the steering axis set.
    #[must_use]
    pub const fn with_steering(mut self, steering: Vec2) -> Self {
        self.steering = Some(steering);
        self
    }

    /// Returns a copy with the jump button state set.
    #[must_use]
    pub const fn with_jump(mut self, jump: bool) -> Self {
        self.jump = jump;
        self
    }
}

/// A device the host polls once per tick.
///
/// Returning `None` means no device is connected; the controller skips the
/// tick entirely.
pub trait InputSource {
    /// Reads the current sample.
    fn sample(&mut self) -> Option<InputSample>;
}

impl<F> InputSource for F
where
    F: FnMut() -> Option<InputSample>,
{
    fn sample(&mut self) -> Option<InputSample> {
        self()
    }
}

/// Replays a fixed sequence of samples, one per tick.
///
/// Once the script is exhausted the source reports "unavailable".
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    samples: VecDeque<Option<InputSample>>,
}

impl ScriptedInput {
    /// Creates a source from a list of per-tick samples.
    #[must_use]
    pub fn new<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = Option<InputSample>>,
    {
        Self {
            samples: samples.into_iter().collect(),
        }
    }

    /// Appends `count` copies of `sample`.
    pub fn push_repeated(&mut self, sample: Option<InputSample>, count: usize) {
        self.samples.extend(std::iter::repeat_n(sample, count));
    }

    /// Number of ticks left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self) -> Option<InputSample> {
        self.samples.pop_front().flatten()
    }
}

/// Remembers the previous tick's jump level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JumpLatch {
    previous: bool,
}

impl JumpLatch {
    /// A latch that has seen the button released.
    #[must_use]
    pub const fn new() -> Self {
        Self { previous: false }
    }

    /// Feeds this tick's jump level and reports whether the jump fires.
    ///
    /// With [`JumpTrigger::Held`] the jump fires whenever the button is held.
    /// With [`JumpTrigger::Pressed`] it fires only on a released-to-held
    /// transition.
    ///
    /// # Examples
    /// ```
    /// use sphere_controller::{JumpLatch, JumpTrigger};
    /// let mut latch = JumpLatch::default();
    /// assert!(latch.update(true, JumpTrigger::Pressed));
    /// assert!(!latch.update(true, JumpTrigger::Pressed));
    /// assert!(latch.update(true, JumpTrigger::Held));
    /// ```
    pub const fn update(&mut self, pressed: bool, trigger: JumpTrigger) -> bool {
        let rising = pressed && !self.previous;
        self.previous = pressed;
        match trigger {
            JumpTrigger::Held => pressed,
            JumpTrigger::Pressed => rising,
        }
    }
}
