//! Utility helpers for tests.
//! Snapshot constructors, a recording host body and a headless Bevy app.

pub mod app;
pub mod host;
pub mod physics;

use glam::Vec3;

/// Assert that two vectors agree component-wise within `tolerance`.
///
/// # Panics
/// Panics with both vectors in the message if any component differs by more
/// than `tolerance`.
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, tolerance: f32) {
    assert!(
        (actual - expected).abs().max_element() <= tolerance,
        "expected {expected:?}, got {actual:?} (tolerance {tolerance})"
    );
}
