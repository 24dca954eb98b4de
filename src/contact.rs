//! Single-slot mailbox for the most recent contact-surface normal.

use glam::Vec3;
use log::{debug, warn};

/// Holds the last surface normal reported by the host's collision callback.
///
/// Every [`ContactMailbox::record`] overwrites the previous value, so when
/// several contacts arrive within one tick only the last one is seen by the
/// next tick. Until the first contact the slot holds [`Vec3::ZERO`]; the
/// value is not cleared when the body becomes airborne.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactMailbox {
    normal: Vec3,
}

impl ContactMailbox {
    /// Creates an empty mailbox.
    #[must_use]
    pub const fn new() -> Self {
        Self { normal: Vec3::ZERO }
    }

    /// Stores `normal`, replacing any earlier value.
    ///
    /// Non-finite normals are dropped with a warning and leave the slot
    /// untouched.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use sphere_controller::ContactMailbox;
    /// let mut mailbox = ContactMailbox::new();
    /// mailbox.record(Vec3::Y);
    /// mailbox.record(Vec3::X);
    /// assert_eq!(mailbox.latest(), Vec3::X);
    /// ```
    pub fn record(&mut self, normal: Vec3) {
        if !normal.is_finite() {
            warn!("ignoring non-finite contact normal {normal:?}");
            return;
        }
        debug!("contact normal updated to {normal:?}");
        self.normal = normal;
    }

    /// Returns the most recently recorded normal.
    #[must_use]
    pub const fn latest(&self) -> Vec3 {
        self.normal
    }
}
