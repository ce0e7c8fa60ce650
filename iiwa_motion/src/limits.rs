//! Per-joint travel limits.

use serde::{Deserialize, Serialize};

/// Travel interval for one revolute joint, in radians.
///
/// Fixed at startup and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointLimit {
    pub min: f64,
    pub max: f64,
}

impl JointLimit {
    /// Symmetric limit of `deg` degrees either side of zero.
    pub fn symmetric_degrees(deg: f64) -> Self {
        let rad = deg.to_radians();
        JointLimit { min: -rad, max: rad }
    }

    /// Truncate `angle` to the nearest bound if it lies outside the interval.
    pub fn clamp(&self, angle: f64) -> f64 {
        angle.clamp(self.min, self.max)
    }

    /// Whether `angle` lies inside the interval.
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.min && angle <= self.max
    }
}
