//! Joint-space configuration vector.

use serde::{Deserialize, Serialize};

/// An ordered set of joint angles in radians, one per controllable joint.
///
/// The joint count is fixed when the simulation is constructed; components
/// that accept a `JointConfig` check the length at their boundary rather
/// than carrying it in the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointConfig(pub Vec<f64>);

impl JointConfig {
    /// All-zero configuration for `n` joints (the startup/home pose).
    pub fn zeros(n: usize) -> Self {
        JointConfig(vec![0.0; n])
    }

    /// Build from wire-format degrees.
    pub fn from_degrees(degrees: &[f64]) -> Self {
        JointConfig(degrees.iter().map(|d| d.to_radians()).collect())
    }

    /// Convert to wire-format degrees.
    pub fn to_degrees(&self) -> Vec<f64> {
        self.0.iter().map(|r| r.to_degrees()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for JointConfig {
    fn from(angles: Vec<f64>) -> Self {
        JointConfig(angles)
    }
}

impl std::ops::Index<usize> for JointConfig {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}
