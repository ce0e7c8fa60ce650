//! Contract between the server and the simulation backend.

use serde::{Deserialize, Serialize};

use crate::errors::SimError;

/// Cartesian pose of the end effector: position in meters, orientation as a
/// unit quaternion in (x, y, z, w) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: [f64; 3],
    pub orientation: [f64; 4],
}

impl Pose {
    /// Identity pose at the origin.
    pub fn identity() -> Self {
        Pose {
            position: [0.0, 0.0, 0.0],
            orientation: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// The simulation backend as the server sees it.
///
/// The backend owns the physical joint state. `apply_joint_targets` commands
/// position-controlled actuation; the actual positions converge toward the
/// targets over multiple `advance` calls rather than jumping there, so a
/// single advance does not guarantee arrival.
pub trait Simulation {
    /// Advance simulated time by one fixed timestep.
    fn advance(&mut self) -> Result<(), SimError>;

    /// Number of controllable joints, fixed at construction.
    fn joint_count(&self) -> usize;

    /// Actual joint positions in radians.
    fn current_joint_angles(&self) -> Vec<f64>;

    /// Command actuation toward the given radian targets.
    fn apply_joint_targets(&mut self, targets: &[f64]) -> Result<(), SimError>;

    /// End-effector pose derived from the actual joint positions.
    fn end_effector_pose(&self) -> Pose;
}
