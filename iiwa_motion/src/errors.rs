use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Rejected trajectory request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrajectoryError {
    /// A trajectory needs at least one step; zero would divide by zero.
    ZeroSteps,
    /// Start and target configurations disagree on joint count.
    JointCountMismatch { expected: usize, got: usize },
}

impl Error for TrajectoryError {}

impl fmt::Display for TrajectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TrajectoryError::ZeroSteps => write!(f, "trajectory requires at least 1 step"),
            TrajectoryError::JointCountMismatch { expected, got } => {
                write!(f, "joint count mismatch: expected {}, got {}", expected, got)
            }
        }
    }
}

/// Failure reported by the simulation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimError {
    /// The backend could not advance the timestep.
    StepFailed(String),
    /// A command carried the wrong number of joint targets.
    JointCountMismatch { expected: usize, got: usize },
}

impl Error for SimError {}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SimError::StepFailed(ref msg) => write!(f, "simulation step failed: {}", msg),
            SimError::JointCountMismatch { expected, got } => {
                write!(f, "expected {} joint targets, got {}", expected, got)
            }
        }
    }
}
