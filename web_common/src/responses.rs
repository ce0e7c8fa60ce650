//! Server response and event types.

use iiwa_motion::Pose;
use serde::{Deserialize, Serialize};

/// Frames the server pushes over a stream connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StreamEvent {
    /// One state snapshot: joint angles in degrees plus the end-effector
    /// pose. Sent on connect, on `get_state`, and once per trajectory step
    /// while a motion executes.
    #[serde(rename = "joint_state")]
    JointState {
        angles: Vec<f64>,
        end_effector: Pose,
    },

    /// Diagnostic sent before the server closes a misbehaving connection.
    #[serde(rename = "error")]
    Error { message: String },
}

/// Response to `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub status: String,
    pub robot: String,
    pub joints: usize,
}

/// Response to `GET /joint_states`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JointStatesResponse {
    /// Current angles in radians.
    pub angles: Vec<f64>,
    /// The same angles in degrees.
    pub angles_degrees: Vec<f64>,
    pub num_joints: usize,
}

/// Response to `POST /move_joints`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveJointsResponse {
    pub success: bool,
    /// Angles after the move, clamped to limits, in degrees.
    pub final_angles: Vec<f64>,
}

/// Response to `POST /reset`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    pub success: bool,
    /// The home configuration in degrees.
    pub angles: Vec<f64>,
}

/// One joint's travel limits in degrees, for `GET /robot_info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JointLimitDegrees {
    pub joint: usize,
    pub min: f64,
    pub max: f64,
}

/// Response to `GET /robot_info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotInfoResponse {
    pub name: String,
    pub num_joints: usize,
    pub joint_limits_degrees: Vec<JointLimitDegrees>,
}

/// Error body for failed HTTP requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
