//! Client request types.

use serde::{Deserialize, Serialize};

/// Commands a client can send over an open stream connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StreamCommand {
    /// Run a smooth move to the given joint angles (degrees). `steps`
    /// controls trajectory resolution; the server defaults it when omitted.
    #[serde(rename = "move")]
    Move {
        angles: Vec<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        steps: Option<usize>,
    },

    /// Ask for one state frame without advancing the simulation.
    #[serde(rename = "get_state")]
    GetState,
}

/// Body of `POST /move_joints`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveJointsRequest {
    /// Target joint angles in degrees.
    pub angles: Vec<f64>,
    /// Interpolate from the current pose when true; jump directly otherwise.
    #[serde(default = "default_smooth")]
    pub smooth: bool,
}

fn default_smooth() -> bool {
    true
}
