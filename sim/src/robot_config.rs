/// Robot configuration module for the KUKA LBR iiwa models
///
/// This module provides kinematic configuration data for the two iiwa
/// variants using standard Denavit-Hartenberg parameters. The iiwa is an
/// all-revolute 7-axis arm with zero link lengths (a_i = 0 for every link);
/// its geometry is fully described by the link offsets d_i and the
/// alternating twist angles.

use iiwa_motion::JointLimit;
use serde::{Deserialize, Serialize};

/// Robot model identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotModel {
    /// LBR iiwa 7 R800: 7kg payload, 800mm reach
    Iiwa7R800,
    /// LBR iiwa 14 R820: 14kg payload, 820mm reach
    Iiwa14R820,
}

impl RobotModel {
    /// Get the display name for this robot model.
    pub fn display_name(&self) -> &'static str {
        match self {
            RobotModel::Iiwa7R800 => "LBR iiwa 7 R800 (7kg, 800mm)",
            RobotModel::Iiwa14R820 => "LBR iiwa 14 R820 (14kg, 820mm)",
        }
    }

    /// Get the short name for this robot model.
    pub fn short_name(&self) -> &'static str {
        match self {
            RobotModel::Iiwa7R800 => "iiwa 7 R800",
            RobotModel::Iiwa14R820 => "iiwa 14 R820",
        }
    }
}

impl std::fmt::Display for RobotModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl std::str::FromStr for RobotModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "IIWA7R800" | "IIWA7" | "7R800" => Ok(RobotModel::Iiwa7R800),
            "IIWA14R820" | "IIWA14" | "14R820" => Ok(RobotModel::Iiwa14R820),
            _ => Err(format!("Unknown robot model: {}", s)),
        }
    }
}

impl Default for RobotModel {
    fn default() -> Self {
        RobotModel::Iiwa7R800
    }
}

/// Robot configuration with standard DH parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Robot model
    pub model: RobotModel,

    /// Maximum payload in kg
    pub max_payload: f64,

    /// Maximum reach in mm
    pub max_reach: f64,

    /// Link offsets d_1..d_7 in meters
    pub d: [f64; 7],

    /// Link twist angles alpha_1..alpha_7 in radians
    pub alpha: [f64; 7],
}

impl RobotConfig {
    /// Number of controllable joints on every iiwa variant.
    pub const JOINT_COUNT: usize = 7;

    /// Create configuration for the LBR iiwa 7 R800
    ///
    /// Link offsets: base-to-shoulder 340mm, shoulder-to-elbow 400mm,
    /// elbow-to-wrist 400mm, wrist-to-flange 126mm.
    pub fn iiwa7_r800() -> Self {
        Self {
            model: RobotModel::Iiwa7R800,
            max_payload: 7.0,
            max_reach: 800.0,
            d: [0.340, 0.0, 0.400, 0.0, 0.400, 0.0, 0.126],
            alpha: Self::iiwa_twists(),
        }
    }

    /// Create configuration for the LBR iiwa 14 R820
    ///
    /// Same joint layout as the 7 R800 with a longer base column (360mm)
    /// and upper arm (420mm).
    pub fn iiwa14_r820() -> Self {
        Self {
            model: RobotModel::Iiwa14R820,
            max_payload: 14.0,
            max_reach: 820.0,
            d: [0.360, 0.0, 0.420, 0.0, 0.400, 0.0, 0.126],
            alpha: Self::iiwa_twists(),
        }
    }

    /// Get configuration for a specific model.
    pub fn for_model(model: RobotModel) -> Self {
        match model {
            RobotModel::Iiwa7R800 => Self::iiwa7_r800(),
            RobotModel::Iiwa14R820 => Self::iiwa14_r820(),
        }
    }

    /// Alternating twist pattern shared by both variants.
    fn iiwa_twists() -> [f64; 7] {
        [
            -90.0_f64.to_radians(),
            90.0_f64.to_radians(),
            90.0_f64.to_radians(),
            -90.0_f64.to_radians(),
            -90.0_f64.to_radians(),
            90.0_f64.to_radians(),
            0.0,
        ]
    }

    /// Joint travel limits, identical on both variants:
    /// ±170° on the odd axes, ±120° on the even axes, ±175° on the flange.
    pub fn joint_limits(&self) -> Vec<JointLimit> {
        vec![
            JointLimit::symmetric_degrees(170.0),
            JointLimit::symmetric_degrees(120.0),
            JointLimit::symmetric_degrees(170.0),
            JointLimit::symmetric_degrees(120.0),
            JointLimit::symmetric_degrees(170.0),
            JointLimit::symmetric_degrees(120.0),
            JointLimit::symmetric_degrees(175.0),
        ]
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self::iiwa7_r800()
    }
}
