//! Kinematic simulation backend.
//!
//! Stands in for a physics engine: joints are position-controlled servos
//! that move toward their commanded targets at a bounded velocity, one fixed
//! timestep per `advance` call. A target far from the current position
//! therefore takes many timesteps to reach, which is the lag the
//! `Simulation` contract warns about.

use iiwa_motion::{Pose, SimError, Simulation};
use tracing::info;

use crate::kinematics::IiwaKinematics;
use crate::robot_config::RobotConfig;

/// Fixed simulation timestep in seconds.
pub const TIMESTEP: f64 = 1.0 / 240.0;

/// Servo velocity limit per joint, rad/s.
pub const MAX_JOINT_VELOCITY: f64 = 1.0;

/// Simulated iiwa with velocity-limited position control.
pub struct KinematicSim {
    kinematics: IiwaKinematics,
    targets: Vec<f64>,
    positions: Vec<f64>,
}

impl KinematicSim {
    /// Create a simulation at the zero configuration.
    pub fn new(config: RobotConfig) -> Self {
        let n = RobotConfig::JOINT_COUNT;
        info!(
            "Kinematic simulation initialized: {} with {} joints",
            config.model, n
        );
        KinematicSim {
            kinematics: IiwaKinematics::from_config(config),
            targets: vec![0.0; n],
            positions: vec![0.0; n],
        }
    }

    pub fn config(&self) -> &RobotConfig {
        self.kinematics.config()
    }
}

impl Simulation for KinematicSim {
    fn advance(&mut self) -> Result<(), SimError> {
        let max_delta = MAX_JOINT_VELOCITY * TIMESTEP;
        for (position, target) in self.positions.iter_mut().zip(&self.targets) {
            let delta = (target - *position).clamp(-max_delta, max_delta);
            *position += delta;
        }
        Ok(())
    }

    fn joint_count(&self) -> usize {
        self.positions.len()
    }

    fn current_joint_angles(&self) -> Vec<f64> {
        self.positions.clone()
    }

    fn apply_joint_targets(&mut self, targets: &[f64]) -> Result<(), SimError> {
        if targets.len() != self.targets.len() {
            return Err(SimError::JointCountMismatch {
                expected: self.targets.len(),
                got: targets.len(),
            });
        }
        self.targets.copy_from_slice(targets);
        Ok(())
    }

    fn end_effector_pose(&self) -> Pose {
        self.kinematics.forward_kinematics(&self.positions)
    }
}
