// Forward kinematics for the KUKA LBR iiwa series
//
// Standard Denavit-Hartenberg convention. The iiwa has a_i = 0 for every
// link, so each joint transform reduces to a rotation about z by the joint
// angle, a translation d_i along z, and the fixed twist alpha_i about x.

use iiwa_motion::Pose;
use nalgebra::{Matrix3, Rotation3, UnitQuaternion};

use crate::robot_config::RobotConfig;

/// Forward-kinematics solver for the iiwa.
#[derive(Debug, Clone)]
pub struct IiwaKinematics {
    config: RobotConfig,
}

impl IiwaKinematics {
    /// Create kinematics from a robot configuration
    pub fn from_config(config: RobotConfig) -> Self {
        Self { config }
    }

    /// Get the robot configuration
    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    /// Create a 4x4 homogeneous transformation matrix using standard DH
    /// parameters with zero link length.
    ///
    /// # Arguments
    /// * `alpha` - Link twist alpha_i
    /// * `theta` - Joint angle theta_i
    /// * `d` - Link offset d_i
    fn dh_transform(alpha: f64, theta: f64, d: f64) -> [[f64; 4]; 4] {
        let ct = theta.cos();
        let st = theta.sin();
        let ca = alpha.cos();
        let sa = alpha.sin();

        [
            [ct, -st * ca, st * sa, 0.0],
            [st, ct * ca, -ct * sa, 0.0],
            [0.0, sa, ca, d],
            [0.0, 0.0, 0.0, 1.0],
        ]
    }

    /// Multiply two 4x4 homogeneous transformation matrices
    fn mat_mult(a: &[[f64; 4]; 4], b: &[[f64; 4]; 4]) -> [[f64; 4]; 4] {
        let mut result = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result[i][j] += a[i][k] * b[k][j];
                }
            }
        }
        result
    }

    /// Compute the flange pose for a joint configuration.
    ///
    /// Returns position in meters and orientation as a unit quaternion in
    /// (x, y, z, w) order.
    pub fn forward_kinematics(&self, joints: &[f64]) -> Pose {
        let mut t = Self::identity();
        for i in 0..RobotConfig::JOINT_COUNT {
            let theta = joints.get(i).copied().unwrap_or(0.0);
            let link = Self::dh_transform(self.config.alpha[i], theta, self.config.d[i]);
            t = Self::mat_mult(&t, &link);
        }

        let rotation = Matrix3::new(
            t[0][0], t[0][1], t[0][2],
            t[1][0], t[1][1], t[1][2],
            t[2][0], t[2][1], t[2][2],
        );
        let quat = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(rotation));
        let coords = quat.coords;

        Pose {
            position: [t[0][3], t[1][3], t[2][3]],
            orientation: [coords[0], coords[1], coords[2], coords[3]],
        }
    }

    fn identity() -> [[f64; 4]; 4] {
        [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]
    }
}

impl Default for IiwaKinematics {
    fn default() -> Self {
        Self::from_config(RobotConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_configuration_pose() {
        let kin = IiwaKinematics::default();
        let pose = kin.forward_kinematics(&[0.0; 7]);

        // At the zero configuration the arm points straight up: the flange
        // sits on the base z axis at the sum of the link offsets.
        let total: f64 = kin.config().d.iter().sum();
        assert!(pose.position[0].abs() < 1e-9);
        assert!(pose.position[1].abs() < 1e-9);
        assert!((pose.position[2] - total).abs() < 1e-9);
    }

    #[test]
    fn test_orientation_is_unit_quaternion() {
        let kin = IiwaKinematics::default();
        let pose = kin.forward_kinematics(&[0.3, -0.7, 1.1, 0.5, -0.2, 0.9, -1.3]);

        let norm: f64 = pose.orientation.iter().map(|c| c * c).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_base_rotation_preserves_height() {
        let kin = IiwaKinematics::default();
        let upright = kin.forward_kinematics(&[0.0; 7]);
        let spun = kin.forward_kinematics(&[1.2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

        // Joint 1 spins about the base z axis; with the rest of the arm
        // straight the flange height cannot change.
        assert!((upright.position[2] - spun.position[2]).abs() < 1e-9);
    }

    #[test]
    fn test_flange_stays_within_reach() {
        let kin = IiwaKinematics::from_config(RobotConfig::iiwa14_r820());
        let pose = kin.forward_kinematics(&[1.0, 1.5, -0.8, 2.0, -1.2, 1.8, 0.4]);

        // Shoulder-relative distance is bounded by the arm segments beyond
        // the base column.
        let dx = pose.position[0];
        let dy = pose.position[1];
        let dz = pose.position[2] - kin.config().d[0];
        let distance = (dx * dx + dy * dy + dz * dz).sqrt();
        let arm_length: f64 = kin.config().d[2] + kin.config().d[4] + kin.config().d[6];
        assert!(distance <= arm_length + 1e-9);
    }
}
