// Library exports for the KUKA LBR iiwa kinematic simulator

pub mod kinematics;
pub mod robot_config;
pub mod world;

pub use kinematics::IiwaKinematics;
pub use robot_config::{RobotConfig, RobotModel};
pub use world::KinematicSim;
