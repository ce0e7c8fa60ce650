/// Trajectory generator invariants: endpoint exactness, length, determinism.
use iiwa_motion::trajectory::interpolate;
use iiwa_motion::{JointConfig, TrajectoryError};

const TOL: f64 = 1e-6;

#[test]
fn test_endpoints_match_start_and_target() {
    let start = JointConfig(vec![0.1, -0.5, 1.2, 0.0, 2.0, -1.0, 0.3]);
    let target = JointConfig(vec![-0.4, 0.9, 0.0, 1.5, -2.0, 0.7, -0.3]);

    let trajectory = interpolate(&start, &target, 25).unwrap();

    assert_eq!(trajectory.len(), 26);
    for (a, b) in trajectory[0].as_slice().iter().zip(start.as_slice()) {
        assert!((a - b).abs() < TOL, "first entry must equal start");
    }
    for (a, b) in trajectory[25].as_slice().iter().zip(target.as_slice()) {
        assert!((a - b).abs() < TOL, "last entry must equal target");
    }
}

#[test]
fn test_midpoint_of_45_degree_move() {
    // Six joints from 0 to 45 degrees over 10 steps: 11 entries, entry 5 at
    // half of the target per joint.
    let start = JointConfig::zeros(6);
    let target = JointConfig::from_degrees(&[45.0; 6]);

    let trajectory = interpolate(&start, &target, 10).unwrap();

    assert_eq!(trajectory.len(), 11);
    let half = 22.5_f64.to_radians();
    for angle in trajectory[5].as_slice() {
        assert!((angle - half).abs() < TOL, "midpoint should be 22.5 degrees");
    }
}

#[test]
fn test_single_step_trajectory() {
    let start = JointConfig::zeros(7);
    let target = JointConfig(vec![1.0; 7]);

    let trajectory = interpolate(&start, &target, 1).unwrap();

    assert_eq!(trajectory.len(), 2);
    assert_eq!(trajectory[0], start);
    assert_eq!(trajectory[1], target);
}

#[test]
fn test_zero_steps_rejected() {
    let start = JointConfig::zeros(7);
    let target = JointConfig(vec![1.0; 7]);

    let err = interpolate(&start, &target, 0).unwrap_err();
    assert_eq!(err, TrajectoryError::ZeroSteps);
}

#[test]
fn test_joint_count_mismatch_rejected() {
    let start = JointConfig::zeros(7);
    let target = JointConfig::zeros(6);

    let err = interpolate(&start, &target, 5).unwrap_err();
    assert_eq!(
        err,
        TrajectoryError::JointCountMismatch { expected: 7, got: 6 }
    );
}

#[test]
fn test_interpolation_parameter_is_monotonic() {
    let start = JointConfig::zeros(3);
    let target = JointConfig(vec![1.0, -2.0, 0.5]);

    let trajectory = interpolate(&start, &target, 40).unwrap();

    // Each joint moves monotonically toward its target.
    for joint in 0..3 {
        let direction = (target[joint] - start[joint]).signum();
        for pair in trajectory.windows(2) {
            let delta = pair[1][joint] - pair[0][joint];
            assert!(delta * direction >= 0.0, "joint {} reversed direction", joint);
        }
    }
}

#[test]
fn test_deterministic_for_same_inputs() {
    let start = JointConfig(vec![0.2, 0.4, -0.6, 0.8, -1.0, 1.2, -1.4]);
    let target = JointConfig(vec![-0.1, 0.3, 0.5, -0.7, 0.9, -1.1, 1.3]);

    let a = interpolate(&start, &target, 17).unwrap();
    let b = interpolate(&start, &target, 17).unwrap();
    assert_eq!(a, b);
}
