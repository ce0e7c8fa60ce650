/// Joint state store clamping behavior against the iiwa limit table.
use iiwa_motion::{JointConfig, JointLimit, JointStateStore};

/// LBR iiwa joint limits: ±170°, ±120° alternating, ±175° on the flange.
fn iiwa_limits() -> Vec<JointLimit> {
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

#[test]
fn test_out_of_range_command_is_clamped_not_rejected() {
    let mut store = JointStateStore::new(iiwa_limits());

    // 200 degrees against a ±170 degree joint clamps to exactly 170.
    let target = JointConfig::from_degrees(&[200.0, 100.0, -200.0, 200.0, -200.0, 200.0, 0.0]);
    let stored = store.set_angles(&target);

    assert!((stored[0] - 170.0_f64.to_radians()).abs() < 1e-9);
    assert!((stored[2] + 170.0_f64.to_radians()).abs() < 1e-9);
    assert!((stored[3] - 120.0_f64.to_radians()).abs() < 1e-9);

    // In-range joints pass through untouched.
    assert!((stored[1] - 100.0_f64.to_radians()).abs() < 1e-9);
}

#[test]
fn test_every_stored_angle_within_limits() {
    let mut store = JointStateStore::new(iiwa_limits());

    let wild = JointConfig(vec![10.0, -10.0, 4.0, -4.0, 3.5, -3.5, 100.0]);
    store.set_angles(&wild);

    let current = store.get_angles();
    for (angle, limit) in current.as_slice().iter().zip(store.limits()) {
        assert!(limit.contains(*angle));
    }
}

#[test]
fn test_stored_length_always_matches_joint_count() {
    let mut store = JointStateStore::new(iiwa_limits());

    // A short command updates the leading joints and keeps the rest.
    store.set_angles(&JointConfig(vec![0.5; 7]));
    let stored = store.set_angles(&JointConfig(vec![1.0, 1.0]));

    assert_eq!(stored.len(), 7);
    assert!((stored[0] - 1.0).abs() < 1e-9);
    assert!((stored[1] - 1.0).abs() < 1e-9);
    assert!((stored[2] - 0.5).abs() < 1e-9);

    // Extra elements beyond the joint count are ignored.
    let stored = store.set_angles(&JointConfig(vec![0.0; 12]));
    assert_eq!(stored.len(), 7);
}

#[test]
fn test_reset_is_idempotent() {
    let mut store = JointStateStore::new(iiwa_limits());
    store.set_angles(&JointConfig(vec![1.0; 7]));

    let zero = JointConfig::zeros(7);
    let first = store.set_angles(&zero);
    let second = store.set_angles(&zero);

    assert_eq!(first, second);
    assert_eq!(first, zero);
}

#[test]
fn test_get_angles_reflects_startup_configuration() {
    let store = JointStateStore::new(iiwa_limits());
    assert_eq!(store.get_angles(), JointConfig::zeros(7));
}
