//! Joint-space trajectory generation.

use crate::errors::TrajectoryError;
use crate::joints::JointConfig;

/// Linearly interpolate from `start` to `target` over `steps` increments.
///
/// Returns `steps + 1` configurations: element 0 is `start`, element `steps`
/// is `target`, and element `i` is `start + (target - start) * (i / steps)`
/// per joint. Pure function of its arguments; the same inputs always produce
/// the same trajectory.
pub fn interpolate(
    start: &JointConfig,
    target: &JointConfig,
    steps: usize,
) -> Result<Vec<JointConfig>, TrajectoryError> {
    if steps == 0 {
        return Err(TrajectoryError::ZeroSteps);
    }
    if start.len() != target.len() {
        return Err(TrajectoryError::JointCountMismatch {
            expected: start.len(),
            got: target.len(),
        });
    }

    let mut trajectory = Vec::with_capacity(steps + 1);
    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let config = start
            .as_slice()
            .iter()
            .zip(target.as_slice())
            .map(|(&s, &e)| s + (e - s) * t)
            .collect::<Vec<f64>>();
        trajectory.push(JointConfig(config));
    }
    Ok(trajectory)
}
