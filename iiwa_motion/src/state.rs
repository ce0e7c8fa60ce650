//! Authoritative joint state with clamp-on-write.

use tracing::debug;

use crate::joints::JointConfig;
use crate::limits::JointLimit;

/// In-process record of the commanded joint configuration.
///
/// Every write is clamped against the limit table; out-of-range targets are
/// truncated to the nearest bound, never rejected. The stored configuration
/// always has exactly one angle per configured joint: a short target updates
/// the leading joints and leaves the rest where they were, extra elements are
/// ignored. The store itself is synchronous — the server wraps it in a lock
/// and guarantees single-writer access during a motion.
pub struct JointStateStore {
    limits: Vec<JointLimit>,
    current: JointConfig,
}

impl JointStateStore {
    /// Create a store at the zero configuration.
    pub fn new(limits: Vec<JointLimit>) -> Self {
        let n = limits.len();
        JointStateStore {
            limits,
            current: JointConfig::zeros(n),
        }
    }

    /// Clamp `target` to the limit table, store it, and return the full
    /// stored configuration.
    pub fn set_angles(&mut self, target: &JointConfig) -> JointConfig {
        let n = self.limits.len().min(target.len());
        let mut clamped_any = false;
        for i in 0..n {
            let clamped = self.limits[i].clamp(target[i]);
            if clamped != target[i] {
                clamped_any = true;
            }
            self.current.0[i] = clamped;
        }
        if clamped_any {
            debug!("joint target clamped to limits");
        }
        self.current.clone()
    }

    /// Current stored configuration, radians.
    pub fn get_angles(&self) -> JointConfig {
        self.current.clone()
    }

    pub fn joint_count(&self) -> usize {
        self.limits.len()
    }

    pub fn limits(&self) -> &[JointLimit] {
        &self.limits
    }
}
