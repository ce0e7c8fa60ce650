//! Shared robot context.
//!
//! One `RobotContext` is constructed in `main` and handed to every handler
//! by `Arc` — there is no global robot instance. The context owns the
//! authoritative joint store, the simulation backend, the subscriber
//! registry, and the motion lock that keeps trajectory executions from
//! interleaving.

use iiwa_motion::{JointLimit, JointStateStore, Simulation};
use tokio::sync::{Mutex, RwLock};
use web_common::StreamEvent;

use crate::session::ClientManager;

pub struct RobotContext {
    /// Human-readable robot name, for the info endpoints.
    pub name: String,
    /// Authoritative commanded joint state (radians, always within limits).
    pub store: RwLock<JointStateStore>,
    /// Simulation backend; every apply/advance/pose access is serialized.
    pub sim: Mutex<Box<dyn Simulation + Send>>,
    /// Held for the full duration of a motion: at most one in-flight
    /// trajectory, later commands queue here.
    pub motion: Mutex<()>,
    /// Registry of stream subscribers.
    pub clients: ClientManager,
}

impl RobotContext {
    pub fn new(
        name: impl Into<String>,
        limits: Vec<JointLimit>,
        sim: Box<dyn Simulation + Send>,
    ) -> Self {
        RobotContext {
            name: name.into(),
            store: RwLock::new(JointStateStore::new(limits)),
            sim: Mutex::new(sim),
            motion: Mutex::new(()),
            clients: ClientManager::new(),
        }
    }

    /// Current state snapshot: stored angles (degrees on the wire) plus the
    /// end-effector pose of the simulation's actual state. Does not advance
    /// the simulation.
    pub async fn snapshot(&self) -> StreamEvent {
        let angles = self.store.read().await.get_angles();
        let pose = self.sim.lock().await.end_effector_pose();
        StreamEvent::JointState {
            angles: angles.to_degrees(),
            end_effector: pose,
        }
    }

    pub async fn joint_count(&self) -> usize {
        self.store.read().await.joint_count()
    }

    pub async fn limits(&self) -> Vec<JointLimit> {
        self.store.read().await.limits().to_vec()
    }
}
