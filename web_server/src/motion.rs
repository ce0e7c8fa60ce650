//! Motion execution.
//!
//! Drives the simulation through a trajectory at a fixed cadence, publishing
//! one state snapshot per step to every subscriber. Exactly one motion runs
//! at a time: the context's motion lock is held for the whole trajectory, so
//! a command arriving mid-flight waits its turn and then starts from wherever
//! the previous motion ended.

use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use iiwa_motion::trajectory::interpolate;
use iiwa_motion::{JointConfig, SimError, TrajectoryError};
use tracing::info;
use web_common::StreamEvent;

use crate::context::RobotContext;

/// Trajectory resolution for HTTP-triggered moves.
pub const HTTP_MOVE_STEPS: usize = 50;
/// Per-step delay for HTTP-triggered moves (50 Hz).
pub const HTTP_MOVE_CADENCE: Duration = Duration::from_millis(20);
/// Trajectory resolution for stream-triggered moves.
pub const STREAM_MOVE_STEPS: usize = 30;
/// Per-step delay for stream-triggered moves (~30 fps).
pub const STREAM_MOVE_CADENCE: Duration = Duration::from_millis(33);

/// How a single motion command should be executed.
#[derive(Debug, Clone, Copy)]
pub struct MotionOptions {
    pub steps: usize,
    pub cadence: Duration,
    pub smooth: bool,
}

impl MotionOptions {
    pub fn http(smooth: bool) -> Self {
        MotionOptions {
            steps: HTTP_MOVE_STEPS,
            cadence: HTTP_MOVE_CADENCE,
            smooth,
        }
    }

    pub fn stream(steps: Option<usize>) -> Self {
        MotionOptions {
            steps: steps.unwrap_or(STREAM_MOVE_STEPS),
            cadence: STREAM_MOVE_CADENCE,
            smooth: true,
        }
    }
}

/// Failure while executing a motion command.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    Trajectory(TrajectoryError),
    Sim(SimError),
}

impl Error for MotionError {}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::Trajectory(e) => write!(f, "trajectory rejected: {}", e),
            MotionError::Sim(e) => write!(f, "simulation failure: {}", e),
        }
    }
}

impl From<TrajectoryError> for MotionError {
    fn from(e: TrajectoryError) -> Self {
        MotionError::Trajectory(e)
    }
}

impl From<SimError> for MotionError {
    fn from(e: SimError) -> Self {
        MotionError::Sim(e)
    }
}

/// Executes motion commands against the shared robot context.
pub struct MotionExecutor {
    ctx: Arc<RobotContext>,
}

impl MotionExecutor {
    pub fn new(ctx: Arc<RobotContext>) -> Self {
        MotionExecutor { ctx }
    }

    /// Run one motion command to completion and return the final stored
    /// configuration (radians, clamped).
    ///
    /// Smooth moves interpolate from the current configuration, applying one
    /// trajectory step per simulation advance and broadcasting each snapshot
    /// before sleeping out the cadence; snapshots therefore reach
    /// subscribers strictly in trajectory order. Non-smooth moves apply the
    /// target directly with a single advance and a single broadcast.
    pub async fn execute(
        &self,
        target: JointConfig,
        opts: MotionOptions,
    ) -> Result<JointConfig, MotionError> {
        let _in_flight = self.ctx.motion.lock().await;

        if opts.smooth {
            let start = self.ctx.store.read().await.get_angles();
            let full_target = overlay(&start, &target);
            let trajectory = interpolate(&start, &full_target, opts.steps)?;
            info!("Executing smooth move: {} steps at {:?}", opts.steps, opts.cadence);

            for step in &trajectory {
                let snapshot = self.apply_step(step).await?;
                self.ctx.clients.broadcast(&snapshot).await;
                tokio::time::sleep(opts.cadence).await;
            }
            info!("Movement complete");
        } else {
            let snapshot = self.apply_step(&target).await?;
            self.ctx.clients.broadcast(&snapshot).await;
        }

        Ok(self.ctx.store.read().await.get_angles())
    }

    /// Clamp and store one configuration, push it into the simulation,
    /// advance a single timestep, and build the resulting snapshot.
    async fn apply_step(&self, step: &JointConfig) -> Result<StreamEvent, MotionError> {
        let clamped = self.ctx.store.write().await.set_angles(step);
        let pose = {
            let mut sim = self.ctx.sim.lock().await;
            sim.apply_joint_targets(clamped.as_slice())?;
            sim.advance()?;
            sim.end_effector_pose()
        };
        Ok(StreamEvent::JointState {
            angles: clamped.to_degrees(),
            end_effector: pose,
        })
    }
}

/// Expand a wire target to the full joint count: commanded values replace
/// the leading joints, the current configuration fills the rest.
fn overlay(current: &JointConfig, target: &JointConfig) -> JointConfig {
    let mut full = current.clone();
    for i in 0..current.len().min(target.len()) {
        full.0[i] = target[i];
    }
    full
}
