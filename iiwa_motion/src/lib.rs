//! Core motion types for the iiwa control server.
//!
//! This crate holds the joint-space data model (configurations, limits, the
//! clamping state store), the trajectory generator, and the `Simulation`
//! contract the server drives. It is synchronous and I/O-free; the server
//! crate supplies the concurrency discipline.

pub mod adapter;
pub mod errors;
pub mod joints;
pub mod limits;
pub mod state;
pub mod trajectory;

pub use adapter::{Pose, Simulation};
pub use errors::{SimError, TrajectoryError};
pub use joints::JointConfig;
pub use limits::JointLimit;
pub use state::JointStateStore;
