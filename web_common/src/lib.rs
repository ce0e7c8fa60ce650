//! Shared wire types for the iiwa control server.
//!
//! This crate provides the types used for client-server communication over
//! both the WebSocket stream and the HTTP endpoints.
//!
//! # Angle convention
//!
//! Every angle that crosses the wire is in **degrees**; everything stored or
//! computed server-side is in **radians**. The conversion happens exactly
//! once, at this boundary.

mod requests;
mod responses;

pub use requests::*;
pub use responses::*;

// Re-export the pose type that rides inside state frames.
pub use iiwa_motion::Pose;
