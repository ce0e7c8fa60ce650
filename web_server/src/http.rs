//! HTTP surface.
//!
//! Thin axum layer over the motion executor and the robot context. Smooth
//! moves block the caller for the full trajectory duration; the streaming
//! side is where live progress is observed.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use web_common::{
    ErrorResponse, JointLimitDegrees, JointStatesResponse, MoveJointsRequest, MoveJointsResponse,
    Pose, ResetResponse, RobotInfoResponse, ServiceInfo,
};

use iiwa_motion::JointConfig;

use crate::context::RobotContext;
use crate::motion::{MotionError, MotionExecutor, MotionOptions};

#[derive(Clone)]
pub struct HttpState {
    pub ctx: Arc<RobotContext>,
    pub executor: Arc<MotionExecutor>,
}

pub fn router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/joint_states", get(joint_states))
        .route("/move_joints", post(move_joints))
        .route("/reset", post(reset))
        .route("/end_effector", get(end_effector))
        .route("/robot_info", get(robot_info))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn service_info(State(state): State<HttpState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Robot Control API - KUKA LBR iiwa".to_string(),
        status: "running".to_string(),
        robot: state.ctx.name.clone(),
        joints: state.ctx.joint_count().await,
    })
}

async fn joint_states(State(state): State<HttpState>) -> Json<JointStatesResponse> {
    let angles = state.ctx.store.read().await.get_angles();
    Json(JointStatesResponse {
        angles_degrees: angles.to_degrees(),
        num_joints: angles.len(),
        angles: angles.0,
    })
}

async fn move_joints(
    State(state): State<HttpState>,
    Json(request): Json<MoveJointsRequest>,
) -> Result<Json<MoveJointsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let target = JointConfig::from_degrees(&request.angles);
    let finals = state
        .executor
        .execute(target, MotionOptions::http(request.smooth))
        .await
        .map_err(motion_error_response)?;

    Ok(Json(MoveJointsResponse {
        success: true,
        final_angles: finals.to_degrees(),
    }))
}

async fn reset(
    State(state): State<HttpState>,
) -> Result<Json<ResetResponse>, (StatusCode, Json<ErrorResponse>)> {
    let home = JointConfig::zeros(state.ctx.joint_count().await);
    info!("Resetting robot to home position");
    let finals = state
        .executor
        .execute(home, MotionOptions::http(false))
        .await
        .map_err(motion_error_response)?;

    Ok(Json(ResetResponse {
        success: true,
        angles: finals.to_degrees(),
    }))
}

async fn end_effector(State(state): State<HttpState>) -> Json<Pose> {
    let pose = state.ctx.sim.lock().await.end_effector_pose();
    Json(pose)
}

async fn robot_info(State(state): State<HttpState>) -> Json<RobotInfoResponse> {
    let limits = state.ctx.limits().await;
    Json(RobotInfoResponse {
        name: state.ctx.name.clone(),
        num_joints: limits.len(),
        joint_limits_degrees: limits
            .iter()
            .enumerate()
            .map(|(joint, limit)| JointLimitDegrees {
                joint,
                min: limit.min.to_degrees(),
                max: limit.max.to_degrees(),
            })
            .collect(),
    })
}

fn motion_error_response(e: MotionError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match e {
        MotionError::Sim(_) => {
            warn!("Simulation backend failure: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
        MotionError::Trajectory(_) => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}
