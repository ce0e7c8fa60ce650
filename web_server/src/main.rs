// Control server for a simulated KUKA LBR iiwa: HTTP command surface plus a
// WebSocket stream that keeps every connected observer synchronized with
// simulation state during and after a move.
// Run with: cargo run -p web_server

mod context;
mod http;
mod motion;
mod session;

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use iiwa_motion::JointConfig;
use sim::{KinematicSim, RobotConfig, RobotModel};
use tokio::sync::mpsc;
use tokio_tungstenite::{accept_async, tungstenite::Message};
use tracing::{error, info, warn};
use web_common::{StreamCommand, StreamEvent};

use context::RobotContext;
use motion::{MotionExecutor, MotionOptions};
use session::CLIENT_CHANNEL_CAPACITY;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Load configuration from environment variables with defaults
    let model = std::env::var("IIWA_MODEL")
        .ok()
        .and_then(|m| m.parse::<RobotModel>().ok())
        .unwrap_or_default();
    let http_port = std::env::var("HTTP_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);
    let websocket_port = std::env::var("WEBSOCKET_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(9000);

    let config = RobotConfig::for_model(model);
    let limits = config.joint_limits();
    let name = config.model.short_name().to_string();
    let world = KinematicSim::new(config);

    let ctx = Arc::new(RobotContext::new(name, limits, Box::new(world)));
    let executor = Arc::new(MotionExecutor::new(Arc::clone(&ctx)));
    info!(
        "Robot context initialized: {} ({} joints)",
        ctx.name,
        ctx.joint_count().await
    );

    // HTTP surface
    let app = http::router(http::HttpState {
        ctx: Arc::clone(&ctx),
        executor: Arc::clone(&executor),
    });
    let http_addr = format!("0.0.0.0:{}", http_port);
    let http_listener = match tokio::net::TcpListener::bind(&http_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind HTTP listener on {}: {}", http_addr, e);
            return;
        }
    };
    info!("HTTP server listening on http://{}", http_addr);
    tokio::spawn(async move {
        if let Err(e) = axum::serve(http_listener, app).await {
            error!("HTTP server exited: {}", e);
        }
    });

    // WebSocket stream server
    let websocket_addr = format!("0.0.0.0:{}", websocket_port);
    let ws_listener = match tokio::net::TcpListener::bind(&websocket_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind WebSocket listener on {}: {}", websocket_addr, e);
            return;
        }
    };
    info!("WebSocket server listening on ws://{}", websocket_addr);

    while let Ok((stream, addr)) = ws_listener.accept().await {
        info!("New WebSocket connection from {}", addr);
        let ctx = Arc::clone(&ctx);
        let executor = Arc::clone(&executor);
        tokio::spawn(handle_connection(stream, ctx, executor));
    }
}

/// Per-connection protocol handler.
///
/// Accept moves the connection into its open state: the client is registered
/// with the subscriber registry and immediately receives one state snapshot.
/// Commands are then served until the peer disconnects or misbehaves; either
/// way the connection is unregistered and the rest of the server is
/// untouched.
async fn handle_connection(
    stream: tokio::net::TcpStream,
    ctx: Arc<RobotContext>,
    executor: Arc<MotionExecutor>,
) {
    let ws_stream = match accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            error!("WebSocket handshake failed: {}", e);
            return;
        }
    };

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    // Writer task: sole owner of the sink, fed by the registry channel.
    let (tx, mut rx) = mpsc::channel::<Message>(CLIENT_CHANNEL_CAPACITY);
    let writer = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if ws_sender.send(msg).await.is_err() {
                break;
            }
        }
        let _ = ws_sender.close().await;
    });

    let client_id = ctx.clients.register(tx).await;

    // Send initial state immediately so a new observer is in sync before its
    // first command.
    let initial = ctx.snapshot().await;
    ctx.clients.send_to(client_id, &initial).await;

    while let Some(msg) = ws_receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => match serde_json::from_str::<StreamCommand>(&text) {
                Ok(StreamCommand::Move { angles, steps }) => {
                    info!("Client {} commanded move to {:?}", client_id, angles);
                    let target = JointConfig::from_degrees(&angles);
                    match executor.execute(target, MotionOptions::stream(steps)).await {
                        Ok(_) => {}
                        Err(e) => {
                            warn!("Move failed for client {}: {}", client_id, e);
                            let event = StreamEvent::Error {
                                message: e.to_string(),
                            };
                            ctx.clients.send_to(client_id, &event).await;
                            break;
                        }
                    }
                }
                Ok(StreamCommand::GetState) => {
                    let snapshot = ctx.snapshot().await;
                    ctx.clients.send_to(client_id, &snapshot).await;
                }
                Err(e) => {
                    // Protocol error: diagnose, then close this connection
                    // only.
                    warn!("Client {} sent malformed command: {}", client_id, e);
                    let event = StreamEvent::Error {
                        message: format!("Invalid command: {}", e),
                    };
                    ctx.clients.send_to(client_id, &event).await;
                    break;
                }
            },
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                error!("WebSocket error for client {}: {}", client_id, e);
                break;
            }
        }
    }

    // Dropping the registry entry closes the writer channel, which ends the
    // writer task and releases the sink.
    ctx.clients.unregister(client_id).await;
    let _ = writer.await;
    info!("WebSocket connection closed for client {}", client_id);
}
