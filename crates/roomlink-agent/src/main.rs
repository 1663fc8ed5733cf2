//! roomlink Agent
//!
//! Subscribes to room data packets over the WS ingress, extracts the
//! `"message"` field from UTF-8 JSON payloads, and forwards it into the
//! conversational session (interrupt + "System: <message>" reply seed).
//! Malformed packets are logged and dropped; the agent never crashes on
//! bad traffic.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use roomlink_agent::{app_state, config, router, session};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("roomlink.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .agent
        .listen
        .parse()
        .expect("agent.listen must be a valid SocketAddr");

    // Session command channel; the sink task is the engine integration point.
    let (conversation, commands) = session::ChannelSession::bounded(cfg.agent.session_queue_depth);
    let _sink = session::spawn_command_sink(commands);

    let state = app_state::AppState::new(cfg, Arc::new(conversation));
    let app = router::build_router(state);

    tracing::info!(%listen, "roomlink-agent starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
