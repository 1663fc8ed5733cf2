//! WebSocket ingress handler.
//!
//! Responsibilities:
//! - Upgrade HTTP -> WS
//! - Extract room/participant from query string
//! - Lifecycle: ping/pong + idle timeout
//! - Cheap size check before any decode, then hand the frame to the
//!   data handler as a `DataPacket`
//!
//! Handler failures are fail-open: a malformed packet is logged and dropped,
//! the connection stays up.

use axum::{
    extract::{ws::Message, ws::WebSocket, ws::WebSocketUpgrade, Query, State},
    response::Response,
};
use bytes::Bytes;
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

use roomlink_core::error::{Result, RoomLinkError};
use roomlink_core::DataPacket;

use crate::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct RoomQuery {
    pub room: String,
    #[serde(default)]
    pub participant: Option<String>,
}

fn sys_joined_json(room: &str) -> String {
    json!({
        "v": 1,
        "type": "joined",
        "room": room
    })
    .to_string()
}

/// Frame length without decoding (size policy runs before any parse work).
fn frame_len(msg: &Message) -> usize {
    match msg {
        Message::Text(s) => s.as_bytes().len(),
        Message::Binary(b) => b.len(),
        Message::Ping(v) => v.len(),
        Message::Pong(v) => v.len(),
        Message::Close(_) => 0,
    }
}

/// Apply the pre-decode size policy and hand accepted data frames to the
/// handler. Returns `false` when the frame was dropped oversize (the handler
/// is never invoked for dropped frames). Non-data frames are accepted as-is.
pub async fn ingest_frame(app: &AppState, participant: &str, msg: Message) -> bool {
    let max_packet_bytes = app.cfg().agent.max_packet_bytes;
    let bytes_len = frame_len(&msg);

    match msg {
        Message::Text(_) | Message::Binary(_) if bytes_len > max_packet_bytes => {
            app.metrics().packets_oversize.inc();
            tracing::warn!(bytes_len, max_packet_bytes, "dropping oversize packet");
            false
        }

        Message::Text(s) => {
            let packet =
                DataPacket::new(Bytes::from(s.into_bytes())).with_participant(participant);
            app.handler().on_data_received(packet).await;
            true
        }

        Message::Binary(b) => {
            let packet = DataPacket::new(Bytes::from(b)).with_participant(participant);
            app.handler().on_data_received(packet).await;
            true
        }

        _ => true,
    }
}

pub async fn room_upgrade(
    State(app): State<AppState>,
    ws: WebSocketUpgrade,
    Query(q): Query<RoomQuery>,
) -> Response {
    ws.on_upgrade(move |socket| async move {
        if let Err(e) = run_room(app, q, socket).await {
            tracing::debug!(error = %e, "room subscription ended with error");
        }
    })
}

async fn run_room(app: AppState, q: RoomQuery, socket: WebSocket) -> Result<()> {
    let participant = q.participant.as_deref().unwrap_or("unknown").to_string();

    // ---- outbound channel
    let (out_tx, mut out_rx) = mpsc::channel::<Message>(64);

    // ---- split socket
    let (mut ws_tx, mut ws_rx) = socket.split();

    // ---- acknowledge the subscription
    out_tx
        .send(Message::Text(sys_joined_json(&q.room)))
        .await
        .map_err(|_| RoomLinkError::Internal("outbound channel closed".into()))?;

    // ---- timers
    let agent = &app.cfg().agent;
    let ping_every = Duration::from_millis(agent.ping_interval_ms);
    let idle_timeout = Duration::from_millis(agent.idle_timeout_ms);

    let mut ping_tick = tokio::time::interval(ping_every);
    ping_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let mut last_activity = Instant::now();

    tracing::info!(room = %q.room, participant = %participant, "room subscription open");

    loop {
        tokio::select! {
            // outbound writer
            maybe_out = out_rx.recv() => {
                match maybe_out {
                    Some(m) => {
                        if ws_tx.send(m).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }

            // inbound reader
            incoming = ws_rx.next() => {
                let Some(incoming) = incoming else { break; };
                let Ok(msg) = incoming else { break; };

                last_activity = Instant::now();

                match msg {
                    Message::Ping(payload) => {
                        let _ = out_tx.send(Message::Pong(payload)).await;
                    }
                    Message::Pong(_) => {}
                    Message::Close(_) => break,

                    // data frames: size policy, then the handler
                    data => {
                        ingest_frame(&app, &participant, data).await;
                    }
                }
            }

            // ping
            _ = ping_tick.tick() => {
                let _ = out_tx.send(Message::Ping(Vec::new())).await;
            }

            // idle timeout
            _ = tokio::time::sleep(Duration::from_millis(250)) => {
                if last_activity.elapsed() >= idle_timeout {
                    tracing::info!("idle timeout, closing room subscription");
                    break;
                }
            }
        }
    }

    tracing::info!(room = %q.room, "room subscription closed");

    Ok(())
}
