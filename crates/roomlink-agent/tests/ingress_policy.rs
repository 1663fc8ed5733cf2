//! Pre-decode size policy on the ingress path.
//!
//! Oversize frames must be counted and dropped before the handler runs;
//! frames at or under the cap must reach it. Non-data frames are exempt.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use axum::extract::ws::Message;
use tokio::sync::mpsc::Receiver;

use roomlink_agent::app_state::AppState;
use roomlink_agent::config;
use roomlink_agent::session::{ChannelSession, SessionCommand};
use roomlink_agent::transport::ws::ingest_frame;

// max_packet_bytes: 32 so oversize frames are easy to build.
fn app_with_cap() -> (AppState, Receiver<SessionCommand>) {
    let cfg = config::load_from_str(
        r#"
version: 1
agent:
  max_packet_bytes: 32
"#,
    )
    .expect("must parse");

    let (session, rx) = ChannelSession::bounded(16);
    (AppState::new(cfg, Arc::new(session)), rx)
}

fn drain(rx: &mut Receiver<SessionCommand>) -> Vec<SessionCommand> {
    let mut out = Vec::new();
    while let Ok(cmd) = rx.try_recv() {
        out.push(cmd);
    }
    out
}

#[tokio::test]
async fn oversize_text_frame_is_dropped_before_the_handler() {
    let (app, mut rx) = app_with_cap();

    let big = format!(r#"{{"message": "{}"}}"#, "x".repeat(64));
    let accepted = ingest_frame(&app, "ts-client", Message::Text(big)).await;

    assert!(!accepted);
    assert_eq!(app.metrics().packets_oversize.get(), 1);
    assert_eq!(app.metrics().packets_received.get(), 0);
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn oversize_binary_frame_is_dropped_before_the_handler() {
    let (app, mut rx) = app_with_cap();

    let accepted = ingest_frame(&app, "ts-client", Message::Binary(vec![0u8; 33])).await;

    assert!(!accepted);
    assert_eq!(app.metrics().packets_oversize.get(), 1);
    assert_eq!(app.metrics().packets_received.get(), 0);
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn text_frame_under_the_cap_reaches_the_handler() {
    let (app, mut rx) = app_with_cap();

    let accepted =
        ingest_frame(&app, "ts-client", Message::Text(r#"{"message": "hi"}"#.to_string())).await;

    assert!(accepted);
    assert_eq!(app.metrics().packets_oversize.get(), 0);
    assert_eq!(app.metrics().packets_received.get(), 1);
    assert_eq!(
        drain(&mut rx),
        vec![
            SessionCommand::Interrupt,
            SessionCommand::GenerateReply("System: hi".to_string()),
        ]
    );
}

#[tokio::test]
async fn binary_frame_under_the_cap_reaches_the_handler() {
    let (app, mut rx) = app_with_cap();

    let accepted = ingest_frame(
        &app,
        "ts-client",
        Message::Binary(br#"{"message": "hi"}"#.to_vec()),
    )
    .await;

    assert!(accepted);
    assert_eq!(app.metrics().packets_received.get(), 1);
    assert_eq!(
        drain(&mut rx),
        vec![
            SessionCommand::Interrupt,
            SessionCommand::GenerateReply("System: hi".to_string()),
        ]
    );
}

#[tokio::test]
async fn frame_exactly_at_the_cap_is_accepted() {
    let (app, mut rx) = app_with_cap();

    // 13-byte prefix + 17-byte message + 2-byte suffix = 32 bytes.
    let payload = r#"{"message": "0123456789abcdefg"}"#;
    assert_eq!(payload.len(), 32);

    let accepted = ingest_frame(&app, "ts-client", Message::Text(payload.to_string())).await;

    assert!(accepted);
    assert_eq!(app.metrics().packets_oversize.get(), 0);
    assert_eq!(
        drain(&mut rx),
        vec![
            SessionCommand::Interrupt,
            SessionCommand::GenerateReply("System: 0123456789abcdefg".to_string()),
        ]
    );
}

#[tokio::test]
async fn control_frames_are_exempt_from_the_size_policy() {
    let (app, mut rx) = app_with_cap();

    let accepted = ingest_frame(&app, "ts-client", Message::Ping(vec![0u8; 64])).await;

    assert!(accepted);
    assert_eq!(app.metrics().packets_oversize.get(), 0);
    assert_eq!(app.metrics().packets_received.get(), 0);
    assert!(drain(&mut rx).is_empty());
}
