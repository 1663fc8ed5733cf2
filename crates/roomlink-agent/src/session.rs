//! Conversational session seam.
//!
//! The session that ultimately speaks (interrupt + reply generation) is an
//! external collaborator. The handler only needs two capabilities, expressed
//! as a trait so tests can record effects and deployments can plug in a real
//! engine.

use async_trait::async_trait;
use tokio::sync::mpsc;

use roomlink_core::error::{Result, RoomLinkError};

/// Commands the agent issues against the conversational session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Stop any in-progress output.
    Interrupt,
    /// Generate a new reply seeded with this user input.
    GenerateReply(String),
}

/// Capability handle for the external conversational session.
#[async_trait]
pub trait ConversationSession: Send + Sync {
    /// Request interruption of any in-progress output.
    async fn interrupt(&self) -> Result<()>;
    /// Request a new reply seeded with `user_input`.
    async fn generate_reply(&self, user_input: &str) -> Result<()>;
}

/// Session backed by a bounded command channel.
///
/// The receiving side is owned by whatever drives the actual engine; a full
/// queue surfaces as a `Session` error, which the handler logs and drops.
#[derive(Clone)]
pub struct ChannelSession {
    tx: mpsc::Sender<SessionCommand>,
}

impl ChannelSession {
    pub fn new(tx: mpsc::Sender<SessionCommand>) -> Self {
        Self { tx }
    }

    /// Build a session together with its command receiver.
    pub fn bounded(depth: usize) -> (Self, mpsc::Receiver<SessionCommand>) {
        let (tx, rx) = mpsc::channel(depth);
        (Self { tx }, rx)
    }

    fn send(&self, cmd: SessionCommand) -> Result<()> {
        self.tx
            .try_send(cmd)
            .map_err(|e| RoomLinkError::Session(format!("command queue unavailable: {e}")))
    }
}

#[async_trait]
impl ConversationSession for ChannelSession {
    async fn interrupt(&self) -> Result<()> {
        self.send(SessionCommand::Interrupt)
    }

    async fn generate_reply(&self, user_input: &str) -> Result<()> {
        self.send(SessionCommand::GenerateReply(user_input.to_string()))
    }
}

/// Drain session commands and log them.
///
/// Stand-in consumer for deployments without an engine wired up; a real
/// integration replaces this task with one that talks to the engine.
pub fn spawn_command_sink(mut rx: mpsc::Receiver<SessionCommand>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(cmd) = rx.recv().await {
            match cmd {
                SessionCommand::Interrupt => {
                    tracing::info!("session command: interrupt");
                }
                SessionCommand::GenerateReply(input) => {
                    tracing::info!(%input, "session command: generate reply");
                }
            }
        }
    })
}
