//! Data-event handler.
//!
//! The only unit of real behavior in the agent: one inbound packet maps to
//! zero or one (interrupt, generate_reply) pair against the session. Every
//! processing failure collapses to one error log entry and a dropped packet;
//! nothing propagates to the dispatch loop and no state survives between
//! invocations (fail-open).

use std::sync::Arc;

use roomlink_core::error::Result;
use roomlink_core::{extract_message, DataPacket, Extraction};

use crate::obs::AgentMetrics;
use crate::session::ConversationSession;

/// Fixed template prepended to forwarded messages.
const REPLY_PREFIX: &str = "System: ";

/// Stateless adapter from packets to session effects.
pub struct DataHandler {
    session: Arc<dyn ConversationSession>,
    metrics: Arc<AgentMetrics>,
}

impl DataHandler {
    pub fn new(session: Arc<dyn ConversationSession>, metrics: Arc<AgentMetrics>) -> Self {
        Self { session, metrics }
    }

    /// Handle one inbound data packet. Never fails, never panics.
    pub async fn on_data_received(&self, packet: DataPacket) {
        self.metrics.packets_received.inc();

        match self.process(&packet).await {
            Ok(Some(_)) => {
                self.metrics.messages_forwarded.inc();
            }
            Ok(None) => {
                // No message present: silent no-op, not an error.
            }
            Err(e) => {
                self.metrics.record_failure(e.kind());
                tracing::error!(
                    kind = e.kind().as_str(),
                    error = %e,
                    participant = packet.participant.as_deref().unwrap_or("unknown"),
                    "error processing data packet"
                );
            }
        }
    }

    /// Extract and forward. Each failure branch is a distinct error value so
    /// the branches stay independently testable.
    async fn process(&self, packet: &DataPacket) -> Result<Option<String>> {
        let message = match extract_message(&packet.data)? {
            Extraction::Message(m) => m,
            Extraction::MissingMessage => return Ok(None),
        };

        tracing::info!(
            message = %message,
            participant = packet.participant.as_deref().unwrap_or("unknown"),
            "received external message"
        );

        // Interrupt first, then seed the reply. Order is part of the contract.
        self.session.interrupt().await?;
        self.session
            .generate_reply(&format!("{REPLY_PREFIX}{message}"))
            .await?;

        Ok(Some(message))
    }
}
