use serde::Deserialize;
use roomlink_core::error::{Result, RoomLinkError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    pub version: u32,

    #[serde(default)]
    pub agent: AgentSection,
}

impl AgentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RoomLinkError::UnsupportedVersion);
        }

        self.agent.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_ping_interval_ms")]
    pub ping_interval_ms: u64,

    #[serde(default = "default_idle_timeout_ms")]
    pub idle_timeout_ms: u64,

    /// Size cap applied to inbound packets before any decode work.
    #[serde(default = "default_max_packet_bytes")]
    pub max_packet_bytes: usize,

    /// Depth of the session command queue.
    #[serde(default = "default_session_queue_depth")]
    pub session_queue_depth: usize,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            ping_interval_ms: default_ping_interval_ms(),
            idle_timeout_ms: default_idle_timeout_ms(),
            max_packet_bytes: default_max_packet_bytes(),
            session_queue_depth: default_session_queue_depth(),
        }
    }
}

impl AgentSection {
    pub fn validate(&self) -> Result<()> {
        if !(5000..=120000).contains(&self.ping_interval_ms) {
            return Err(RoomLinkError::BadRequest(
                "agent.ping_interval_ms must be between 5000 and 120000".into(),
            ));
        }
        if !(10000..=600000).contains(&self.idle_timeout_ms) {
            return Err(RoomLinkError::BadRequest(
                "agent.idle_timeout_ms must be between 10000 and 600000".into(),
            ));
        }
        if self.idle_timeout_ms <= self.ping_interval_ms {
            return Err(RoomLinkError::BadRequest(
                "agent.idle_timeout_ms must be greater than ping_interval_ms".into(),
            ));
        }
        if self.max_packet_bytes == 0 {
            return Err(RoomLinkError::BadRequest(
                "agent.max_packet_bytes must be greater than 0".into(),
            ));
        }
        if self.session_queue_depth == 0 {
            return Err(RoomLinkError::BadRequest(
                "agent.session_queue_depth must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_ping_interval_ms() -> u64 {
    20000
}
fn default_idle_timeout_ms() -> u64 {
    60000
}
fn default_max_packet_bytes() -> usize {
    4096
}
fn default_session_queue_depth() -> usize {
    256
}
