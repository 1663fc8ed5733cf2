//! Shared error type across roomlink crates.

use thiserror::Error;

/// Stable failure labels used in logs and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Packet bytes are not valid UTF-8.
    Utf8,
    /// Payload text is not valid JSON, or not a JSON object.
    Json,
    /// Session command could not be dispatched.
    Session,
    /// Invalid input / malformed request outside the packet path.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal agent error.
    Internal,
}

impl FailureKind {
    /// String representation used in log fields and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Utf8 => "UTF8",
            FailureKind::Json => "JSON",
            FailureKind::Session => "SESSION",
            FailureKind::BadRequest => "BAD_REQUEST",
            FailureKind::UnsupportedVersion => "UNSUPPORTED_VERSION",
            FailureKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RoomLinkError>;

/// Unified error type used by core and agent.
#[derive(Debug, Error)]
pub enum RoomLinkError {
    #[error("invalid utf-8 payload: {0}")]
    Utf8(String),
    #[error("invalid json payload: {0}")]
    Json(String),
    #[error("session dispatch failed: {0}")]
    Session(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl RoomLinkError {
    /// Map an error to its stable failure label.
    pub fn kind(&self) -> FailureKind {
        match self {
            RoomLinkError::Utf8(_) => FailureKind::Utf8,
            RoomLinkError::Json(_) => FailureKind::Json,
            RoomLinkError::Session(_) => FailureKind::Session,
            RoomLinkError::BadRequest(_) => FailureKind::BadRequest,
            RoomLinkError::UnsupportedVersion => FailureKind::UnsupportedVersion,
            RoomLinkError::Internal(_) => FailureKind::Internal,
        }
    }
}
