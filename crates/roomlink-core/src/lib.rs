//! roomlink core: transport-agnostic packet primitives, payload extraction,
//! and error types.
//!
//! This crate defines what a room data packet is and how its payload is
//! interpreted, independent of any transport or runtime. The agent crate
//! layers session effects and ingress on top of it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Packets are peer-controlled bytes; every malformed input must surface as
//! `RoomLinkError`/`Result` so the agent never crashes on bad traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod extract;
pub mod packet;

/// Shared result type.
pub use error::{FailureKind, Result, RoomLinkError};
pub use extract::{extract_message, Extraction};
pub use packet::DataPacket;
