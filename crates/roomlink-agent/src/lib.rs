//! roomlink agent library entry.
//!
//! This crate wires the ingress transport, the data handler, the session
//! seam, and the operational endpoints into a runnable agent. It is intended
//! to be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handler;
pub mod obs;
pub mod ops;
pub mod router;
pub mod session;
pub mod transport;
