//! Ingress transport (WebSocket).
//!
//! Turns room frames into `DataPacket`s and feeds them to the handler, one
//! invocation per frame. The handler's outcome never terminates the
//! connection.

pub mod ws;
