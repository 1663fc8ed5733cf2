//! Top-level facade crate for roomlink.
//!
//! Re-exports core types and the agent library so users can depend on a single crate.

pub mod core {
    pub use roomlink_core::*;
}

pub mod agent {
    pub use roomlink_agent::*;
}
