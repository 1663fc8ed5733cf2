//! Lightweight in-process metrics (dependency-free).
//!
//! Counters are plain atomics rendered by the `/metrics` handler in
//! Prometheus text exposition format.

pub mod metrics;

pub use metrics::AgentMetrics;
