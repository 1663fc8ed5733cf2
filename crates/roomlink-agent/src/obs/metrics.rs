//! Minimal metrics registry for the agent.
//!
//! The agent has no per-tenant label axes, so counters are fixed named
//! atomics instead of label-vector maps. Failure counters are keyed by the
//! stable `FailureKind` labels shared with the log fields.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use roomlink_core::FailureKind;

/// Single monotonically increasing counter.
#[derive(Default)]
pub struct Counter(AtomicU64);

impl Counter {
    /// Increment by 1.
    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        let _ = writeln!(out, "{} {}", name, self.get());
    }

    fn render_labeled(&self, name: &str, label: &str, value: &str, out: &mut String) {
        let _ = writeln!(out, "{}{{{}=\"{}\"}} {}", name, label, value, self.get());
    }
}

#[derive(Default)]
pub struct AgentMetrics {
    pub packets_received: Counter,
    pub packets_oversize: Counter,
    pub messages_forwarded: Counter,
    failures_utf8: Counter,
    failures_json: Counter,
    failures_session: Counter,
    failures_other: Counter,
}

impl AgentMetrics {
    /// Count one processing failure under its stable kind label.
    pub fn record_failure(&self, kind: FailureKind) {
        match kind {
            FailureKind::Utf8 => self.failures_utf8.inc(),
            FailureKind::Json => self.failures_json.inc(),
            FailureKind::Session => self.failures_session.inc(),
            _ => self.failures_other.inc(),
        }
    }

    pub fn failures_total(&self) -> u64 {
        self.failures_utf8.get()
            + self.failures_json.get()
            + self.failures_session.get()
            + self.failures_other.get()
    }

    /// Render all counters in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.packets_received
            .render("roomlink_packets_received_total", &mut out);
        self.packets_oversize
            .render("roomlink_packets_oversize_total", &mut out);
        self.messages_forwarded
            .render("roomlink_messages_forwarded_total", &mut out);

        let _ = writeln!(out, "# TYPE roomlink_processing_failures_total counter");
        self.failures_utf8.render_labeled(
            "roomlink_processing_failures_total",
            "kind",
            FailureKind::Utf8.as_str(),
            &mut out,
        );
        self.failures_json.render_labeled(
            "roomlink_processing_failures_total",
            "kind",
            FailureKind::Json.as_str(),
            &mut out,
        );
        self.failures_session.render_labeled(
            "roomlink_processing_failures_total",
            "kind",
            FailureKind::Session.as_str(),
            &mut out,
        );
        self.failures_other.render_labeled(
            "roomlink_processing_failures_total",
            "kind",
            FailureKind::Internal.as_str(),
            &mut out,
        );
        out
    }
}
