#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use roomlink_agent::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
agent:
  listen: "0.0.0.0:8080"
  max_packet_bytez: 123 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.agent.listen, "0.0.0.0:8080");
    assert_eq!(cfg.agent.max_packet_bytes, 4096);
}

#[test]
fn rejects_unsupported_version() {
    let bad = r#"
version: 2
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_ping_interval_out_of_range() {
    for ping in ["4999", "120001"] {
        let bad = format!(
            r#"
version: 1
agent:
  ping_interval_ms: {ping}
  idle_timeout_ms: 600000
"#
        );
        let err = config::load_from_str(&bad).expect_err("must fail");
        assert_eq!(err.kind().as_str(), "BAD_REQUEST");
    }
}

#[test]
fn rejects_idle_timeout_out_of_range() {
    for idle in ["9999", "600001"] {
        let bad = format!(
            r#"
version: 1
agent:
  ping_interval_ms: 5000
  idle_timeout_ms: {idle}
"#
        );
        let err = config::load_from_str(&bad).expect_err("must fail");
        assert_eq!(err.kind().as_str(), "BAD_REQUEST");
    }
}

#[test]
fn accepts_range_endpoints() {
    let ok = r#"
version: 1
agent:
  ping_interval_ms: 5000
  idle_timeout_ms: 600000
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.agent.ping_interval_ms, 5000);
    assert_eq!(cfg.agent.idle_timeout_ms, 600000);
}

#[test]
fn rejects_idle_timeout_not_greater_than_ping() {
    let bad = r#"
version: 1
agent:
  ping_interval_ms: 20000
  idle_timeout_ms: 20000
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "BAD_REQUEST");
}

#[test]
fn rejects_zero_packet_cap() {
    let bad = r#"
version: 1
agent:
  max_packet_bytes: 0
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "BAD_REQUEST");
}
