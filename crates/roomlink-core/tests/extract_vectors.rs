//! Payload extraction vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]


use std::fs;

use roomlink_core::{extract_message, Extraction};
use vector_loader::TestVector;

fn load_vectors() -> Vec<TestVector> {
    let s = fs::read_to_string("tests/vectors/extract.json").unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn run_extract_vectors() {
    for v in load_vectors() {
        let bytes = v.packet.decode();
        let result = extract_message(&bytes);

        if let Some(err) = &v.expect_error {
            let e = result.expect_err(&v.description);
            assert_eq!(e.kind().as_str(), err.kind, "{}", v.description);
            continue;
        }

        let expect = v.expect.as_ref().expect("vector has neither expect nor expect_error");
        let got = result.expect(&v.description);
        if expect.missing {
            assert_eq!(got, Extraction::MissingMessage, "{}", v.description);
        } else {
            let want = expect.message.clone().expect("expect.message required");
            assert_eq!(got, Extraction::Message(want), "{}", v.description);
        }
    }
}

#[test]
fn extraction_is_pure_and_repeatable() {
    let bytes = br#"{"message": "hello"}"#;
    let a = extract_message(bytes).unwrap();
    let b = extract_message(bytes).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, Extraction::Message("hello".to_string()));
}

#[test]
fn unknown_keys_are_ignored() {
    let bytes = br#"{"message": "hi", "sender": "ts-client", "ts": 123}"#;
    let got = extract_message(bytes).unwrap();
    assert_eq!(got, Extraction::Message("hi".to_string()));
}
