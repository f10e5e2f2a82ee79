use quickcheck::{QuickCheck, TestResult};
use quickcheck_macros::quickcheck;

use crate::{DecodeOptions, Value, decode, decode_slice};

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Inserts JSON whitespace after every structural character.
fn spread_out(compact: &str) -> String {
    let mut out = String::with_capacity(compact.len() * 2);
    let mut in_string = false;
    let mut escaped = false;
    for c in compact.chars() {
        out.push(c);
        if in_string {
            match (escaped, c) {
                (true, _) => escaped = false,
                (false, '\\') => escaped = true,
                (false, '"') => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' | '[' | ',' | ':' => out.push_str("\r\n\t "),
            _ => {}
        }
    }
    out
}

#[test]
fn roundtrip_rendered_values() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        let options = DecodeOptions::default().with_bigint_as_string(true);
        let rendered = value.to_string();
        decode(&rendered, options).as_ref() == Ok(&value)
            && decode(&spread_out(&rendered), options).as_ref() == Ok(&value)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Value) -> bool);
}

#[test]
fn bytes_and_text_decode_alike() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String) -> bool {
        let options = DecodeOptions::default();
        decode(&text, options) == decode_slice(text.as_bytes(), options)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String) -> bool);
}

#[quickcheck]
fn accepts_what_serde_json_accepts(text: String) -> TestResult {
    let ours = decode(&text, DecodeOptions::default());
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(_) => TestResult::from_bool(ours.is_ok()),
        // serde_json refuses numbers that overflow f64, where this decoder
        // yields an infinite float, and stops nesting at 128 levels.
        Err(err)
            if err.to_string().contains("out of range")
                || err.to_string().contains("recursion limit") =>
        {
            TestResult::discard()
        }
        Err(_) => TestResult::from_bool(ours.is_err()),
    }
}

#[quickcheck]
fn decoding_is_idempotent(value: Value) -> bool {
    let rendered = value.to_string();
    let options = DecodeOptions::default();
    decode(&rendered, options) == decode(&rendered, options)
}
