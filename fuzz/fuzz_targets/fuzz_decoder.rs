#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};
use strictjson::{DecodeOptions, StdFactory, decode, decode_slice, materialize};

const HEADER: usize = 1; // option flags

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

// The first four are the only whitespace JSON allows; the rest must be
// rejected.
static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    b"\r\n",
    "\u{00A0}".as_bytes(),
    "\u{2028}".as_bytes(),
    "\u{3000}".as_bytes(),
    "\u{FEFF}".as_bytes(),
];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x03);

        let mut prefix = HEADER;
        let limit = max_size - prefix;
        prefix += append_whitespace(&mut data[prefix..], limit);
        let limit = max_size - prefix;
        prefix += append_value(&mut data[prefix..], size.max(2), limit);
        let limit = max_size - prefix;
        prefix += append_whitespace(&mut data[prefix..], limit);

        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append 0‒N whitespace sequences to `buf`, but never exceed `limit`.
/// Returns the number of bytes written.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        let n = rng.random_range(0..=limit.min(4));
        let mut written = 0;

        for _ in 0..n {
            // Mostly legal whitespace, occasionally something to reject.
            let idx = if rng.random_ratio(1, 16) {
                rng.random_range(0..WS_TABLE.len())
            } else {
                rng.random_range(0..5)
            };
            let w = WS_TABLE[idx];
            if written + w.len() > limit {
                break;
            }

            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..size * 2).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("Failed to serialize arbitrary value");

    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);

    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(23)?;
        let value = match node_type {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3 => Value::Number(i64::arbitrary(u)?.into()),
            4 => Value::Number(u64::arbitrary(u)?.into()),
            5..=12 => Value::String(u.arbitrary()?),
            13..=17 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            18..=22 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn decoder(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let data = &data[HEADER..];
    let options = DecodeOptions::default()
        .with_bigint_as_string(flags & 1 != 0)
        .with_object_as_array(flags & 2 != 0);

    let from_bytes = decode_slice(data, options);
    let Ok(text) = std::str::from_utf8(data) else {
        assert!(from_bytes.is_err(), "accepted invalid UTF-8");
        return;
    };

    let from_text = decode(text, options);
    assert_eq!(from_bytes, from_text);
    // Each call gets a fresh cursor.
    assert_eq!(decode(text, options), from_text);

    match serde_json::from_str::<Value>(text) {
        Ok(_) => assert!(from_text.is_ok(), "rejected valid JSON: {from_text:?}"),
        // serde_json has its own nesting limit and refuses numbers that
        // overflow f64.
        Err(err)
            if err.to_string().contains("recursion limit")
                || err.to_string().contains("out of range") => {}
        Err(err) => assert!(from_text.is_err(), "accepted invalid JSON ({err})"),
    }

    if let Ok(value) = from_text {
        let _ = materialize(value, &options, &StdFactory);
    }
}

fuzz_target!(|data: &[u8]| decoder(data));
