#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsoncomment::{ParserOptions, Value, parse_with_options};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::Map;

const HEADER: usize = 1; // flag byte

// Keeps the recursive descent off the end of the stack.
const MAX_DEPTH: usize = 256;

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static FILLER_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    b"/**/",
    b"/* note */",
    b"/* \"quoted\" */",
    b"/* ] } */",
    b"/*/",
    b"//",
    b",",
    "\u{2028}".as_bytes(),
    "\u{3000}".as_bytes(),
];

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

        while prefix < size {
            prefix += append_filler(&mut data[prefix..], max_size - prefix);
            prefix += append_value(&mut data[prefix..], size, max_size - prefix);
            prefix += append_filler(&mut data[prefix..], max_size - prefix);
        }

        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append 1‒N whitespace or comment fragments to `buf`, never exceeding
/// `limit`. Returns the number of bytes written.
fn append_filler(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }

        let n = rng.random_range(1..=limit.min(8));
        let mut written = 0;

        for _ in 0..n {
            let w = FILLER_TABLE[rng.random_range(0..FILLER_TABLE.len())];
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
    if limit == 0 {
        return 0;
    }
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..=size * 2).min(limit));
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
struct ArbitraryValue(serde_json::Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(24)?;
        let value = match node_type {
            0 => serde_json::Value::Null,
            1 => serde_json::Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                serde_json::Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3 => serde_json::Value::Number(u.arbitrary::<i64>()?.into()),
            4..=10 => serde_json::Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                serde_json::Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=21 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                serde_json::Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            22 => serde_json::Value::String(comment_like(u)?),
            23 => {
                let v: ArbitraryValue = u.arbitrary()?;
                let mut m = Map::new();
                m.insert(comment_like(u)?, v.0);
                serde_json::Value::Object(m)
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

/// String contents that would open or close a comment outside quotes.
fn comment_like(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<String> {
    let body: String = u.arbitrary()?;
    Ok(match u.choose_index(4)? {
        0 => format!("/*{body}*/"),
        1 => format!("/*{body}"),
        2 => format!("{body}*/"),
        _ => format!("*/{body}/*"),
    })
}

fn all_floats_finite(value: &Value) -> bool {
    match value {
        Value::Float(f) => f.is_finite(),
        Value::Array(arr) => arr.iter().all(all_floats_finite),
        Value::Object(map) => map.values().all(all_floats_finite),
        _ => true,
    }
}

fn parser(data: &[u8]) {
    let Some((&flags, data)) = data.split_first() else {
        return;
    };

    let text = String::from_utf8_lossy(data);
    let options = ParserOptions {
        reject_truncated_input: flags & 1 != 0,
        max_depth: Some(if flags & 2 != 0 { 8 } else { MAX_DEPTH }),
        panic_on_error: false,
    };

    // Errors are expected on arbitrary input; panics are not.
    let Ok(Some(value)) = parse_with_options(&text, options) else {
        return;
    };

    // Whatever was accepted must re-encode to a complete document that
    // parses back, even in strict mode.
    let strict = ParserOptions {
        reject_truncated_input: true,
        ..options
    };
    let encoded = value.to_string();
    let reparsed = parse_with_options(&encoded, strict)
        .unwrap_or_else(|err| panic!("re-encoded output failed to parse: {err}\n{encoded}"))
        .expect("re-encoded output has a root container");

    if all_floats_finite(&value) {
        assert_eq!(reparsed, value, "{encoded}");
    }
}

fuzz_target!(|data: &[u8]| parser(data));
