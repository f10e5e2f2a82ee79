use quickcheck::{Arbitrary, Gen};

use crate::{Array, Map, Value};

const INTEGER_LIMIT: i64 = 1 << 32;

/// A finite float; JSON has no spelling for NaN or the infinities.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct JsonFloat(pub f64);

impl Arbitrary for JsonFloat {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut value = f64::arbitrary(g);
        while !value.is_finite() {
            value = f64::arbitrary(g);
        }

        Self(value)
    }
}

/// Decimal text for an integer outside `[-2^32, 2^32)`.
fn big_integer_text(g: &mut Gen) -> String {
    let magnitude = u64::arbitrary(g) | (1 << 40);
    let extra_digits = usize::arbitrary(g) % 3;
    let mut text = if bool::arbitrary(g) { String::from("-") } else { String::new() };
    text.push_str(&magnitude.to_string());
    for _ in 0..extra_digits {
        text.push(char::from(b'0' + u8::arbitrary(g) % 10));
    }
    text
}

fn integer(g: &mut Gen) -> i64 {
    i64::arbitrary(g) % INTEGER_LIMIT
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_scalar(g: &mut Gen) -> Value {
            match usize::arbitrary(g) % 6 {
                0 => Value::Null,
                1 => Value::Boolean(bool::arbitrary(g)),
                2 => Value::Integer(integer(g)),
                3 => Value::Float(JsonFloat::arbitrary(g).0),
                4 => Value::BigInt(big_integer_text(g)),
                _ => Value::String(String::arbitrary(g)),
            }
        }

        fn gen_val(g: &mut Gen, depth: usize) -> Value {
            if depth == 0 {
                return gen_scalar(g);
            }
            match usize::arbitrary(g) % 3 {
                0 => gen_scalar(g),
                1 => {
                    let len = usize::arbitrary(g) % 4;
                    let mut vec = Array::new();
                    for _ in 0..len {
                        vec.push(gen_val(g, depth - 1));
                    }
                    Value::Array(vec)
                }
                _ => {
                    let len = usize::arbitrary(g) % 4;
                    let mut map = Map::new();
                    for _ in 0..len {
                        map.insert(String::arbitrary(g), gen_val(g, depth - 1));
                    }
                    Value::Object(map)
                }
            }
        }

        let depth = usize::arbitrary(g) % 4;
        gen_val(g, depth)
    }
}
