use crate::{DecodeOptions, value::Value};

/// Abstraction over native value construction.
///
/// [`materialize`] drives a factory over a decoded [`Value`], so callers can
/// build their own representation without walking the tree themselves.
#[allow(clippy::wrong_self_convention)]
pub trait JsonFactory {
    type Array;
    type Object;
    type Any;

    fn new_null(&self) -> Self::Any;
    fn new_bool(&self, b: bool) -> Self::Any;
    fn new_integer(&self, n: i64) -> Self::Any;
    fn new_float(&self, n: f64) -> Self::Any;
    /// An integer too large for [`new_integer`](Self::new_integer), as
    /// decimal text.
    fn new_big_integer(&self, digits: String) -> Self::Any;
    fn new_string(&self, s: String) -> Self::Any;
    fn new_array(&self) -> Self::Array;
    fn new_object(&self) -> Self::Object;

    fn push_array(&self, array: &mut Self::Array, val: Self::Any);
    fn insert_object(&self, obj: &mut Self::Object, key: String, val: Self::Any);

    fn into_any_array(&self, a: Self::Array) -> Self::Any;
    fn into_any_object(&self, o: Self::Object) -> Self::Any;
}

/// Builds `factory`'s representation of `value`.
///
/// With [`DecodeOptions::object_as_array`] set, each object becomes an array
/// of two-element `[key, value]` arrays in member order; otherwise objects go
/// through the factory's keyed-object constructors.
///
/// # Examples
///
/// ```
/// use strictjson::{DecodeOptions, StdFactory, decode, materialize};
///
/// let options = DecodeOptions::default().with_object_as_array(true);
/// let value = decode(r#"{"a":1,"b":{"c":null}}"#, options).unwrap();
/// let native = materialize(value, &options, &StdFactory);
/// assert_eq!(native.to_string(), r#"[["a",1],["b",[["c",null]]]]"#);
/// ```
pub fn materialize<F: JsonFactory>(value: Value, options: &DecodeOptions, factory: &F) -> F::Any {
    match value {
        Value::Null => factory.new_null(),
        Value::Boolean(b) => factory.new_bool(b),
        Value::Integer(n) => factory.new_integer(n),
        Value::Float(n) => factory.new_float(n),
        Value::BigInt(digits) => factory.new_big_integer(digits),
        Value::String(s) => factory.new_string(s),
        Value::Array(items) => {
            let mut array = factory.new_array();
            for item in items {
                let item = materialize(item, options, factory);
                factory.push_array(&mut array, item);
            }
            factory.into_any_array(array)
        }
        Value::Object(map) if options.object_as_array => {
            let mut entries = factory.new_array();
            for (key, val) in map {
                let mut entry = factory.new_array();
                factory.push_array(&mut entry, factory.new_string(key));
                let val = materialize(val, options, factory);
                factory.push_array(&mut entry, val);
                factory.push_array(&mut entries, factory.into_any_array(entry));
            }
            factory.into_any_array(entries)
        }
        Value::Object(map) => {
            let mut obj = factory.new_object();
            for (key, val) in map {
                let val = materialize(val, options, factory);
                factory.insert_object(&mut obj, key, val);
            }
            factory.into_any_object(obj)
        }
    }
}

/// Factory producing [`Value`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFactory;

impl JsonFactory for StdFactory {
    type Array = crate::Array;
    type Object = crate::Map;
    type Any = Value;

    #[inline]
    fn new_null(&self) -> Self::Any {
        Value::Null
    }

    #[inline]
    fn new_bool(&self, b: bool) -> Self::Any {
        Value::Boolean(b)
    }

    #[inline]
    fn new_integer(&self, n: i64) -> Self::Any {
        Value::Integer(n)
    }

    #[inline]
    fn new_float(&self, n: f64) -> Self::Any {
        Value::Float(n)
    }

    #[inline]
    fn new_big_integer(&self, digits: String) -> Self::Any {
        Value::BigInt(digits)
    }

    #[inline]
    fn new_string(&self, s: String) -> Self::Any {
        Value::String(s)
    }

    #[inline]
    fn new_array(&self) -> Self::Array {
        Vec::new()
    }

    #[inline]
    fn new_object(&self) -> Self::Object {
        crate::Map::new()
    }

    #[inline]
    fn push_array(&self, array: &mut Self::Array, val: Self::Any) {
        array.push(val);
    }

    #[inline]
    fn insert_object(&self, obj: &mut Self::Object, key: String, val: Self::Any) {
        obj.insert(key, val);
    }

    #[inline]
    fn into_any_array(&self, a: Self::Array) -> Self::Any {
        Value::Array(a)
    }

    #[inline]
    fn into_any_object(&self, o: Self::Object) -> Self::Any {
        Value::Object(o)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::decode;

    /// Renders values as s-expressions so the factory calls are visible.
    struct SexprFactory;

    impl JsonFactory for SexprFactory {
        type Array = Vec<String>;
        type Object = BTreeMap<String, String>;
        type Any = String;

        fn new_null(&self) -> String {
            "nil".into()
        }
        fn new_bool(&self, b: bool) -> String {
            if b { "#t".into() } else { "#f".into() }
        }
        fn new_integer(&self, n: i64) -> String {
            format!("(int {n})")
        }
        fn new_float(&self, n: f64) -> String {
            format!("(float {n})")
        }
        fn new_big_integer(&self, digits: String) -> String {
            format!("(big {digits})")
        }
        fn new_string(&self, s: String) -> String {
            format!("{s:?}")
        }
        fn new_array(&self) -> Vec<String> {
            Vec::new()
        }
        fn new_object(&self) -> BTreeMap<String, String> {
            BTreeMap::new()
        }
        fn push_array(&self, array: &mut Vec<String>, val: String) {
            array.push(val);
        }
        fn insert_object(&self, obj: &mut BTreeMap<String, String>, key: String, val: String) {
            obj.insert(key, val);
        }
        fn into_any_array(&self, a: Vec<String>) -> String {
            format!("(list {})", a.join(" "))
        }
        fn into_any_object(&self, o: BTreeMap<String, String>) -> String {
            let members: Vec<_> = o.into_iter().map(|(k, v)| format!("({k} . {v})")).collect();
            format!("(record {})", members.join(" "))
        }
    }

    #[test]
    fn objects_become_records_by_default() {
        let options = DecodeOptions::default().with_bigint_as_string(true);
        let value = decode(r#"{"b":[1,2.5,true],"a":99999999999999999999}"#, options).unwrap();
        assert_eq!(
            materialize(value, &options, &SexprFactory),
            "(record (a . (big 99999999999999999999)) (b . (list (int 1) (float 2.5) #t)))"
        );
    }

    #[test]
    fn objects_become_entry_lists_when_requested() {
        let options = DecodeOptions::default().with_object_as_array(true);
        let value = decode(r#"{"b":null,"a":{}}"#, options).unwrap();
        assert_eq!(
            materialize(value, &options, &SexprFactory),
            r#"(list (list "b" nil) (list "a" (list )))"#
        );
    }

    #[test]
    fn std_factory_round_trips_without_option() {
        let options = DecodeOptions::default();
        let value = decode(r#"{"x":[{"y":"z"}]}"#, options).unwrap();
        assert_eq!(materialize(value.clone(), &options, &StdFactory), value);
    }
}
