#![allow(missing_docs)]

use core::fmt::Write;

use strictjson::{DecodeOptions, StdFactory, decode, decode_with};

fn render(inputs: &[&str], options: DecodeOptions) -> String {
    let mut out = String::new();
    for input in inputs {
        match decode(input, options) {
            Ok(value) => writeln!(out, "{input:?} => {value:?}"),
            Err(err) => writeln!(out, "{input:?} !! {err}"),
        }
        .unwrap();
    }
    out.trim_end().to_owned()
}

#[test]
fn snapshot_values() {
    let inputs = [
        "[1,2,3]",
        r#"{"a":1,"b":[true,false,null]}"#,
        "-0",
        "99999999999999999999",
        "[1.5,-2e-3]",
        r#""tab\tand \"quote\"""#,
    ];

    insta::assert_snapshot!(render(&inputs, DecodeOptions::default()), @r#"
    "[1,2,3]" => Array([Integer(1), Integer(2), Integer(3)])
    "{\"a\":1,\"b\":[true,false,null]}" => Object({"a": Integer(1), "b": Array([Boolean(true), Boolean(false), Null])})
    "-0" => Integer(0)
    "99999999999999999999" => Float(1e20)
    "[1.5,-2e-3]" => Array([Float(1.5), Float(-0.002)])
    "\"tab\\tand \\\"quote\\\"\"" => String("tab\tand \"quote\"")
    "#);
}

#[test]
fn snapshot_big_integer_boundaries() {
    let inputs = ["[4294967295,4294967296,-4294967296,-4294967297]"];

    insta::assert_snapshot!(render(&inputs, DecodeOptions::default()), @r#""[4294967295,4294967296,-4294967296,-4294967297]" => Array([Integer(4294967295), Float(4294967296.0), Integer(-4294967296), Float(-4294967297.0)])"#);
    insta::assert_snapshot!(render(&inputs, DecodeOptions::default().with_bigint_as_string(true)), @r#""[4294967295,4294967296,-4294967296,-4294967297]" => Array([Integer(4294967295), BigInt("4294967296"), Integer(-4294967296), BigInt("-4294967297")])"#);
}

#[test]
fn snapshot_errors() {
    let inputs = [
        "",
        "0123",
        "[1,2,3,]",
        r#"{"a":1,}"#,
        "{\"a\":1,\r\n}",
        "[true fals]",
        "{\"k\"\n:\n[1 2]}",
    ];

    insta::assert_snapshot!(render(&inputs, DecodeOptions::default()), @r#"
    "" !! Unexpected end of JSON at line 1, column 1
    "0123" !! Integral part must not start with 0 at line 1, column 1
    "[1,2,3,]" !! Invalid value format at line 1, column 8
    "{\"a\":1,}" !! Closing bracket after comma is not permitted at line 1, column 8
    "{\"a\":1,\r\n}" !! Closing bracket after comma is not permitted at line 2, column 1
    "[true fals]" !! 'f' is not allowed (expected: ',', ']') at line 1, column 7
    "{\"k\"\n:\n[1 2]}" !! '2' is not allowed (expected: ',', ']') at line 3, column 4
    "#);
}

#[test]
fn snapshot_object_as_array() {
    let options = DecodeOptions::default().with_object_as_array(true);
    let native = decode_with(r#"{"b":{"c":[1,{}]},"a":"x"}"#, options, &StdFactory).unwrap();

    insta::assert_snapshot!(native.to_string(), @r#"[["b",[["c",[1,[]]]]],["a","x"]]"#);
}
