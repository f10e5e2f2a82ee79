#![allow(missing_docs)]

use std::{fmt::Write, hint::black_box};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use strictjson::{DecodeOptions, decode};

fn make_document(records: usize) -> String {
    let mut s = String::from("[");
    for i in 0..records {
        if i > 0 {
            s.push(',');
        }
        write!(
            s,
            r#"{{"id":{i},"name":"record {i}","score":{}.5,"tags":["a","b\n"],"active":{},"big":1234567890123456789}}"#,
            i % 100,
            i % 2 == 0
        )
        .unwrap();
    }
    s.push(']');
    s
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for records in [10usize, 1_000] {
        let doc = make_document(records);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::new("strictjson", records), &doc, |b, doc| {
            b.iter(|| decode(black_box(doc), DecodeOptions::default()).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("strictjson_bigint", records), &doc, |b, doc| {
            let options = DecodeOptions::default().with_bigint_as_string(true);
            b.iter(|| decode(black_box(doc), options).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("serde_json", records), &doc, |b, doc| {
            b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(doc)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
