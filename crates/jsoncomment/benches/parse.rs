//! Benchmark – `jsoncomment::parse`
#![allow(missing_docs)]

use std::{fmt::Write, hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use jsoncomment::{ParserOptions, parse, parse_with_options};

/// Produce a deterministic settings-style document with `entries` members,
/// each followed by a block comment.
fn make_commented_payload(entries: usize) -> String {
    let mut s = String::from("/* generated */\n{\n");
    for i in 0..entries {
        let sep = if i + 1 == entries { "" } else { "," };
        let _ = match i % 4 {
            0 => writeln!(s, "  \"int{i}\": {i}{sep} /* count */"),
            1 => writeln!(s, "  \"float{i}\": {i}.25e-1{sep} /* ratio */"),
            2 => writeln!(s, "  \"str{i}\": \"line \\u00e9 {i}\"{sep} /* label */"),
            _ => writeln!(s, "  \"arr{i}\": [true, false, null, {{\"k\": {i}}}]{sep} /* flags */"),
        };
    }
    s.push('}');
    s
}

/// The same members without comments, for comparison.
fn make_plain_payload(entries: usize) -> String {
    make_commented_payload(entries)
        .lines()
        .map(|line| line.split(" /*").next().unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for &entries in &[10usize, 1_000, 10_000] {
        let commented = make_commented_payload(entries);
        let plain = make_plain_payload(entries);

        group.throughput(Throughput::Bytes(commented.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("commented", entries),
            &commented,
            |b, text| b.iter(|| black_box(parse(black_box(text)).unwrap())),
        );

        group.throughput(Throughput::Bytes(plain.len() as u64));
        group.bench_with_input(BenchmarkId::new("plain", entries), &plain, |b, text| {
            b.iter(|| black_box(parse(black_box(text)).unwrap()));
        });
    }

    group.finish();
}

fn bench_truncated(c: &mut Criterion) {
    let payload = make_commented_payload(1_000);
    let truncated = &payload[..payload.len() / 2];
    let options = ParserOptions::default();

    c.bench_function("parse_truncated_half", |b| {
        b.iter(|| black_box(parse_with_options(black_box(truncated), options)));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(5));
    targets = bench_parse, bench_truncated
}
criterion_main!(benches);
