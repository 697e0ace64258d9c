//! Benchmarks for parsing, replay, and trace generation.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use march_engine::trace::write_trace;
use march_engine::{analyze, parse, Algorithm, NeighborhoodMachine};

const MATS_PLUS: &str = "awz,urzwi,dri";
const MARCH_C_MINUS: &str = "awz,urzwi,uriwz,drzwi,driwz,drz";
const LONG: &str = "awzwi,dwzwi,urizwi,drwzrzwi,uwzwiwz,drzwiwzwi,urwz,dwi";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (name, text) in [("mats_plus", MATS_PLUS), ("march_c_minus", MARCH_C_MINUS)] {
        group.bench_function(name, |b| b.iter(|| black_box(parse(black_box(text)))));
    }
    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");
    for (name, text) in [
        ("mats_plus", MATS_PLUS),
        ("march_c_minus", MARCH_C_MINUS),
        ("long", LONG),
    ] {
        let Ok(alg) = Algorithm::parse(text) else {
            continue;
        };
        group.throughput(Throughput::Elements(alg.sequences().len() as u64 * 9));
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut machine = NeighborhoodMachine::new();
                black_box(machine.run(black_box(&alg)).ok());
                machine.registry().len()
            });
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    c.bench_function("analyze/march_c_minus", |b| {
        b.iter(|| black_box(analyze(black_box(MARCH_C_MINUS)).ok()));
    });
}

fn bench_trace(c: &mut Criterion) {
    let Ok(seqs) = parse(MARCH_C_MINUS) else {
        return;
    };
    let mut group = c.benchmark_group("trace");
    group.throughput(Throughput::Elements(1 << 12));
    group.bench_function("march_c_minus_4k", |b| {
        let mut out = Vec::with_capacity(1 << 20);
        b.iter(|| {
            out.clear();
            black_box(write_trace(&mut out, black_box(&seqs), 12).ok());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_replay, bench_analyze, bench_trace);
criterion_main!(benches);
