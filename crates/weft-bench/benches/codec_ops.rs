//! Criterion benchmarks for the board text codec.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weft_bench::reference_board;
use weft_io::{read_board, write_board};

fn bench_codec(c: &mut Criterion) {
    let board = reference_board();
    let mut encoded = Vec::new();
    write_board(&mut encoded, &board).unwrap();

    c.bench_function("codec/encode", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(encoded.len());
            write_board(&mut out, black_box(&board)).unwrap();
            out
        })
    });

    c.bench_function("codec/decode", |b| {
        b.iter(|| read_board(black_box(encoded.as_slice())).unwrap())
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
