//! Criterion micro-benchmarks for the per-word rule kernel.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weft_bench::reference_board;
use weft_engine::kernel::step_word;

fn bench_step_word(c: &mut Criterion) {
    let board = reference_board();
    let geometry = board.geometry();

    c.bench_function("kernel/step_word", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for row in 0..geometry.rows() {
                for col in 0..geometry.words_per_row() {
                    acc ^= step_word(black_box(&board), row, col);
                }
            }
            acc
        })
    });
}

criterion_group!(benches, bench_step_word);
criterion_main!(benches);
