//! Benchmarks for per-bit minimization and whole-font compilation.
//!
//! Run with:
//! ```bash
//! cargo bench --bench minimize
//! ```

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qmc_font::compile::{compile, compile_bit, CompileOptions};
use qmc_font::table::{GlyphTable, OUTPUT_BITS};

// ============================================================================
// Benchmark: Single output bit
// ============================================================================

fn bench_compile_bit(c: &mut Criterion) {
    let table = GlyphTable::font8x8_basic();
    let mut group = c.benchmark_group("minimize/bit");

    // A sparse output bit, a dense one and the busiest one in font8x8.
    for bit in [0, 9, 44] {
        let minterms = table.seed(bit, 0x80).len();
        group.throughput(Throughput::Elements(minterms as u64));
        group.bench_with_input(BenchmarkId::from_parameter(bit), &bit, |b, &bit| {
            b.iter(|| compile_bit(black_box(&table), bit, 0x80));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Whole font
// ============================================================================

fn bench_compile_font(c: &mut Criterion) {
    let table = GlyphTable::font8x8_basic();
    let mut group = c.benchmark_group("minimize/font");
    group.throughput(Throughput::Elements(OUTPUT_BITS as u64));

    for parallel in [false, true] {
        let options = CompileOptions {
            parallel,
            ..Default::default()
        };
        let name = if parallel { "parallel" } else { "sequential" };
        group.bench_function(name, |b| {
            b.iter(|| compile(black_box(&table), &options).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compile_bit, bench_compile_font);
criterion_main!(benches);
