//! Criterion benchmarks for the enumerator.
//!
//! Measures the raw walk (counting visitor) and the walk plus text
//! rendering into an in-memory buffer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_logigrid::enumerate::{CombinationCounter, EnumConfig, EnumRunner};
use u_logigrid::render::TablePrinter;
use u_logigrid::symbols::SymbolTable;

fn table(width: usize, dims: usize) -> SymbolTable {
    SymbolTable::new(
        (0..=dims).map(|r| (0..width).map(move |c| format!("s{r}_{c}")).collect::<Vec<_>>()),
    )
    .unwrap()
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");
    group.sample_size(10);

    for (width, dims) in [(6usize, 1usize), (8, 1), (4, 2), (5, 2), (3, 4)] {
        let config = EnumConfig::default();
        group.bench_with_input(
            BenchmarkId::new(format!("m{width}_d{dims}"), width),
            &(width, dims),
            |b, &(w, d)| {
                b.iter(|| {
                    let mut counter = CombinationCounter::default();
                    EnumRunner::run(black_box(w), black_box(d), &config, &mut counter).unwrap();
                    black_box(counter.count)
                })
            },
        );
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    for (width, dims) in [(6usize, 1usize), (4, 2)] {
        let symbols = table(width, dims);
        let config = EnumConfig::default();
        group.bench_with_input(
            BenchmarkId::new(format!("m{width}_d{dims}"), width),
            &symbols,
            |b, s| {
                b.iter(|| {
                    let mut printer = TablePrinter::new(s, Vec::with_capacity(1 << 16));
                    EnumRunner::run(s.width(), s.dimensions(), &config, &mut printer).unwrap();
                    black_box(printer.finish().unwrap().len())
                })
            },
        );
    }
    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_parallel");
    group.sample_size(10);

    for (width, dims) in [(8usize, 1usize), (5, 2)] {
        let config = EnumConfig::default();
        group.bench_with_input(
            BenchmarkId::new(format!("m{width}_d{dims}"), width),
            &(width, dims),
            |b, &(w, d)| {
                b.iter(|| {
                    let (_, result) = EnumRunner::run_parallel(w, d, &config, None, |_| {
                        CombinationCounter::default()
                    })
                    .unwrap();
                    black_box(result.combinations)
                })
            },
        );
    }
    group.finish();
}

#[cfg(not(feature = "parallel"))]
criterion_group!(benches, bench_walk, bench_render);
#[cfg(feature = "parallel")]
criterion_group!(benches, bench_walk, bench_render, bench_parallel);
criterion_main!(benches);
