use super::setup_book;
use criterion::{BenchmarkId, Criterion};
use std::hint::black_box;

pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Best Price");

    for depth in [10usize, 1000, 10_000].iter() {
        group.bench_with_input(
            BenchmarkId::new("best_bid_and_ask", depth),
            depth,
            |b, &depth| {
                let book = setup_book(depth);
                b.iter(|| {
                    black_box(book.best_bid().ok());
                    black_box(book.best_ask().ok());
                })
            },
        );
    }

    group.bench_function("spread", |b| {
        let book = setup_book(1000);
        b.iter(|| black_box(book.spread()))
    });

    group.finish();
}
