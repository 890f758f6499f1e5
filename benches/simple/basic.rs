use criterion::Criterion;
use depthbook::{OrderBook, PriceLevel, Side};
use std::hint::black_box;

pub fn benchmark_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("Basic OrderBook Operations");

    group.bench_function("create_order_book", |b| {
        b.iter(|| {
            let _order_book: OrderBook = OrderBook::new(None);
        })
    });

    group.bench_function("apply_single_level", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new(None);
            order_book.apply_level(Side::Buy, PriceLevel::new(1000.0, 10.0).unwrap());
            black_box(order_book.best_bid().ok());
        })
    });

    group.finish();
}
