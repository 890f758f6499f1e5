use super::setup_book;
use criterion::{BenchmarkId, Criterion};
use depthbook::{BookDiff, DepthUpdateEvent, PriceLevel, Side};
use std::hint::black_box;

/// Register all benchmarks for applying depth diffs
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Apply Diff");

    // Quantity changes at existing prices never touch the heap
    group.bench_function("update_existing_quantity", |b| {
        let mut book = setup_book(500);
        let mut step = 0u64;
        b.iter(|| {
            step += 1;
            let price = 9_999.0 - (step % 500) as f64;
            let level = PriceLevel::new(price, (step % 7 + 1) as f64).unwrap();
            book.apply_level(Side::Buy, black_box(level));
        })
    });

    // Delete then re-insert the same price, one removal and one enqueue per iteration
    group.bench_function("delete_and_reinsert", |b| {
        let mut book = setup_book(500);
        let mut step = 0u64;
        b.iter(|| {
            step += 1;
            let price = 10_001.0 + (step % 500) as f64;
            book.apply_level(Side::Sell, PriceLevel::new(price, 0.0).unwrap());
            book.apply_level(Side::Sell, PriceLevel::new(price, 3.0).unwrap());
        })
    });

    for depth in [10usize, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("diff_depth_scaling", depth),
            depth,
            |b, &depth| {
                let diff = mixed_diff(depth);
                b.iter(|| {
                    let mut book = setup_book(depth);
                    book.apply(black_box(&diff));
                })
            },
        );
    }

    group.bench_function("parse_and_apply_event", |b| {
        let payload = r#"{"e":"depthUpdate","E":1,"s":"BTCUSDT","b":[["9999","0"],["9998.5","2.5"]],"a":[["10001","4"],["10000.5","1"]]}"#;
        let mut book = setup_book(100);
        b.iter(|| {
            let event = DepthUpdateEvent::from_json(black_box(payload)).unwrap();
            book.apply_event(&event);
        })
    });

    group.finish();
}

// A quarter of the levels deleted, a quarter updated, a quarter added on each side
fn mixed_diff(depth: usize) -> BookDiff {
    let quarter = (depth / 4).max(1);
    let mut bids = Vec::with_capacity(quarter * 3);
    let mut asks = Vec::with_capacity(quarter * 3);

    for i in 0..quarter {
        bids.push(PriceLevel::new(9_999.0 - i as f64, 0.0).unwrap());
        asks.push(PriceLevel::new(10_001.0 + i as f64, 0.0).unwrap());
        bids.push(PriceLevel::new(9_999.0 - (quarter + i) as f64, 9.0).unwrap());
        asks.push(PriceLevel::new(10_001.0 + (quarter + i) as f64, 9.0).unwrap());
        bids.push(PriceLevel::new(9_999.5 - i as f64, 1.0).unwrap());
        asks.push(PriceLevel::new(10_000.5 + i as f64, 1.0).unwrap());
    }

    BookDiff::new(bids, asks)
}
