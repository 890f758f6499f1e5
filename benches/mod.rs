use criterion::{criterion_group, criterion_main};


use book::register_benchmarks as register_book_benchmarks;
use queue::register_benchmarks as register_queue_benchmarks;
use simple::basic::benchmark_data;

criterion_group!(
    benches,
    benchmark_data,
    register_book_benchmarks,
    register_queue_benchmarks,
);

criterion_main!(benches);
