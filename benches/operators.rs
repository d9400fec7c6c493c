use criterion::{Criterion, black_box, criterion_group, criterion_main};

use colframe::{Column, Comparator, Filter, Frame, Order};

const ROWS: usize = 100_000;

fn sample_frame() -> Frame {
    let ids: Vec<i64> = (0..ROWS as i64).collect();
    let scores: Vec<f64> = (0..ROWS).map(|i| ((i * 7919) % 1000) as f64 / 10.0).collect();
    let keys: Vec<i64> = (0..ROWS as i64).map(|i| i % 100).collect();
    Frame::new([
        ("id", Column::Int(ids)),
        ("score", Column::Float(scores)),
        ("key", Column::Int(keys)),
    ])
}

fn bench_filter(c: &mut Criterion) {
    let frame = sample_frame();
    c.bench_function("filter_float_gt", |b| {
        b.iter(|| {
            black_box(frame.filter(&[Filter::new("score", Comparator::Gt, black_box(50.0))]))
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let frame = sample_frame();
    c.bench_function("sort_two_keys", |b| {
        b.iter(|| black_box(frame.sort(&[Order::asc("key"), Order::desc("score")])))
    });
}

fn bench_group_sum(c: &mut Criterion) {
    let frame = sample_frame();
    c.bench_function("group_by_sum", |b| {
        b.iter(|| black_box(frame.group_by(&["key"]).aggregate("sum", "id")))
    });
}

criterion_group!(benches, bench_filter, bench_sort, bench_group_sum);
criterion_main!(benches);
