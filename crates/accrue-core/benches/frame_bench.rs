use accrue_core::{compose, ApproxTextMeasure, Generation, Geometry, Margin, Record, Scales, Settings};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn series(n: usize) -> Vec<Record> {
    let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    start
        .iter_days()
        .take(n)
        .enumerate()
        .map(|(i, date)| Record::new(date, 1_000.0 + i as f64 * 37.5 + (i as f64 * 0.05).sin() * 500.0))
        .collect()
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_frame");
    let geometry = Geometry::new(960.0, 500.0, Margin::default());
    let settings = Settings::default();
    let measure = ApproxTextMeasure::default();
    for &n in &[100usize, 1_000usize] {
        let records = series(n);
        group.bench_function(format!("prefix_{n}"), |b| {
            b.iter(|| {
                let scales = Scales::for_prefix(&records, &geometry).unwrap();
                let frame = compose(Generation::new(1), &records, &scales, &geometry, &settings, &measure);
                black_box(frame);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compose);
criterion_main!(benches);
