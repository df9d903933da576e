use criterion::{Criterion, black_box, criterion_group, criterion_main};
use yantra_solar::{DaylightConfig, daylight, position_from_angles, solar_position};
use yantra_time::{CivilTime, GeoCoordinate, Instant};

fn position_bench(c: &mut Criterion) {
    let coord = GeoCoordinate::new(26.9124, 75.7873, 431.0).unwrap();
    let t = Instant::from_civil(&CivilTime::new(2024, 6, 21, 9, 0, 0.0, 330)).unwrap();

    let mut group = c.benchmark_group("solar_position");
    group.bench_function("from_angles", |b| {
        b.iter(|| position_from_angles(black_box(26.9124), black_box(23.44), black_box(-45.0)))
    });
    group.bench_function("from_instant", |b| {
        b.iter(|| solar_position(black_box(&coord), black_box(t)))
    });
    group.finish();
}

fn daylight_bench(c: &mut Criterion) {
    let coord = GeoCoordinate::new(28.6139, 77.2090, 216.0).unwrap();
    let config = DaylightConfig::default();
    c.bench_function("daylight", |b| {
        b.iter(|| daylight(black_box(&coord), black_box(172), &config))
    });
}

criterion_group!(benches, position_bench, daylight_bench);
criterion_main!(benches);
