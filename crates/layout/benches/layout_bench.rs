//! Benchmarks for collision resolution and auto-fill.

use cabinetry_layout::{
    auto_fill, resolve_collisions, AutoFillOptions, CabinetPreset, CabinetUnit, Obstacle,
    ProjectSettings, SequentialIds, Zone,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn crowded_zone(n: usize) -> Zone {
    (0..n).fold(Zone::new("bench", 600 * n as i64 * 2), |zone, i| {
        zone.with_cabinet(
            CabinetUnit::new(format!("c{}", i), CabinetPreset::BaseDoor, 600).at(i as i64 * 300),
        )
    })
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_collisions");

    for &n in &[10, 50, 200] {
        let zone = crowded_zone(n);
        group.bench_with_input(BenchmarkId::new("overlapping", n), &zone, |b, z| {
            b.iter(|| resolve_collisions(black_box(z)))
        });
    }
    group.finish();
}

fn bench_auto_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("auto_fill");
    let settings = ProjectSettings::default();
    let options = AutoFillOptions::kitchen().with_tall(true);

    for &length in &[3000i64, 6000, 12000] {
        let zone = Zone::new("bench", length)
            .with_obstacle(Obstacle::door(0, 850))
            .with_obstacle(Obstacle::window(length / 2, 1200, 950))
            .with_obstacle(Obstacle::column(length - 400, 310));

        group.bench_with_input(BenchmarkId::new("kitchen", length), &zone, |b, z| {
            b.iter(|| {
                let mut ids = SequentialIds::new();
                auto_fill(black_box(z), &settings, &options, &mut ids)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_auto_fill);
criterion_main!(benches);
