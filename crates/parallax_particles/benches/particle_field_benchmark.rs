//! # Particle Field Benchmark
//!
//! Measures a full tick (clear, advance, cull, draw) on a freshly
//! populated field, for both the recording and the raster surface.
//!
//! Run with: `cargo bench --package parallax_particles`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use parallax_particles::{CommandSurface, FieldConfig, ParticleField, PixelSurface, Surface};

fn seeded() -> FieldConfig {
    FieldConfig {
        seed: Some(42),
        ..Default::default()
    }
}

/// Fills a field with `count` particles along a diagonal sweep.
fn populate<S: Surface>(field: &mut ParticleField<S>, count: usize) {
    for i in 0..count {
        let t = i as f32;
        field.on_pointer_move(t % 1920.0, (t * 0.5) % 1080.0);
    }
}

/// Benchmark: tick cost against a recording surface.
fn bench_tick_commands(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_commands");

    for count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || {
                    let mut field = ParticleField::new(CommandSurface::new(1920, 1080), seeded())
                        .expect("valid config");
                    populate(&mut field, count);
                    field
                },
                |mut field| black_box(field.tick()),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// Benchmark: tick cost against the software rasterizer.
fn bench_tick_raster(c: &mut Criterion) {
    c.bench_function("tick_raster_1k", |b| {
        b.iter_batched(
            || {
                let mut field = ParticleField::new(PixelSurface::new(1280, 720), seeded())
                    .expect("valid config");
                populate(&mut field, 1_000);
                field
            },
            |mut field| black_box(field.tick()),
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: spawn throughput.
fn bench_spawn(c: &mut Criterion) {
    c.bench_function("spawn_10k", |b| {
        b.iter(|| {
            let mut field = ParticleField::new(CommandSurface::new(1920, 1080), seeded())
                .expect("valid config");
            populate(&mut field, 10_000);
            black_box(field.particles().len())
        });
    });
}

criterion_group!(benches, bench_tick_commands, bench_tick_raster, bench_spawn);
criterion_main!(benches);
