//! Criterion micro-benchmarks for spatial map operations.

use criterion::{criterion_group, criterion_main, Criterion};
use gridex_bench::{populated_map, scatter_positions, walk_script};
use gridex_core::Position;
use gridex_map::SpatialMap;
use std::hint::black_box;

/// Benchmark: fill an empty map with 10K items on a 200x200 grid.
fn bench_add_10k(c: &mut Criterion) {
    let positions = scatter_positions(200, 200, 10_000, 42);

    c.bench_function("add_10k", |b| {
        b.iter(|| {
            let mut map = SpatialMap::with_capacity(positions.len());
            for (item, &position) in positions.iter().enumerate() {
                map.add(item as u32, position).unwrap();
            }
            black_box(&map);
        });
    });
}

/// Benchmark: look up every item's position, then every position's item.
fn bench_lookup_both_directions(c: &mut Criterion) {
    let map = populated_map(200, 200, 10_000, 42);
    let positions: Vec<Position> = map.positions().collect();

    c.bench_function("lookup_both_directions_10k", |b| {
        b.iter(|| {
            for item in 0..10_000u32 {
                black_box(map.try_position_of(&item));
            }
            for &position in &positions {
                black_box(map.try_item_at(position));
            }
        });
    });
}

/// Benchmark: 10K single-step moves, most succeeding, some blocked.
fn bench_random_walk(c: &mut Criterion) {
    let script = walk_script(2_000, 10_000, 7);

    c.bench_function("random_walk_10k_moves", |b| {
        b.iter_batched(
            || populated_map(100, 100, 2_000, 7),
            |mut map| {
                for &(item, step) in &script {
                    if let Some(from) = map.try_position_of(&item) {
                        black_box(map.try_move(&item, from + step));
                    }
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

/// Benchmark: pooled move_valid versus a caller-owned buffer.
fn bench_move_valid_pooled(c: &mut Criterion) {
    let script = walk_script(2_000, 10_000, 11);

    c.bench_function("move_valid_pooled_10k", |b| {
        b.iter_batched(
            || populated_map(100, 100, 2_000, 11),
            |mut map| {
                for &(item, step) in &script {
                    if let Some(from) = map.try_position_of(&item) {
                        let moved = map.move_valid(from, from + step);
                        black_box(moved.len());
                        map.return_list(moved);
                    }
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_add_10k,
    bench_lookup_both_directions,
    bench_random_walk,
    bench_move_valid_pooled
);
criterion_main!(benches);
