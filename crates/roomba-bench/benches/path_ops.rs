//! Criterion micro-benchmarks for A* and nearest-match BFS.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use roomba_core::{Coord, EntityKind};
use roomba_path::{find_path, nearest_matching};
use roomba_space::Grid;
use roomba_test_utils::{seeded_rng, walled_grid};
use std::hint::black_box;

/// Walled grid with roughly `rate` of its inner cells blocked.
fn cluttered(size: u32, rate: f64) -> Grid {
    let mut grid = walled_grid(size, size);
    let mut rng = seeded_rng(3);
    for x in 2..size as i32 - 2 {
        for y in 2..size as i32 - 2 {
            if rng.random_bool(rate) {
                grid.place(EntityKind::Obstacle, Coord::new(x, y)).unwrap();
            }
        }
    }
    grid
}

fn bench_astar(c: &mut Criterion) {
    for size in [32u32, 128] {
        let grid = cluttered(size, 0.15);
        let goal = Coord::new(size as i32 - 2, size as i32 - 2);
        c.bench_function(&format!("astar_corner_to_corner_{size}"), |b| {
            b.iter(|| {
                black_box(find_path(grid.space(), Coord::new(1, 1), goal, |c| {
                    grid.has_obstacle(c)
                }))
            });
        });
    }
}

fn bench_nearest_unexplored(c: &mut Criterion) {
    let grid = cluttered(64, 0.15);
    let far = Coord::new(62, 62);
    c.bench_function("bfs_nearest_far_cell_64", |b| {
        b.iter(|| {
            black_box(nearest_matching(
                grid.space(),
                Coord::new(1, 1),
                |c| grid.has_obstacle(c),
                |c| c == far,
            ))
        });
    });
}

criterion_group!(benches, bench_astar, bench_nearest_unexplored);
criterion_main!(benches);
