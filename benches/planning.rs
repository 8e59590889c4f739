//! Planner benchmarks.
//!
//! Benchmarks the search over the 25x14 reference grid, empty and with a
//! wall that forces a detour, plus the container's selection-scan pattern.
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::rc::Rc;

use marga_plan::{search, CellPoint, NodeList, OccupancyGrid, SearchNode};

/// The reference deployment grid with no walls.
fn empty_grid() -> OccupancyGrid {
    OccupancyGrid::new(25, 14)
}

/// Reference grid with a vertical wall at x=10, open only at y=12.
fn walled_grid() -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(25, 14);
    for y in 0..14 {
        if y != 12 {
            grid.set_blocked(10, y);
        }
    }
    grid
}

fn bench_search(c: &mut Criterion) {
    let start = CellPoint::new(3.0, 3.0);
    let target = CellPoint::new(15.0, 7.0);

    let empty = empty_grid();
    c.bench_function("search_empty_25x14", |b| {
        b.iter(|| search(black_box(&empty), black_box(start), black_box(target)).unwrap())
    });

    let walled = walled_grid();
    c.bench_function("search_walled_25x14", |b| {
        b.iter(|| search(black_box(&walled), black_box(start), black_box(target)).unwrap())
    });
}

fn bench_frontier_scan(c: &mut Criterion) {
    // A frontier-sized list scanned for the minimum score, as the
    // selection step does each iteration.
    let mut list: NodeList<SearchNode> = NodeList::new();
    for i in 0..64 {
        let pos = CellPoint::new(i as f32, 0.0);
        list.push_back(SearchNode::scored(pos, i as f32, (64 - i) as f32));
    }

    c.bench_function("frontier_scan_64", |b| {
        b.iter(|| {
            let mut best: Option<&Rc<SearchNode>> = None;
            let mut best_score = f32::INFINITY;
            for node in black_box(&list).iter() {
                if node.f() <= best_score {
                    best_score = node.f();
                    best = Some(node);
                }
            }
            best.map(|node| node.pos())
        })
    });
}

criterion_group!(benches, bench_search, bench_frontier_scan);
criterion_main!(benches);
