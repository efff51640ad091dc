mod utils;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use qtree::{QuadTree, Rect};
use utils::get_random_rects;

pub fn construction_benchmark(c: &mut Criterion) {
    let bounds = Rect::new(0.0, 0.0, 1024.0, 1024.0).unwrap();
    let rects = get_random_rects(bounds, 10_000, 177);
    println!("Benchmarking build: {} rectangles", rects.len());
    let mut group = c.benchmark_group("build");

    for &depth in [2, 4, 6, 8].iter() {
        group.bench_with_input(
            BenchmarkId::new("quadtree_subdivide", depth),
            &depth,
            |b, &d| {
                b.iter(|| QuadTree::<usize, f64>::new(bounds, d));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("quadtree_populate", depth),
            &depth,
            |b, &d| {
                b.iter(|| {
                    let mut tree = QuadTree::new(bounds, d);
                    for (i, &r) in rects.iter().enumerate() {
                        tree.insert(i, r);
                    }
                    tree
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, construction_benchmark);
criterion_main!(benches);
