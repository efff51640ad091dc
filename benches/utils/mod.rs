use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use qtree::Rect;

//// Utility functions

pub(crate) fn get_random_rects(within: Rect<f64>, n: usize, seed: u64) -> Vec<Rect<f64>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        let x1 = rng.gen_range(within.left(), within.right());
        let x2 = rng.gen_range(within.left(), within.right());
        let y1 = rng.gen_range(within.top(), within.bottom());
        let y2 = rng.gen_range(within.top(), within.bottom());
        results.push(
            Rect::new(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)).unwrap(),
        );
    }

    results
}

/// Small query areas of the given extent, fully inside `within`.
pub(crate) fn get_random_probes(
    within: Rect<f64>,
    extent: f64,
    n: usize,
    seed: u64,
) -> Vec<Rect<f64>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        let x = rng.gen_range(within.left(), within.right() - extent);
        let y = rng.gen_range(within.top(), within.bottom() - extent);
        results.push(Rect::new(x, y, x + extent, y + extent).unwrap());
    }

    results
}
