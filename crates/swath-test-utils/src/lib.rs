//! Shared fixtures and scenario builders for Swath development.
//!
//! Regions, agent placements, and seeded generator sets used across
//! the workspace's test suites and benches. Everything here is
//! deterministic: randomized fixtures take an explicit seed.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use swath_core::{Pose, Vec2};
use swath_geometry::Region;

/// The unit square `[0, 1]²`.
pub fn unit_square() -> Region {
    Region::rectangle(0.0, 0.0, 1.0, 1.0).expect("unit square is a valid region")
}

/// The square `[0, side]²` used by most scenarios (side 100 in the
/// standard ones).
pub fn square(side: f64) -> Region {
    Region::rectangle(0.0, 0.0, side, side).expect("square is a valid region")
}

/// A convex pentagon with explicitly configured half-plane coefficient
/// rows, exercising the path where barrier constraints are supplied
/// directly rather than derived from the boundary.
///
/// The rows are, in order: `x ≥ 0`, `y ≥ 0`, `y − x ≤ 300`,
/// `0.6x + y ≤ 780`, `0.6x − y ≤ 180`.
pub fn pentagon_region() -> Region {
    let boundary = [
        Vec2::new(800.0, 300.0),
        Vec2::new(363.806_815, 38.284_089),
        Vec2::new(194.428_556, 164.098_432),
        Vec2::new(151.089_06, 451.089_06),
        Vec2::new(300.0, 600.0),
    ];
    let rows = [
        [-1.0, 0.0, 0.0],
        [0.0, -1.0, 0.0],
        [-1.0, 1.0, 300.0],
        [0.6, 1.0, 780.0],
        [0.6, -1.0, 180.0],
    ];
    Region::from_half_planes(&boundary, &rows).expect("pentagon fixture is a valid region")
}

/// `n` poses evenly spaced on a circle of the given radius about
/// `center`, each heading tangential (counter-clockwise travel).
pub fn ring_poses(n: usize, center: Vec2, radius: f64) -> Vec<Pose> {
    (0..n)
        .map(|k| {
            let phi = 2.0 * std::f64::consts::PI * (k as f64) / (n as f64);
            Pose::new(
                center.x + radius * phi.cos(),
                center.y + radius * phi.sin(),
                phi + std::f64::consts::FRAC_PI_2,
            )
        })
        .collect()
}

/// Well-separated generators on a jittered `nx × ny` grid strictly
/// inside `[0, side]²`. The jitter is bounded to a quarter of the grid
/// pitch, so no two generators can collide and none can leave the
/// region.
pub fn jittered_grid(seed: u64, nx: usize, ny: usize, side: f64) -> Vec<Vec2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let px = side / (nx as f64 + 1.0);
    let py = side / (ny as f64 + 1.0);
    let mut out = Vec::with_capacity(nx * ny);
    for i in 1..=nx {
        for j in 1..=ny {
            let jx = rng.random_range(-0.25 * px..0.25 * px);
            let jy = rng.random_range(-0.25 * py..0.25 * py);
            out.push(Vec2::new(i as f64 * px + jx, j as f64 * py + jy));
        }
    }
    out
}
