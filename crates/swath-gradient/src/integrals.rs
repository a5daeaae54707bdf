//! Closed-form moments of the shared-edge parameterization.
//!
//! The shared edge is `q(t) = v1 + t (v2 − v1)` for `t ∈ [0, 1]`, with
//! `dq = ‖v2 − v1‖ dt`. The gradient formulas only ever need the
//! integrals over `[0, 1]` of `1`, `x(t)`, `y(t)`, and their pairwise
//! products, which have exact polynomial antiderivatives.

use swath_core::Vec2;

/// Exact `∫₀¹ ·  dt` moments of an edge parameterization (without the
/// `‖v2 − v1‖` arc-length factor, which callers apply once).
#[derive(Clone, Copy, Debug)]
pub(crate) struct EdgeMoments {
    /// Edge length `‖v2 − v1‖`.
    pub len: f64,
    /// `∫ x(t) dt = (v1x + v2x) / 2`.
    pub mx: f64,
    /// `∫ y(t) dt = (v1y + v2y) / 2`.
    pub my: f64,
    /// `∫ x(t)² dt = (v1x² + v1x·v2x + v2x²) / 3`.
    pub mxx: f64,
    /// `∫ y(t)² dt = (v1y² + v1y·v2y + v2y²) / 3`.
    pub myy: f64,
    /// `∫ x(t)·y(t) dt = (2·v1x·v1y + v1x·v2y + v2x·v1y + 2·v2x·v2y) / 6`.
    pub mxy: f64,
}

impl EdgeMoments {
    pub(crate) fn new(v1: Vec2, v2: Vec2) -> Self {
        Self {
            len: v1.distance(v2),
            mx: (v1.x + v2.x) / 2.0,
            my: (v1.y + v2.y) / 2.0,
            mxx: (v1.x * v1.x + v1.x * v2.x + v2.x * v2.x) / 3.0,
            myy: (v1.y * v1.y + v1.y * v2.y + v2.y * v2.y) / 3.0,
            mxy: (2.0 * v1.x * v1.y + v1.x * v2.y + v2.x * v1.y + 2.0 * v2.x * v2.y) / 6.0,
        }
    }
}
