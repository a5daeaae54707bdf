//! Barrier-Lyapunov control law.
//!
//! Each agent steers its virtual center toward its cell centroid while
//! a reciprocal barrier on the region constraints keeps the center
//! strictly feasible. The local Lyapunov value is
//! `V = (z − C)ᵀ Q (z − C) · Σ 1/h_j` with `h_j` the signed margin to
//! the j-th region constraint; the gradients evaluated here are those
//! of the half-weighted form `½·V` (the smoothed sign in the control
//! law makes the overall scale a gain choice, not a correctness one).

use crate::error::ControlError;
use crate::gains::ControlGains;
use swath_core::Vec2;
use swath_geometry::HalfPlane;
use swath_gradient::CvtReport;

/// Smoothed sign function `x / (|x| + ε)`.
///
/// Odd, strictly inside `(−1, 1)` for finite input, and approaching
/// `sign(x)` as `|x| ≫ ε`.
pub fn sigmoid(x: f64, eps: f64) -> f64 {
    x / (x.abs() + eps)
}

/// Barrier terms of the region constraints evaluated at one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarrierState {
    /// `Σ 1/h_j`: the reciprocal-margin sum weighting the quadratic
    /// form.
    pub sum_inv_h: f64,
    /// `Σ a_j / (2·h_j²)`: the barrier contribution to the gradient.
    pub sum_a_2h2: Vec2,
    /// Index of the constraint with the smallest margin.
    pub min_constraint: usize,
    /// The smallest margin observed.
    pub min_margin: f64,
}

/// Evaluate the barrier terms at `z` against the region constraints.
///
/// # Errors
///
/// [`ControlError::InfeasibleState`] when any margin is at or below
/// `margin_tol`. The barrier is undefined on or outside the boundary,
/// so the violation is raised, never clamped.
pub fn barrier_state(
    half_planes: &[HalfPlane],
    z: Vec2,
    margin_tol: f64,
) -> Result<BarrierState, ControlError> {
    let mut sum_inv_h = 0.0;
    let mut sum_a_2h2 = Vec2::ZERO;
    let mut min_constraint = 0;
    let mut min_margin = f64::INFINITY;
    for (j, hp) in half_planes.iter().enumerate() {
        let h = hp.margin(z);
        if h <= margin_tol {
            return Err(ControlError::InfeasibleState {
                constraint: j,
                margin: h,
            });
        }
        sum_inv_h += 1.0 / h;
        sum_a_2h2 += hp.a * (1.0 / (2.0 * h * h));
        if h < min_margin {
            min_constraint = j;
            min_margin = h;
        }
    }
    Ok(BarrierState {
        sum_inv_h,
        sum_a_2h2,
        min_constraint,
        min_margin,
    })
}

/// One agent's Lyapunov value and gradient contributions for one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalGradients {
    /// Local Lyapunov value `V_i`.
    pub value: f64,
    /// `∂V_i/∂z_i`: this agent's own contribution to its total
    /// gradient.
    pub own: Vec2,
    /// Per-neighbor cross gradients `∂V_i/∂z_j`, keyed by the
    /// neighbor's generator index. These are published to the neighbors
    /// so each can assemble its own total.
    pub cross: Vec<(usize, Vec2)>,
}

/// Evaluate the local Lyapunov value and its gradients from a CVT
/// report and the region constraints.
///
/// The self term combines the centroid's sensitivity to the generator
/// with the barrier gradient:
/// `∂V_i/∂z_i = (I − Jᵀ)·Q(z−C)·Σ1/h + (Σ a_j/(2h_j²))·(z−C)ᵀQ(z−C)`.
/// Each cross term is `∂V_i/∂z_j = −(∂C_i/∂z_j)ᵀ·Q(z−C)·Σ1/h`.
///
/// # Errors
///
/// [`ControlError::InfeasibleState`] when the generator violates a
/// region constraint (propagated from [`barrier_state`]).
pub fn evaluate_local(
    report: &CvtReport,
    half_planes: &[HalfPlane],
    gains: &ControlGains,
) -> Result<LocalGradients, ControlError> {
    let z = report.generator;
    let barrier = barrier_state(half_planes, z, gains.margin_tol)?;

    let e = z - report.centroid;
    let qe = gains.q * e;
    let quad = e.dot(qe);

    let own = (qe - report.self_jacobian.transpose() * qe) * barrier.sum_inv_h
        + barrier.sum_a_2h2 * quad;

    let cross = report
        .neighbors
        .iter()
        .map(|ng| {
            (
                ng.neighbor,
                (ng.cross.transpose() * qe) * -barrier.sum_inv_h,
            )
        })
        .collect();

    Ok(LocalGradients {
        value: quad * barrier.sum_inv_h,
        own,
        cross,
    })
}

/// Angular-rate command `w = w₀ + μ·w₀·sigmoid(∇Vᵀ·h, ε)` where `h` is
/// the heading unit vector. The commanded rate stays strictly within
/// `w₀·(1 ± μ)`.
pub fn control_rate(w0: f64, heading: Vec2, grad: Vec2, gains: &ControlGains) -> f64 {
    w0 + gains.mu * w0 * sigmoid(grad.dot(heading), gains.eps)
}
