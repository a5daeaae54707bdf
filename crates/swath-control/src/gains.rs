//! Control-law constants.

use swath_core::Mat2;

/// Named constants of the barrier-Lyapunov control law.
///
/// Every tolerance and gain the law uses lives here as a documented
/// field; there are no inline literals in the control path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlGains {
    /// Control gain `μ`: the commanded rate swings within
    /// `w0 · [1 − μ, 1 + μ]`.
    pub mu: f64,
    /// Smoothing width `ε` of the saturated sign function. Larger
    /// values soften the control near zero gradient.
    pub eps: f64,
    /// Positive-definite state weight `Q` of the Lyapunov quadratic
    /// form. Identity by default.
    pub q: Mat2,
    /// Non-negative slack added to the feasibility check: margins at or
    /// below this value count as constraint violations. Zero by
    /// default (violation exactly at the boundary).
    pub margin_tol: f64,
}

impl Default for ControlGains {
    fn default() -> Self {
        Self {
            mu: 1.0,
            eps: 3.0,
            q: Mat2::IDENTITY,
            margin_tol: 0.0,
        }
    }
}

impl ControlGains {
    /// Validate the gain set, returning a description of the first
    /// violated invariant.
    ///
    /// `Q` must be symmetric positive-definite: the Lyapunov value is a
    /// weighted squared distance and loses meaning otherwise.
    pub fn validate(&self) -> Result<(), String> {
        if !self.mu.is_finite() || self.mu < 0.0 {
            return Err(format!("mu must be finite and non-negative, got {}", self.mu));
        }
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(format!("eps must be finite and positive, got {}", self.eps));
        }
        if !self.q.is_finite() {
            return Err("Q has non-finite entries".to_string());
        }
        if (self.q.xy - self.q.yx).abs() > 1e-12 {
            return Err("Q must be symmetric".to_string());
        }
        if self.q.xx <= 0.0 || self.q.det() <= 0.0 {
            return Err("Q must be positive-definite".to_string());
        }
        if !self.margin_tol.is_finite() || self.margin_tol < 0.0 {
            return Err(format!(
                "margin_tol must be finite and non-negative, got {}",
                self.margin_tol
            ));
        }
        Ok(())
    }
}
