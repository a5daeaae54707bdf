//! Kinematic integration seam.
//!
//! Pose integration is an external collaborator of the coverage core:
//! the orchestrator calls it once per tick through the [`Integrator`]
//! trait and otherwise treats it as opaque. The default [`Unicycle`]
//! backend is the forward-Euler unicycle model.

use swath_core::Pose;

/// Advances a pose under constant linear and angular velocity over one
/// timestep.
pub trait Integrator: Send {
    /// Integrate `pose` forward by `dt` under linear speed `v` and
    /// angular rate `w`.
    fn advance(&self, pose: Pose, v: f64, w: f64, dt: f64) -> Pose;
}

/// Forward-Euler unicycle model:
/// `x' = x + dt·v·cosθ`, `y' = y + dt·v·sinθ`, `θ' = θ + dt·w`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unicycle;

impl Integrator for Unicycle {
    fn advance(&self, pose: Pose, v: f64, w: f64, dt: f64) -> Pose {
        Pose::new(
            pose.x + dt * v * pose.theta.cos(),
            pose.y + dt * v * pose.theta.sin(),
            pose.theta + dt * w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_line_when_heading_along_x() {
        let p = Unicycle.advance(Pose::new(0.0, 0.0, 0.0), 2.0, 0.0, 0.5);
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert!(p.theta.abs() < 1e-12);
    }

    #[test]
    fn angular_rate_only_turns() {
        let p = Unicycle.advance(Pose::new(3.0, 4.0, 1.0), 0.0, 2.0, 0.25);
        assert_eq!(p.x, 3.0);
        assert_eq!(p.y, 4.0);
        assert!((p.theta - 1.5).abs() < 1e-12);
    }

    #[test]
    fn many_small_steps_approximate_a_circle() {
        // Constant v and w trace a circle of radius v/w.
        let v = 1.0;
        let w = 0.5;
        let dt = 1e-4;
        let mut pose = Pose::new(0.0, 0.0, 0.0);
        let steps = (2.0 * std::f64::consts::PI / w / dt).round() as usize;
        for _ in 0..steps {
            pose = Unicycle.advance(pose, v, w, dt);
        }
        // Back near the start after one full revolution.
        assert!(pose.position().norm() < 1e-2);
    }
}
