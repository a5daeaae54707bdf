//! Unicycle agent state and the virtual-center transform.

use crate::error::ControlError;
use crate::integrator::Integrator;
use swath_core::{AgentId, Pose, Vec2};

/// Virtual center of a unicycle orbiting at linear speed `v` and
/// nominal rate `w0`: the physical position offset perpendicular to the
/// heading by the orbit radius `v/w0`.
///
/// The virtual center, not the physical pose, is the generator used
/// for Voronoi partitioning and the state the control law steers.
pub fn virtual_center(pose: Pose, v: f64, w0: f64) -> Vec2 {
    let r = v / w0;
    Vec2::new(pose.x - r * pose.theta.sin(), pose.y + r * pose.theta.cos())
}

/// One unicycle agent: identity, kinematic pose, fixed motion
/// constants, and the most recent control command.
///
/// Created once per run; mutated every tick by pose integration and
/// control assignment; never destroyed during a run.
#[derive(Clone, Debug)]
pub struct Agent {
    id: AgentId,
    pose: Pose,
    v: f64,
    w0: f64,
    omega: f64,
    center: Vec2,
}

impl Agent {
    /// Create an agent at `pose` with constant linear speed `v` and
    /// nominal orbital rate `w0`. The initial angular command is `w0`
    /// (nominal orbit until the first control tick).
    ///
    /// # Errors
    ///
    /// [`ControlError::InvalidParameter`] for non-finite pose, a
    /// non-positive `v`, or a zero/non-finite `w0` (the virtual-center
    /// transform divides by `w0`).
    pub fn new(id: AgentId, pose: Pose, v: f64, w0: f64) -> Result<Self, ControlError> {
        if !pose.is_finite() {
            return Err(ControlError::InvalidParameter {
                reason: format!("agent {id}: non-finite initial pose"),
            });
        }
        if !v.is_finite() || v <= 0.0 {
            return Err(ControlError::InvalidParameter {
                reason: format!("agent {id}: linear speed must be positive, got {v}"),
            });
        }
        if !w0.is_finite() || w0 == 0.0 {
            return Err(ControlError::InvalidParameter {
                reason: format!("agent {id}: orbital rate must be non-zero, got {w0}"),
            });
        }
        let center = virtual_center(pose, v, w0);
        Ok(Self {
            id,
            pose,
            v,
            w0,
            omega: w0,
            center,
        })
    }

    /// The agent's stable identity.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Current physical pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Constant linear speed.
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Nominal orbital rate.
    pub fn w0(&self) -> f64 {
        self.w0
    }

    /// Most recently commanded angular rate.
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Current virtual center (refreshed on every integration).
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Store a new angular-rate command. Called by the control law; the
    /// pose is untouched until the next integration.
    pub fn set_omega(&mut self, omega: f64) {
        self.omega = omega;
    }

    /// Advance the pose one timestep under the stored command and
    /// refresh the virtual center.
    pub fn integrate(&mut self, integrator: &dyn Integrator, dt: f64) {
        self.pose = integrator.advance(self.pose, self.v, self.omega, dt);
        self.center = virtual_center(self.pose, self.v, self.w0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrator::Unicycle;

    #[test]
    fn virtual_center_offsets_by_orbit_radius() {
        // Heading +x: the center sits one radius to the left (+y).
        let z = virtual_center(Pose::new(10.0, 20.0, 0.0), 2.0, 0.5);
        assert!((z.x - 10.0).abs() < 1e-12);
        assert!((z.y - 24.0).abs() < 1e-12);
    }

    #[test]
    fn virtual_center_is_invariant_on_nominal_orbit() {
        // Orbiting at exactly w0 keeps the virtual center fixed.
        let mut agent = Agent::new(AgentId(0), Pose::new(5.0, 5.0, 0.3), 1.0, 1.2).unwrap();
        let z0 = agent.center();
        let dt = 1e-4;
        for _ in 0..10_000 {
            agent.integrate(&Unicycle, dt);
        }
        assert!(agent.center().distance(z0) < 1e-3);
    }

    #[test]
    fn zero_w0_is_rejected() {
        assert!(matches!(
            Agent::new(AgentId(1), Pose::default(), 1.0, 0.0),
            Err(ControlError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn non_positive_speed_is_rejected() {
        assert!(matches!(
            Agent::new(AgentId(1), Pose::default(), 0.0, 1.0),
            Err(ControlError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn set_omega_does_not_move_pose() {
        let mut agent = Agent::new(AgentId(2), Pose::new(1.0, 2.0, 3.0), 1.0, 1.0).unwrap();
        let pose = agent.pose();
        agent.set_omega(7.5);
        assert_eq!(agent.pose(), pose);
        assert_eq!(agent.omega(), 7.5);
    }
}
