//! The planar unicycle pose.

use crate::math::Vec2;
use std::fmt;

/// Position and heading of a unicycle agent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    /// X position.
    pub x: f64,
    /// Y position.
    pub y: f64,
    /// Heading angle in radians, measured from the +x axis.
    pub theta: f64,
}

impl Pose {
    /// Construct from position and heading.
    pub const fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    /// The position component as a vector.
    pub fn position(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Unit heading vector `[cos θ, sin θ]`.
    pub fn heading(self) -> Vec2 {
        Vec2::new(self.theta.cos(), self.theta.sin())
    }

    /// True if all three components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.theta.is_finite()
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, θ={})", self.x, self.y, self.theta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_is_unit_length() {
        for theta in [0.0, 0.7, std::f64::consts::PI, -2.3] {
            let h = Pose::new(0.0, 0.0, theta).heading();
            assert!((h.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn position_extracts_xy() {
        let p = Pose::new(3.0, -4.0, 1.0);
        assert_eq!(p.position(), Vec2::new(3.0, -4.0));
    }
}
