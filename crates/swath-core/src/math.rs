//! Plain 2-D vector and matrix arithmetic.
//!
//! The whole engine works in the plane, so a pair of hand-rolled
//! `Copy` types covers every linear-algebra need without pulling in a
//! general matrix library.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2-D vector (also used for points in the plane).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Construct from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product.
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Squared Euclidean norm.
    pub fn norm_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm.
    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Vec2) -> f64 {
        (self - other).norm()
    }

    /// 2-D cross product (z component of the 3-D cross product).
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// True if both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A 2×2 matrix in row-major layout.
///
/// Rows correspond to output components, columns to input components:
/// for a centroid Jacobian `∂C/∂z`, `xx = ∂Cx/∂zx`, `xy = ∂Cx/∂zy`,
/// `yx = ∂Cy/∂zx`, `yy = ∂Cy/∂zy`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mat2 {
    /// Row 0, column 0.
    pub xx: f64,
    /// Row 0, column 1.
    pub xy: f64,
    /// Row 1, column 0.
    pub yx: f64,
    /// Row 1, column 1.
    pub yy: f64,
}

impl Mat2 {
    /// The zero matrix.
    pub const ZERO: Mat2 = Mat2 {
        xx: 0.0,
        xy: 0.0,
        yx: 0.0,
        yy: 0.0,
    };

    /// The identity matrix.
    pub const IDENTITY: Mat2 = Mat2 {
        xx: 1.0,
        xy: 0.0,
        yx: 0.0,
        yy: 1.0,
    };

    /// Construct from row-major entries.
    pub const fn new(xx: f64, xy: f64, yx: f64, yy: f64) -> Self {
        Self { xx, xy, yx, yy }
    }

    /// A diagonal matrix with both entries equal to `d`.
    pub const fn scaled_identity(d: f64) -> Self {
        Self::new(d, 0.0, 0.0, d)
    }

    /// Matrix transpose.
    pub fn transpose(self) -> Mat2 {
        Mat2::new(self.xx, self.yx, self.xy, self.yy)
    }

    /// Determinant.
    pub fn det(self) -> f64 {
        self.xx * self.yy - self.xy * self.yx
    }

    /// True if all four entries are finite.
    pub fn is_finite(self) -> bool {
        self.xx.is_finite() && self.xy.is_finite() && self.yx.is_finite() && self.yy.is_finite()
    }
}

impl Add for Mat2 {
    type Output = Mat2;
    fn add(self, rhs: Mat2) -> Mat2 {
        Mat2::new(
            self.xx + rhs.xx,
            self.xy + rhs.xy,
            self.yx + rhs.yx,
            self.yy + rhs.yy,
        )
    }
}

impl AddAssign for Mat2 {
    fn add_assign(&mut self, rhs: Mat2) {
        *self = *self + rhs;
    }
}

impl Sub for Mat2 {
    type Output = Mat2;
    fn sub(self, rhs: Mat2) -> Mat2 {
        Mat2::new(
            self.xx - rhs.xx,
            self.xy - rhs.xy,
            self.yx - rhs.yx,
            self.yy - rhs.yy,
        )
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;
    fn mul(self, v: Vec2) -> Vec2 {
        Vec2::new(self.xx * v.x + self.xy * v.y, self.yx * v.x + self.yy * v.y)
    }
}

impl Mul<f64> for Mat2 {
    type Output = Mat2;
    fn mul(self, s: f64) -> Mat2 {
        Mat2::new(self.xx * s, self.xy * s, self.yx * s, self.yy * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn vec2_basic_ops() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(-1.0, 2.0);
        assert_eq!(a.norm(), 5.0);
        assert_eq!(a + b, Vec2::new(2.0, 6.0));
        assert_eq!(a - b, Vec2::new(4.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
        assert_eq!(a.dot(b), 5.0);
        assert_eq!(a.cross(b), 10.0);
    }

    #[test]
    fn mat2_vec_product() {
        let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
        let v = Vec2::new(5.0, 6.0);
        assert_eq!(m * v, Vec2::new(17.0, 39.0));
    }

    #[test]
    fn mat2_transpose_and_det() {
        let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.transpose(), Mat2::new(1.0, 3.0, 2.0, 4.0));
        assert_eq!(m.det(), -2.0);
        assert_eq!(Mat2::IDENTITY.det(), 1.0);
    }

    #[test]
    fn identity_is_neutral() {
        let v = Vec2::new(-2.5, 7.0);
        assert_eq!(Mat2::IDENTITY * v, v);
    }

    proptest! {
        #[test]
        fn transpose_involution(
            xx in -1e3f64..1e3, xy in -1e3f64..1e3,
            yx in -1e3f64..1e3, yy in -1e3f64..1e3,
        ) {
            let m = Mat2::new(xx, xy, yx, yy);
            prop_assert_eq!(m.transpose().transpose(), m);
        }

        #[test]
        fn dot_commutes(
            ax in -1e3f64..1e3, ay in -1e3f64..1e3,
            bx in -1e3f64..1e3, by in -1e3f64..1e3,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(a.dot(b), b.dot(a));
        }

        #[test]
        fn transpose_matches_quadratic_form(
            xx in -10f64..10.0, xy in -10f64..10.0,
            yx in -10f64..10.0, yy in -10f64..10.0,
            vx in -10f64..10.0, vy in -10f64..10.0,
            wx in -10f64..10.0, wy in -10f64..10.0,
        ) {
            // v · (M w) == (Mᵀ v) · w
            let m = Mat2::new(xx, xy, yx, yy);
            let v = Vec2::new(vx, vy);
            let w = Vec2::new(wx, wy);
            let lhs = v.dot(m * w);
            let rhs = (m.transpose() * v).dot(w);
            prop_assert!((lhs - rhs).abs() < 1e-9 * (1.0 + lhs.abs()));
        }
    }
}
