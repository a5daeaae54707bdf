//! The coverage region: a convex polygon with derived half-plane
//! constraints.

use crate::centroid::{polygon_area_centroid, polygon_signed_area};
use crate::error::GeometryError;
use swath_core::Vec2;

/// Distance below which consecutive region vertices are merged.
const VERTEX_TOL: f64 = 1e-9;

/// Cross-product slack tolerated in the convexity test.
const CONVEXITY_TOL: f64 = 1e-9;

/// Margin slack tolerated when cross-validating supplied half-planes
/// against the polygon vertices.
const FEASIBILITY_TOL: f64 = 1e-6;

/// A linear inequality constraint `a · p ≤ b`.
///
/// The barrier term of the control law divides by the margin of each
/// half-plane, so the coefficients are kept exactly as configured (they
/// are not re-normalized).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfPlane {
    /// Constraint normal `a`, pointing out of the feasible set.
    pub a: Vec2,
    /// Constraint offset `b`.
    pub b: f64,
}

impl HalfPlane {
    /// Construct from coefficients.
    pub const fn new(a: Vec2, b: f64) -> Self {
        Self { a, b }
    }

    /// Signed margin `b − a · p`; positive inside the feasible set.
    pub fn margin(&self, p: Vec2) -> f64 {
        self.b - self.a.dot(p)
    }
}

/// A bounded convex coverage region.
///
/// Holds the polygon boundary (counter-clockwise, deduplicated) and an
/// immutable set of half-plane constraints such that a point is
/// feasible iff every [`HalfPlane::margin`] is positive. The
/// constraints are derived once at construction (or supplied
/// explicitly) and never change.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    vertices: Vec<Vec2>,
    half_planes: Vec<HalfPlane>,
    area: f64,
    centroid: Vec2,
}

impl Region {
    /// Build a region from a polygon boundary, deriving one half-plane
    /// per edge (unit outward normal).
    ///
    /// Accepts the closing vertex repeated at the end or omitted, and
    /// either winding order; the stored ring is normalized to
    /// counter-clockwise. Rejects polygons with fewer than three
    /// distinct vertices, (near-)zero area, or any reflex vertex.
    pub fn from_polygon(boundary: &[Vec2]) -> Result<Self, GeometryError> {
        let vertices = Self::normalized_ring(boundary)?;
        let half_planes = vertices
            .iter()
            .enumerate()
            .map(|(k, &p)| {
                let q = vertices[(k + 1) % vertices.len()];
                let d = q - p;
                let len = d.norm();
                // Interior lies left of each CCW edge, so the outward
                // normal is the edge direction rotated clockwise.
                let a = Vec2::new(d.y / len, -d.x / len);
                HalfPlane::new(a, a.dot(p))
            })
            .collect();
        Self::assemble(vertices, half_planes)
    }

    /// Build a region from a polygon boundary and an explicit set of
    /// half-plane coefficient rows `[a_x, a_y, b]`.
    ///
    /// Used when the barrier constraints are configured directly (the
    /// coefficients drive the control law unscaled). Every polygon
    /// vertex must satisfy every supplied constraint within tolerance;
    /// a violation means the polygon and the coefficients describe
    /// different regions.
    pub fn from_half_planes(
        boundary: &[Vec2],
        coefficients: &[[f64; 3]],
    ) -> Result<Self, GeometryError> {
        if coefficients.is_empty() {
            return Err(GeometryError::InvalidRegion {
                reason: "no half-plane coefficients supplied".to_string(),
            });
        }
        let vertices = Self::normalized_ring(boundary)?;
        let half_planes: Vec<HalfPlane> = coefficients
            .iter()
            .map(|row| HalfPlane::new(Vec2::new(row[0], row[1]), row[2]))
            .collect();
        for hp in &half_planes {
            if !hp.a.is_finite() || !hp.b.is_finite() {
                return Err(GeometryError::InvalidRegion {
                    reason: "non-finite half-plane coefficients".to_string(),
                });
            }
            for (k, &v) in vertices.iter().enumerate() {
                let m = hp.margin(v);
                if m < -FEASIBILITY_TOL {
                    return Err(GeometryError::InvalidRegion {
                        reason: format!(
                            "vertex {k} violates supplied half-plane (margin {m:.3e})"
                        ),
                    });
                }
            }
        }
        Self::assemble(vertices, half_planes)
    }

    /// Axis-aligned rectangular region `[x0, x1] × [y0, y1]`.
    pub fn rectangle(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self, GeometryError> {
        Self::from_polygon(&[
            Vec2::new(x0, y0),
            Vec2::new(x1, y0),
            Vec2::new(x1, y1),
            Vec2::new(x0, y1),
        ])
    }

    /// The boundary vertices, counter-clockwise, closing vertex omitted.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// The half-plane constraint set.
    pub fn half_planes(&self) -> &[HalfPlane] {
        &self.half_planes
    }

    /// Enclosed area.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Area centroid of the region.
    pub fn centroid(&self) -> Vec2 {
        self.centroid
    }

    /// True if `p` satisfies every constraint (boundary inclusive).
    pub fn contains(&self, p: Vec2) -> bool {
        self.half_planes.iter().all(|hp| hp.margin(p) >= 0.0)
    }

    /// Smallest constraint margin at `p`, with the index of the
    /// constraint attaining it. Negative outside the region.
    pub fn min_margin(&self, p: Vec2) -> (usize, f64) {
        let mut best = (0, f64::INFINITY);
        for (k, hp) in self.half_planes.iter().enumerate() {
            let m = hp.margin(p);
            if m < best.1 {
                best = (k, m);
            }
        }
        best
    }

    /// Deduplicate, validate, and orient the boundary ring CCW.
    fn normalized_ring(boundary: &[Vec2]) -> Result<Vec<Vec2>, GeometryError> {
        let mut vertices: Vec<Vec2> = Vec::with_capacity(boundary.len());
        for &v in boundary {
            if !v.is_finite() {
                return Err(GeometryError::InvalidRegion {
                    reason: "non-finite boundary vertex".to_string(),
                });
            }
            if vertices.last().map_or(true, |&last| v.distance(last) > VERTEX_TOL) {
                vertices.push(v);
            }
        }
        // Drop an explicit closing vertex.
        if vertices.len() > 1 && vertices[0].distance(vertices[vertices.len() - 1]) <= VERTEX_TOL {
            vertices.pop();
        }
        if vertices.len() < 3 {
            return Err(GeometryError::InvalidRegion {
                reason: format!("{} distinct vertices, need at least 3", vertices.len()),
            });
        }
        if polygon_signed_area(&vertices) < 0.0 {
            vertices.reverse();
        }
        // Convexity: every CCW turn must be non-reflex.
        for k in 0..vertices.len() {
            let p = vertices[k];
            let q = vertices[(k + 1) % vertices.len()];
            let r = vertices[(k + 2) % vertices.len()];
            if (q - p).cross(r - q) < -CONVEXITY_TOL {
                return Err(GeometryError::InvalidRegion {
                    reason: format!("reflex vertex at index {}", (k + 1) % vertices.len()),
                });
            }
        }
        Ok(vertices)
    }

    fn assemble(vertices: Vec<Vec2>, half_planes: Vec<HalfPlane>) -> Result<Self, GeometryError> {
        let (area, centroid) =
            polygon_area_centroid(&vertices).map_err(|_| GeometryError::InvalidRegion {
                reason: "boundary polygon has zero area".to_string(),
            })?;
        Ok(Self {
            vertices,
            half_planes,
            area,
            centroid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_derives_four_half_planes() {
        let r = Region::rectangle(0.0, 0.0, 100.0, 100.0).unwrap();
        assert_eq!(r.half_planes().len(), 4);
        assert!((r.area() - 10_000.0).abs() < 1e-9);
        assert_eq!(r.centroid(), Vec2::new(50.0, 50.0));
        assert!(r.contains(Vec2::new(50.0, 50.0)));
        assert!(!r.contains(Vec2::new(101.0, 50.0)));
    }

    #[test]
    fn clockwise_input_is_normalized() {
        let cw = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 0.0),
        ];
        let r = Region::from_polygon(&cw).unwrap();
        assert!(polygon_signed_area(r.vertices()) > 0.0);
        assert!(r.contains(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn closing_vertex_is_tolerated() {
        let closed = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(0.0, 0.0),
        ];
        let r = Region::from_polygon(&closed).unwrap();
        assert_eq!(r.vertices().len(), 4);
    }

    #[test]
    fn reflex_polygon_is_rejected() {
        let arrow = [
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 4.0),
        ];
        assert!(matches!(
            Region::from_polygon(&arrow),
            Err(GeometryError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn too_few_vertices_is_rejected() {
        assert!(matches!(
            Region::from_polygon(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]),
            Err(GeometryError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn margins_are_positive_strictly_inside() {
        let r = Region::rectangle(0.0, 0.0, 10.0, 10.0).unwrap();
        let (_, m) = r.min_margin(Vec2::new(3.0, 5.0));
        assert!((m - 3.0).abs() < 1e-12);
        let (_, outside) = r.min_margin(Vec2::new(-1.0, 5.0));
        assert!(outside < 0.0);
    }

    #[test]
    fn explicit_half_planes_are_cross_validated() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        // Consistent coefficient rows: x >= 0, y >= 0, x <= 10, y <= 10.
        let rows = [
            [-1.0, 0.0, 0.0],
            [0.0, -1.0, 0.0],
            [1.0, 0.0, 10.0],
            [0.0, 1.0, 10.0],
        ];
        let r = Region::from_half_planes(&square, &rows).unwrap();
        assert_eq!(r.half_planes().len(), 4);
        assert!(r.contains(Vec2::new(5.0, 5.0)));

        // A row excluding half the polygon is inconsistent.
        let bad = [[1.0, 0.0, 5.0]];
        assert!(matches!(
            Region::from_half_planes(&square, &bad),
            Err(GeometryError::InvalidRegion { .. })
        ));
    }
}
