//! Polygon area and centroid computation.

use crate::error::GeometryError;
use swath_core::Vec2;

/// Area below which a polygon is considered degenerate.
const AREA_TOL: f64 = 1e-12;

/// Signed (shoelace) area of a simple polygon.
///
/// Positive for counter-clockwise vertex order, negative for clockwise.
/// The vertex list is treated as a closed ring; the first vertex must
/// not be repeated at the end.
pub fn polygon_signed_area(vertices: &[Vec2]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for (k, &v) in vertices.iter().enumerate() {
        let w = vertices[(k + 1) % vertices.len()];
        twice_area += v.cross(w);
    }
    twice_area / 2.0
}

/// Area-weighted centroid of a simple polygon.
///
/// Returns `(area, centroid)` where `area` is the absolute enclosed
/// area. Fails with [`GeometryError::DegeneratePolygon`] when the
/// polygon has fewer than three vertices or (near-)zero area, since the
/// centroid is undefined there.
pub fn polygon_area_centroid(vertices: &[Vec2]) -> Result<(f64, Vec2), GeometryError> {
    let signed = polygon_signed_area(vertices);
    if signed.abs() < AREA_TOL {
        return Err(GeometryError::DegeneratePolygon);
    }
    let mut cx = 0.0;
    let mut cy = 0.0;
    for (k, &v) in vertices.iter().enumerate() {
        let w = vertices[(k + 1) % vertices.len()];
        let cross = v.cross(w);
        cx += (v.x + w.x) * cross;
        cy += (v.y + w.y) * cross;
    }
    let scale = 1.0 / (6.0 * signed);
    Ok((signed.abs(), Vec2::new(cx * scale, cy * scale)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn square_area_and_centroid() {
        let (area, c) = polygon_area_centroid(&unit_square()).unwrap();
        assert!((area - 1.0).abs() < 1e-12);
        assert!((c.x - 0.5).abs() < 1e-12);
        assert!((c.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn clockwise_order_gives_negative_signed_area() {
        let mut v = unit_square();
        v.reverse();
        assert!(polygon_signed_area(&v) < 0.0);
        // Centroid is orientation-independent.
        let (area, c) = polygon_area_centroid(&v).unwrap();
        assert!((area - 1.0).abs() < 1e-12);
        assert!((c.x - 0.5).abs() < 1e-12);
    }

    #[test]
    fn triangle_centroid_is_vertex_mean() {
        let v = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(0.0, 3.0),
        ];
        let (area, c) = polygon_area_centroid(&v).unwrap();
        assert!((area - 4.5).abs() < 1e-12);
        assert!((c.x - 1.0).abs() < 1e-12);
        assert!((c.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_polygon_is_rejected() {
        let collinear = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 2.0),
        ];
        assert_eq!(
            polygon_area_centroid(&collinear),
            Err(GeometryError::DegeneratePolygon)
        );
        assert_eq!(
            polygon_area_centroid(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]),
            Err(GeometryError::DegeneratePolygon)
        );
    }
}
