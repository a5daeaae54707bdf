//! Half-plane clipping of convex polygons with edge-source labels.
//!
//! Each edge of a clipped polygon remembers where it came from: a
//! region boundary edge or the perpendicular bisector against a
//! specific generator. The partition builder reads these labels to
//! construct the topological adjacency structure without re-deriving
//! identity from coordinates.

use swath_core::Vec2;

/// Provenance of one polygon edge after clipping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeSource {
    /// The edge lies on region boundary edge `k` (traversal order of
    /// the region polygon).
    Boundary(usize),
    /// The edge lies on the perpendicular bisector against generator `j`.
    Bisector(usize),
}

/// A convex polygon whose edges carry [`EdgeSource`] labels.
///
/// `sources[k]` labels the edge from `vertices[k]` to
/// `vertices[(k + 1) % n]`. Vertices are in counter-clockwise order.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledPolygon {
    /// Polygon vertices in counter-clockwise order, first vertex not
    /// repeated.
    pub vertices: Vec<Vec2>,
    /// Per-edge source labels, parallel to `vertices`.
    pub sources: Vec<EdgeSource>,
}

/// Margin slack treated as "inside" during clipping, so vertices lying
/// exactly on a clip line are kept rather than regenerated as
/// intersection points.
const INSIDE_EPS: f64 = 1e-12;

impl LabeledPolygon {
    /// Build from parallel vertex and source lists.
    ///
    /// # Panics
    ///
    /// Panics if the lists have different lengths (internal invariant).
    pub fn new(vertices: Vec<Vec2>, sources: Vec<EdgeSource>) -> Self {
        assert_eq!(vertices.len(), sources.len(), "edge labels must be parallel");
        Self { vertices, sources }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if the polygon has collapsed below a triangle.
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Clip against the half-plane `normal · p ≤ offset`, labeling any
    /// newly created edge along the clip line with `label`.
    ///
    /// Standard Sutherland–Hodgman restricted to convex input, which
    /// guarantees at most one entry and one exit crossing, so the
    /// single `label` assignment is exact.
    pub fn clip_halfplane(&self, normal: Vec2, offset: f64, label: EdgeSource) -> LabeledPolygon {
        let n = self.vertices.len();
        if n < 3 {
            return LabeledPolygon::new(Vec::new(), Vec::new());
        }
        let margins: Vec<f64> = self.vertices.iter().map(|&v| offset - normal.dot(v)).collect();

        let mut out_vertices = Vec::with_capacity(n + 1);
        let mut out_sources = Vec::with_capacity(n + 1);
        for k in 0..n {
            let next = (k + 1) % n;
            let cur_in = margins[k] >= -INSIDE_EPS;
            let next_in = margins[next] >= -INSIDE_EPS;
            match (cur_in, next_in) {
                (true, true) => {
                    out_vertices.push(self.vertices[k]);
                    out_sources.push(self.sources[k]);
                }
                (true, false) => {
                    out_vertices.push(self.vertices[k]);
                    out_sources.push(self.sources[k]);
                    out_vertices.push(self.intersect(k, next, &margins));
                    out_sources.push(label);
                }
                (false, true) => {
                    out_vertices.push(self.intersect(k, next, &margins));
                    out_sources.push(self.sources[k]);
                }
                (false, false) => {}
            }
        }
        LabeledPolygon::new(out_vertices, out_sources)
    }

    /// Remove zero-length edges, merging coincident consecutive
    /// vertices (within `tol`) and dropping the collapsed edge's label.
    pub fn dedupe(&mut self, tol: f64) {
        loop {
            let n = self.vertices.len();
            if n < 2 {
                return;
            }
            let mut collapsed = None;
            for k in 0..n {
                let next = (k + 1) % n;
                if self.vertices[k].distance(self.vertices[next]) < tol {
                    collapsed = Some((k, next));
                    break;
                }
            }
            match collapsed {
                // Edge k has zero length: its label vanishes and the
                // coincident endpoint pair is merged. The vertex removed
                // is chosen so that the remaining labels stay aligned
                // with the edges they describe.
                Some((k, 0)) => {
                    self.vertices.remove(k);
                    self.sources.remove(k);
                }
                Some((k, next)) => {
                    self.vertices.remove(next);
                    self.sources.remove(k);
                }
                None => return,
            }
        }
    }

    /// Intersection of edge `k → next` with the current clip line,
    /// interpolated from the precomputed margins.
    fn intersect(&self, k: usize, next: usize, margins: &[f64]) -> Vec2 {
        let t = margins[k] / (margins[k] - margins[next]);
        let a = self.vertices[k];
        let b = self.vertices[next];
        a + (b - a) * t
    }
}
