//! Bounded Voronoi tessellation and topological adjacency.
//!
//! Each generator's cell is the intersection of the region with the
//! half-planes `‖p − z_i‖ ≤ ‖p − z_j‖` against every other generator —
//! the clipped form of the planar Voronoi diagram, which by
//! construction never produces an unbounded cell. Clip output vertices
//! are merged into a shared canonical pool so that two cells sharing a
//! boundary edge also share identical vertex indices; adjacency is then
//! read off an edge-keyed map instead of being re-derived from
//! coordinate coincidence.

use crate::clip::{EdgeSource, LabeledPolygon};
use crate::error::GeometryError;
use crate::region::Region;
use indexmap::IndexMap;
use smallvec::SmallVec;
use swath_core::Vec2;

/// Named tolerance knobs for partition construction.
///
/// All values are absolute distances (or area) in region coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    /// Minimum pairwise generator separation. Closer pairs make the
    /// tessellation undefined and are a fatal precondition violation.
    pub generator_tol: f64,
    /// Vertex-merge radius for the canonical vertex pool. Clip noise is
    /// far below this; genuine Voronoi vertex separations are far above.
    pub merge_tol: f64,
    /// Minimum shared-edge length for two cells to count as neighbors.
    /// Cells meeting at a single point stay non-adjacent, keeping the
    /// gradient denominators away from zero.
    pub edge_tol: f64,
    /// Cell area below which the cell is treated as degenerate.
    pub area_tol: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            generator_tol: 1e-9,
            merge_tol: 1e-7,
            edge_tol: 1e-6,
            area_tol: 1e-12,
        }
    }
}

/// One bounded Voronoi cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// The generator point this cell belongs to.
    pub generator: Vec2,
    /// Cell polygon vertices, counter-clockwise. Empty when the cell
    /// degenerated this tick.
    pub vertices: Vec<Vec2>,
    /// Per-edge provenance, parallel to `vertices`.
    pub sources: Vec<EdgeSource>,
    /// Canonical vertex-pool indices, parallel to `vertices`.
    pub vertex_ids: Vec<usize>,
}

impl Cell {
    /// True if the cell collapsed and carries no usable polygon.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }
}

/// A shared boundary edge with one Voronoi neighbor.
///
/// The two vertices are given in this cell's own traversal order and
/// agree with the neighbor's copy of the same edge (identical canonical
/// vertex indices).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborEdge {
    /// Generator index of the neighbor.
    pub neighbor: usize,
    /// First shared-edge vertex.
    pub v1: Vec2,
    /// Second shared-edge vertex.
    pub v2: Vec2,
}

/// A bounded Voronoi partition of the region over a generator set.
///
/// Recomputed in full every tick; never persisted across ticks.
#[derive(Clone, Debug)]
pub struct Partition {
    cells: Vec<Cell>,
    adjacency: Vec<Vec<NeighborEdge>>,
}

/// Canonical vertex pool: merges coordinates within `merge_tol` to a
/// single index. Linear scan — vertex counts per partition are tiny.
struct VertexPool {
    points: Vec<Vec2>,
    merge_tol: f64,
}

impl VertexPool {
    fn new(merge_tol: f64) -> Self {
        Self {
            points: Vec::new(),
            merge_tol,
        }
    }

    fn canonical(&mut self, p: Vec2) -> usize {
        if let Some(idx) = self
            .points
            .iter()
            .position(|&q| q.distance(p) <= self.merge_tol)
        {
            return idx;
        }
        self.points.push(p);
        self.points.len() - 1
    }
}

impl Partition {
    /// Compute the partition with default [`Tolerances`].
    pub fn compute(generators: &[Vec2], region: &Region) -> Result<Partition, GeometryError> {
        Self::compute_with(generators, region, &Tolerances::default())
    }

    /// Compute the partition with explicit tolerances.
    ///
    /// A single generator is allowed: its cell is the whole region and
    /// it has no neighbors. Duplicate generators (within
    /// `generator_tol`) are rejected as
    /// [`GeometryError::DuplicateGenerators`].
    pub fn compute_with(
        generators: &[Vec2],
        region: &Region,
        tol: &Tolerances,
    ) -> Result<Partition, GeometryError> {
        if generators.is_empty() {
            return Err(GeometryError::NoGenerators);
        }
        for (a, &za) in generators.iter().enumerate() {
            for (b, &zb) in generators.iter().enumerate().skip(a + 1) {
                if za.distance(zb) < tol.generator_tol {
                    return Err(GeometryError::DuplicateGenerators { a, b });
                }
            }
        }

        let mut pool = VertexPool::new(tol.merge_tol);
        let mut cells = Vec::with_capacity(generators.len());
        for (i, &zi) in generators.iter().enumerate() {
            let mut poly = region_polygon(region);
            for (j, &zj) in generators.iter().enumerate() {
                if j == i || poly.is_empty() {
                    continue;
                }
                // Points closer to z_i than z_j: 2(z_j − z_i)·p ≤ |z_j|² − |z_i|²,
                // halved here to keep coefficients at coordinate scale.
                let normal = zj - zi;
                let offset = (zj.norm_squared() - zi.norm_squared()) / 2.0;
                poly = poly.clip_halfplane(normal, offset, EdgeSource::Bisector(j));
            }
            poly.dedupe(tol.merge_tol);
            if poly.is_empty()
                || crate::centroid::polygon_signed_area(&poly.vertices).abs() < tol.area_tol
            {
                cells.push(Cell {
                    generator: zi,
                    vertices: Vec::new(),
                    sources: Vec::new(),
                    vertex_ids: Vec::new(),
                });
                continue;
            }
            let vertex_ids = poly.vertices.iter().map(|&v| pool.canonical(v)).collect();
            cells.push(Cell {
                generator: zi,
                vertices: poly.vertices,
                sources: poly.sources,
                vertex_ids,
            });
        }

        let adjacency = build_adjacency(&cells, tol);
        Ok(Partition { cells, adjacency })
    }

    /// Number of cells (equals the number of generators).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the partition holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in generator order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell of generator `i`.
    pub fn cell(&self, i: usize) -> &Cell {
        &self.cells[i]
    }

    /// Voronoi neighbors of generator `i`, sorted by neighbor index.
    pub fn neighbors(&self, i: usize) -> &[NeighborEdge] {
        &self.adjacency[i]
    }
}

/// The region boundary as a labeled polygon. Boundary labels number
/// the region's polygon edges in traversal order; they only serve to
/// tell boundary edges apart from bisector edges, so no correspondence
/// with the region's half-plane rows is assumed (the two need not
/// align for a region built from raw coefficient rows).
fn region_polygon(region: &Region) -> LabeledPolygon {
    let vertices = region.vertices().to_vec();
    let sources = (0..vertices.len()).map(EdgeSource::Boundary).collect();
    LabeledPolygon::new(vertices, sources)
}

/// Build symmetric adjacency from an edge-keyed map.
///
/// Every bisector-labeled edge of positive length is inserted under its
/// canonical vertex-index pair; entries claimed by exactly two cells
/// whose labels point at each other become neighbor edges on both
/// sides. Single-cell entries (numerical slivers, point contacts) are
/// dropped.
fn build_adjacency(cells: &[Cell], tol: &Tolerances) -> Vec<Vec<NeighborEdge>> {
    struct EdgeClaim {
        cell: usize,
        label: usize,
        v1: Vec2,
        v2: Vec2,
    }

    let mut edges: IndexMap<(usize, usize), SmallVec<[EdgeClaim; 2]>> = IndexMap::new();
    for (i, cell) in cells.iter().enumerate() {
        for (k, source) in cell.sources.iter().enumerate() {
            let EdgeSource::Bisector(j) = *source else {
                continue;
            };
            let next = (k + 1) % cell.vertices.len();
            let v1 = cell.vertices[k];
            let v2 = cell.vertices[next];
            if v1.distance(v2) <= tol.edge_tol {
                continue;
            }
            let ia = cell.vertex_ids[k];
            let ib = cell.vertex_ids[next];
            let key = (ia.min(ib), ia.max(ib));
            edges.entry(key).or_default().push(EdgeClaim {
                cell: i,
                label: j,
                v1,
                v2,
            });
        }
    }

    let mut adjacency: Vec<Vec<NeighborEdge>> = vec![Vec::new(); cells.len()];
    for (_, claims) in edges {
        let [a, b] = claims.as_slice() else {
            continue;
        };
        if a.label != b.cell || b.label != a.cell {
            continue;
        }
        adjacency[a.cell].push(NeighborEdge {
            neighbor: b.cell,
            v1: a.v1,
            v2: a.v2,
        });
        adjacency[b.cell].push(NeighborEdge {
            neighbor: a.cell,
            v1: b.v1,
            v2: b.v2,
        });
    }
    for list in &mut adjacency {
        list.sort_by_key(|e| e.neighbor);
    }
    adjacency
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::centroid::polygon_area_centroid;
    use proptest::prelude::*;

    fn square_100() -> Region {
        Region::rectangle(0.0, 0.0, 100.0, 100.0).unwrap()
    }

    #[test]
    fn single_generator_owns_whole_region() {
        let region = square_100();
        let p = Partition::compute(&[Vec2::new(30.0, 70.0)], &region).unwrap();
        assert_eq!(p.len(), 1);
        assert!(p.neighbors(0).is_empty());
        let (area, c) = polygon_area_centroid(&p.cell(0).vertices).unwrap();
        assert!((area - region.area()).abs() < 1e-9);
        assert!(c.distance(region.centroid()) < 1e-9);
    }

    #[test]
    fn two_generators_split_on_vertical_bisector() {
        // Two agents at (40,50) and (60,50): shared edge near x = 50,
        // two symmetric cells, each the other's sole neighbor.
        let region = square_100();
        let p = Partition::compute(&[Vec2::new(40.0, 50.0), Vec2::new(60.0, 50.0)], &region)
            .unwrap();
        assert_eq!(p.len(), 2);

        let (area0, c0) = polygon_area_centroid(&p.cell(0).vertices).unwrap();
        let (area1, c1) = polygon_area_centroid(&p.cell(1).vertices).unwrap();
        assert!((area0 - 5000.0).abs() < 1e-8);
        assert!((area1 - 5000.0).abs() < 1e-8);
        assert!(c0.distance(Vec2::new(25.0, 50.0)) < 1e-9);
        assert!(c1.distance(Vec2::new(75.0, 50.0)) < 1e-9);

        let n0 = p.neighbors(0);
        let n1 = p.neighbors(1);
        assert_eq!(n0.len(), 1);
        assert_eq!(n1.len(), 1);
        assert_eq!(n0[0].neighbor, 1);
        assert_eq!(n1[0].neighbor, 0);
        for e in [n0[0], n1[0]] {
            assert!((e.v1.x - 50.0).abs() < 1e-9);
            assert!((e.v2.x - 50.0).abs() < 1e-9);
            assert!((e.v1.distance(e.v2) - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn duplicate_generators_are_fatal() {
        let region = square_100();
        let z = Vec2::new(40.0, 40.0);
        match Partition::compute(&[z, Vec2::new(70.0, 70.0), z], &region) {
            Err(GeometryError::DuplicateGenerators { a: 0, b: 2 }) => {}
            other => panic!("expected DuplicateGenerators(0, 2), got {other:?}"),
        }
    }

    #[test]
    fn empty_generator_set_is_rejected() {
        assert!(matches!(
            Partition::compute(&[], &square_100()),
            Err(GeometryError::NoGenerators)
        ));
    }

    #[test]
    fn point_contact_is_not_adjacency() {
        // Four generators at quadrant centers: diagonal cells meet only
        // at (50,50) and must not be neighbors.
        let region = square_100();
        let p = Partition::compute(
            &[
                Vec2::new(25.0, 25.0),
                Vec2::new(75.0, 25.0),
                Vec2::new(25.0, 75.0),
                Vec2::new(75.0, 75.0),
            ],
            &region,
        )
        .unwrap();
        for i in 0..4 {
            let n: Vec<usize> = p.neighbors(i).iter().map(|e| e.neighbor).collect();
            let diagonal = 3 - i;
            assert!(
                !n.contains(&diagonal),
                "cell {i} must not neighbor its diagonal {diagonal}, got {n:?}"
            );
            assert_eq!(n.len(), 2, "quadrant cell {i} has two edge-neighbors");
        }
    }

    #[test]
    fn cells_tile_the_region() {
        let region = square_100();
        let generators = [
            Vec2::new(20.0, 30.0),
            Vec2::new(70.0, 20.0),
            Vec2::new(55.0, 75.0),
            Vec2::new(30.0, 60.0),
        ];
        let p = Partition::compute(&generators, &region).unwrap();
        let total: f64 = p
            .cells()
            .iter()
            .map(|c| polygon_area_centroid(&c.vertices).unwrap().0)
            .sum();
        assert!(
            (total - region.area()).abs() < 1e-6,
            "cells cover {total}, region is {}",
            region.area()
        );
    }

    #[test]
    fn adjacency_is_symmetric_with_matching_edges() {
        let region = square_100();
        let generators = [
            Vec2::new(20.0, 30.0),
            Vec2::new(70.0, 20.0),
            Vec2::new(55.0, 75.0),
            Vec2::new(30.0, 60.0),
            Vec2::new(85.0, 60.0),
        ];
        let p = Partition::compute(&generators, &region).unwrap();
        for i in 0..generators.len() {
            for e in p.neighbors(i) {
                let back = p
                    .neighbors(e.neighbor)
                    .iter()
                    .find(|other| other.neighbor == i)
                    .unwrap_or_else(|| panic!("{} -> {} not symmetric", i, e.neighbor));
                // Shared vertices agree regardless of traversal order.
                let direct = e.v1.distance(back.v2) + e.v2.distance(back.v1);
                let flipped = e.v1.distance(back.v1) + e.v2.distance(back.v2);
                assert!(direct.min(flipped) < 1e-7);
            }
        }
    }

    #[test]
    fn centroid_lies_inside_its_cell() {
        let region = square_100();
        let generators = [
            Vec2::new(8.0, 12.0),
            Vec2::new(92.0, 9.0),
            Vec2::new(48.0, 95.0),
            Vec2::new(33.0, 44.0),
        ];
        let p = Partition::compute(&generators, &region).unwrap();
        for cell in p.cells() {
            let (_, c) = polygon_area_centroid(&cell.vertices).unwrap();
            // Convex cell, CCW: inside means left of every edge.
            for k in 0..cell.vertices.len() {
                let a = cell.vertices[k];
                let b = cell.vertices[(k + 1) % cell.vertices.len()];
                assert!((b - a).cross(c - a) > -1e-9);
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// The centroid of every cell stays inside (or on the boundary
        /// of) its own cell, across jittered quadrant generator sets.
        #[test]
        fn cell_centroids_stay_inside_their_cells(
            x0 in 5.0f64..45.0, y0 in 5.0f64..45.0,
            x1 in 55.0f64..95.0, y1 in 5.0f64..45.0,
            x2 in 5.0f64..45.0, y2 in 55.0f64..95.0,
            x3 in 55.0f64..95.0, y3 in 55.0f64..95.0,
        ) {
            let region = square_100();
            let generators = [
                Vec2::new(x0, y0),
                Vec2::new(x1, y1),
                Vec2::new(x2, y2),
                Vec2::new(x3, y3),
            ];
            let p = Partition::compute(&generators, &region).unwrap();
            for cell in p.cells() {
                let (_, c) = polygon_area_centroid(&cell.vertices).unwrap();
                for k in 0..cell.vertices.len() {
                    let a = cell.vertices[k];
                    let b = cell.vertices[(k + 1) % cell.vertices.len()];
                    prop_assert!((b - a).cross(c - a) > -1e-9);
                }
            }
        }
    }

    #[test]
    fn generator_lies_inside_its_cell() {
        let region = square_100();
        let generators = [
            Vec2::new(10.0, 10.0),
            Vec2::new(90.0, 15.0),
            Vec2::new(50.0, 90.0),
        ];
        let p = Partition::compute(&generators, &region).unwrap();
        for cell in p.cells() {
            // Convex cell, CCW: inside means left of every edge.
            for k in 0..cell.vertices.len() {
                let a = cell.vertices[k];
                let b = cell.vertices[(k + 1) % cell.vertices.len()];
                assert!((b - a).cross(cell.generator - a) > -1e-9);
            }
        }
    }
}
