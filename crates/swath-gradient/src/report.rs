//! Per-agent CVT report: centroid, mass, and centroid Jacobians.

use crate::jacobian::edge_jacobians;
use swath_core::{Mat2, Vec2};
use swath_geometry::{polygon_area_centroid, GeometryError, Partition};

/// Cross-gradient data for one Voronoi neighbor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborGradient {
    /// Generator index of the neighbor.
    pub neighbor: usize,
    /// `∂C_i/∂z_j` for this neighbor.
    pub cross: Mat2,
    /// First shared-edge vertex used in the derivation.
    pub v1: Vec2,
    /// Second shared-edge vertex used in the derivation.
    pub v2: Vec2,
}

/// Everything the control law needs about one cell for one tick.
///
/// Created fresh from the current partition, consumed by the control
/// law and the communication layer, then discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct CvtReport {
    /// The generator the report describes.
    pub generator: Vec2,
    /// Cell centroid `C_i` (the CVT target).
    pub centroid: Vec2,
    /// Cell mass (area, uniform density 1).
    pub mass: f64,
    /// `∂C_i/∂z_i`: the exact sum of the per-neighbor self
    /// contributions. Zero for a cell with no neighbors, whose centroid
    /// is independent of the generator.
    pub self_jacobian: Mat2,
    /// Per-neighbor cross gradients in neighbor-index order.
    pub neighbors: Vec<NeighborGradient>,
}

impl CvtReport {
    /// Compute the report for generator `i` of `partition`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateCell`] when the cell carries no
    /// usable polygon this tick — the caller treats this as a
    /// skip-and-continue condition, not a run failure.
    pub fn compute(partition: &Partition, i: usize) -> Result<CvtReport, GeometryError> {
        let cell = partition.cell(i);
        if cell.is_degenerate() {
            return Err(GeometryError::DegenerateCell { generator: i });
        }
        let (mass, centroid) = polygon_area_centroid(&cell.vertices)
            .map_err(|_| GeometryError::DegenerateCell { generator: i })?;

        let mut self_jacobian = Mat2::ZERO;
        let mut neighbors = Vec::with_capacity(partition.neighbors(i).len());
        for edge in partition.neighbors(i) {
            let z_j = partition.cell(edge.neighbor).generator;
            let jac = edge_jacobians(cell.generator, centroid, mass, z_j, edge.v1, edge.v2);
            self_jacobian += jac.self_contrib;
            neighbors.push(NeighborGradient {
                neighbor: edge.neighbor,
                cross: jac.cross,
                v1: edge.v1,
                v2: edge.v2,
            });
        }

        Ok(CvtReport {
            generator: cell.generator,
            centroid,
            mass,
            self_jacobian,
            neighbors,
        })
    }
}
