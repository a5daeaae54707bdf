//! CVT gradient engine for the Swath coverage-control workspace.
//!
//! Computes, for each Voronoi cell, the centroid and the analytic
//! Jacobians of that centroid with respect to the cell's own generator
//! and each Voronoi-neighbor generator. The derivatives reduce to 1-D
//! line integrals along each shared edge; for a uniform-density cell
//! the integrands are polynomials in the edge parameter, so every
//! integral is evaluated in closed form.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod integrals;
pub mod jacobian;
pub mod report;

pub use jacobian::{edge_jacobians, EdgeJacobians};
pub use report::{CvtReport, NeighborGradient};
