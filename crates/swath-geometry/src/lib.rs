//! Geometry kernel for the Swath coverage-control engine.
//!
//! Provides the bounded Voronoi tessellation of agent generator points
//! against a convex region, polygon area/centroid computation, and the
//! topological adjacency structure (shared-edge neighbor detection) that
//! the gradient engine builds on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod centroid;
pub mod clip;
pub mod error;
pub mod partition;
pub mod region;

pub use centroid::{polygon_area_centroid, polygon_signed_area};
pub use clip::{EdgeSource, LabeledPolygon};
pub use error::GeometryError;
pub use partition::{Cell, NeighborEdge, Partition, Tolerances};
pub use region::{HalfPlane, Region};
