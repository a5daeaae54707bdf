//! Swath: decentralized Voronoi coverage control for unicycle fleets.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Swath sub-crates. For most users, adding `swath` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use swath::prelude::*;
//!
//! // Three agents deployed over a 100×100 region.
//! let region = Region::rectangle(0.0, 0.0, 100.0, 100.0).unwrap();
//! let agents = vec![
//!     AgentConfig { id: AgentId(0), pose: Pose::new(30.0, 30.0, 0.0), v: 1.0, w0: 1.2 },
//!     AgentConfig { id: AgentId(1), pose: Pose::new(70.0, 30.0, 2.0), v: 1.0, w0: 1.2 },
//!     AgentConfig { id: AgentId(2), pose: Pose::new(50.0, 70.0, 4.0), v: 1.0, w0: 1.2 },
//! ];
//! let mut config = SimConfig::new(region, agents);
//! config.max_ticks = 100;
//!
//! let mut world = CoverageWorld::new(config).unwrap();
//! let summary = world.run().unwrap();
//! assert_eq!(summary.history.len(), 100);
//! // Every agent steered toward its cell centroid on every tick.
//! assert!(summary.history.iter().all(|r| r.skipped.is_empty()));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `swath-core` | IDs, vectors, matrices, poses |
//! | [`geometry`] | `swath-geometry` | Regions, bounded Voronoi partition, adjacency |
//! | [`gradient`] | `swath-gradient` | Analytic CVT centroid Jacobians |
//! | [`link`] | `swath-link` | Neighbor gradient-sharing link |
//! | [`control`] | `swath-control` | Agents, barrier-Lyapunov control law |
//! | [`engine`] | `swath-engine` | The coverage orchestrator |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core IDs and planar math (`swath-core`).
pub use swath_core as types;

/// Regions, the bounded Voronoi partition, and shared-edge adjacency
/// (`swath-geometry`).
pub use swath_geometry as geometry;

/// Per-cell centroid Jacobians and CVT reports (`swath-gradient`).
pub use swath_gradient as gradient;

/// The in-process gradient-sharing link (`swath-link`).
pub use swath_link as link;

/// Agent state, the kinematic integrator seam, and the
/// barrier-Lyapunov control law (`swath-control`).
pub use swath_control as control;

/// The coverage orchestrator: configuration, the tick loop, records
/// (`swath-engine`).
pub use swath_engine as engine;

/// Common imports for typical Swath usage.
///
/// ```rust
/// use swath::prelude::*;
/// ```
pub mod prelude {
    pub use swath_core::{AgentId, Mat2, Neighbors, Pose, TickId, Vec2};

    pub use swath_geometry::{GeometryError, HalfPlane, Partition, Region};

    pub use swath_gradient::CvtReport;

    pub use swath_link::{CommLink, GradientMessage, LinkError};

    pub use swath_control::{Agent, ControlError, ControlGains, Integrator, Unicycle};

    pub use swath_engine::{
        AgentConfig, ConfigError, CoverageWorld, Mode, RunOutcome, RunSummary, SimConfig,
        TickError, TickRecord,
    };
}
