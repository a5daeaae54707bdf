//! Coverage orchestrator for the Swath workspace.
//!
//! Owns the tick loop that drives every agent: pose integration, the
//! bounded Voronoi partition over all virtual centers, gradient
//! evaluation and exchange, and the control update. One
//! [`CoverageWorld`] runs either routing mode; only the gradient data
//! path differs between them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod record;
pub mod world;

pub use config::{AgentConfig, ConfigError, Mode, SimConfig};
pub use error::TickError;
pub use record::{AgentRecord, RunMetrics, RunOutcome, RunSummary, TickRecord};
pub use world::CoverageWorld;
