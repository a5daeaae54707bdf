//! Core types for the Swath coverage-control engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental primitives used throughout the Swath workspace:
//! strongly-typed IDs, 2-D vector/matrix arithmetic, and the unicycle
//! pose type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod math;
pub mod pose;

pub use id::{AgentId, Neighbors, TickId};
pub use math::{Mat2, Vec2};
pub use pose::Pose;
