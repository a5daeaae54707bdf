//! Agent-side control for the Swath coverage engine.
//!
//! Owns the unicycle agent state (pose, virtual center, commanded
//! angular rate), the barrier-Lyapunov control law that drives each
//! agent toward its cell centroid without leaving the region, and the
//! kinematic-integrator seam.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod blf;
pub mod error;
pub mod gains;
pub mod integrator;

pub use agent::Agent;
pub use blf::{control_rate, evaluate_local, sigmoid, BarrierState, LocalGradients};
pub use error::ControlError;
pub use gains::ControlGains;
pub use integrator::{Integrator, Unicycle};
