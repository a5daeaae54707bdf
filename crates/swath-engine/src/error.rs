//! Runtime errors of the tick loop.

use std::error::Error;
use std::fmt;

use swath_control::ControlError;
use swath_core::{AgentId, TickId};
use swath_geometry::GeometryError;
use swath_link::LinkError;

/// A fatal condition that aborts a run mid-tick.
///
/// Every variant carries the tick it occurred on; agent-specific
/// variants carry the agent. Degenerate geometry is not represented
/// here per se: a degenerate cell is skipped and only escalates to
/// [`TickError::PersistentDegeneracy`] once the configured streak
/// budget is exhausted.
#[derive(Clone, Debug, PartialEq)]
pub enum TickError {
    /// An agent's virtual center left the feasible region. The barrier
    /// formulation is undefined there, so this is a configuration or
    /// gain error, never clamped away.
    Infeasible {
        /// The offending agent.
        agent: AgentId,
        /// The tick on which the violation was observed.
        tick: TickId,
        /// Index of the violated region constraint.
        constraint: usize,
        /// The non-positive margin observed.
        margin: f64,
    },
    /// An expected Voronoi-neighbor message was absent after the
    /// publish phase completed. The publish pass is a strict barrier,
    /// so a missing message means an adjacency inconsistency, not a
    /// transient.
    MissingNeighborData {
        /// The fetching agent.
        agent: AgentId,
        /// The neighbor whose message was expected.
        neighbor: AgentId,
        /// The tick on which the fetch failed.
        tick: TickId,
    },
    /// One agent's cell stayed degenerate past the configured streak
    /// budget.
    PersistentDegeneracy {
        /// The affected agent.
        agent: AgentId,
        /// The tick on which the budget was exceeded.
        tick: TickId,
        /// Length of the consecutive-skip streak, including this tick.
        consecutive: u32,
    },
    /// Control-law evaluation failed for a reason other than
    /// infeasibility.
    Control {
        /// The affected agent.
        agent: AgentId,
        /// The tick on which evaluation failed.
        tick: TickId,
        /// The underlying control error.
        source: ControlError,
    },
    /// The partition could not be built this tick.
    Geometry {
        /// The tick on which tessellation failed.
        tick: TickId,
        /// The underlying geometry error.
        source: GeometryError,
    },
    /// A link operation failed; link errors are configuration errors
    /// surfacing late.
    Link {
        /// The tick on which the link operation failed.
        tick: TickId,
        /// The underlying link error.
        source: LinkError,
    },
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infeasible {
                agent,
                tick,
                constraint,
                margin,
            } => write!(
                f,
                "tick {tick}: agent {agent} violated region constraint {constraint} \
                 (margin {margin:.6e})"
            ),
            Self::MissingNeighborData {
                agent,
                neighbor,
                tick,
            } => write!(
                f,
                "tick {tick}: agent {agent} found no message from Voronoi-neighbor {neighbor}"
            ),
            Self::PersistentDegeneracy {
                agent,
                tick,
                consecutive,
            } => write!(
                f,
                "tick {tick}: agent {agent} degenerate for {consecutive} consecutive ticks"
            ),
            Self::Control { agent, tick, source } => {
                write!(f, "tick {tick}: agent {agent}: {source}")
            }
            Self::Geometry { tick, source } => write!(f, "tick {tick}: geometry: {source}"),
            Self::Link { tick, source } => write!(f, "tick {tick}: link: {source}"),
        }
    }
}

impl Error for TickError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Control { source, .. } => Some(source),
            Self::Geometry { source, .. } => Some(source),
            Self::Link { source, .. } => Some(source),
            _ => None,
        }
    }
}
