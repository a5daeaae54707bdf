//! Strongly-typed identifiers and the [`Neighbors`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Identifies one agent within a simulation run.
///
/// Agent IDs are supplied at configuration time, must be distinct, and
/// double as the addressing key on the communication link. They are
/// stable for the lifetime of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation advances one step. Tick 0 is
/// the initial (pre-movement) state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Inline list of Voronoi-neighbor agent IDs.
///
/// Planar Voronoi cells rarely have more than a handful of neighbors,
/// so `SmallVec<[AgentId; 8]>` avoids heap allocation in the common
/// case. Larger adjacency spills to the heap transparently.
pub type Neighbors = SmallVec<[AgentId; 8]>;
