//! Point-to-point gradient sharing between Voronoi neighbors.
//!
//! [`CommLink`] is a process-scoped keyed store: each agent publishes a
//! set of partial-derivative messages addressed to specific neighbor
//! IDs, and each neighbor retrieves only the messages addressed to it.
//! Publishing replaces the sender's previous messages wholesale, so
//! stale gradients from a prior tick can never be consumed — a sender
//! that fails to republish simply has no messages on the link.
//!
//! The table is partitioned by sender key, so if the tick loop is ever
//! parallelized, concurrent publishes from different agents touch
//! disjoint key ranges.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use indexmap::{IndexMap, IndexSet};
use std::error::Error;
use std::fmt;
use swath_core::{AgentId, Mat2, Vec2};

/// A directed partial-derivative report from one agent to a
/// Voronoi-neighbor.
///
/// Agent `sender` reports the effect `receiver` has on the sender's
/// local Lyapunov gradient. Only meaningful between Voronoi-adjacent
/// agents on the tick it was published.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientMessage {
    /// The publishing agent.
    pub sender: AgentId,
    /// The addressed Voronoi-neighbor.
    pub receiver: AgentId,
    /// `∂V_sender/∂z_receiver`.
    pub dv_dz: Vec2,
    /// `∂C_sender/∂z_receiver`.
    pub dc_dz: Mat2,
}

/// One outbound entry of a publish call: the receiver plus payload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outbound {
    /// The addressed Voronoi-neighbor.
    pub receiver: AgentId,
    /// `∂V_sender/∂z_receiver`.
    pub dv_dz: Vec2,
    /// `∂C_sender/∂z_receiver`.
    pub dc_dz: Mat2,
}

/// Errors from the communication link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkError {
    /// An unregistered agent ID was used as sender or receiver. This is
    /// a configuration error, not a runtime condition.
    UnknownAgent {
        /// The offending ID.
        id: AgentId,
    },
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAgent { id } => write!(f, "agent {id} is not registered on the link"),
        }
    }
}

impl Error for LinkError {}

/// The in-process communication link.
///
/// Registered agent IDs are fixed at construction. The message table is
/// keyed by `(sender, receiver)` and holds at most one message per
/// directed pair.
#[derive(Clone, Debug, Default)]
pub struct CommLink {
    registered: IndexSet<AgentId>,
    table: IndexMap<(AgentId, AgentId), GradientMessage>,
}

impl CommLink {
    /// Create a link with the given registered agents.
    pub fn new(agents: impl IntoIterator<Item = AgentId>) -> Self {
        Self {
            registered: agents.into_iter().collect(),
            table: IndexMap::new(),
        }
    }

    /// Number of registered agents.
    pub fn agent_count(&self) -> usize {
        self.registered.len()
    }

    /// Number of messages currently on the link.
    pub fn message_count(&self) -> usize {
        self.table.len()
    }

    /// Publish `sender`'s messages for this tick, atomically replacing
    /// every message the sender published before.
    ///
    /// An empty `outbox` is a valid publish: it clears the sender's
    /// previous messages (an agent with no Voronoi-neighbors this
    /// tick).
    ///
    /// # Errors
    ///
    /// [`LinkError::UnknownAgent`] if `sender` or any receiver is not
    /// registered; the table is left unchanged in that case.
    pub fn publish(&mut self, sender: AgentId, outbox: &[Outbound]) -> Result<(), LinkError> {
        if !self.registered.contains(&sender) {
            return Err(LinkError::UnknownAgent { id: sender });
        }
        for out in outbox {
            if !self.registered.contains(&out.receiver) {
                return Err(LinkError::UnknownAgent { id: out.receiver });
            }
        }
        self.table.retain(|key, _| key.0 != sender);
        for out in outbox {
            self.table.insert(
                (sender, out.receiver),
                GradientMessage {
                    sender,
                    receiver: out.receiver,
                    dv_dz: out.dv_dz,
                    dc_dz: out.dc_dz,
                },
            );
        }
        Ok(())
    }

    /// All current messages addressed to `agent`, in publish order.
    ///
    /// An empty result is a legitimate transient state before the
    /// publish phase of a tick has completed.
    ///
    /// # Errors
    ///
    /// [`LinkError::UnknownAgent`] if `agent` is not registered.
    pub fn fetch(&self, agent: AgentId) -> Result<Vec<&GradientMessage>, LinkError> {
        if !self.registered.contains(&agent) {
            return Err(LinkError::UnknownAgent { id: agent });
        }
        Ok(self
            .table
            .values()
            .filter(|m| m.receiver == agent)
            .collect())
    }

    /// The message from `sender` to `receiver`, if one is currently
    /// published.
    ///
    /// # Errors
    ///
    /// [`LinkError::UnknownAgent`] if either ID is not registered.
    pub fn fetch_from(
        &self,
        sender: AgentId,
        receiver: AgentId,
    ) -> Result<Option<&GradientMessage>, LinkError> {
        if !self.registered.contains(&sender) {
            return Err(LinkError::UnknownAgent { id: sender });
        }
        if !self.registered.contains(&receiver) {
            return Err(LinkError::UnknownAgent { id: receiver });
        }
        Ok(self.table.get(&(sender, receiver)))
    }
}
