//! Per-tick records and cumulative run counters.
//!
//! The orchestrator carries no text logging; everything an external
//! plotting or telemetry collaborator needs surfaces as one
//! [`TickRecord`] per tick plus the cumulative [`RunMetrics`].

use swath_core::{AgentId, Neighbors, Pose, TickId, Vec2};

/// One agent's state as observed at the end of a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentRecord {
    /// The agent.
    pub id: AgentId,
    /// Physical pose after this tick's integration.
    pub pose: Pose,
    /// Virtual center after this tick's integration.
    pub center: Vec2,
    /// Cell centroid the agent is steering toward. `None` when the
    /// agent was skipped for degenerate geometry.
    pub target: Option<Vec2>,
    /// Angular rate commanded for the next tick.
    pub omega: f64,
    /// The agent's local Lyapunov value. `None` when skipped.
    pub value: Option<f64>,
    /// Voronoi-neighbor IDs this tick, in roster order. Empty when the
    /// agent's cell degenerated.
    pub neighbors: Neighbors,
}

/// Everything observed during one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickRecord {
    /// The tick number, starting at 1.
    pub tick: TickId,
    /// Per-agent state in roster order.
    pub agents: Vec<AgentRecord>,
    /// Aggregate barrier-Lyapunov value (sum over non-skipped agents).
    pub blf: f64,
    /// Agents skipped this tick for degenerate geometry.
    pub skipped: Vec<AgentId>,
}

/// Cumulative counters over a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Ticks executed so far.
    pub ticks: u64,
    /// Total degenerate-cell skips across all agents and ticks.
    pub degenerate_skips: u64,
    /// Gradient messages published on the link (zero in centralized
    /// mode).
    pub messages_published: u64,
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The aggregate Lyapunov value fell below the configured
    /// convergence threshold.
    Converged {
        /// The tick on which convergence was detected.
        tick: TickId,
    },
    /// The tick budget was exhausted without convergence.
    BudgetExhausted,
}

/// Result of a completed (non-aborted) run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Why the run ended.
    pub outcome: RunOutcome,
    /// Cumulative counters at the end of the run.
    pub metrics: RunMetrics,
    /// Every tick's record, in order.
    pub history: Vec<TickRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = RunMetrics::default();
        assert_eq!(m.ticks, 0);
        assert_eq!(m.degenerate_skips, 0);
        assert_eq!(m.messages_published, 0);
    }
}
