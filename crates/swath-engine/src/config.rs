//! Run configuration, validation, and construction-time errors.

use std::error::Error;
use std::fmt;

use indexmap::IndexSet;
use swath_control::agent::virtual_center;
use swath_control::{ControlError, ControlGains};
use swath_core::{AgentId, Pose};
use swath_geometry::Region;

// ── Mode ───────────────────────────────────────────────────────────

/// Gradient data-routing mode.
///
/// The geometry, gradients, and control law are identical in both
/// modes; only the path cross-gradients travel between agents differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Cross-gradients are routed directly inside the orchestrator.
    Centralized,
    /// Cross-gradients travel through the communication link, one
    /// publish per agent per tick.
    Decentralized,
}

// ── AgentConfig ────────────────────────────────────────────────────

/// Initial state and motion constants for one agent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentConfig {
    /// Stable identity, unique within a run.
    pub id: AgentId,
    /// Initial pose.
    pub pose: Pose,
    /// Constant linear speed. Positive.
    pub v: f64,
    /// Nominal orbital rate. Non-zero.
    pub w0: f64,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// No agents configured.
    NoAgents,
    /// Two agents share the same ID.
    DuplicateAgentId {
        /// The repeated ID.
        id: AgentId,
    },
    /// An agent's parameters failed validation.
    Agent(ControlError),
    /// `dt` is NaN, infinite, zero, or negative.
    InvalidTimestep {
        /// The invalid value.
        value: f64,
    },
    /// `max_ticks` is zero.
    ZeroTickBudget,
    /// `max_degenerate_ticks` is zero.
    ZeroDegenerateBudget,
    /// A control gain violated its invariant.
    InvalidGains {
        /// Description of which invariant was violated.
        reason: String,
    },
    /// An agent's initial virtual center is not strictly inside the
    /// region: the barrier is undefined there, so the run could never
    /// start.
    InfeasibleStart {
        /// The offending agent.
        id: AgentId,
        /// Index of the violated region constraint.
        constraint: usize,
        /// The margin observed.
        margin: f64,
    },
    /// `convergence_threshold` is NaN, infinite, or negative.
    InvalidThreshold {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAgents => write!(f, "no agents configured"),
            Self::DuplicateAgentId { id } => write!(f, "agent id {id} appears more than once"),
            Self::Agent(e) => write!(f, "agent: {e}"),
            Self::InvalidTimestep { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::ZeroTickBudget => write!(f, "max_ticks must be at least 1"),
            Self::ZeroDegenerateBudget => write!(f, "max_degenerate_ticks must be at least 1"),
            Self::InvalidGains { reason } => write!(f, "invalid gains: {reason}"),
            Self::InfeasibleStart {
                id,
                constraint,
                margin,
            } => write!(
                f,
                "agent {id} starts with virtual center violating region constraint {constraint} \
                 (margin {margin:.6e})"
            ),
            Self::InvalidThreshold { value } => {
                write!(
                    f,
                    "convergence_threshold must be finite and non-negative, got {value}"
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Agent(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ControlError> for ConfigError {
    fn from(e: ControlError) -> Self {
        Self::Agent(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for one coverage run.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// The shared convex coverage region.
    pub region: Region,
    /// The agent roster. At least one; IDs unique.
    pub agents: Vec<AgentConfig>,
    /// Simulation timestep in seconds. Default: 0.01.
    pub dt: f64,
    /// Tick budget for [`run`](crate::CoverageWorld::run). Default: 5000.
    pub max_ticks: u64,
    /// Control-law gains and tolerances.
    pub gains: ControlGains,
    /// Gradient routing mode. Default: [`Mode::Decentralized`].
    pub mode: Mode,
    /// When set, a tick whose aggregate Lyapunov value falls below this
    /// value ends the run as converged. `None` runs the full budget.
    pub convergence_threshold: Option<f64>,
    /// Consecutive degenerate-cell skips tolerated per agent before the
    /// run aborts. Default: 10.
    pub max_degenerate_ticks: u32,
}

impl SimConfig {
    /// Configuration with default timestep, budget, gains, and mode.
    pub fn new(region: Region, agents: Vec<AgentConfig>) -> Self {
        Self {
            region,
            agents,
            dt: 0.01,
            max_ticks: 5000,
            gains: ControlGains::default(),
            mode: Mode::Decentralized,
            convergence_threshold: None,
            max_degenerate_ticks: 10,
        }
    }

    /// Validate all structural invariants.
    ///
    /// Checks the roster, the numeric parameters, the gains, and that
    /// every agent's initial virtual center is strictly feasible (with
    /// the configured margin slack). The world constructor calls this
    /// before building any state.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.agents.is_empty() {
            return Err(ConfigError::NoAgents);
        }
        let mut seen = IndexSet::with_capacity(self.agents.len());
        for a in &self.agents {
            if !seen.insert(a.id) {
                return Err(ConfigError::DuplicateAgentId { id: a.id });
            }
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidTimestep { value: self.dt });
        }
        if self.max_ticks == 0 {
            return Err(ConfigError::ZeroTickBudget);
        }
        if self.max_degenerate_ticks == 0 {
            return Err(ConfigError::ZeroDegenerateBudget);
        }
        self.gains
            .validate()
            .map_err(|reason| ConfigError::InvalidGains { reason })?;
        if let Some(t) = self.convergence_threshold {
            if !t.is_finite() || t < 0.0 {
                return Err(ConfigError::InvalidThreshold { value: t });
            }
        }
        for a in &self.agents {
            // Parameter validation mirrors Agent::new exactly.
            if !a.pose.is_finite() || !a.v.is_finite() || a.v <= 0.0 {
                return Err(ConfigError::Agent(ControlError::InvalidParameter {
                    reason: format!("agent {}: invalid pose or speed", a.id),
                }));
            }
            if !a.w0.is_finite() || a.w0 == 0.0 {
                return Err(ConfigError::Agent(ControlError::InvalidParameter {
                    reason: format!("agent {}: orbital rate must be non-zero", a.id),
                }));
            }
            let z = virtual_center(a.pose, a.v, a.w0);
            let (constraint, margin) = self.region.min_margin(z);
            if margin <= self.gains.margin_tol {
                return Err(ConfigError::InfeasibleStart {
                    id: a.id,
                    constraint,
                    margin,
                });
            }
        }
        Ok(())
    }
}
