//! The coverage world: agent ownership and the three-phase tick loop.

use crate::config::{Mode, SimConfig};
use crate::error::TickError;
use crate::record::{AgentRecord, RunMetrics, RunOutcome, RunSummary, TickRecord};
use swath_control::{
    control_rate, evaluate_local, Agent, ControlError, ControlGains, Integrator, LocalGradients,
    Unicycle,
};
use swath_core::{Neighbors, TickId, Vec2};
use swath_geometry::{GeometryError, Partition, Region};
use swath_gradient::CvtReport;
use swath_link::{CommLink, Outbound};

/// The orchestrator: owns every agent, the region, the link, and the
/// tick counter.
///
/// Each tick runs three strict phases:
/// 1. movement: integrate every pose under its commanded rate and
///    refresh the virtual centers;
/// 2. partition/publish: tessellate all virtual centers, compute each
///    agent's CVT report and local gradients, and route every
///    cross-gradient (through the link in decentralized mode, directly
///    in centralized mode) before anything is consumed;
/// 3. control: aggregate each agent's own gradient with the received
///    cross-gradients and command the new angular rate.
///
/// A degenerate cell skips that agent's control for the tick and holds
/// its previous command; the skip streak escalates to a fatal error
/// once it exceeds the configured budget.
pub struct CoverageWorld {
    region: Region,
    gains: ControlGains,
    dt: f64,
    mode: Mode,
    max_ticks: u64,
    convergence_threshold: Option<f64>,
    max_degenerate_ticks: u32,
    agents: Vec<Agent>,
    link: CommLink,
    integrator: Box<dyn Integrator>,
    tick: u64,
    streaks: Vec<u32>,
    metrics: RunMetrics,
}

impl CoverageWorld {
    /// Build a world with the default forward-Euler unicycle
    /// integrator.
    ///
    /// # Errors
    ///
    /// Any [`crate::ConfigError`] from [`SimConfig::validate`].
    pub fn new(config: SimConfig) -> Result<Self, crate::ConfigError> {
        Self::with_integrator(config, Box::new(Unicycle))
    }

    /// Build a world with a caller-supplied pose integrator.
    pub fn with_integrator(
        config: SimConfig,
        integrator: Box<dyn Integrator>,
    ) -> Result<Self, crate::ConfigError> {
        config.validate()?;
        let mut agents = Vec::with_capacity(config.agents.len());
        for a in &config.agents {
            agents.push(Agent::new(a.id, a.pose, a.v, a.w0)?);
        }
        let link = CommLink::new(agents.iter().map(Agent::id));
        let streaks = vec![0; agents.len()];
        Ok(Self {
            region: config.region,
            gains: config.gains,
            dt: config.dt,
            mode: config.mode,
            max_ticks: config.max_ticks,
            convergence_threshold: config.convergence_threshold,
            max_degenerate_ticks: config.max_degenerate_ticks,
            agents,
            link,
            integrator,
            tick: 0,
            streaks,
            metrics: RunMetrics::default(),
        })
    }

    /// The last completed tick (zero before the first step).
    pub fn tick(&self) -> TickId {
        TickId(self.tick)
    }

    /// The agent roster in configuration order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// The shared coverage region.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Cumulative run counters.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Execute one tick.
    ///
    /// # Errors
    ///
    /// Any fatal [`TickError`]; see the type docs for the taxonomy. The
    /// world should be discarded after an error (the tick was left
    /// partially applied).
    pub fn step(&mut self) -> Result<TickRecord, TickError> {
        self.tick += 1;
        let tick = TickId(self.tick);
        let n = self.agents.len();

        // Phase 1: movement.
        for agent in &mut self.agents {
            agent.integrate(self.integrator.as_ref(), self.dt);
        }

        // Phase 2: partition, gradients, publish.
        let centers: Vec<Vec2> = self.agents.iter().map(Agent::center).collect();
        let partition = Partition::compute(&centers, &self.region)
            .map_err(|source| TickError::Geometry { tick, source })?;

        let mut reports: Vec<Option<CvtReport>> = Vec::with_capacity(n);
        let mut locals: Vec<Option<LocalGradients>> = Vec::with_capacity(n);
        let mut skipped = Vec::new();
        for i in 0..n {
            let agent = self.agents[i].id();
            match CvtReport::compute(&partition, i) {
                Ok(report) => {
                    self.streaks[i] = 0;
                    match evaluate_local(&report, self.region.half_planes(), &self.gains) {
                        Ok(g) => {
                            reports.push(Some(report));
                            locals.push(Some(g));
                        }
                        Err(ControlError::InfeasibleState { constraint, margin }) => {
                            return Err(TickError::Infeasible {
                                agent,
                                tick,
                                constraint,
                                margin,
                            });
                        }
                        Err(source) => return Err(TickError::Control { agent, tick, source }),
                    }
                }
                Err(GeometryError::DegenerateCell { .. }) => {
                    self.streaks[i] += 1;
                    self.metrics.degenerate_skips += 1;
                    if self.streaks[i] > self.max_degenerate_ticks {
                        return Err(TickError::PersistentDegeneracy {
                            agent,
                            tick,
                            consecutive: self.streaks[i],
                        });
                    }
                    skipped.push(agent);
                    reports.push(None);
                    locals.push(None);
                }
                Err(source) => return Err(TickError::Geometry { tick, source }),
            }
        }

        // Each agent starts from its own gradient; cross contributions
        // are added below. Skipped agents keep a zero they never use.
        let mut totals: Vec<Vec2> = locals
            .iter()
            .map(|g| g.as_ref().map_or(Vec2::ZERO, |g| g.own))
            .collect();

        match self.mode {
            Mode::Decentralized => {
                // Publish pass: every agent's outbox lands on the link
                // before any fetch. A skipped agent publishes an empty
                // outbox, clearing its stale messages.
                for i in 0..n {
                    let sender = self.agents[i].id();
                    let outbox: Vec<Outbound> = match (&reports[i], &locals[i]) {
                        (Some(report), Some(g)) => report
                            .neighbors
                            .iter()
                            .zip(&g.cross)
                            .map(|(ng, &(j, dv_dz))| Outbound {
                                receiver: self.agents[j].id(),
                                dv_dz,
                                dc_dz: ng.cross,
                            })
                            .collect(),
                        _ => Vec::new(),
                    };
                    self.link
                        .publish(sender, &outbox)
                        .map_err(|source| TickError::Link { tick, source })?;
                    self.metrics.messages_published += outbox.len() as u64;
                }
                // Consume pass: every non-skipped Voronoi-neighbor must
                // have addressed this agent.
                for i in 0..n {
                    if locals[i].is_none() {
                        continue;
                    }
                    let receiver = self.agents[i].id();
                    for edge in partition.neighbors(i) {
                        if locals[edge.neighbor].is_none() {
                            continue;
                        }
                        let sender = self.agents[edge.neighbor].id();
                        let fetched = self
                            .link
                            .fetch_from(sender, receiver)
                            .map_err(|source| TickError::Link { tick, source })?;
                        match fetched {
                            Some(m) => totals[i] += m.dv_dz,
                            None => {
                                return Err(TickError::MissingNeighborData {
                                    agent: receiver,
                                    neighbor: sender,
                                    tick,
                                });
                            }
                        }
                    }
                }
            }
            Mode::Centralized => {
                for g in locals.iter().flatten() {
                    for &(j, dv_dz) in &g.cross {
                        totals[j] += dv_dz;
                    }
                }
            }
        }

        // Phase 3: control. Skipped agents hold their previous command.
        for i in 0..n {
            if locals[i].is_some() {
                let heading = self.agents[i].pose().heading();
                let w = control_rate(self.agents[i].w0(), heading, totals[i], &self.gains);
                self.agents[i].set_omega(w);
            }
        }

        let mut blf = 0.0;
        let mut agent_records = Vec::with_capacity(n);
        for i in 0..n {
            let (target, value) = match (&reports[i], &locals[i]) {
                (Some(r), Some(g)) => {
                    blf += g.value;
                    (Some(r.centroid), Some(g.value))
                }
                _ => (None, None),
            };
            let neighbors: Neighbors = partition
                .neighbors(i)
                .iter()
                .map(|e| self.agents[e.neighbor].id())
                .collect();
            let a = &self.agents[i];
            agent_records.push(AgentRecord {
                id: a.id(),
                pose: a.pose(),
                center: a.center(),
                target,
                omega: a.omega(),
                value,
                neighbors,
            });
        }
        self.metrics.ticks += 1;

        Ok(TickRecord {
            tick,
            agents: agent_records,
            blf,
            skipped,
        })
    }

    /// Step until convergence, budget exhaustion, or a fatal error.
    ///
    /// Convergence requires a tick with no skipped agents whose
    /// aggregate Lyapunov value falls below the configured threshold;
    /// with no threshold configured the run always uses the full
    /// budget.
    ///
    /// # Errors
    ///
    /// The first fatal [`TickError`]; records from completed ticks are
    /// discarded in that case.
    pub fn run(&mut self) -> Result<RunSummary, TickError> {
        let mut history = Vec::new();
        while self.tick < self.max_ticks {
            let record = self.step()?;
            let converged = record.skipped.is_empty()
                && self
                    .convergence_threshold
                    .map_or(false, |t| record.blf < t);
            let tick = record.tick;
            history.push(record);
            if converged {
                return Ok(RunSummary {
                    outcome: RunOutcome::Converged { tick },
                    metrics: self.metrics.clone(),
                    history,
                });
            }
        }
        Ok(RunSummary {
            outcome: RunOutcome::BudgetExhausted,
            metrics: self.metrics.clone(),
            history,
        })
    }
}
