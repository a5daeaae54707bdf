//! Benchmark profiles for the Swath coverage-control engine.
//!
//! Provides pre-built [`SimConfig`] profiles:
//!
//! - [`reference_profile`]: 8 agents on a ring in a 100×100 square
//! - [`stress_profile`]: 64 agents on a jittered grid in the same square

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use swath_core::{AgentId, Pose, Vec2};
use swath_engine::{AgentConfig, Mode, SimConfig};
use swath_geometry::Region;

fn square_100() -> Region {
    Region::rectangle(0.0, 0.0, 100.0, 100.0).expect("fixed square is a valid region")
}

fn ring_agents(n: usize, center: Vec2, radius: f64) -> Vec<AgentConfig> {
    (0..n)
        .map(|k| {
            let phi = 2.0 * std::f64::consts::PI * (k as f64) / (n as f64);
            AgentConfig {
                id: AgentId(k as u32),
                pose: Pose::new(
                    center.x + radius * phi.cos(),
                    center.y + radius * phi.sin(),
                    phi + std::f64::consts::FRAC_PI_2,
                ),
                v: 1.0,
                w0: 1.2,
            }
        })
        .collect()
}

/// Reference profile: 8 agents bunched on a radius-15 ring at the
/// center of a 100×100 square, decentralized routing.
pub fn reference_profile() -> SimConfig {
    let mut cfg = SimConfig::new(square_100(), ring_agents(8, Vec2::new(50.0, 50.0), 15.0));
    cfg.mode = Mode::Decentralized;
    cfg
}

/// Stress profile: 64 agents on a deterministic 8×8 staggered grid in
/// the 100×100 square.
pub fn stress_profile() -> SimConfig {
    let mut agents = Vec::with_capacity(64);
    for i in 0..8u32 {
        for j in 0..8u32 {
            // Stagger alternate rows so no four generators are ever
            // concyclic on a grid point.
            let offset = if j % 2 == 0 { 0.0 } else { 2.5 };
            agents.push(AgentConfig {
                id: AgentId(i * 8 + j),
                pose: Pose::new(
                    8.0 + f64::from(i) * 12.0 + offset,
                    8.0 + f64::from(j) * 12.0,
                    f64::from(i * 8 + j) * 0.7,
                ),
                v: 1.0,
                w0: 1.2,
            });
        }
    }
    let mut cfg = SimConfig::new(square_100(), agents);
    cfg.mode = Mode::Decentralized;
    cfg
}
