//! Feasibility guard under nominal gains: randomized placements stay
//! strictly inside the region for the whole run.

use proptest::prelude::*;
use swath_core::{AgentId, Pose};
use swath_engine::{AgentConfig, CoverageWorld, Mode, SimConfig};
use swath_test_utils::square;

fn agent(k: u32, x: f64, y: f64, theta: f64) -> AgentConfig {
    AgentConfig {
        id: AgentId(k),
        pose: Pose::new(x, y, theta),
        v: 1.0,
        w0: 1.2,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Four agents jittered inside separate quadrants, arbitrary
    /// headings: 200 ticks under default gains never violate the
    /// barrier and never degenerate.
    #[test]
    fn quadrant_placements_stay_feasible(
        x0 in 20.0f64..45.0, y0 in 20.0f64..45.0, t0 in 0.0f64..6.28,
        x1 in 55.0f64..80.0, y1 in 20.0f64..45.0, t1 in 0.0f64..6.28,
        x2 in 20.0f64..45.0, y2 in 55.0f64..80.0, t2 in 0.0f64..6.28,
        x3 in 55.0f64..80.0, y3 in 55.0f64..80.0, t3 in 0.0f64..6.28,
    ) {
        let agents = vec![
            agent(0, x0, y0, t0),
            agent(1, x1, y1, t1),
            agent(2, x2, y2, t2),
            agent(3, x3, y3, t3),
        ];
        let mut cfg = SimConfig::new(square(100.0), agents);
        cfg.mode = Mode::Decentralized;
        let mut world = CoverageWorld::new(cfg).unwrap();

        let region = square(100.0);
        for _ in 0..200 {
            let record = world.step().unwrap();
            prop_assert!(record.skipped.is_empty());
            for a in &record.agents {
                let (_, margin) = region.min_margin(a.center);
                prop_assert!(margin > 0.0);
            }
        }
    }
}
