//! Build fully-initialized simulators from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime
//! [`Simulator`]: validated bodies at t = 0, numerical parameters, softened
//! gravity, chaos tracking of the configured pair, and ring buffers at the
//! configured capacities. Center-of-mass normalization happens inside
//! [`Simulator::new`].
//!
//! Also provides the canonical three-body preset: a solar-mass primary with
//! two light companions on fast triangular orbits, a configuration known to
//! go chaotic.

use crate::configuration::config::{ScenarioConfig, ConfigError};
use crate::simulation::engine::Simulator;
use crate::simulation::params::{Parameters, DEFAULT_SOFTENING, G_SCALED};
use crate::simulation::states::{Body, NVec2, System};

/// Validate `cfg` and build the runtime simulator from it.
/// Configuration errors surface immediately; nothing is partially built.
pub fn build_simulator(cfg: ScenarioConfig) -> Result<Simulator, ConfigError> {
    cfg.validate()?;

    let bodies: Vec<Body> = cfg
        .bodies
        .iter()
        .map(|bc| Body {
            x: NVec2::new(bc.x[0], bc.x[1]),
            v: NVec2::new(bc.v[0], bc.v[1]),
            m: bc.m,
        })
        .collect();

    let system = System { bodies, t: 0.0 };

    let p_cfg = &cfg.parameters;
    let eps = p_cfg.eps.unwrap_or(DEFAULT_SOFTENING);
    let defaults = Parameters::default();
    let parameters = Parameters {
        h0: p_cfg.h0,
        eps2: eps * eps,
        g: p_cfg.g.unwrap_or(G_SCALED),
        trail_capacity: p_cfg.trail_capacity.unwrap_or(defaults.trail_capacity),
        chaos_capacity: p_cfg.chaos_capacity.unwrap_or(defaults.chaos_capacity),
    };

    let pair = cfg.tracked_pair.unwrap_or([1, 2]);

    Ok(Simulator::new(system, parameters, (pair[0], pair[1])))
}

/// The canonical chaotic three-body preset.
///
/// Masses 1.0 / 0.1 / 0.05 solar masses in a triangle, with velocities
/// scaled by sqrt(G * M / D) for M = 1 solar mass and D = 1 AU so the
/// light bodies start on fast bound orbits. The tracked pair for chaos
/// diagnostics is the two companions (1, 2).
pub fn canonical_scenario() -> Simulator {
    let v_unit = G_SCALED.sqrt(); // sqrt(G M / D) in AU/day, M = D = 1

    let bodies = vec![
        Body {
            x: NVec2::new(0.0, 0.0),
            v: NVec2::new(0.0, 1.0) * v_unit,
            m: 1.0,
        },
        Body {
            x: NVec2::new(1.5, 0.0),
            v: NVec2::new(0.0, -3.0) * v_unit,
            m: 0.1,
        },
        Body {
            x: NVec2::new(0.75, 1.3),
            v: NVec2::new(-2.5, 1.5) * v_unit,
            m: 0.05,
        },
    ];

    let system = System { bodies, t: 0.0 };
    Simulator::new(system, Parameters::default(), (1, 2))
}
