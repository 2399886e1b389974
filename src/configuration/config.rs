//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario plus its fail-fast validation:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario
//! - [`ConfigError`]      – construction-time rejections
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   h0: 100.0             # fixed step size (days)
//!   eps: 1.0e-4           # softening length (AU); defaults to 1e-4
//!   # g: 2.96e-4          # override G in AU^3/(Msun day^2); defaults to G_SCALED
//!   trail_capacity: 500   # retained trail positions per body
//!   chaos_capacity: 1000  # retained chaos records
//!
//! tracked_pair: [1, 2]    # bodies whose separation drives chaos analysis
//!
//! bodies:
//!   - x: [ 0.0,  0.0 ]    # position (AU)
//!     v: [ 0.0,  0.017 ]  # velocity (AU/day)
//!     m: 1.0              # mass (solar masses)
//!   - x: [ 1.5,  0.0 ]
//!     v: [ 0.0, -0.052 ]
//!     m: 0.1
//!   - x: [ 0.75, 1.3 ]
//!     v: [ -0.043, 0.026 ]
//!     m: 0.05
//! ```
//!
//! Exactly three bodies are required; the core is fixed at the three-body
//! problem even though the state types generalize.

use serde::Deserialize;
use thiserror::Error;

/// Number of bodies the engine is fixed to.
pub const BODY_COUNT: usize = 3;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub h0: f64,                       // step size (days)
    pub eps: Option<f64>,              // softening length (AU)
    pub g: Option<f64>,                // gravitational constant override
    pub trail_capacity: Option<usize>, // trail ring capacity per body
    pub chaos_capacity: Option<usize>, // chaos ring capacity
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position (AU)
    pub v: Vec<f64>, // initial velocity (AU/day)
    pub m: f64,      // mass (solar masses)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
    pub tracked_pair: Option<[usize; 2]>, // defaults to the two companions [1, 2]
}

/// Construction-time rejections; none of these are recoverable internally.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("expected exactly {BODY_COUNT} bodies, got {0}")]
    BodyCount(usize),

    #[error("body {index}: mass must be positive, got {mass}")]
    NonPositiveMass { index: usize, mass: f64 },

    #[error("body {index}: expected 2 components for {field}, got {len}")]
    ComponentCount {
        index: usize,
        field: &'static str,
        len: usize,
    },

    #[error("step size h0 must be positive, got {0}")]
    NonPositiveStep(f64),

    #[error("tracked pair must be two distinct indices below {BODY_COUNT}, got [{0}, {1}]")]
    InvalidTrackedPair(usize, usize),
}

impl ScenarioConfig {
    /// Fail-fast structural validation, run before any state is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bodies.len() != BODY_COUNT {
            return Err(ConfigError::BodyCount(self.bodies.len()));
        }
        for (index, body) in self.bodies.iter().enumerate() {
            if body.m <= 0.0 {
                return Err(ConfigError::NonPositiveMass {
                    index,
                    mass: body.m,
                });
            }
            if body.x.len() != 2 {
                return Err(ConfigError::ComponentCount {
                    index,
                    field: "x",
                    len: body.x.len(),
                });
            }
            if body.v.len() != 2 {
                return Err(ConfigError::ComponentCount {
                    index,
                    field: "v",
                    len: body.v.len(),
                });
            }
        }
        if self.parameters.h0 <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.parameters.h0));
        }
        if let Some([a, b]) = self.tracked_pair {
            if a == b || a >= BODY_COUNT || b >= BODY_COUNT {
                return Err(ConfigError::InvalidTrackedPair(a, b));
            }
        }
        Ok(())
    }
}
