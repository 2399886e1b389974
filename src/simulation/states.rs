//! Core state types for the three-body simulation.
//!
//! Defines the body/system structs using `NVec2` (nalgebra `Vector2<f64>`):
//! - `Body`   – mass plus mutable position/velocity
//! - `System` – the ordered body collection and the current simulation time `t`
//! - `Snapshot` – a deep copy of the kinematic state handed to renderers
//!
//! `System::recenter` removes the barycenter position and net momentum once
//! at initialization; integration is then free to let small drift accumulate,
//! which is itself a diagnostic signal.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position (AU)
    pub v: NVec2, // velocity (AU/day)
    pub m: f64,   // mass (solar masses), immutable after construction
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection, identity is the index
    pub t: f64,            // elapsed simulated time (days)
}

impl System {
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    /// Mass-weighted mean position: sum(m_i x_i) / M
    pub fn center_of_mass(&self) -> NVec2 {
        let m = self.total_mass();
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.m * b.x)
            / m
    }

    /// Total linear momentum: sum(m_i v_i)
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.m * b.v)
    }

    /// Shift all positions and velocities so the barycenter sits at the
    /// origin with zero net momentum. Called once at construction.
    pub fn recenter(&mut self) {
        let com_x = self.center_of_mass();
        let com_v = self.total_momentum() / self.total_mass();
        for b in self.bodies.iter_mut() {
            b.x -= com_x;
            b.v -= com_v;
        }
    }

    /// Deep-copy the kinematic state for external consumers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            positions: self.bodies.iter().map(|b| b.x).collect(),
            velocities: self.bodies.iter().map(|b| b.v).collect(),
            t: self.t,
        }
    }

    /// True when every position and velocity component is finite.
    pub fn is_finite(&self) -> bool {
        self.bodies.iter().all(|b| {
            b.x.iter().all(|c| c.is_finite()) && b.v.iter().all(|c| c.is_finite())
        })
    }
}

/// Read-only copy of positions, velocities and time at one instant.
/// Holds values, never references into the live system.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub positions: Vec<NVec2>,
    pub velocities: Vec<NVec2>,
    pub t: f64, // days
}

impl Snapshot {
    pub fn is_finite(&self) -> bool {
        self.positions
            .iter()
            .chain(self.velocities.iter())
            .all(|p| p.iter().all(|c| c.is_finite()))
    }
}
