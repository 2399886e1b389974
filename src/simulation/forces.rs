//! Force / acceleration contributors for the three-body engine
//!
//! Defines the 2D acceleration trait and direct softened Newtonian gravity.
//! Softening applies to force evaluation only; the energy functional in
//! [`crate::simulation::energy`] uses exact pairwise distances.

use crate::simulation::states::{NVec2, System};

/// Collection of 2D acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for 2D acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Direct pairwise Newtonian gravity with softening
///
/// `eps2` is the square of the softening length; it bounds the force
/// magnitude near coincidence so that even two bodies at identical
/// positions produce a finite acceleration.
pub struct NewtonianGravity {
    pub g: f64,    // gravitational constant in simulation units
    pub eps2: f64, // softening epsilon^2
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 {
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x;
            let mi = bi.m;

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // Displacement from i to j: i feels a pull along +r,
                // j feels a pull along -r
                let r = bj.x - xi;

                // Softened squared distance: d2 = |r|^2 + eps^2
                let d2 = r.dot(&r) + self.eps2;

                // 1 / |r_soft|^3, the distance factor in a = G m r / d^3
                let inv_r = d2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;

                let coef = self.g * inv_r3;

                // Newton's third law: equal and opposite contributions
                out[i] += coef * bj.m * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
