//! Total energy bookkeeping for conservation checks
//!
//! Pure functions of the current state; nothing here mutates the system.
//! Potential energy uses the exact pairwise distance, never the softened
//! one, so conservation checks are not biased by the force softening.

use super::states::System;

/// Kinetic energy: sum of (1/2) m |v|^2 over all bodies.
pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum()
}

/// Potential energy: sum over unordered pairs of -g m_i m_j / |r_ij|,
/// with the exact (unsoftened) separation.
pub fn potential_energy(sys: &System, g: f64) -> f64 {
    let n = sys.bodies.len();
    let mut potential = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let r = (sys.bodies[j].x - sys.bodies[i].x).norm();
            potential -= g * sys.bodies[i].m * sys.bodies[j].m / r;
        }
    }
    potential
}

/// Total energy, kinetic plus potential.
pub fn total_energy(sys: &System, g: f64) -> f64 {
    kinetic_energy(sys) + potential_energy(sys, g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::{Body, NVec2};

    fn pair(dist: f64) -> System {
        System {
            bodies: vec![
                Body {
                    x: NVec2::new(0.0, 0.0),
                    v: NVec2::new(0.0, 0.5),
                    m: 2.0,
                },
                Body {
                    x: NVec2::new(dist, 0.0),
                    v: NVec2::zeros(),
                    m: 3.0,
                },
            ],
            t: 0.0,
        }
    }

    #[test]
    fn two_body_energy_by_hand() {
        let sys = pair(2.0);
        let g = 0.1;
        // kinetic: 0.5 * 2.0 * 0.25 = 0.25
        // potential: -0.1 * 2 * 3 / 2 = -0.3
        assert!((kinetic_energy(&sys) - 0.25).abs() < 1e-12);
        assert!((potential_energy(&sys, g) + 0.3).abs() < 1e-12);
        assert!((total_energy(&sys, g) + 0.05).abs() < 1e-12);
    }

    #[test]
    fn potential_uses_exact_distance() {
        // The energy functional must not see any softening: at separation d
        // the potential is exactly -g m1 m2 / d no matter how close d is.
        let d = 1e-6;
        let sys = pair(d);
        let expected = -0.1 * 2.0 * 3.0 / d;
        assert!((potential_energy(&sys, 0.1) - expected).abs() / expected.abs() < 1e-12);
    }
}
