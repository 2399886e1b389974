//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size `h0` (days),
//! - softening and gravitational constant (`eps2`, `g`),
//! - ring-buffer capacities for trails and chaos records
//!
//! Also defines the unit system: masses in solar masses, distances in
//! astronomical units, time in days. `G_SCALED` is the gravitational
//! constant rescaled into these units so that positions, velocities and
//! accelerations stay well-conditioned in double precision.

/// Gravitational constant in SI units (m^3 / kg s^2)
pub const G_SI: f64 = 6.67430e-11;
/// One astronomical unit in meters
pub const AU: f64 = 1.496e11;
/// One solar mass in kilograms
pub const SOLAR_MASS: f64 = 1.989e30;
/// One day in seconds
pub const DAY: f64 = 86_400.0;
/// Days per Julian year, used when reporting times in years
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Gravitational constant in AU^3 / (solar mass * day^2), approx 2.96e-4
pub const G_SCALED: f64 = G_SI * SOLAR_MASS * DAY * DAY / (AU * AU * AU);

/// Default softening length: 1e-4 of the distance scale (AU)
pub const DEFAULT_SOFTENING: f64 = 1.0e-4;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64,   // step size (days)
    pub eps2: f64, // softening epsilon^2 (AU^2)
    pub g: f64,    // gravitational constant in simulation units
    pub trail_capacity: usize, // retained positions per body
    pub chaos_capacity: usize, // retained chaos records
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            h0: 100.0,
            eps2: DEFAULT_SOFTENING * DEFAULT_SOFTENING,
            g: G_SCALED,
            trail_capacity: 500,
            chaos_capacity: 1000,
        }
    }
}
