//! Simulation driver owning the system state and its diagnostics
//!
//! `Simulator` is the single owner of the mutable [`System`]; every call to
//! [`Simulator::advance`] performs exactly one RK4 step, one chaos-analysis
//! update and one trajectory append, followed by a finiteness sweep.
//! External consumers only ever receive deep copies through the query
//! methods, never references into the live state.

use super::chaos::{ChaosAnalyzer, ChaosLevel, ChaosRecord};
use super::energy::total_energy;
use super::forces::{AccelSet, NewtonianGravity};
use super::integrator::rk4_integrator;
use super::params::Parameters;
use super::states::{NVec2, Snapshot, System};
use super::trajectory::TrajectoryBuffer;

pub struct Simulator {
    system: System,
    forces: AccelSet,
    parameters: Parameters,
    chaos: ChaosAnalyzer,
    trails: TrajectoryBuffer,
    initial_energy: f64,
    unstable: bool, // latched once any state component goes non-finite
}

impl Simulator {
    /// Build a simulator around an already-validated system. The barycenter
    /// is normalized here, once; the chaos analyzer captures its reference
    /// separation from the recentered state.
    pub fn new(mut system: System, parameters: Parameters, tracked_pair: (usize, usize)) -> Self {
        system.recenter();

        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            eps2: parameters.eps2,
        });

        let chaos = ChaosAnalyzer::new(&system, tracked_pair, parameters.chaos_capacity);
        let trails = TrajectoryBuffer::new(system.bodies.len(), parameters.trail_capacity);
        let initial_energy = total_energy(&system, parameters.g);

        Self {
            system,
            forces,
            parameters,
            chaos,
            trails,
            initial_energy,
            unstable: false,
        }
    }

    /// Advance by one fixed time step. No step ever "fails": numerical
    /// blow-up is latched into the instability flag instead of raised.
    pub fn advance(&mut self) {
        rk4_integrator(&mut self.system, &self.forces, &self.parameters);
        self.trails.record(&self.system);
        self.chaos.record(&self.system);
        if !self.system.is_finite() {
            self.unstable = true;
        }
    }

    /// Deep copy of positions, velocities and time.
    pub fn snapshot(&self) -> Snapshot {
        self.system.snapshot()
    }

    /// Total energy (kinetic + exact-distance potential) of the current state.
    pub fn energy(&self) -> f64 {
        total_energy(&self.system, self.parameters.g)
    }

    /// Relative energy drift |E(t) - E(0)| / |E(0)| since construction.
    pub fn energy_drift(&self) -> f64 {
        (self.energy() - self.initial_energy).abs() / self.initial_energy.abs()
    }

    /// Ordered chaos records, oldest first (deep copy).
    pub fn chaos_series(&self) -> Vec<ChaosRecord> {
        self.chaos.series().copied().collect()
    }

    pub fn latest_chaos(&self) -> Option<ChaosRecord> {
        self.chaos.latest().copied()
    }

    pub fn chaos_level(&self) -> ChaosLevel {
        self.chaos.level()
    }

    /// Per-body retained position histories, oldest first (deep copy).
    pub fn trajectories(&self) -> Vec<Vec<NVec2>> {
        self.trails.trails()
    }

    pub fn masses(&self) -> Vec<f64> {
        self.system.bodies.iter().map(|b| b.m).collect()
    }

    /// Elapsed simulated time in days.
    pub fn time(&self) -> f64 {
        self.system.t
    }

    pub fn time_years(&self) -> f64 {
        self.system.t / super::params::DAYS_PER_YEAR
    }

    /// True once any position or velocity component has gone NaN/inf.
    /// Surfaced as a data-quality condition, never as an error.
    pub fn is_numerically_unstable(&self) -> bool {
        self.unstable
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}
