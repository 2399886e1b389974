pub mod simulation;
pub mod configuration;

pub use simulation::states::{Body, System, Snapshot, NVec2};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::rk4_integrator;
pub use simulation::energy::{kinetic_energy, potential_energy, total_energy};
pub use simulation::chaos::{ChaosAnalyzer, ChaosLevel, ChaosRecord};
pub use simulation::trajectory::TrajectoryBuffer;
pub use simulation::engine::Simulator;
pub use simulation::params::{Parameters, DAYS_PER_YEAR, DEFAULT_SOFTENING, G_SCALED};
pub use simulation::scenario::{build_simulator, canonical_scenario};

pub use configuration::config::{BodyConfig, ConfigError, ParametersConfig, ScenarioConfig};
