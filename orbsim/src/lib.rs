pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;
pub mod logging;

pub use simulation::states::{State, NVec2};
pub use simulation::params::{Parameters, AccelerationMode, IntegrationScheme, MAX_STEPS};
pub use simulation::forces::{Acceleration, AccelSet, CentralGravity, FixedRadiusGravity};
pub use simulation::integrator::{symplectic_euler_step, explicit_euler_step, integrate};
pub use simulation::energy::{EnergySeries, circular_speed, escape_speed};
pub use simulation::diagnostics::{OrbitSummary, relative_energy_drift, first_degenerate};
pub use simulation::scenario::{Scenario, OrbitRun};

pub use configuration::config::{EngineConfig, ParametersConfig, OrbiterConfig, ViewerConfig, ScenarioConfig};
pub use error::ConfigError;

pub use visualization::orbsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_integrator, bench_drift_curve};
