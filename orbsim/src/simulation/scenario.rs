//! Build fully-initialized orbit runs from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - numerical and physical parameters (`Parameters`)
//! - the orbiter's initial `State`
//! - the active acceleration law (`AccelSet`)
//!
//! `Scenario::run` integrates it into an immutable `OrbitRun`, which is all
//! the viewer and the diagnostics ever see

use log::{debug, info, warn};

use crate::configuration::config::ScenarioConfig;
use crate::error::ConfigError;
use crate::simulation::diagnostics::first_degenerate;
use crate::simulation::energy::EnergySeries;
use crate::simulation::forces::{AccelSet, CentralGravity, FixedRadiusGravity};
use crate::simulation::integrator::integrate;
use crate::simulation::params::{AccelerationMode, Parameters};
use crate::simulation::states::{NVec2, State};

/// Runtime bundle for one integration
pub struct Scenario {
    pub parameters: Parameters,
    pub initial: State,
    pub forces: AccelSet,
    pub degenerate_epsilon: f64,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Orbiter: config vectors -> nalgebra vectors
        let initial = State::new(
            NVec2::new(cfg.orbiter.x[0], cfg.orbiter.x[1]),
            NVec2::new(cfg.orbiter.v[0], cfg.orbiter.v[1]),
        );

        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            total_time: p_cfg.total_time,
            dt: p_cfg.dt,
            g: p_cfg.g,
            mass_central: p_cfg.mass_central,
            mass_orbiter: p_cfg.mass_orbiter,
            acceleration: cfg.engine.acceleration,
            integrator: cfg.engine.integrator,
        };

        Ok(Self::with_parameters(parameters, initial, cfg.engine.degenerate_epsilon))
    }

    /// Register the acceleration law selected in `parameters`
    pub fn with_parameters(parameters: Parameters, initial: State, degenerate_epsilon: f64) -> Self {
        let gm = parameters.gm();
        let forces = match parameters.acceleration {
            AccelerationMode::Recomputed => AccelSet::new().with(CentralGravity { gm }),
            AccelerationMode::FixedRadius => {
                AccelSet::new().with(FixedRadiusGravity::from_initial(gm, &initial.position))
            }
        };

        Self {
            parameters,
            initial,
            forces,
            degenerate_epsilon,
        }
    }

    /// Integrate the whole run and derive its energy series
    pub fn run(&self) -> OrbitRun {
        info!(
            "integrating {:.1} s at dt = {} s ({:?}, {:?} acceleration)",
            self.parameters.total_time,
            self.parameters.dt,
            self.parameters.integrator,
            self.parameters.acceleration,
        );

        let (trajectory, speeds) = integrate(self.initial, &self.forces, &self.parameters);
        let energy = EnergySeries::from_run(&trajectory, &speeds, &self.parameters);
        debug!("recorded {} states", trajectory.len());

        if let Some(i) = first_degenerate(&trajectory, self.degenerate_epsilon) {
            warn!(
                "orbit degenerates at step {} (t = {} s), later states are not meaningful",
                i,
                i as f64 * self.parameters.dt
            );
        }

        OrbitRun {
            parameters: self.parameters.clone(),
            trajectory,
            speeds,
            energy,
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        let initial = State::new(NVec2::new(7.0e6, 0.0), NVec2::new(0.0, 10000.0));
        Self::with_parameters(Parameters::default(), initial, 1.0)
    }
}

/// Output of one integration: trajectory with its parallel speed and
/// energy series, all `steps + 1` long
#[derive(Debug, Clone)]
pub struct OrbitRun {
    pub parameters: Parameters,
    pub trajectory: Vec<State>,
    pub speeds: Vec<f64>,
    pub energy: EnergySeries,
}

impl OrbitRun {
    pub fn len(&self) -> usize {
        self.trajectory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }

    /// Simulated time of recorded state `index`
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 * self.parameters.dt
    }
}
