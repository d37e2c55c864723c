//! Configuration types for loading orbit scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! run. A scenario consists of:
//!
//! - [`EngineConfig`]     – acceleration law, integration scheme, degenerate-orbit threshold
//! - [`ParametersConfig`] – step size, duration and physical constants
//! - [`OrbiterConfig`]    – initial position and velocity of the orbiter
//! - [`ViewerConfig`]     – playback settings for the 2D viewer
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section is optional and falls back to the defaults below.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   acceleration: "recomputed"    # or "fixed_radius"
//!   integrator: "symplectic_euler" # or "explicit_euler"
//!   degenerate_epsilon: 1.0       # m
//!
//! parameters:
//!   total_time: 7000.0            # s
//!   dt: 0.01                      # s
//!   G: 6.67430e-11                # m^3 kg^-1 s^-2
//!   mass_central: 5.972e24        # kg
//!   mass_orbiter: 1000.0          # kg
//!
//! orbiter:
//!   x: [ 7.0e6, 0.0 ]             # m
//!   v: [ 0.0, 10000.0 ]           # m/s
//!
//! viewer:
//!   frame_skip: 1000              # recorded states advanced per frame
//!   scale: 1.5e-5                 # pixels per meter
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::simulation::params::MAX_STEPS;

pub use crate::simulation::params::{AccelerationMode, IntegrationScheme};

/// Engine configuration
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub acceleration: AccelerationMode,
    pub integrator: IntegrationScheme,
    pub degenerate_epsilon: f64, // distance under which a state counts as degenerate
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            acceleration: AccelerationMode::Recomputed,
            integrator: IntegrationScheme::SymplecticEuler,
            degenerate_epsilon: 1.0,
        }
    }
}

/// Numerical and physical parameters
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub total_time: f64, // simulated duration
    pub dt: f64, // step size
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub mass_central: f64,
    pub mass_orbiter: f64,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            total_time: 7000.0,
            dt: 0.01,
            g: 6.67430e-11,
            mass_central: 5.972e24,
            mass_orbiter: 1000.0,
        }
    }
}

/// Initial state of the orbiter
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct OrbiterConfig {
    pub x: Vec<f64>, // initial position, two components
    pub v: Vec<f64>, // initial velocity, two components
}

impl Default for OrbiterConfig {
    fn default() -> Self {
        Self {
            x: vec![7.0e6, 0.0],
            v: vec![0.0, 10000.0],
        }
    }
}

/// Playback settings for the 2D viewer
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewerConfig {
    pub frame_skip: usize, // recorded states advanced per rendered frame
    pub scale: f32, // pixels per meter
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            frame_skip: 1000,
            scale: 1.5e-5,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub orbiter: OrbiterConfig,
    pub viewer: ViewerConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg = serde_yaml::from_str(yaml).context("malformed scenario yaml")?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("unable to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg = serde_yaml::from_reader(reader)
            .with_context(|| format!("malformed scenario {}", path.display()))?;
        Ok(cfg)
    }

    /// Check every value before a run is built from it
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.parameters;
        if !(p.dt.is_finite() && p.dt > 0.0) {
            return Err(ConfigError::InvalidStep(p.dt));
        }
        if !(p.total_time.is_finite() && p.total_time >= 0.0) {
            return Err(ConfigError::InvalidDuration(p.total_time));
        }
        let steps = (p.total_time / p.dt).floor();
        if !(steps.is_finite() && steps <= MAX_STEPS as f64) {
            return Err(ConfigError::TooManySteps { steps, max: MAX_STEPS });
        }
        positive("G", p.g)?;
        positive("mass_central", p.mass_central)?;
        positive("mass_orbiter", p.mass_orbiter)?;

        vector2("x", &self.orbiter.x)?;
        vector2("v", &self.orbiter.v)?;

        let eps = self.engine.degenerate_epsilon;
        if !(eps.is_finite() && eps >= 0.0) {
            return Err(ConfigError::InvalidEpsilon(eps));
        }
        if self.viewer.frame_skip == 0 {
            return Err(ConfigError::ZeroFrameSkip);
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn vector2(name: &'static str, value: &[f64]) -> Result<(), ConfigError> {
    if value.len() != 2 {
        return Err(ConfigError::WrongDimension { name, len: value.len() });
    }
    if value.iter().any(|c| !c.is_finite()) {
        return Err(ConfigError::NonFiniteVector(name));
    }
    Ok(())
}
