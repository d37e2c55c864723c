//! Numerical and physical parameters for a run
//!
//! `Parameters` holds the read-only settings of one integration:
//! - step size and total simulated duration,
//! - gravitational constant and both masses,
//! - acceleration law and integration scheme

use serde::Deserialize;

/// Upper bound on `floor(total_time / dt)` accepted from a scenario
pub const MAX_STEPS: usize = 100_000_000;

/// Which acceleration law drives the orbiter
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccelerationMode {
    #[default]
    #[serde(rename = "recomputed")] // distance recomputed from the current position every step
    Recomputed,

    #[serde(rename = "fixed_radius")] // distance frozen at its initial value
    FixedRadius,
}

/// Which fixed-step scheme advances the state
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationScheme {
    #[default]
    #[serde(rename = "symplectic_euler")] // velocity first, then position with the new velocity
    SymplecticEuler,

    #[serde(rename = "explicit_euler")] // position with the old velocity, then velocity
    ExplicitEuler,
}

#[derive(Debug, Clone)]
pub struct Parameters {
    pub total_time: f64, // simulated duration (s)
    pub dt: f64, // step size (s)
    pub g: f64, // gravitational constant
    pub mass_central: f64, // kg
    pub mass_orbiter: f64, // kg
    pub acceleration: AccelerationMode, // recomputed or fixed-radius law
    pub integrator: IntegrationScheme, // symplectic or explicit euler
}

impl Parameters {
    /// `G * M` of the central body
    pub fn gm(&self) -> f64 {
        self.g * self.mass_central
    }

    /// Number of integration steps, `floor(total_time / dt)`
    /// Saturates at `usize::MAX`; validated scenarios stay under `MAX_STEPS`
    pub fn steps(&self) -> usize {
        (self.total_time / self.dt).floor() as usize
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            total_time: 7000.0,
            dt: 0.01,
            g: 6.67430e-11,
            mass_central: 5.972e24,
            mass_orbiter: 1000.0,
            acceleration: AccelerationMode::Recomputed,
            integrator: IntegrationScheme::SymplecticEuler,
        }
    }
}
