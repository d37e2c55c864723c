//! Mechanical energy of a finished run.
//!
//! The potential always uses the true distance of each recorded position,
//! whatever acceleration law produced the trajectory.

use super::params::Parameters;
use super::states::State;

/// Kinetic, potential and total energy per recorded state (J)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergySeries {
    pub kinetic: Vec<f64>,
    pub potential: Vec<f64>,
    pub total: Vec<f64>,
}

impl EnergySeries {
    pub fn from_run(trajectory: &[State], speeds: &[f64], params: &Parameters) -> Self {
        let n = trajectory.len().min(speeds.len());
        let mut series = Self {
            kinetic: Vec::with_capacity(n),
            potential: Vec::with_capacity(n),
            total: Vec::with_capacity(n),
        };

        for (state, &v) in trajectory.iter().zip(speeds) {
            let ke = kinetic_energy(params.mass_orbiter, v);
            let pe = potential_energy(params.gm(), params.mass_orbiter, state.radius());
            series.kinetic.push(ke);
            series.potential.push(pe);
            series.total.push(ke + pe);
        }

        series
    }

    pub fn len(&self) -> usize {
        self.total.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }
}

/// `m v^2 / 2`
pub fn kinetic_energy(mass: f64, speed: f64) -> f64 {
    0.5 * mass * speed * speed
}

/// `-G M m / r`
pub fn potential_energy(gm: f64, mass: f64, r: f64) -> f64 {
    -gm * mass / r
}

/// Speed of a circular orbit at distance `r`
pub fn circular_speed(gm: f64, r: f64) -> f64 {
    (gm / r).sqrt()
}

/// Speed needed to escape from distance `r`
pub fn escape_speed(gm: f64, r: f64) -> f64 {
    (2.0 * gm / r).sqrt()
}
