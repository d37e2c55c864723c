//! Post-run checks over a finished trajectory
//!
//! Nothing here feeds back into the integrator: a degenerate state is only
//! located and reported, the run itself keeps its non-finite values

use std::fmt;

use super::energy::circular_speed;
use super::scenario::OrbitRun;
use super::states::State;

/// Largest `|E[i] - E[0]| / |E[0]|` over the series
/// Non-finite entries make the result non-finite
pub fn relative_energy_drift(total: &[f64]) -> f64 {
    let Some(&e0) = total.first() else {
        return 0.0;
    };
    total
        .iter()
        .map(|e| (e - e0).abs() / e0.abs())
        .fold(0.0, |worst, d| if d.is_nan() || d > worst { d } else { worst })
}

/// Index of the first state closer than `epsilon` to the central body or
/// carrying a non-finite component
pub fn first_degenerate(trajectory: &[State], epsilon: f64) -> Option<usize> {
    trajectory
        .iter()
        .position(|s| !s.is_finite() || s.radius() < epsilon)
}

/// Summary statistics of one run, logged after integrating
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitSummary {
    pub steps: usize,
    pub duration: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    pub initial_circular_speed: f64, // circular speed at the starting distance
    pub energy_drift: f64, // relative, see `relative_energy_drift`
    pub degenerate_at: Option<usize>,
}

impl OrbitSummary {
    pub fn from_run(run: &OrbitRun, epsilon: f64) -> Self {
        let radii = run.trajectory.iter().map(State::radius);
        let (min_radius, max_radius) = min_max(radii);
        let (min_speed, max_speed) = min_max(run.speeds.iter().copied());

        let r0 = run.trajectory.first().map_or(f64::NAN, State::radius);

        Self {
            steps: run.len().saturating_sub(1),
            duration: run.time_at(run.len().saturating_sub(1)),
            min_radius,
            max_radius,
            min_speed,
            max_speed,
            initial_circular_speed: circular_speed(run.parameters.gm(), r0),
            energy_drift: relative_energy_drift(&run.energy.total),
            degenerate_at: first_degenerate(&run.trajectory, epsilon),
        }
    }

    /// The radius actually varied by more than `tolerance`
    pub fn is_elliptical(&self, tolerance: f64) -> bool {
        self.max_radius - self.min_radius > tolerance
    }
}

impl fmt::Display for OrbitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "steps: {} over {:.1} s", self.steps, self.duration)?;
        writeln!(f, "radius: {:.6e} .. {:.6e} m", self.min_radius, self.max_radius)?;
        writeln!(f, "speed: {:.3} .. {:.3} m/s", self.min_speed, self.max_speed)?;
        writeln!(f, "circular speed at start: {:.3} m/s", self.initial_circular_speed)?;
        write!(f, "relative energy drift: {:.3e}", self.energy_drift)?;
        if let Some(i) = self.degenerate_at {
            write!(f, "\ndegenerate from step {}", i)?;
        }
        Ok(())
    }
}

// NaN compares false both ways, so non-finite entries are skipped
fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (if v < lo { v } else { lo }, if v > hi { v } else { hi })
    })
}
