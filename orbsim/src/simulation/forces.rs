//! Acceleration contributors for the orbit integrator
//!
//! Defines the acceleration trait and the two central-gravity laws: the
//! physically correct one and the fixed-radius variant that keeps the
//! initial distance in the denominator

use crate::simulation::states::NVec2;

/// Collection of acceleration terms acting on the orbiter
/// Each term implements [`Acceleration`] and their contributions are summed
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total acceleration felt at `position`
    pub fn accumulate(&self, position: &NVec2) -> NVec2 {
        self.terms
            .iter()
            .fold(NVec2::zeros(), |acc, term| acc + term.acceleration(position))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources, a pure function of the orbiter position
pub trait Acceleration {
    fn acceleration(&self, position: &NVec2) -> NVec2;
}

/// Newtonian pull toward a body fixed at the origin
/// Magnitude `gm / |r|^2`, direction `-r / |r|`, distance taken from the
/// position passed in. A zero position yields non-finite components.
pub struct CentralGravity {
    pub gm: f64, // G * M of the central body
}

impl Acceleration for CentralGravity {
    fn acceleration(&self, position: &NVec2) -> NVec2 {
        let r = position.norm();

        // a = -gm * r_vec / |r|^3
        -self.gm * *position / (r * r * r)
    }
}

/// Central gravity with the distance frozen at `r0`
///
/// `a = -gm * r_vec / r0^3`. At `|r| == r0` this matches [`CentralGravity`];
/// elsewhere the magnitude grows linearly with `|r|` instead of falling off
/// with its square, so orbits it produces are not Keplerian.
pub struct FixedRadiusGravity {
    pub gm: f64, // G * M of the central body
    pub r0: f64, // initial distance, never updated
}

impl FixedRadiusGravity {
    /// Freeze the distance of `initial_position`
    pub fn from_initial(gm: f64, initial_position: &NVec2) -> Self {
        Self {
            gm,
            r0: initial_position.norm(),
        }
    }
}

impl Acceleration for FixedRadiusGravity {
    fn acceleration(&self, position: &NVec2) -> NVec2 {
        -self.gm * *position / (self.r0 * self.r0 * self.r0)
    }
}
