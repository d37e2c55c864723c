//! Core state types for the two-body integrator.
//!
//! The central body sits fixed at the origin, so only the orbiter carries
//! state: a 2D position and velocity using `NVec2`.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Orbiter snapshot at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub position: NVec2, // m
    pub velocity: NVec2, // m/s
}

impl State {
    pub fn new(position: NVec2, velocity: NVec2) -> Self {
        Self { position, velocity }
    }

    /// Distance from the central body
    pub fn radius(&self) -> f64 {
        self.position.norm()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().chain(self.velocity.iter()).all(|c| c.is_finite())
    }
}
