//! Fixed-step time integrators for the orbiter
//!
//! Provides the semi-implicit (symplectic) Euler step used by default, the
//! explicit Euler step kept for comparison, and the driver loop that
//! records every state into one growable trajectory

use log::debug;

use super::states::State;
use super::forces::AccelSet;
use super::params::{IntegrationScheme, Parameters};

/// Advance one step with semi-implicit Euler
/// The velocity kick comes first and the drift uses the kicked velocity;
/// swapping the two gives explicit Euler
pub fn symplectic_euler_step(state: State, forces: &AccelSet, dt: f64) -> State {
    // a_n from x_n
    let a = forces.accumulate(&state.position);

    // Kick: v_n+1 = v_n + dt * a_n
    let velocity = state.velocity + dt * a;

    // Drift: x_n+1 = x_n + dt * v_n+1
    let position = state.position + dt * velocity;

    State { position, velocity }
}

/// Advance one step with explicit (forward) Euler
/// Both updates use the old state, so energy grows secularly
pub fn explicit_euler_step(state: State, forces: &AccelSet, dt: f64) -> State {
    let a = forces.accumulate(&state.position);

    // x_n+1 = x_n + dt * v_n
    let position = state.position + dt * state.velocity;

    // v_n+1 = v_n + dt * a_n
    let velocity = state.velocity + dt * a;

    State { position, velocity }
}

/// Integrate from `initial` for `floor(total_time / dt)` steps
///
/// Returns the trajectory and the parallel speed series, both holding
/// `steps + 1` entries (the initial state first). Non-finite values from a
/// degenerate position are carried along, not reported.
pub fn integrate(initial: State, forces: &AccelSet, params: &Parameters) -> (Vec<State>, Vec<f64>) {
    let steps = params.steps();
    let dt = params.dt;

    let step: fn(State, &AccelSet, f64) -> State = match params.integrator {
        IntegrationScheme::SymplecticEuler => symplectic_euler_step,
        IntegrationScheme::ExplicitEuler => explicit_euler_step,
    };

    debug!("integrating {} steps of {} s with {:?}", steps, dt, params.integrator);

    let mut trajectory = Vec::with_capacity(steps.saturating_add(1));
    let mut speeds = Vec::with_capacity(steps.saturating_add(1));

    let mut state = initial;
    trajectory.push(state);
    speeds.push(state.speed());

    for _ in 0..steps {
        state = step(state, forces, dt);
        trajectory.push(state);
        speeds.push(state.speed());
    }

    (trajectory, speeds)
}
