use std::time::Instant;

use crate::simulation::diagnostics::relative_energy_drift;
use crate::simulation::params::{IntegrationScheme, Parameters};
use crate::simulation::scenario::Scenario;

/// Step sizes swept by the benchmarks, coarse to fine
const DTS: [f64; 7] = [1.0, 0.5, 0.2, 0.1, 0.05, 0.02, 0.01];

/// Helper to build the default scenario at step `dt`
fn make_scenario(dt: f64, integrator: IntegrationScheme) -> Scenario {
    let base = Scenario::default();
    let parameters = Parameters {
        dt,
        integrator,
        ..base.parameters
    };
    Scenario::with_parameters(parameters, base.initial, base.degenerate_epsilon)
}

/// Time the full default run for each step size
pub fn bench_integrator() {
    for dt in DTS {
        let scenario = make_scenario(dt, IntegrationScheme::SymplecticEuler);

        // Warm up
        let _ = scenario.run();

        let t0 = Instant::now();
        let run = scenario.run();
        let elapsed = t0.elapsed().as_secs_f64();

        let steps = run.len() - 1;
        println!(
            "dt = {:5}, steps = {:8}, total = {:8.6} s, per step = {:8.3} ns",
            dt,
            steps,
            elapsed,
            elapsed * 1.0e9 / steps.max(1) as f64
        );
    }
}

/// Relative energy drift of both schemes against step size
/// Paste output directly into a spreadsheet to graph
pub fn bench_drift_curve() {
    println!("dt,symplectic_drift,explicit_drift,symplectic_ms");

    for dt in DTS {
        let symplectic = make_scenario(dt, IntegrationScheme::SymplecticEuler);
        let explicit = make_scenario(dt, IntegrationScheme::ExplicitEuler);

        let t0 = Instant::now();
        let run = symplectic.run();
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        let drift_symplectic = relative_energy_drift(&run.energy.total);
        let drift_explicit = relative_energy_drift(&explicit.run().energy.total);

        println!("{},{:.6e},{:.6e},{:.3}", dt, drift_symplectic, drift_explicit, ms);
    }
}
