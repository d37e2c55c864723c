use orbsim::{AccelerationMode, IntegrationScheme, Parameters, Scenario, ScenarioConfig, State, NVec2};
use orbsim::{ConfigError, MAX_STEPS};
use orbsim::{Acceleration, CentralGravity, OrbitRun, OrbitSummary};
use orbsim::{circular_speed, relative_energy_drift};

const G: f64 = 6.67430e-11;
const MASS_EARTH: f64 = 5.972e24;

/// Default launch: 7,000 km out, 10 km/s tangential
fn launch() -> State {
    State::new(NVec2::new(7.0e6, 0.0), NVec2::new(0.0, 10000.0))
}

/// Run the default launch with the given overrides
fn run_with(dt: f64, total_time: f64, acceleration: AccelerationMode, integrator: IntegrationScheme) -> OrbitRun {
    let parameters = Parameters {
        dt,
        total_time,
        acceleration,
        integrator,
        ..Parameters::default()
    };
    Scenario::with_parameters(parameters, launch(), 1.0).run()
}

fn default_run() -> OrbitRun {
    Scenario::default().run()
}

// ==================================================================================
// Series length
// ==================================================================================

#[test]
fn series_lengths_match_step_count() {
    let run = default_run();
    let expected = (7000.0_f64 / 0.01).floor() as usize + 1;

    assert_eq!(expected, 700_001);
    assert_eq!(run.trajectory.len(), expected);
    assert_eq!(run.speeds.len(), expected);
    assert_eq!(run.energy.len(), expected);
}

#[test]
fn partial_final_step_is_dropped() {
    let cases = [(10.0, 0.5, 21), (10.0, 3.0, 4), (0.0, 0.1, 1)];
    for (total_time, dt, expected) in cases {
        let run = run_with(dt, total_time, AccelerationMode::Recomputed, IntegrationScheme::SymplecticEuler);
        assert_eq!(run.len(), expected, "total_time = {}, dt = {}", total_time, dt);
        assert_eq!(run.speeds.len(), expected);
    }
}

#[test]
fn time_is_derived_from_index() {
    let run = run_with(0.5, 10.0, AccelerationMode::Recomputed, IntegrationScheme::SymplecticEuler);
    assert_eq!(run.time_at(0), 0.0);
    assert_eq!(run.time_at(20), 10.0);
}

// ==================================================================================
// First step
// ==================================================================================

#[test]
fn first_step_matches_reference_arithmetic() {
    let run = default_run();
    let dt = 0.01;
    let gm = G * MASS_EARTH;

    // Kick then drift, done by hand
    let r0 = 7.0e6_f64;
    let ax = -gm * r0 / (r0 * r0 * r0);
    let vx = dt * ax;
    let vy = 10000.0;
    let x = r0 + dt * vx;
    let y = dt * vy;

    let s1 = run.trajectory[1];
    assert!((s1.velocity.x - vx).abs() < 1e-15);
    assert!((s1.position.x - x).abs() < 1e-8);
    assert!((s1.position.y - y).abs() < 1e-12);

    // ~8.13 m/s^2 inward: x drops by ~0.8 mm, y advances 100 m
    assert!((s1.position.x - (7.0e6 - 8.1345e-4)).abs() < 1e-6);
    assert!((s1.position.y - 100.0).abs() < 1e-9);
    assert_eq!(run.speeds[1], s1.velocity.norm());
}

#[test]
fn initial_state_is_recorded_first() {
    let run = default_run();
    assert_eq!(run.trajectory[0], launch());
    assert_eq!(run.speeds[0], 10000.0);
}

// ==================================================================================
// Determinism
// ==================================================================================

#[test]
fn runs_are_bit_identical() {
    let a = run_with(0.1, 7000.0, AccelerationMode::Recomputed, IntegrationScheme::SymplecticEuler);
    let b = run_with(0.1, 7000.0, AccelerationMode::Recomputed, IntegrationScheme::SymplecticEuler);

    assert_eq!(a.trajectory, b.trajectory);
    for (x, y) in a.speeds.iter().zip(b.speeds.iter()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}

// ==================================================================================
// Orbit shape
// ==================================================================================

#[test]
fn launch_exceeds_circular_speed() {
    let v_circ = circular_speed(G * MASS_EARTH, 7.0e6);
    assert!((v_circ - 7546.0).abs() < 1.0, "circular speed {}", v_circ);
    assert!(launch().speed() > v_circ);
}

#[test]
fn default_launch_is_elliptical() {
    let run = default_run();
    let summary = OrbitSummary::from_run(&run, 1.0);

    assert!(summary.is_elliptical(1.0e3));
    assert!(summary.min_radius <= 7.0e6);
    assert!(summary.max_radius > 2.0e7, "max radius {}", summary.max_radius);
    assert_eq!(summary.degenerate_at, None);

    // climbing away from periapsis slows the orbiter down
    assert!(summary.min_speed < 10000.0);
    assert_eq!(summary.max_speed, run.speeds.iter().cloned().fold(f64::MIN, f64::max));
}

#[test]
fn circular_launch_keeps_its_radius() {
    let r0 = 7.0e6;
    let v = circular_speed(G * MASS_EARTH, r0);
    let parameters = Parameters { dt: 0.1, total_time: 6000.0, ..Parameters::default() };
    let initial = State::new(NVec2::new(r0, 0.0), NVec2::new(0.0, v));
    let run = Scenario::with_parameters(parameters, initial, 1.0).run();

    let summary = OrbitSummary::from_run(&run, 1.0);
    assert!((summary.max_radius - r0).abs() / r0 < 1e-3);
    assert!((summary.min_radius - r0).abs() / r0 < 1e-3);
}

// ==================================================================================
// Energy
// ==================================================================================

#[test]
fn energy_drift_is_bounded() {
    let run = default_run();
    let drift = relative_energy_drift(&run.energy.total);
    assert!(drift < 0.01, "relative drift {}", drift);
}

#[test]
fn halving_dt_does_not_increase_drift() {
    let coarse = run_with(0.2, 7000.0, AccelerationMode::Recomputed, IntegrationScheme::SymplecticEuler);
    let fine = run_with(0.1, 7000.0, AccelerationMode::Recomputed, IntegrationScheme::SymplecticEuler);
    let finer = run_with(0.05, 7000.0, AccelerationMode::Recomputed, IntegrationScheme::SymplecticEuler);

    let d_coarse = relative_energy_drift(&coarse.energy.total);
    let d_fine = relative_energy_drift(&fine.energy.total);
    let d_finer = relative_energy_drift(&finer.energy.total);

    assert!(d_fine <= d_coarse, "{} > {}", d_fine, d_coarse);
    assert!(d_finer <= d_fine, "{} > {}", d_finer, d_fine);
}

#[test]
fn explicit_euler_drifts_more() {
    let symplectic = run_with(0.1, 7000.0, AccelerationMode::Recomputed, IntegrationScheme::SymplecticEuler);
    let explicit = run_with(0.1, 7000.0, AccelerationMode::Recomputed, IntegrationScheme::ExplicitEuler);

    let d_symplectic = relative_energy_drift(&symplectic.energy.total);
    let d_explicit = relative_energy_drift(&explicit.energy.total);
    assert!(d_explicit > 2.0 * d_symplectic, "explicit {} vs symplectic {}", d_explicit, d_symplectic);
}

#[test]
fn potential_uses_true_distance_in_both_modes() {
    let run = run_with(1.0, 3000.0, AccelerationMode::FixedRadius, IntegrationScheme::SymplecticEuler);
    let m = run.parameters.mass_orbiter;
    let gm = run.parameters.gm();

    for (state, pe) in run.trajectory.iter().zip(run.energy.potential.iter()).step_by(97) {
        assert_eq!(*pe, -gm * m / state.radius());
    }
}

// ==================================================================================
// Acceleration modes
// ==================================================================================

#[test]
fn modes_agree_on_the_first_step() {
    let recomputed = run_with(0.1, 1000.0, AccelerationMode::Recomputed, IntegrationScheme::SymplecticEuler);
    let fixed = run_with(0.1, 1000.0, AccelerationMode::FixedRadius, IntegrationScheme::SymplecticEuler);

    assert_eq!(recomputed.trajectory[1], fixed.trajectory[1]);
    assert_ne!(recomputed.trajectory.last(), fixed.trajectory.last());
}

#[test]
fn recomputed_mode_follows_inverse_square() {
    let law = CentralGravity { gm: G * MASS_EARTH };
    let a_r = law.acceleration(&NVec2::new(7.0e6, 0.0));
    let a_2r = law.acceleration(&NVec2::new(0.0, 1.4e7));

    assert!((a_r.norm() / a_2r.norm() - 4.0).abs() < 1e-12);
    assert!(a_r.x < 0.0 && a_2r.y < 0.0, "acceleration must point at the origin");
}

#[test]
fn fixed_radius_mode_is_a_harmonic_orbit() {
    // a = -(gm / r0^3) r, so the launch traces an ellipse centered on the
    // origin with semi-axis v0 / omega
    let run = run_with(0.1, 7000.0, AccelerationMode::FixedRadius, IntegrationScheme::SymplecticEuler);
    let gm = G * MASS_EARTH;
    let r0 = 7.0e6_f64;
    let omega = (gm / (r0 * r0 * r0)).sqrt();
    let semi_axis = 10000.0 / omega;

    let summary = OrbitSummary::from_run(&run, 1.0);
    assert!((summary.max_radius - semi_axis).abs() / semi_axis < 1e-3, "max radius {}", summary.max_radius);
    assert!((summary.min_radius - r0).abs() / r0 < 1e-3);

    // the recomputed law lets the same launch climb much higher
    let recomputed = OrbitSummary::from_run(
        &run_with(0.1, 7000.0, AccelerationMode::Recomputed, IntegrationScheme::SymplecticEuler),
        1.0,
    );
    assert!(recomputed.max_radius > 2.0 * summary.max_radius);
}

// ==================================================================================
// Degenerate input
// ==================================================================================

#[test]
fn zero_position_propagates_non_finite_values() {
    let parameters = Parameters { dt: 1.0, total_time: 5.0, ..Parameters::default() };
    let initial = State::new(NVec2::zeros(), NVec2::new(0.0, 10.0));
    let run = Scenario::with_parameters(parameters, initial, 1.0).run();

    assert_eq!(run.len(), 6);
    assert!(run.trajectory[1..].iter().all(|s| !s.is_finite()));

    let summary = OrbitSummary::from_run(&run, 1.0);
    assert_eq!(summary.degenerate_at, Some(0));
    assert!(summary.energy_drift.is_nan());
}

// ==================================================================================
// Configuration
// ==================================================================================

#[test]
fn scenario_from_yaml_selects_fixed_radius() {
    let yaml = r#"
engine:
  acceleration: "fixed_radius"
parameters:
  total_time: 100.0
  dt: 0.5
"#;
    let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
    let scenario = Scenario::build_scenario(&cfg).unwrap();
    assert_eq!(scenario.parameters.acceleration, AccelerationMode::FixedRadius);
    assert_eq!(scenario.forces.len(), 1);
    assert_eq!(scenario.run().len(), 201);
}

#[test]
fn bundled_default_scenario_matches_defaults() {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join("default.yaml");
    let cfg = ScenarioConfig::load(&path).unwrap();
    let scenario = Scenario::build_scenario(&cfg).unwrap();
    let defaults = Scenario::default();

    assert_eq!(scenario.initial, defaults.initial);
    assert_eq!(scenario.parameters.dt, defaults.parameters.dt);
    assert_eq!(scenario.parameters.total_time, defaults.parameters.total_time);
    assert_eq!(scenario.parameters.gm(), defaults.parameters.gm());
    assert_eq!(scenario.parameters.mass_orbiter, defaults.parameters.mass_orbiter);
}

#[test]
fn invalid_scenario_is_rejected() {
    let cfg = ScenarioConfig::from_yaml_str("parameters:\n  dt: -0.1\n").unwrap();
    assert!(Scenario::build_scenario(&cfg).is_err());

    let cfg = ScenarioConfig::from_yaml_str("orbiter:\n  x: [1.0]\n").unwrap();
    assert!(Scenario::build_scenario(&cfg).is_err());
}

#[test]
fn oversized_step_count_is_rejected() {
    let cfg = ScenarioConfig::from_yaml_str("parameters: {dt: 1.0e-300, total_time: 1.0e10}").unwrap();
    match Scenario::build_scenario(&cfg) {
        Err(ConfigError::TooManySteps { max, .. }) => assert_eq!(max, MAX_STEPS),
        Err(other) => panic!("unexpected error {}", other),
        Ok(_) => panic!("scenario with ~1e310 steps was accepted"),
    }

    // exactly at the cap is still fine
    let yaml = format!("parameters: {{dt: 1.0, total_time: {}.0}}", MAX_STEPS);
    let cfg = ScenarioConfig::from_yaml_str(&yaml).unwrap();
    assert!(cfg.validate().is_ok());
}
