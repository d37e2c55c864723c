use orbsim::{ScenarioConfig, Scenario, OrbitSummary, AccelerationMode};
use orbsim::run_2d;
use orbsim::{bench_integrator, bench_drift_curve};
use orbsim::logging;

use clap::Parser;
use anyhow::Result;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless it exists as given
    #[arg(short, long = "file", default_value = "default.yaml")]
    file_name: String,

    /// Freeze the distance in the acceleration law at its initial value
    #[arg(long)]
    fixed_radius: bool,

    /// Integrate and log the summary without opening a window
    #[arg(long)]
    headless: bool,

    /// Print integrator timing and drift-vs-dt curves, then exit
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.is_file() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn main() -> Result<()> {
    let _logger = logging::setup()?;
    let args = Args::parse();

    if args.bench {
        bench_integrator();
        bench_drift_curve();
        return Ok(());
    }

    let path = scenario_path(&args.file_name);
    log::info!("loading scenario {}", path.display());
    let mut scenario_cfg = ScenarioConfig::load(&path)?;
    if args.fixed_radius {
        scenario_cfg.engine.acceleration = AccelerationMode::FixedRadius;
    }

    let scenario = Scenario::build_scenario(&scenario_cfg)?;
    let run = scenario.run();

    let summary = OrbitSummary::from_run(&run, scenario.degenerate_epsilon);
    log::info!("run summary\n{}", summary);

    if !args.headless {
        run_2d(run, &scenario_cfg.viewer);
    }

    Ok(())
}
