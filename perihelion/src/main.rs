use perihelion::{Correction, Scenario, ScenarioConfig};
use perihelion::{run_3d, run_headless};
use perihelion::bench_integrators;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file name under `scenarios/`
    #[arg(short, default_value = "mercury.yaml")]
    file_name: String,

    /// Override the weight of the 1/r correction term
    #[arg(long)]
    alpha: Option<f64>,

    /// Override the weight of the 1/r^2 correction term
    #[arg(long)]
    beta: Option<f64>,

    /// Integrate to the end time without opening a window
    #[arg(long)]
    headless: bool,

    /// Time the integrators and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_integrators();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    let correction = Correction::new(
        args.alpha.unwrap_or(scenario.correction.alpha),
        args.beta.unwrap_or(scenario.correction.beta),
    );
    scenario = scenario
        .with_correction(correction)
        .context("invalid --alpha/--beta override")?;
    info!("loaded {} with {} bodies", args.file_name, scenario.markers.len());

    if args.headless {
        run_headless(&mut scenario);
    } else {
        run_3d(scenario);
    }

    Ok(())
}
