use trisim::{build_simulator, canonical_scenario, ChaosLevel, ScenarioConfig, Simulator, DAYS_PER_YEAR};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Three-body gravitational simulator with chaos diagnostics")]
struct Args {
    /// Scenario YAML in the scenarios/ directory; built-in preset when omitted
    #[arg(short)]
    file_name: Option<String>,

    /// Number of integration steps to run
    #[arg(short = 'n', long, default_value_t = 500)]
    steps: usize,

    /// Print a status line every this many steps
    #[arg(short, long, default_value_t = 50)]
    report_every: usize,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
    Ok(scenario_cfg)
}

fn report(step: usize, sim: &Simulator) {
    let level = match sim.chaos_level() {
        ChaosLevel::High => "HIGH",
        ChaosLevel::Moderate => "MODERATE",
        ChaosLevel::Low => "LOW",
    };
    let (ratio, lyapunov) = sim
        .latest_chaos()
        .map(|r| (r.separation_ratio, r.lyapunov))
        .unwrap_or((1.0, 0.0));

    println!(
        "step {:6}  t = {:8.2} yr  E = {:+.6e}  drift = {:.3e}  sep ratio = {:.4}  lyapunov = {:+.5}  chaos: {}",
        step,
        sim.time_years(),
        sim.energy(),
        sim.energy_drift(),
        ratio,
        lyapunov,
        level,
    );

    let snap = sim.snapshot();
    for (i, v) in snap.velocities.iter().enumerate() {
        // AU/day -> AU/year for readability
        println!("         body {}: speed = {:7.3} AU/yr", i, v.norm() * DAYS_PER_YEAR);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut sim = match &args.file_name {
        Some(name) => {
            let cfg = load_scenario_from_yaml(name)?;
            build_simulator(cfg).context("invalid scenario configuration")?
        }
        None => canonical_scenario(),
    };

    println!(
        "=== three-body simulation: dt = {} days, {} steps ===",
        sim.parameters().h0,
        args.steps
    );

    for step in 1..=args.steps {
        sim.advance();

        if sim.is_numerically_unstable() {
            println!(
                "numerical instability detected at step {} (t = {:.2} yr); stopping",
                step,
                sim.time_years()
            );
            break;
        }

        if args.report_every > 0 && step % args.report_every == 0 {
            report(step, &sim);
        }
    }

    Ok(())
}
