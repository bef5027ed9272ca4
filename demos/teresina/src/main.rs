//! teresina — one simulated day of waste collection in Teresina.
//!
//! Usage: `teresina [config.json] [output-dir]`
//!
//! Without a config file the default parameters are used (seed 42, 24 h,
//! the standard five-zone city).  Event log, zone levels and summary land in
//! `output/teresina` unless another directory is given.  Set `RUST_LOG=debug`
//! to trace every scheduled event.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use waste_core::SimConfig;
use waste_fleet::WorldBuilder;
use waste_output::{CsvWriter, SimOutputObserver};
use waste_sim::{SimBuilder, run_sweep};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUTPUT: &str = "output/teresina";
const SWEEP_SEEDS:    u64  = 8;

fn load_config(path: Option<&str>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let config: SimConfig = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let out_dir = args.get(1).map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), PathBuf::from);

    println!("=== teresina — waste collection simulation ===");
    println!(
        "Seed: {}  |  Hours: {}  |  Fleet: {}×2t {}×4t {}×8t {}×10t",
        config.seed,
        config.params.hours_to_simulate,
        config.params.trucks_2t.count,
        config.params.trucks_4t.count,
        config.params.trucks_8t.count,
        config.params.trucks_10t.count,
    );
    println!();

    // 1. Build the city and the sim.
    let world = WorldBuilder::standard().build()?;
    let mut sim = SimBuilder::new(config.clone()).world(world).build()?;

    // 2. Output.
    let writer = CsvWriter::new(&out_dir)?;
    let mut obs = SimOutputObserver::new(writer);

    // 3. Run.
    let t0 = Instant::now();
    let report = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        warn!(error = %e, "output incomplete");
    }

    println!("{report}");
    println!();
    println!("Simulation complete in {:.3} s, output in {}", elapsed.as_secs_f64(), out_dir.display());
    println!();

    // 4. Seed sweep with the same parameters.
    let configs: Vec<SimConfig> = (0..SWEEP_SEEDS)
        .map(|i| SimConfig { seed: config.seed + i, ..config.clone() })
        .collect();
    let t0 = Instant::now();
    let results = run_sweep(&configs);
    info!(runs = results.len(), secs = t0.elapsed().as_secs_f64(), "sweep finished");

    println!("{:<8} {:>10} {:>10} {:>10} {:>10}", "Seed", "Dispatch", "Landfill", "Left", "AvgWait");
    println!("{}", "-".repeat(52));
    for (cfg, result) in configs.iter().zip(results) {
        match result {
            Ok(r) => println!(
                "{:<8} {:>10} {:>9}t {:>9}t {:>9.1}m",
                cfg.seed,
                r.dispatches,
                r.landfill_tons,
                r.remaining_waste(),
                r.average_wait,
            ),
            Err(e) => println!("{:<8} error: {e}", cfg.seed),
        }
    }

    Ok(())
}
