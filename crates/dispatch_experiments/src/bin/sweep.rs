//! Sweep CLI: run a parameter grid against the dispatch core and export the
//! results.

use std::fs::{self, File};
use std::path::PathBuf;

use clap::Parser;

use dispatch_experiments::export::{export_to_csv, export_to_json};
use dispatch_experiments::parameters::ParameterSpace;
use dispatch_experiments::runner::run_parallel_experiments;

#[derive(Debug, Parser)]
#[command(name = "sweep", about = "Run dispatch policy sweeps over fleet parameter grids")]
struct Args {
    /// Fleet sizes to sweep, comma-separated.
    #[arg(long, value_delimiter = ',', default_value = "50,100,200")]
    fleet_sizes: Vec<usize>,

    /// Requests replayed per scenario.
    #[arg(long, default_value_t = 500)]
    requests: usize,

    /// Off-duty fractions to sweep, comma-separated.
    #[arg(long, value_delimiter = ',', default_value = "0.0,0.25")]
    off_duty_fractions: Vec<f64>,

    /// Surge multipliers to sweep, comma-separated.
    #[arg(long, value_delimiter = ',', default_value = "1.0,1.5,2.0")]
    surge_multipliers: Vec<f64>,

    /// Base RNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Directory for results.csv / results.json.
    #[arg(long, default_value = "sweep-results")]
    out_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let sets = ParameterSpace::grid()
        .fleet_sizes(args.fleet_sizes)
        .request_count(args.requests)
        .off_duty_fractions(args.off_duty_fractions)
        .surge_multipliers(args.surge_multipliers)
        .base_seed(args.seed)
        .generate();
    println!("running {} scenarios", sets.len());

    let results = run_parallel_experiments(&sets)?;

    fs::create_dir_all(&args.out_dir)?;
    export_to_csv(&results, File::create(args.out_dir.join("results.csv"))?)?;
    export_to_json(&results, File::create(args.out_dir.join("results.json"))?)?;

    if let Some(best) = results.iter().max_by(|a, b| {
        a.match_rate()
            .partial_cmp(&b.match_rate())
            .unwrap_or(std::cmp::Ordering::Equal)
    }) {
        println!(
            "best match rate: run {} ({:?}, fleet {}) at {:.1}% with revenue {:.2}",
            best.run_id,
            best.policy,
            best.fleet_size,
            best.match_rate() * 100.0,
            best.total_revenue,
        );
    }
    println!("results written to {}", args.out_dir.display());
    Ok(())
}
