use anyhow::Result;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use percolate::percolation_stats::PercolationStats;

/// percolate - Monte Carlo estimation of the percolation threshold
///
/// Repeatedly opens random sites on an n-by-n grid until an open path
/// connects the top row to the bottom row, then reports the mean, standard
/// deviation, and 95% confidence interval of the observed thresholds.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid side length (the grid has SIZE x SIZE sites)
    #[clap(value_name = "SIZE")]
    size: usize,

    /// Number of independent trials
    #[clap(value_name = "TRIALS")]
    trials: usize,

    /// Seed for the random number generator (random if not given)
    #[clap(short = 's', long = "seed")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut stats = PercolationStats::new(args.size, args.trials)?;
    info!(
        "running {} trials on a {}x{} grid",
        args.trials, args.size, args.size
    );

    match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            stats.run(&mut rng)?;
        }
        None => {
            let mut rng = rand::thread_rng();
            stats.run(&mut rng)?;
        }
    }

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );

    Ok(())
}
