//! Parameter sweep driver.
//!
//! Samples random seeds and crosses them with weathering values 1/3/5 and
//! sea levels from -0.20 to +0.28 in steps of 0.04, then generates, counts
//! and exports every combination across a rayon worker pool. Each combination
//! owns a private archipelago, so workers share nothing but the output
//! directory.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use archipelago_generator::{export, run_one, ConfigError, MAX_SEED};

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Sweep seed, weathering and sea level combinations in parallel")]
struct Args {
    /// Number of random map seeds to sample.
    #[arg(long, default_value = "3")]
    samples: usize,

    /// Grid size for every generated map.
    #[arg(long, default_value = "1000")]
    n: usize,

    /// Seed for the sampler itself (random if not specified).
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Root directory for exported maps.
    #[arg(short, long, default_value = "Output")]
    output: PathBuf,
}

const WEATHERING_STEPS: [u32; 3] = [1, 3, 5];

fn main() {
    let args = Args::parse();

    let rng_seed = args.rng_seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
    let seed_count = (MAX_SEED + 1) as usize;
    let seeds: Vec<i64> = index::sample(&mut rng, seed_count, args.samples.min(seed_count))
        .into_iter()
        .map(|s| s as i64)
        .collect();

    let mut combinations = Vec::new();
    for &seed in &seeds {
        for weathering in WEATHERING_STEPS {
            for step in (-20..32).step_by(4) {
                combinations.push((seed, weathering, step as f64 / 100.0));
            }
        }
    }

    println!("Sampler seed: {}", rng_seed);
    println!("Total archipelagos being generated: {}", combinations.len());
    let started = Instant::now();

    let failures: Vec<String> = combinations
        .par_iter()
        .filter_map(|&(seed, weathering, sea_level)| {
            run_combination(seed, weathering, sea_level, args.n, &args.output).err()
        })
        .collect();

    for failure in &failures {
        eprintln!("{}", failure);
    }
    println!(
        "Total time elapsed (seconds): {:.2}",
        started.elapsed().as_secs_f64()
    );
    if !failures.is_empty() {
        std::process::exit(1);
    }
}

fn run_combination(
    seed: i64,
    weathering: u32,
    sea_level: f64,
    n: usize,
    output: &Path,
) -> Result<(), String> {
    let (num_islands, archipelago) = run_one(seed, weathering, sea_level, n)
        .map_err(|e: ConfigError| format!("Invalid combination: {}", e))?;
    export::save_map(&archipelago, output)
        .map_err(|e| format!("Failed to export seed {} map: {}", seed, e))?;

    println!(
        "Seed: {}, Weathering: {}, Sea level: {:+.2}, Number of islands: {}",
        seed, weathering, sea_level, num_islands
    );
    Ok(())
}
