use std::path::PathBuf;
use std::process;

use clap::Parser;

use archipelago_generator::{export, run_one};

#[derive(Parser, Debug)]
#[command(name = "archipelago_generator")]
#[command(about = "Generate an archipelago from a seed, sea level and weathering, and count its islands")]
struct Args {
    /// Used to create an N * N grid of cells. Must be greater than 0.
    #[arg(long, default_value = "1000")]
    n: usize,

    /// The seed the islands are generated from. Must be between 0 and 65535.
    #[arg(short, long, default_value = "0")]
    seed: i64,

    /// The sea level. Must be between -1 and 1, where -1 is all land and 1 is all water.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    sea_level: f64,

    /// The weathering of the islands. Must be between 1 and 5, where 1 is most
    /// weathered (smoother edges) and 5 is least weathered (rougher edges).
    #[arg(short, long, default_value = "5")]
    weathering: u32,

    /// Root directory for exported maps.
    #[arg(short, long, default_value = "Output")]
    output: PathBuf,

    /// Skip writing the map image to disk.
    #[arg(long)]
    no_save: bool,
}

fn main() {
    let args = Args::parse();

    println!("Generating {}x{} archipelago...", args.n, args.n);
    let (num_islands, archipelago) =
        match run_one(args.seed, args.weathering, args.sea_level, args.n) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Invalid configuration: {}", e);
                process::exit(1);
            }
        };

    if !args.no_save {
        match export::save_map(&archipelago, &args.output) {
            Ok(path) => println!("Saved map to {}", path.display()),
            Err(e) => {
                eprintln!("Failed to export map: {}", e);
                process::exit(1);
            }
        }
    }

    println!(
        "Seed: {}, Weathering: {}, Sea level: {:+.2}, Number of islands: {}",
        args.seed, args.weathering, args.sea_level, num_islands
    );
}
