//! Benchmark/demo driver: repeatedly install an input, mutate it, clear it,
//! and report throughput.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;

use mangler::Mutator;

#[derive(Parser)]
#[command(about = "Run repeated mutation rounds over one input and report throughput")]
struct Args {
    /// Maximum size mutated inputs may grow to
    #[arg(long, default_value_t = 1024)]
    max_input_size: usize,

    /// RNG seed; identical seeds reproduce identical outputs
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Restrict mutated bytes to printable ASCII
    #[arg(long)]
    printable: bool,

    /// Literal input bytes to mutate
    #[arg(long, default_value = "Something", conflicts_with = "input_file")]
    input: String,

    /// Read the input bytes from a file instead
    #[arg(long)]
    input_file: Option<PathBuf>,

    /// Mutation passes per round
    #[arg(long, default_value_t = 4)]
    passes: u32,

    /// Number of set_input/mutate/clear rounds to run
    #[arg(long, default_value_t = 1_000_000)]
    rounds: u64,

    /// Print the first N mutated inputs
    #[arg(long, default_value_t = 0)]
    show: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let data = match &args.input_file {
        Some(path) => fs::read(path).with_context(|| format!("reading {}", path.display()))?,
        None => args.input.clone().into_bytes(),
    };

    let mut mutator = Mutator::new(args.max_input_size, args.seed, args.printable)?;
    info!(
        "mutating a {} byte input, {} rounds of {} passes, seed {:#x}",
        data.len(),
        args.rounds,
        args.passes,
        args.seed
    );

    let start = Instant::now();
    for round in 0..args.rounds {
        mutator.set_input(&data)?;
        mutator.mutate(args.passes);

        if round < args.show {
            println!("{:?}", String::from_utf8_lossy(mutator.bytes()));
        }

        mutator.clear_input();
    }
    let elapsed = start.elapsed().as_secs_f64();

    println!(
        "Performed {} mutation rounds, {} passes each, in {:.3}s ({:.0} rounds/s)",
        args.rounds,
        args.passes,
        elapsed,
        args.rounds as f64 / elapsed
    );

    Ok(())
}
