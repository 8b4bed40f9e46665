use anyhow::{Context, Result};
use clap::Parser;
use introsort::{SortConfig, first_unsorted, introsort_with, io};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "introsort")]
#[command(about = "Sort a file of integers with a parallel introsort", long_about = None)]
struct Args {
    /// Comma/newline separated integers to sort
    #[arg(short, long, default_value = "in.csv")]
    input: PathBuf,

    /// Destination file, one integer per line
    #[arg(short, long, default_value = "out.csv")]
    output: PathBuf,

    /// Largest range span (high - low) finished with insertion sort
    #[arg(long, default_value_t = introsort::core::INSERTION_SORT_THRESHOLD)]
    insertion_threshold: usize,

    /// Largest heap sifted without spawning tasks
    #[arg(long, default_value_t = introsort::core::PARALLEL_HEAPIFY_THRESHOLD)]
    parallel_threshold: usize,

    /// Depth budget multiplier applied to floor(log2(n))
    #[arg(long, default_value_t = introsort::core::DEPTH_FACTOR)]
    depth_factor: usize,

    /// Worker threads for the parallel heap sort (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("introsort=info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the rayon thread pool")?;
    }

    let config = SortConfig::default()
        .with_insertion_threshold(args.insertion_threshold)
        .with_parallel_threshold(args.parallel_threshold)
        .with_depth_factor(args.depth_factor);

    let mut numbers = io::read_file(&args.input)
        .with_context(|| format!("failed to read numbers from {}", args.input.display()))?;
    info!(count = numbers.len(), input = %args.input.display(), "loaded input");

    let start = Instant::now();
    introsort_with(&mut numbers, &config);
    let elapsed = start.elapsed();

    io::write_file(&args.output, &numbers)
        .with_context(|| format!("failed to write numbers to {}", args.output.display()))?;

    println!("Sorted {} numbers in {:?}.", numbers.len(), elapsed);

    match first_unsorted(&numbers) {
        None => {
            println!("The numbers are sorted correctly.");
            Ok(ExitCode::SUCCESS)
        }
        Some(index) => {
            warn!(index, "order violation");
            println!("The numbers are not sorted correctly.");
            Ok(ExitCode::FAILURE)
        }
    }
}
