//! Headless autopilot simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                   # Default: 1000 runs
//!   cargo run --bin simulate -- -n 100 -v      # 100 runs, per-run output
//!   cargo run --bin simulate -- --seed 42      # Reproducible batch

use flap::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    if config.verbosity >= 1 {
        println!("flap autopilot simulator");
        println!();
        println!("Configuration:");
        println!("  Runs:       {}", config.num_runs);
        println!("  Max Ticks:  {}", config.max_ticks_per_run);
        println!("  Frame:      {} ms", config.frame_ms);
        if let Some(seed) = config.seed {
            println!("  Seed:       {}", seed);
        }
        println!();
    }

    let report = run_simulation(&config);

    println!("{}", report.to_text());
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run = args[i + 1].parse().unwrap_or(100_000);
                    i += 1;
                }
            }
            "-v" | "--verbose" => config.verbosity = 2,
            "-q" | "--quiet" => config.verbosity = 0,
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --runs N    Number of runs (default 1000)");
    println!("  -s, --seed N    Seed for reproducible batches");
    println!("  -t, --ticks N   Max ticks per run (default 100000)");
    println!("  -v, --verbose   Per-run output");
    println!("  -q, --quiet     Suppress the header");
    println!("  -h, --help      Show this help");
}
