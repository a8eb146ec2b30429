//! Reward wheel balance simulator CLI.
//!
//! Refill the wheel thousands of times per zone and report the resulting
//! tier, quantity and bomb distributions.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # Default: 1000 passes, zones 1-100
//!   cargo run --bin simulate -- -n 200 -z 1 30     # 200 passes for zones 1-30
//!   cargo run --bin simulate -- --seed 42          # Reproducible run

use reward_wheel::config::CatalogFile;
use reward_wheel::rewards::{standard_rewards, RewardCatalogIndex};
use reward_wheel::simulator::{run_simulation, SimConfig};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (config, catalog_path) = parse_args(&args);

    let catalog = match &catalog_path {
        Some(path) => CatalogFile::load(path).and_then(CatalogFile::into_index),
        None => RewardCatalogIndex::build(standard_rewards()),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Failed to load reward catalog: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              REWARD WHEEL SIMULATOR                           ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Passes/Zone:    {}", config.passes_per_zone);
    println!("  Zones:          {}-{}", config.start_zone, config.end_zone);
    println!("  Slots:          {}", config.slot_count);
    println!("  Safe Interval:  {}", config.safe_zone_interval);
    println!("  Super Interval: {}", config.super_zone_interval);
    match &catalog_path {
        Some(path) => println!("  Catalog:        {} ({} rewards)", path, catalog.len()),
        None => println!("  Catalog:        built-in ({} rewards)", catalog.len()),
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config, &catalog) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "wheel_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write JSON report: {e}");
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> (SimConfig, Option<String>) {
    let mut config = SimConfig::default();
    let mut catalog_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--passes" => {
                if i + 1 < args.len() {
                    config.passes_per_zone = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-z" | "--zones" => {
                if i + 2 < args.len() {
                    config.start_zone = args[i + 1].parse().unwrap_or(1).max(1);
                    config.end_zone = args[i + 2].parse().unwrap_or(100);
                    i += 2;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--slots" => {
                if i + 1 < args.len() {
                    config.slot_count = args[i + 1].parse().unwrap_or(8);
                    i += 1;
                }
            }
            "--safe" => {
                if i + 1 < args.len() {
                    config.safe_zone_interval = args[i + 1].parse().unwrap_or(5);
                    i += 1;
                }
            }
            "--super" => {
                if i + 1 < args.len() {
                    config.super_zone_interval = args[i + 1].parse().unwrap_or(30);
                    i += 1;
                }
            }
            "--catalog" => {
                if i + 1 < args.len() {
                    catalog_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config.quick();
            }
            _ => {}
        }
        i += 1;
    }

    (config, catalog_path)
}

fn print_help() {
    println!("Reward Wheel Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --passes <N>       Wheel refills per zone (default: 1000)");
    println!("    -z, --zones <A> <B>    Simulate zones A through B (default: 1 100)");
    println!("    -s, --seed <S>         Random seed for reproducibility");
    println!("    --slots <N>            Slots on the wheel (default: 8)");
    println!("    --safe <N>             Safe zone interval, 0 disables (default: 5)");
    println!("    --super <N>            Super zone interval, 0 disables (default: 30)");
    println!("    --catalog <PATH>       Load rewards from a JSON catalog file");
    println!("    -v, --verbose          Per-zone progress output");
    println!("    --json                 Save JSON report");
    println!("    --quick                Quick test (100 passes, zones 1-30)");
    println!("    -h, --help             Show this help");
    println!();
    println!("Set RUST_LOG=debug for per-pass engine logging.");
}
