//! Life Engine CLI - Run a board from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use life_engine::{
    compute::{BoardStats, LifeEngine},
    schema::{BoardConfig, Seed},
};

/// Widest board printed in full at the end of a run.
const MAX_PRINT_COLS: usize = 100;

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life board from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json   Path to board configuration file");
        eprintln!("  generations   Number of generations to run (default: 100)");
        eprintln!();
        eprintln!("Print an example configuration with --example.");
        std::process::exit(1);
    }

    let config_path = PathBuf::from(&args[1]);
    let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    let config = BoardConfig::load(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading config: {}", e);
        std::process::exit(1);
    });

    // Load or create seed
    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        Seed::from_json_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        })
    } else {
        log::info!("No seed file at {}, using random fill", seed_path.display());
        Seed::random(0.3, 42)
    };

    let mut engine = LifeEngine::from_seed(&config, &seed).unwrap_or_else(|e| {
        eprintln!("Error creating board: {}", e);
        std::process::exit(1);
    });

    println!("Game of Life");
    println!("============");
    println!("Board: {}x{}", config.cols, config.rows);
    println!("Generations: {}", generations);
    println!();
    println!("Initial: {}", BoardStats::from_engine(&engine));
    println!();

    println!("Running...");
    let start = Instant::now();

    for i in 0..generations {
        engine.advance();

        // Print progress every 10%
        if (i + 1) % (generations / 10).max(1) == 0 {
            let stats = BoardStats::from_engine(&engine);
            let elapsed = start.elapsed().as_secs_f32();
            println!(
                "  {} ({:.1} generations/s)",
                stats,
                (i + 1) as f32 / elapsed
            );
        }
    }

    let elapsed = start.elapsed();

    println!();
    println!("Final: {}", BoardStats::from_engine(&engine));
    if config.cols <= MAX_PRINT_COLS {
        println!();
        print!("{}", engine.to_text());
    }
    println!();
    println!(
        "Time: {:.2}s ({:.1} generations/s)",
        elapsed.as_secs_f32(),
        generations as f32 / elapsed.as_secs_f32()
    );
}

fn print_example_config() {
    let config = BoardConfig::default();
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
