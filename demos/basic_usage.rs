//! Example: Basic Hamming Distance Calculation
//!
//! Demonstrates how to:
//! 1. Build a calculator from two word vectors
//! 2. Handle the length-mismatch error
//! 3. Run a generated workload under each strategy
//!
//! Set `RUST_LOG=fastcalc=debug` to see library events.
//! An optional first argument names a JSON `CalculatorConfig` file.

use anyhow::Context;
use fastcalc::utils::{generate_test_data, DEFAULT_DATA_SIZE, DEFAULT_SEED};
use fastcalc::{CalcStrategy, CalculatorConfig, HammingDistanceCalculator};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== {} ===\n", fastcalc::version());

    // ========================================
    // PART 1: Known words
    // ========================================
    let calc = HammingDistanceCalculator::new(
        vec![0x1234567890ABCDEF, 0xFFFFFFFFFFFFFFFF, 0x0000000000000000],
        vec![0xFEDCBA0987654321, 0x0000000000000000, 0xFFFFFFFFFFFFFFFF],
    )?;
    let per_pair: Vec<u32> = calc.pair_distances().collect();
    println!("Pairs: {}", calc.size());
    println!("Per-pair distances: {:?}", per_pair);
    println!("Total: {}\n", calc.calculate());

    // ========================================
    // PART 2: Length mismatch
    // ========================================
    match HammingDistanceCalculator::new(vec![1, 2, 3], vec![1, 2]) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("Rejected: {}\n", e),
    }

    // ========================================
    // PART 3: Generated workload
    // ========================================
    let config = match std::env::args().nth(1) {
        Some(path) => CalculatorConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => CalculatorConfig::default(),
    };

    let (a, b) = generate_test_data(DEFAULT_DATA_SIZE, DEFAULT_SEED);
    let calc = HammingDistanceCalculator::new(a, b)?;
    println!("Data size: {}", calc.size());
    println!("Configured ({:?}): {}", config.strategy, calc.calculate_with_config(&config));

    for strategy in [
        CalcStrategy::Sequential,
        CalcStrategy::Batched,
        CalcStrategy::Parallel,
    ] {
        let start = std::time::Instant::now();
        let total = calc.calculate_with(strategy);
        println!(
            "{:<10} total={} in {:?}",
            format!("{:?}", strategy),
            total,
            start.elapsed()
        );
    }

    Ok(())
}
