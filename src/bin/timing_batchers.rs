//! Times the four batching strategies against each other.
//!
//! Run with: cargo run --bin timing_batchers [config.toml]

use anyhow::Context;
use batching_protocols::bench;
use batching_protocols::config::BenchConfig;
use batching_protocols::logging::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = match std::env::args().nth(1) {
        Some(path) => BenchConfig::load(&path)
            .with_context(|| format!("loading benchmark config from {path}"))?,
        None => BenchConfig::default(),
    };

    println!(
        "=== Batching {} items in groups of {} ({} runs each) ===\n",
        config.input_len, config.batch_size, config.repetitions
    );

    for timing in bench::run(&config) {
        println!("{timing}");
    }

    Ok(())
}
