//! Wall-clock comparison of the batching strategies.
//!
//! Every timed call drains the strategy completely; the lazy strategies would
//! otherwise only be timed building their adapter.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use log::debug;

use crate::batching::{batch_iterator, batched, chunked, grouper, Incomplete};
use crate::config::BenchConfig;

// ============================================================================
// Strategies under test
// ============================================================================

/// One batching strategy, wrapped so it can be timed.
///
/// `run` splits the input into batches of the given size and returns the
/// number of batches it produced.
#[derive(Debug, Clone, Copy)]
pub struct Strategy {
    pub label: &'static str,
    pub run: fn(&[usize], usize) -> usize,
}

fn run_chunked(data: &[usize], n: usize) -> usize {
    chunked(data.iter().copied(), n).len()
}

fn run_batch_iterator(data: &[usize], n: usize) -> usize {
    batch_iterator(data.iter().copied(), n).count()
}

fn run_batched(data: &[usize], n: usize) -> usize {
    batched(data.iter().copied(), n).count()
}

fn run_grouper(data: &[usize], n: usize) -> usize {
    grouper(data.iter().copied(), n, Incomplete::Fill(0))
        .inspect(|group| debug_assert!(group.is_ok(), "fill policy failed: {group:?}"))
        .filter(Result::is_ok)
        .count()
}

/// The strategies, in reporting order.
pub const STRATEGIES: [Strategy; 4] = [
    Strategy {
        label: "chunked",
        run: run_chunked,
    },
    Strategy {
        label: "Batch iterator",
        run: run_batch_iterator,
    },
    Strategy {
        label: "batched",
        run: run_batched,
    },
    Strategy {
        label: "Grouper",
        run: run_grouper,
    },
];

// ============================================================================
// Timing
// ============================================================================

#[derive(Debug, Clone)]
pub struct Timing {
    pub label: &'static str,
    pub elapsed: Duration,
    /// Batches produced by a single run.
    pub batches: usize,
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} result {:.6}", self.label, self.elapsed.as_secs_f64())
    }
}

pub fn time_strategy(strategy: &Strategy, data: &[usize], config: &BenchConfig) -> Timing {
    let mut batches = 0;
    let start = Instant::now();
    for _ in 0..config.repetitions {
        batches = black_box((strategy.run)(black_box(data), config.batch_size));
    }
    let elapsed = start.elapsed();

    debug!(
        "{}: {} runs over {} items in {:?} ({} batches per run)",
        strategy.label,
        config.repetitions,
        data.len(),
        elapsed,
        batches
    );

    Timing {
        label: strategy.label,
        elapsed,
        batches,
    }
}

/// Times every strategy in [`STRATEGIES`] over `config.input()`.
pub fn run(config: &BenchConfig) -> Vec<Timing> {
    let data = config.input();
    STRATEGIES
        .iter()
        .map(|strategy| time_strategy(strategy, &data, config))
        .collect()
}
