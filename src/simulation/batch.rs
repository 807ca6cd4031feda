/*!
 * Parallel Runs
 * Independent seeded simulations on scoped worker threads
 */

use super::config::SimulationConfig;
use super::engine::SimulationEngine;
use super::report::RunReport;
use crate::core::errors::{SimulationError, SimulationResult};
use crate::process::ProcessDescriptor;
use std::num::NonZeroUsize;
use std::thread;
use tracing::debug;

/// Run the same population once per seed, in parallel
///
/// Every run owns its own engine and operating system; nothing mutable is
/// shared between threads. Reports come back in seed order.
pub fn run_parallel(
    config: &SimulationConfig,
    descriptors: &[ProcessDescriptor],
    seeds: &[u64],
    duration: u64,
) -> SimulationResult<Vec<RunReport>> {
    config.validate()?;
    if duration == 0 {
        return Err(SimulationError::InvalidRunLength(duration));
    }
    if seeds.is_empty() {
        return Ok(Vec::new());
    }

    let workers = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(4)
        .min(seeds.len());
    let chunk_size = seeds.len().div_ceil(workers);
    debug!(runs = seeds.len(), workers, "Starting parallel runs");

    let results: Vec<SimulationResult<RunReport>> = thread::scope(|scope| {
        let handles: Vec<_> = seeds
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|&seed| {
                            let config = config.clone().with_seed(seed);
                            SimulationEngine::new(&config, descriptors)?.run(duration)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| match handle.join() {
                Ok(results) => results,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    results.into_iter().collect()
}
