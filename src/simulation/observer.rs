/*!
 * Tick Observers
 * Per-tick notifications for display collaborators
 */

use super::report::{TickOutcome, TickReport};
use tracing::{debug, info};

/// Receives a report after every tick
///
/// Observers are advisory; they cannot influence the simulation.
pub trait TickObserver {
    fn on_tick(&mut self, report: &TickReport);
}

impl<F> TickObserver for F
where
    F: FnMut(&TickReport),
{
    fn on_tick(&mut self, report: &TickReport) {
        self(report)
    }
}

/// Logs each tick's outcome as a human-readable line
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl TickObserver for LogObserver {
    fn on_tick(&mut self, report: &TickReport) {
        match report.outcome {
            TickOutcome::Idle => debug!(tick = report.tick, "{}", report),
            _ => info!(tick = report.tick, "{}", report),
        }
    }
}
