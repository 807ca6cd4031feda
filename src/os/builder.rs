/*!
 * Operating System Builder
 * Builder pattern for OperatingSystem construction
 */

use super::OperatingSystem;
use crate::core::errors::{SimulationError, SimulationResult};
use crate::core::limits::{is_probability, DEFAULT_IO_COMPLETION_PROBABILITY};
use crate::scheduler::{Scheduler, SchedulerPolicy};

/// Builder for OperatingSystem
#[derive(Debug, Clone)]
pub struct OperatingSystemBuilder {
    scheduler: Scheduler,
    io_completion_probability: f64,
}

impl OperatingSystemBuilder {
    pub fn new() -> Self {
        Self {
            scheduler: Scheduler::default(),
            io_completion_probability: DEFAULT_IO_COMPLETION_PROBABILITY,
        }
    }

    /// Select the scheduling policy
    pub fn with_policy(mut self, policy: SchedulerPolicy) -> Self {
        self.scheduler = Scheduler::new(policy);
        self
    }

    pub fn with_scheduler(mut self, scheduler: Scheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Per-tick chance that each blocked process finishes its I/O
    pub fn with_io_completion_probability(mut self, probability: f64) -> Self {
        self.io_completion_probability = probability;
        self
    }

    pub fn build(self) -> SimulationResult<OperatingSystem> {
        if !is_probability(self.io_completion_probability) {
            return Err(SimulationError::probability(
                "io_completion_probability",
                self.io_completion_probability,
            ));
        }
        Ok(OperatingSystem::from_parts(
            self.scheduler,
            self.io_completion_probability,
        ))
    }
}

impl Default for OperatingSystemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let os = OperatingSystemBuilder::new().build().unwrap();
        assert_eq!(os.policy(), SchedulerPolicy::PreemptiveShortestJobFirst);
        assert_eq!(
            os.io_completion_probability(),
            DEFAULT_IO_COMPLETION_PROBABILITY
        );
    }

    #[test]
    fn test_custom_configuration() {
        let os = OperatingSystem::builder()
            .with_policy(SchedulerPolicy::Fifo)
            .with_io_completion_probability(0.5)
            .build()
            .unwrap();
        assert_eq!(os.policy(), SchedulerPolicy::Fifo);
        assert_eq!(os.io_completion_probability(), 0.5);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let result = OperatingSystem::builder()
            .with_io_completion_probability(1.2)
            .build();
        assert!(matches!(
            result,
            Err(SimulationError::ProbabilityOutOfRange { .. })
        ));
    }
}
