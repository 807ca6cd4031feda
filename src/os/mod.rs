/*!
 * Operating System
 * Owns the per-state process queues and the scheduler, and exposes the queue
 * transitions the simulation engine drives each tick
 */

mod builder;
mod operations;
pub mod queues;
pub mod types;

pub use builder::OperatingSystemBuilder;
pub use queues::StateQueues;
pub use types::{ContextSwitch, OsStats};

use crate::core::errors::SimulationResult;
use crate::core::limits::DEFAULT_IO_COMPLETION_PROBABILITY;
use crate::core::types::Pid;
use crate::process::{validate_unique_ids, Process, ProcessState};
use crate::scheduler::{Scheduler, SchedulerPolicy, SchedulingStrategy};
use tracing::info;

/// Simulated single-core operating system
#[derive(Debug, Clone)]
pub struct OperatingSystem {
    scheduler: Scheduler,
    queues: StateQueues,
    io_completion_probability: f64,
    stats: OsStats,
}

impl OperatingSystem {
    /// Create an operating system with the default I/O completion probability
    pub fn new(scheduler: Scheduler) -> Self {
        Self::from_parts(scheduler, DEFAULT_IO_COMPLETION_PROBABILITY)
    }

    pub fn builder() -> OperatingSystemBuilder {
        OperatingSystemBuilder::new()
    }

    pub(super) fn from_parts(scheduler: Scheduler, io_completion_probability: f64) -> Self {
        info!(
            policy = %scheduler.policy(),
            io_completion_probability,
            "Operating system initialized"
        );
        Self {
            scheduler,
            queues: StateQueues::new(),
            io_completion_probability,
            stats: OsStats::default(),
        }
    }

    /// Submit processes to the New queue in order
    ///
    /// Rejects the whole batch if any id is already known or repeated.
    pub fn add_new_processes(&mut self, processes: Vec<Process>) -> SimulationResult<()> {
        validate_unique_ids(
            self.queues
                .iter()
                .chain(processes.iter())
                .map(Process::pid),
        )?;
        self.enqueue_new(processes);
        Ok(())
    }

    /// Submit an already validated population
    pub(crate) fn enqueue_new(&mut self, processes: Vec<Process>) {
        let count = processes.len();
        for process in processes {
            self.queues.push(ProcessState::New, process);
        }
        info!(count, "Processes submitted");
    }

    #[inline]
    pub fn running_process(&self) -> Option<&Process> {
        self.queues.running()
    }

    #[inline]
    pub(crate) fn running_process_mut(&mut self) -> Option<&mut Process> {
        self.queues.running_mut()
    }

    /// Processes currently in `state`, in queue order
    #[inline]
    pub fn queue(&self, state: ProcessState) -> &[Process] {
        self.queues.queue(state)
    }

    pub fn state_of(&self, pid: Pid) -> Option<ProcessState> {
        self.queues.state_of(pid)
    }

    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.queues.find(pid)
    }

    /// Every submitted process
    pub fn processes(&self) -> impl Iterator<Item = &Process> {
        self.queues.iter()
    }

    /// Number of submitted processes
    pub fn population(&self) -> usize {
        self.queues.total()
    }

    pub fn stats(&self) -> OsStats {
        self.stats
    }

    pub fn policy(&self) -> SchedulerPolicy {
        self.scheduler.policy()
    }

    pub fn io_completion_probability(&self) -> f64 {
        self.io_completion_probability
    }

    /// Panic if the queue partition is corrupt
    pub fn assert_consistent(&self) {
        self.queues.assert_consistent();
    }
}

impl Default for OperatingSystem {
    fn default() -> Self {
        Self::new(Scheduler::default())
    }
}
