/*!
 * Scheduler Simulator Library
 * Discrete-time simulation of a single-core CPU scheduler
 */

pub mod core;
pub mod monitoring;
pub mod os;
pub mod process;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use crate::core::{Pid, SimulationError, SimulationResult, Tick};
pub use monitoring::init_tracing;
pub use os::{ContextSwitch, OperatingSystem, OperatingSystemBuilder, OsStats, StateQueues};
pub use process::{Process, ProcessAction, ProcessDescriptor, ProcessState};
pub use scheduler::{FifoScheduler, PsjfScheduler, Scheduler, SchedulerPolicy, SchedulingStrategy};
pub use simulation::{
    run_parallel, LogObserver, RunReport, SimulationConfig, SimulationEngine, TickObserver,
    TickOutcome, TickReport,
};
