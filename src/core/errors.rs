/*!
 * Error Types
 * Configuration errors with thiserror, miette, and serde support
 *
 * Internal invariant violations are not represented here: a process missing
 * from the queue it is expected in means the simulation state is corrupt, and
 * those paths panic instead of returning an error.
 */

use crate::core::types::Pid;
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Simulation operation result
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Errors raised before any tick executes
#[derive(Error, Debug, Clone, PartialEq, Serialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Process {pid} has negative duration {duration}")]
    #[diagnostic(
        code(config::negative_duration),
        help("Durations are tick counts and must be positive.")
    )]
    NegativeDuration { pid: Pid, duration: i64 },

    #[error("Process {0} has zero duration")]
    #[diagnostic(
        code(config::zero_duration),
        help("A process must require at least one tick of execution.")
    )]
    ZeroDuration(Pid),

    #[error("Process {pid} has negative start time {start_time}")]
    #[diagnostic(
        code(config::negative_start_time),
        help("Start times are ticks counted from the beginning of the run.")
    )]
    NegativeStartTime { pid: Pid, start_time: i64 },

    #[error("{field} must be within [0, 1], got {value}")]
    #[diagnostic(
        code(config::probability_out_of_range),
        help("Probabilities are finite values between 0.0 and 1.0 inclusive.")
    )]
    ProbabilityOutOfRange { field: String, value: f64 },

    #[error("Process id {0} submitted more than once")]
    #[diagnostic(
        code(config::duplicate_pid),
        help("Every process in a population needs a unique id.")
    )]
    DuplicatePid(Pid),

    #[error("Invalid run length: {0}")]
    #[diagnostic(
        code(config::invalid_run_length),
        help("A run must last at least one tick.")
    )]
    InvalidRunLength(u64),

    #[error("Invalid scheduling policy '{0}'. Valid: fifo, psjf")]
    #[diagnostic(
        code(config::invalid_policy),
        help("Use 'fifo' or 'psjf' (aliases: fcfs, srtf, preemptive_sjf).")
    )]
    InvalidPolicy(String),

    #[error("Invalid value for {name}: {value}")]
    #[diagnostic(
        code(config::invalid_env_var),
        help("Check the environment variable's format.")
    )]
    InvalidEnvVar { name: String, value: String },
}

impl SimulationError {
    pub(crate) fn probability(field: &str, value: f64) -> Self {
        Self::ProbabilityOutOfRange {
            field: field.to_string(),
            value,
        }
    }
}
