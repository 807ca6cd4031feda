/*!
 * Process Types
 * Lifecycle states, per-tick actions, and caller-supplied descriptors
 */

use crate::core::types::Pid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process lifecycle state
///
/// Each state owns exactly one queue in the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Submitted but not yet arrived
    New,
    /// Arrived and waiting for the CPU
    Ready,
    /// Occupying the single simulated CPU
    Running,
    /// Waiting for I/O to complete
    Blocked,
    /// Finished all of its work
    Terminated,
}

impl ProcessState {
    pub const COUNT: usize = 5;

    /// All states in declaration order
    pub const ALL: [ProcessState; Self::COUNT] = [
        ProcessState::New,
        ProcessState::Ready,
        ProcessState::Running,
        ProcessState::Blocked,
        ProcessState::Terminated,
    ];

    /// Index of this state's queue
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Self::New => 0,
            Self::Ready => 1,
            Self::Running => 2,
            Self::Blocked => 3,
            Self::Terminated => 4,
        }
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Blocked => "blocked",
            Self::Terminated => "terminated",
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effect a process's execution this tick requests of the operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessAction {
    /// Consume one tick of CPU
    Run,
    /// Leave the CPU and wait for I/O
    IssueIo,
    /// Leave the system; inferred by the engine once all work is done
    Terminate,
}

impl fmt::Display for ProcessAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Run => "run",
            Self::IssueIo => "issue_io",
            Self::Terminate => "terminate",
        };
        f.write_str(name)
    }
}

/// Caller-supplied description of a process
///
/// Integers are signed so that sign errors surface as configuration errors
/// instead of wrapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    pub id: Pid,
    #[serde(default)]
    pub start_time: i64,
    pub duration: i64,
    #[serde(default)]
    pub io_request_probability: f64,
}

impl ProcessDescriptor {
    #[inline]
    #[must_use]
    pub fn new(id: Pid, start_time: i64, duration: i64) -> Self {
        Self {
            id,
            start_time,
            duration,
            io_request_probability: 0.0,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_io_probability(mut self, probability: f64) -> Self {
        self.io_request_probability = probability;
        self
    }
}
