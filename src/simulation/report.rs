/*!
 * Simulation Reports
 * What happened on each tick and across a whole run
 */

use crate::core::types::{Pid, Tick};
use crate::os::{ContextSwitch, OsStats};
use serde::Serialize;
use std::fmt;

/// Result of executing the CPU for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TickOutcome {
    /// Nothing to run
    Idle,
    /// A process ran one tick and still has work left
    Ran { pid: Pid, remaining: u64 },
    /// The running process left the CPU to wait for I/O
    IssuedIo { pid: Pid },
    /// A process ran its final tick and terminated
    Completed { pid: Pid },
}

impl TickOutcome {
    /// The process that held the CPU this tick
    #[inline]
    pub fn pid(&self) -> Option<Pid> {
        match *self {
            Self::Idle => None,
            Self::Ran { pid, .. } | Self::IssuedIo { pid } | Self::Completed { pid } => Some(pid),
        }
    }

    /// Whether the process was granted a tick of execution
    #[inline]
    pub fn executed(&self) -> bool {
        matches!(self, Self::Ran { .. } | Self::Completed { .. })
    }
}

/// Everything the engine did during one tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickReport {
    pub tick: Tick,
    pub admitted: Vec<Pid>,
    pub unblocked: Vec<Pid>,
    pub context_switch: Option<ContextSwitch>,
    pub outcome: TickOutcome,
}

impl fmt::Display for TickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            TickOutcome::Idle => write!(f, "CPU idle at time {}", self.tick),
            TickOutcome::Ran { pid, remaining } => write!(
                f,
                "Process {} ran at time {}, {} left",
                pid, self.tick, remaining
            ),
            TickOutcome::IssuedIo { pid } => {
                write!(f, "Process {} issued IO at time {}", pid, self.tick)
            }
            TickOutcome::Completed { pid } => {
                write!(f, "Process {} complete at time {}", pid, self.tick)
            }
        }
    }
}

/// Summary of a full run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub ticks: Vec<TickReport>,
    pub stats: OsStats,
    pub idle_ticks: u64,
    /// Terminated processes in completion order
    pub completed: Vec<Pid>,
}

impl RunReport {
    pub(crate) fn new(ticks: Vec<TickReport>, stats: OsStats) -> Self {
        let idle_ticks = ticks
            .iter()
            .filter(|t| t.outcome == TickOutcome::Idle)
            .count() as u64;
        let completed = ticks
            .iter()
            .filter_map(|t| match t.outcome {
                TickOutcome::Completed { pid } => Some(pid),
                _ => None,
            })
            .collect();
        Self {
            ticks,
            stats,
            idle_ticks,
            completed,
        }
    }

    /// Which process held the CPU on each tick
    pub fn timeline(&self) -> Vec<Option<Pid>> {
        self.ticks.iter().map(|t| t.outcome.pid()).collect()
    }

    /// Ticks on which `pid` was granted execution
    pub fn executed_ticks_of(&self, pid: Pid) -> Vec<Tick> {
        self.ticks
            .iter()
            .filter(|t| t.outcome.executed() && t.outcome.pid() == Some(pid))
            .map(|t| t.tick)
            .collect()
    }

    pub fn completion_tick(&self, pid: Pid) -> Option<Tick> {
        self.ticks
            .iter()
            .find(|t| t.outcome == TickOutcome::Completed { pid })
            .map(|t| t.tick)
    }
}
