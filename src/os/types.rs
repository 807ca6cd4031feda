/*!
 * Operating System Types
 * Scheduling decision records and counters
 */

use crate::core::types::Pid;
use serde::Serialize;

/// A change of occupant on the CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContextSwitch {
    /// Process displaced back to Ready, `None` when the CPU was idle
    pub from: Option<Pid>,
    pub to: Pid,
    /// A still-runnable process lost the CPU
    pub preempted: bool,
}

/// Operating system counters, cumulative over the OS lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OsStats {
    pub admitted: u64,
    pub context_switches: u64,
    pub preemptions: u64,
    pub io_requests: u64,
    pub io_completions: u64,
    pub terminated: u64,
}

impl OsStats {
    /// Counters accumulated after the `earlier` snapshot was taken
    pub fn since(&self, earlier: &OsStats) -> OsStats {
        OsStats {
            admitted: self.admitted - earlier.admitted,
            context_switches: self.context_switches - earlier.context_switches,
            preemptions: self.preemptions - earlier.preemptions,
            io_requests: self.io_requests - earlier.io_requests,
            io_completions: self.io_completions - earlier.io_completions,
            terminated: self.terminated - earlier.terminated,
        }
    }
}
