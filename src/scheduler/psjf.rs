/*!
 * Preemptive Shortest Job First Scheduler
 * Smallest remaining work wins, re-evaluated every tick
 */

use super::traits::SchedulingStrategy;
use super::types::SchedulerPolicy;
use crate::process::Process;

/// Preemptive shortest-job-first scheduling
///
/// Candidates are the ready queue plus the running process. Ties keep the
/// running process on the CPU; among ready processes the earliest queued wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct PsjfScheduler;

impl SchedulingStrategy for PsjfScheduler {
    fn schedule<'a>(
        &self,
        ready: &'a [Process],
        running: Option<&'a Process>,
    ) -> Option<&'a Process> {
        let mut best = running;
        for candidate in ready {
            match best {
                Some(current) if current.remaining() <= candidate.remaining() => {}
                _ => best = Some(candidate),
            }
        }
        best
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn policy(&self) -> SchedulerPolicy {
        SchedulerPolicy::PreemptiveShortestJobFirst
    }
}
