/*!
 * FIFO Scheduler
 * Non-preemptive, earliest arrival first
 */

use super::traits::SchedulingStrategy;
use super::types::SchedulerPolicy;
use crate::process::Process;

/// First-in first-out scheduling
///
/// A running process keeps the CPU until it blocks or terminates. Otherwise
/// the ready process with the smallest start time wins, ties going to queue
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoScheduler;

impl SchedulingStrategy for FifoScheduler {
    fn schedule<'a>(
        &self,
        ready: &'a [Process],
        running: Option<&'a Process>,
    ) -> Option<&'a Process> {
        if running.is_some() {
            return running;
        }
        // min_by_key keeps the first of equal minima
        ready.iter().min_by_key(|p| p.start_time())
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn policy(&self) -> SchedulerPolicy {
        SchedulerPolicy::Fifo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(FifoScheduler.schedule(&[], None).is_none());
    }

    #[test]
    fn test_running_never_preempted() {
        let ready = vec![Process::for_test(1, 0, 1, 0)];
        let running = Process::for_test(2, 5, 10, 0);
        let chosen = FifoScheduler.schedule(&ready, Some(&running)).unwrap();
        assert_eq!(chosen.pid(), 2);
    }

    #[test]
    fn test_earliest_start_first() {
        let ready = vec![
            Process::for_test(1, 4, 3, 0),
            Process::for_test(2, 1, 9, 0),
            Process::for_test(3, 2, 1, 0),
        ];
        assert_eq!(FifoScheduler.schedule(&ready, None).unwrap().pid(), 2);
    }

    #[test]
    fn test_ties_follow_queue_order() {
        let ready = vec![
            Process::for_test(7, 3, 3, 0),
            Process::for_test(4, 3, 1, 0),
        ];
        assert_eq!(FifoScheduler.schedule(&ready, None).unwrap().pid(), 7);
    }
}
