/*!
 * Scheduler Module
 * Scheduling policies and their static dispatch
 */

mod fifo;
mod psjf;
pub mod traits;
pub mod types;

pub use fifo::FifoScheduler;
pub use psjf::PsjfScheduler;
pub use traits::SchedulingStrategy;
pub use types::SchedulerPolicy;

use crate::process::Process;

/// The closed set of scheduling policies
#[derive(Debug, Clone, Copy)]
pub enum Scheduler {
    Fifo(FifoScheduler),
    Psjf(PsjfScheduler),
}

impl Scheduler {
    pub fn new(policy: SchedulerPolicy) -> Self {
        match policy {
            SchedulerPolicy::Fifo => Self::Fifo(FifoScheduler),
            SchedulerPolicy::PreemptiveShortestJobFirst => Self::Psjf(PsjfScheduler),
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(SchedulerPolicy::default())
    }
}

impl From<SchedulerPolicy> for Scheduler {
    fn from(policy: SchedulerPolicy) -> Self {
        Self::new(policy)
    }
}

impl SchedulingStrategy for Scheduler {
    fn schedule<'a>(
        &self,
        ready: &'a [Process],
        running: Option<&'a Process>,
    ) -> Option<&'a Process> {
        match self {
            Self::Fifo(s) => s.schedule(ready, running),
            Self::Psjf(s) => s.schedule(ready, running),
        }
    }

    fn is_preemptive(&self) -> bool {
        match self {
            Self::Fifo(s) => s.is_preemptive(),
            Self::Psjf(s) => s.is_preemptive(),
        }
    }

    fn policy(&self) -> SchedulerPolicy {
        match self {
            Self::Fifo(s) => s.policy(),
            Self::Psjf(s) => s.policy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_policy() {
        let fifo = Scheduler::new(SchedulerPolicy::Fifo);
        assert!(!fifo.is_preemptive());
        assert_eq!(fifo.policy(), SchedulerPolicy::Fifo);

        let psjf = Scheduler::default();
        assert!(psjf.is_preemptive());
        assert_eq!(psjf.policy(), SchedulerPolicy::PreemptiveShortestJobFirst);
    }

    #[test]
    fn test_policies_disagree_on_preemption() {
        let ready = vec![Process::for_test(1, 1, 1, 0)];
        let running = Process::for_test(0, 0, 5, 1);

        let fifo = Scheduler::from(SchedulerPolicy::Fifo);
        let psjf = Scheduler::from(SchedulerPolicy::PreemptiveShortestJobFirst);
        assert_eq!(fifo.schedule(&ready, Some(&running)).unwrap().pid(), 0);
        assert_eq!(psjf.schedule(&ready, Some(&running)).unwrap().pid(), 1);
    }
}
