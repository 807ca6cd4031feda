/*!
 * Operating System Tick Operations
 * Arrival, I/O completion, scheduling, and action handling
 */

use super::types::ContextSwitch;
use super::OperatingSystem;
use crate::core::types::{Pid, Tick};
use crate::process::{Process, ProcessAction, ProcessState};
use crate::scheduler::SchedulingStrategy;
use rand::Rng;
use tracing::{debug, info};

impl OperatingSystem {
    /// Move every New process whose start time is `tick` into Ready
    ///
    /// Simultaneous arrivals keep their submission order.
    pub fn admit_arrivals(&mut self, tick: Tick) -> Vec<Pid> {
        let arriving: Vec<Pid> = self
            .queues
            .queue(ProcessState::New)
            .iter()
            .filter(|p| p.start_time() == tick)
            .map(Process::pid)
            .collect();

        for &pid in &arriving {
            self.queues
                .move_process(pid, ProcessState::New, ProcessState::Ready);
            info!(pid, tick, "Process arrived");
        }
        self.stats.admitted += arriving.len() as u64;
        arriving
    }

    /// Give every blocked process an independent chance to finish its I/O
    pub fn resolve_io_completions<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Pid> {
        let probability = self.io_completion_probability;
        let completed: Vec<Pid> = self
            .queues
            .queue(ProcessState::Blocked)
            .iter()
            .map(Process::pid)
            .filter(|_| rng.gen::<f64>() < probability)
            .collect();

        for &pid in &completed {
            self.queues
                .move_process(pid, ProcessState::Blocked, ProcessState::Ready);
            debug!(pid, "I/O completed");
        }
        self.stats.io_completions += completed.len() as u64;
        completed
    }

    /// Ask the scheduler who runs this tick and switch if needed
    ///
    /// Returns the switch performed, or `None` when the CPU keeps its
    /// occupant or there is nothing to run.
    pub fn schedule_next(&mut self) -> Option<ContextSwitch> {
        if self.queues.is_empty(ProcessState::Ready) && self.queues.is_empty(ProcessState::Running)
        {
            return None;
        }

        let current = self.queues.running().map(Process::pid);
        let Some(chosen) = self
            .scheduler
            .schedule(self.queues.queue(ProcessState::Ready), self.queues.running())
            .map(Process::pid)
        else {
            panic!(
                "{} scheduler chose nothing with {} ready processes",
                self.scheduler.policy(),
                self.queues.len(ProcessState::Ready)
            );
        };

        if Some(chosen) == current {
            return None;
        }

        let switch = self.context_switch(current, chosen);
        debug_assert!(self.queues.len(ProcessState::Running) == 1);
        Some(switch)
    }

    /// Apply the queue effect of the running process's action
    ///
    /// Returns the running pid the action applied to.
    pub fn handle_action(&mut self, action: ProcessAction) -> Option<Pid> {
        let pid = self.queues.running().map(Process::pid)?;
        match action {
            ProcessAction::Run => {}
            ProcessAction::IssueIo => {
                self.queues
                    .move_process(pid, ProcessState::Running, ProcessState::Blocked);
                self.stats.io_requests += 1;
                debug!(pid, "Process blocked on I/O");
            }
            ProcessAction::Terminate => self.terminate_process(pid),
        }
        Some(pid)
    }

    /// Move the running process to Terminated
    ///
    /// # Panics
    /// If `pid` is not the running process.
    pub fn terminate_process(&mut self, pid: Pid) {
        self.queues
            .move_process(pid, ProcessState::Running, ProcessState::Terminated);
        self.stats.terminated += 1;
        info!(pid, "Process terminated");
    }

    fn context_switch(&mut self, from: Option<Pid>, to: Pid) -> ContextSwitch {
        if let Some(previous) = from {
            self.queues
                .move_process(previous, ProcessState::Running, ProcessState::Ready);
            self.stats.preemptions += 1;
        }
        self.queues
            .move_process(to, ProcessState::Ready, ProcessState::Running);
        self.stats.context_switches += 1;

        debug!(from = ?from, to, policy = %self.scheduler.policy(), "Context switch");
        ContextSwitch {
            from,
            to,
            preempted: from.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Scheduler, SchedulerPolicy};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn os_with(policy: SchedulerPolicy, processes: Vec<Process>) -> OperatingSystem {
        let mut os = OperatingSystem::new(Scheduler::new(policy));
        os.add_new_processes(processes).unwrap();
        os
    }

    fn pids(os: &OperatingSystem, state: ProcessState) -> Vec<Pid> {
        os.queue(state).iter().map(Process::pid).collect()
    }

    #[test]
    fn test_admit_only_matching_start_time() {
        let mut os = os_with(
            SchedulerPolicy::Fifo,
            vec![
                Process::for_test(1, 0, 3, 0),
                Process::for_test(2, 2, 3, 0),
                Process::for_test(3, 0, 3, 0),
            ],
        );

        assert_eq!(os.admit_arrivals(0), vec![1, 3]);
        assert_eq!(pids(&os, ProcessState::Ready), vec![1, 3]);
        assert_eq!(pids(&os, ProcessState::New), vec![2]);
        assert!(os.admit_arrivals(1).is_empty());
        assert_eq!(os.admit_arrivals(2), vec![2]);
        assert_eq!(os.stats().admitted, 3);
    }

    #[test]
    fn test_schedule_next_noop_when_empty() {
        let mut os = os_with(SchedulerPolicy::Fifo, vec![Process::for_test(1, 5, 3, 0)]);
        assert!(os.schedule_next().is_none());
        assert!(os.running_process().is_none());
    }

    #[test]
    fn test_dispatch_onto_idle_cpu() {
        let mut os = os_with(SchedulerPolicy::Fifo, vec![Process::for_test(1, 0, 3, 0)]);
        os.admit_arrivals(0);

        let switch = os.schedule_next().unwrap();
        assert_eq!(
            switch,
            ContextSwitch {
                from: None,
                to: 1,
                preempted: false
            }
        );
        assert_eq!(pids(&os, ProcessState::Running), vec![1]);
        assert!(os.queue(ProcessState::Ready).is_empty());

        // Same choice next time is not a switch
        assert!(os.schedule_next().is_none());
        assert_eq!(os.stats().context_switches, 1);
    }

    #[test]
    fn test_preemption_requeues_at_back() {
        let mut os = os_with(
            SchedulerPolicy::PreemptiveShortestJobFirst,
            vec![
                Process::for_test(0, 0, 5, 0),
                Process::for_test(1, 1, 1, 0),
                Process::for_test(2, 1, 9, 0),
            ],
        );
        os.admit_arrivals(0);
        os.schedule_next();
        os.admit_arrivals(1);

        let switch = os.schedule_next().unwrap();
        assert_eq!(switch.from, Some(0));
        assert_eq!(switch.to, 1);
        assert!(switch.preempted);
        assert_eq!(pids(&os, ProcessState::Ready), vec![2, 0]);
        assert_eq!(os.stats().preemptions, 1);
        os.assert_consistent();
    }

    #[test]
    fn test_psjf_considers_unblocked_process() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut os = OperatingSystem::builder()
            .with_policy(SchedulerPolicy::PreemptiveShortestJobFirst)
            .with_io_completion_probability(1.0)
            .build()
            .unwrap();
        os.add_new_processes(vec![
            Process::for_test(1, 0, 2, 0),
            Process::for_test(2, 0, 6, 0),
        ])
        .unwrap();
        os.admit_arrivals(0);
        os.schedule_next();
        os.handle_action(ProcessAction::IssueIo);
        os.schedule_next();
        assert_eq!(os.running_process().map(Process::pid), Some(2));

        assert_eq!(os.resolve_io_completions(&mut rng), vec![1]);
        let switch = os.schedule_next().unwrap();
        assert_eq!(switch.from, Some(2));
        assert_eq!(switch.to, 1);
        os.assert_consistent();
    }

    #[test]
    fn test_issue_io_blocks_running() {
        let mut os = os_with(SchedulerPolicy::Fifo, vec![Process::for_test(4, 0, 3, 0)]);
        os.admit_arrivals(0);
        os.schedule_next();

        assert_eq!(os.handle_action(ProcessAction::IssueIo), Some(4));
        assert_eq!(os.state_of(4), Some(ProcessState::Blocked));
        assert!(os.running_process().is_none());
        assert_eq!(os.stats().io_requests, 1);
    }

    #[test]
    fn test_run_leaves_queues_alone() {
        let mut os = os_with(SchedulerPolicy::Fifo, vec![Process::for_test(4, 0, 3, 0)]);
        os.admit_arrivals(0);
        os.schedule_next();

        assert_eq!(os.handle_action(ProcessAction::Run), Some(4));
        assert_eq!(os.state_of(4), Some(ProcessState::Running));
    }

    #[test]
    fn test_handle_action_without_running_process() {
        let mut os = OperatingSystem::default();
        assert_eq!(os.handle_action(ProcessAction::IssueIo), None);
    }

    #[test]
    fn test_terminate_action_and_direct_termination() {
        let mut os = os_with(
            SchedulerPolicy::Fifo,
            vec![Process::for_test(1, 0, 3, 0), Process::for_test(2, 0, 3, 0)],
        );
        os.admit_arrivals(0);
        os.schedule_next();
        os.handle_action(ProcessAction::Terminate);
        assert_eq!(os.state_of(1), Some(ProcessState::Terminated));

        os.schedule_next();
        os.terminate_process(2);
        assert_eq!(pids(&os, ProcessState::Terminated), vec![1, 2]);
        assert_eq!(os.stats().terminated, 2);
    }

    #[test]
    #[should_panic(expected = "expected in running queue")]
    fn test_terminating_non_running_process_panics() {
        let mut os = os_with(SchedulerPolicy::Fifo, vec![Process::for_test(1, 0, 3, 0)]);
        os.admit_arrivals(0);
        os.terminate_process(1);
    }

    #[test]
    fn test_io_completion_extremes() {
        let mut rng = StdRng::seed_from_u64(3);

        let mut never = OperatingSystem::builder()
            .with_io_completion_probability(0.0)
            .build()
            .unwrap();
        never
            .add_new_processes(vec![Process::for_test(1, 0, 3, 0)])
            .unwrap();
        never.admit_arrivals(0);
        never.schedule_next();
        never.handle_action(ProcessAction::IssueIo);
        for _ in 0..50 {
            assert!(never.resolve_io_completions(&mut rng).is_empty());
        }

        let mut always = OperatingSystem::builder()
            .with_io_completion_probability(1.0)
            .build()
            .unwrap();
        always
            .add_new_processes(vec![Process::for_test(1, 0, 3, 0)])
            .unwrap();
        always.admit_arrivals(0);
        always.schedule_next();
        always.handle_action(ProcessAction::IssueIo);
        assert_eq!(always.resolve_io_completions(&mut rng), vec![1]);
        assert_eq!(always.state_of(1), Some(ProcessState::Ready));
        assert_eq!(always.stats().io_completions, 1);
    }
}
