/*!
 * State Queues
 * Five-way partition of the process population by lifecycle state
 */

use crate::core::types::Pid;
use crate::process::{Process, ProcessState};
use std::collections::HashSet;

/// One ordered queue per lifecycle state
///
/// A process lives in exactly one queue. Moving a process that is not in
/// the expected queue means the simulation state is corrupt and panics.
#[derive(Debug, Clone, Default)]
pub struct StateQueues {
    queues: [Vec<Process>; ProcessState::COUNT],
}

impl StateQueues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a process to the back of a queue
    pub fn push(&mut self, state: ProcessState, process: Process) {
        self.queues[state.index()].push(process);
    }

    #[inline]
    pub fn queue(&self, state: ProcessState) -> &[Process] {
        &self.queues[state.index()]
    }

    #[inline]
    pub fn len(&self, state: ProcessState) -> usize {
        self.queues[state.index()].len()
    }

    #[inline]
    pub fn is_empty(&self, state: ProcessState) -> bool {
        self.queues[state.index()].is_empty()
    }

    /// Number of processes across all queues
    pub fn total(&self) -> usize {
        self.queues.iter().map(Vec::len).sum()
    }

    /// Every process, grouped by state in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.queues.iter().flatten()
    }

    pub fn state_of(&self, pid: Pid) -> Option<ProcessState> {
        ProcessState::ALL
            .into_iter()
            .find(|&state| self.position(state, pid).is_some())
    }

    pub fn find(&self, pid: Pid) -> Option<&Process> {
        self.iter().find(|p| p.pid() == pid)
    }

    /// The process on the CPU, if any
    #[inline]
    pub fn running(&self) -> Option<&Process> {
        self.queues[ProcessState::Running.index()].first()
    }

    #[inline]
    pub(crate) fn running_mut(&mut self) -> Option<&mut Process> {
        self.queues[ProcessState::Running.index()].first_mut()
    }

    /// Move a process from the queue it is in to the back of another
    ///
    /// # Panics
    /// If `pid` is not in the `from` queue.
    pub fn move_process(&mut self, pid: Pid, from: ProcessState, to: ProcessState) {
        let Some(pos) = self.position(from, pid) else {
            panic!(
                "process {} expected in {} queue but found in {:?}",
                pid,
                from,
                self.state_of(pid)
            );
        };
        let process = self.queues[from.index()].remove(pos);
        self.queues[to.index()].push(process);
    }

    /// Check the partition invariants
    ///
    /// # Panics
    /// If Running holds more than one process or any pid appears twice.
    pub fn assert_consistent(&self) {
        let running = self.len(ProcessState::Running);
        assert!(
            running <= 1,
            "running queue holds {} processes on a single core",
            running
        );

        let mut seen = HashSet::with_capacity(self.total());
        for process in self.iter() {
            assert!(
                seen.insert(process.pid()),
                "process {} appears in more than one queue slot",
                process.pid()
            );
        }
    }

    fn position(&self, state: ProcessState, pid: Pid) -> Option<usize> {
        self.queues[state.index()]
            .iter()
            .position(|p| p.pid() == pid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pids(queues: &StateQueues, state: ProcessState) -> Vec<Pid> {
        queues.queue(state).iter().map(Process::pid).collect()
    }

    #[test]
    fn test_move_preserves_order() {
        let mut queues = StateQueues::new();
        for pid in 1..=4 {
            queues.push(ProcessState::Ready, Process::for_test(pid, 0, 3, 0));
        }

        queues.move_process(2, ProcessState::Ready, ProcessState::Blocked);
        queues.move_process(4, ProcessState::Ready, ProcessState::Blocked);

        assert_eq!(pids(&queues, ProcessState::Ready), vec![1, 3]);
        assert_eq!(pids(&queues, ProcessState::Blocked), vec![2, 4]);
        assert_eq!(queues.total(), 4);
        queues.assert_consistent();
    }

    #[test]
    fn test_state_of() {
        let mut queues = StateQueues::new();
        queues.push(ProcessState::New, Process::for_test(9, 5, 3, 0));
        assert_eq!(queues.state_of(9), Some(ProcessState::New));

        queues.move_process(9, ProcessState::New, ProcessState::Ready);
        assert_eq!(queues.state_of(9), Some(ProcessState::Ready));
        assert_eq!(queues.state_of(10), None);
    }

    #[test]
    fn test_running_accessor() {
        let mut queues = StateQueues::new();
        assert!(queues.running().is_none());
        queues.push(ProcessState::Running, Process::for_test(1, 0, 3, 0));
        assert_eq!(queues.running().map(Process::pid), Some(1));
    }

    #[test]
    #[should_panic(expected = "expected in ready queue")]
    fn test_move_missing_process_panics() {
        let mut queues = StateQueues::new();
        queues.push(ProcessState::Blocked, Process::for_test(1, 0, 3, 0));
        queues.move_process(1, ProcessState::Ready, ProcessState::Running);
    }

    #[test]
    #[should_panic(expected = "single core")]
    fn test_two_running_processes_panic() {
        let mut queues = StateQueues::new();
        queues.push(ProcessState::Running, Process::for_test(1, 0, 3, 0));
        queues.push(ProcessState::Running, Process::for_test(2, 0, 3, 0));
        queues.assert_consistent();
    }

    #[test]
    #[should_panic(expected = "more than one queue slot")]
    fn test_duplicate_pid_panics() {
        let mut queues = StateQueues::new();
        queues.push(ProcessState::Ready, Process::for_test(1, 0, 3, 0));
        queues.push(ProcessState::Blocked, Process::for_test(1, 0, 3, 0));
        queues.assert_consistent();
    }
}
