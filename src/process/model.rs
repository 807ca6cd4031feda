/*!
 * Process Model
 * Simulated process data and its per-tick I/O decision
 */

use super::types::{ProcessAction, ProcessDescriptor};
use super::validation::validate_descriptor;
use crate::core::errors::SimulationError;
use crate::core::types::{Pid, Tick};
use rand::Rng;
use serde::Serialize;

/// A simulated process
///
/// Queue membership is owned by the operating system. Only the simulation
/// engine advances `executed_ticks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Process {
    pid: Pid,
    start_time: Tick,
    duration: u64,
    executed_ticks: u64,
    io_request_probability: f64,
}

impl Process {
    #[inline(always)]
    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// Tick at which the process arrives
    #[inline(always)]
    pub fn start_time(&self) -> Tick {
        self.start_time
    }

    /// Total ticks of execution required
    #[inline(always)]
    pub fn duration(&self) -> u64 {
        self.duration
    }

    #[inline(always)]
    pub fn executed_ticks(&self) -> u64 {
        self.executed_ticks
    }

    #[inline(always)]
    pub fn io_request_probability(&self) -> f64 {
        self.io_request_probability
    }

    /// Ticks still needed; the shortest-job-first key
    #[inline(always)]
    pub fn remaining(&self) -> u64 {
        self.duration - self.executed_ticks
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.executed_ticks >= self.duration
    }

    /// Decide this tick's action with one uniform draw in [0, 1)
    pub fn decide_action<R: Rng + ?Sized>(&self, rng: &mut R) -> ProcessAction {
        if rng.gen::<f64>() < self.io_request_probability {
            ProcessAction::IssueIo
        } else {
            ProcessAction::Run
        }
    }

    /// Account one granted tick and return the remaining work
    pub(crate) fn record_tick(&mut self) -> u64 {
        assert!(
            self.executed_ticks < self.duration,
            "process {} ran past its duration {}",
            self.pid,
            self.duration
        );
        self.executed_ticks += 1;
        self.remaining()
    }
}

impl TryFrom<&ProcessDescriptor> for Process {
    type Error = SimulationError;

    fn try_from(desc: &ProcessDescriptor) -> Result<Self, Self::Error> {
        validate_descriptor(desc)?;
        Ok(Self {
            pid: desc.id,
            start_time: desc.start_time as Tick,
            duration: desc.duration as u64,
            executed_ticks: 0,
            io_request_probability: desc.io_request_probability,
        })
    }
}

#[cfg(test)]
impl Process {
    pub(crate) fn for_test(pid: Pid, start_time: Tick, duration: u64, executed: u64) -> Self {
        Self {
            pid,
            start_time,
            duration,
            executed_ticks: executed,
            io_request_probability: 0.0,
        }
    }
}
