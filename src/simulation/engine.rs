/*!
 * Simulation Engine
 * Tick-driven loop sequencing arrivals, I/O completions, scheduling, and
 * process execution
 */

use super::config::SimulationConfig;
use super::observer::TickObserver;
use super::report::{RunReport, TickOutcome, TickReport};
use crate::core::errors::{SimulationError, SimulationResult};
use crate::core::types::Tick;
use crate::os::OperatingSystem;
use crate::process::{validate_unique_ids, Process, ProcessAction, ProcessDescriptor};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, debug_span, info, trace};

/// Drives one operating system through simulated time
///
/// Each tick runs, in order: arrivals, I/O completions, the scheduling
/// decision, and execution of whichever process holds the CPU. The engine is
/// the only place `executed_ticks` advances and termination is triggered.
pub struct SimulationEngine<R: Rng = StdRng> {
    os: OperatingSystem,
    pending: Vec<Process>,
    tick: Tick,
    rng: R,
    observers: Vec<Box<dyn TickObserver>>,
}

impl SimulationEngine<StdRng> {
    /// Create an engine from a validated configuration and population
    pub fn new(
        config: &SimulationConfig,
        descriptors: &[ProcessDescriptor],
    ) -> SimulationResult<Self> {
        config.validate()?;
        Self::with_rng(config.build_os()?, descriptors, config.rng())
    }
}

impl<R: Rng> SimulationEngine<R> {
    /// Create an engine around an existing operating system and random source
    pub fn with_rng(
        os: OperatingSystem,
        descriptors: &[ProcessDescriptor],
        rng: R,
    ) -> SimulationResult<Self> {
        let pending = descriptors
            .iter()
            .map(Process::try_from)
            .collect::<SimulationResult<Vec<_>>>()?;
        validate_unique_ids(os.processes().chain(pending.iter()).map(Process::pid))?;

        Ok(Self {
            os,
            pending,
            tick: 0,
            rng,
            observers: Vec::new(),
        })
    }

    /// Register an observer notified after every tick
    pub fn add_observer<O>(&mut self, observer: O)
    where
        O: TickObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Current tick counter
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn os(&self) -> &OperatingSystem {
        &self.os
    }

    pub fn into_os(self) -> OperatingSystem {
        self.os
    }

    /// Run `duration` ticks, then reset the tick counter to zero
    pub fn run(&mut self, duration: u64) -> SimulationResult<RunReport> {
        if duration == 0 {
            return Err(SimulationError::InvalidRunLength(duration));
        }

        self.submit_pending();
        let baseline = self.os.stats();
        info!(
            duration,
            policy = %self.os.policy(),
            population = self.os.population(),
            "Simulation starting"
        );

        let ticks: Vec<TickReport> = (0..duration).map(|_| self.step()).collect();
        self.tick = 0;

        let report = RunReport::new(ticks, self.os.stats().since(&baseline));
        info!(
            completed = report.completed.len(),
            idle_ticks = report.idle_ticks,
            context_switches = report.stats.context_switches,
            "Simulation finished"
        );
        Ok(report)
    }

    /// Execute exactly one tick
    ///
    /// Stopping between calls is the natural way to cancel a run.
    pub fn step(&mut self) -> TickReport {
        self.submit_pending();

        let tick = self.tick;
        let span = debug_span!("tick", tick);
        let _entered = span.enter();

        let admitted = self.os.admit_arrivals(tick);
        let unblocked = self.os.resolve_io_completions(&mut self.rng);
        let context_switch = self.os.schedule_next();
        let outcome = self.execute_running();

        #[cfg(debug_assertions)]
        self.os.assert_consistent();

        let report = TickReport {
            tick,
            admitted,
            unblocked,
            context_switch,
            outcome,
        };
        for observer in &mut self.observers {
            observer.on_tick(&report);
        }

        self.tick += 1;
        report
    }

    fn submit_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let processes = std::mem::take(&mut self.pending);
        self.os.enqueue_new(processes);
    }

    fn execute_running(&mut self) -> TickOutcome {
        let Some(process) = self.os.running_process_mut() else {
            trace!("CPU idle");
            return TickOutcome::Idle;
        };

        let pid = process.pid();
        match process.decide_action(&mut self.rng) {
            ProcessAction::Run => {
                let remaining = process.record_tick();
                let complete = process.is_complete();
                self.os.handle_action(ProcessAction::Run);
                if complete {
                    self.os.terminate_process(pid);
                    TickOutcome::Completed { pid }
                } else {
                    debug!(pid, remaining, "Process ran");
                    TickOutcome::Ran { pid, remaining }
                }
            }
            ProcessAction::IssueIo => {
                self.os.handle_action(ProcessAction::IssueIo);
                TickOutcome::IssuedIo { pid }
            }
            ProcessAction::Terminate => {
                self.os.handle_action(ProcessAction::Terminate);
                TickOutcome::Completed { pid }
            }
        }
    }
}
