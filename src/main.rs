/*!
 * Scheduler Simulator - Main Entry Point
 *
 * Wires a process population, a configured operating system, and a run
 * length together, then reports what the scheduler did.
 *
 * Environment:
 * - SIM_POLICY, SIM_IO_COMPLETION_PROBABILITY, SIM_SEED: run configuration
 * - SIM_TICKS: run length (default 100)
 * - SIM_PROCESSES: path to a JSON array of process descriptors
 * - SIM_REPORT_JSON: print the full run report as JSON
 */

use miette::{IntoDiagnostic, WrapErr};
use sched_sim::core::limits::{DEFAULT_RUN_TICKS, DEMO_PROCESS_COUNT};
use sched_sim::simulation::config::parse_var;
use sched_sim::{init_tracing, LogObserver, ProcessDescriptor, SimulationConfig, SimulationEngine};
use tracing::info;

const ENV_TICKS: &str = "SIM_TICKS";
const ENV_PROCESSES: &str = "SIM_PROCESSES";
const ENV_REPORT_JSON: &str = "SIM_REPORT_JSON";

fn main() -> miette::Result<()> {
    init_tracing();

    let env = |name: &str| std::env::var(name).ok();
    let config = SimulationConfig::from_env()?;
    let ticks = parse_var(env, ENV_TICKS)?.unwrap_or(DEFAULT_RUN_TICKS);
    let descriptors = match env(ENV_PROCESSES) {
        Some(path) => load_descriptors(&path)?,
        None => demo_population(),
    };

    info!(
        policy = %config.policy,
        io_completion_probability = config.io_completion_probability,
        seed = ?config.seed,
        ticks,
        processes = descriptors.len(),
        "Configuration loaded"
    );

    let mut engine = SimulationEngine::new(&config, &descriptors)?;
    engine.add_observer(LogObserver);
    let report = engine.run(ticks)?;

    if env(ENV_REPORT_JSON).is_some_and(|v| v == "1" || v == "true") {
        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;
        println!("{}", json);
    }

    info!(
        completed = ?report.completed,
        idle_ticks = report.idle_ticks,
        context_switches = report.stats.context_switches,
        preemptions = report.stats.preemptions,
        io_requests = report.stats.io_requests,
        "Run complete"
    );
    Ok(())
}

fn load_descriptors(path: &str) -> miette::Result<Vec<ProcessDescriptor>> {
    let raw = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read process list from {}", path))?;
    serde_json::from_str(&raw)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse process list in {}", path))
}

/// Process i arrives at 10*i and needs 5*(10-i) ticks
fn demo_population() -> Vec<ProcessDescriptor> {
    (0..DEMO_PROCESS_COUNT)
        .map(|i| {
            let n = i64::from(i);
            ProcessDescriptor::new(i, 10 * n, 5 * (i64::from(DEMO_PROCESS_COUNT) - n))
        })
        .collect()
}
