/*!
 * Simulation Module
 * Configuration, the tick loop, reports, and observers
 */

mod batch;
pub mod config;
mod engine;
mod observer;
mod report;

pub use batch::run_parallel;
pub use config::SimulationConfig;
pub use engine::SimulationEngine;
pub use observer::{LogObserver, TickObserver};
pub use report::{RunReport, TickOutcome, TickReport};
