/*!
 * Core Module
 * Shared types, limits, and errors
 */

pub mod errors;
pub mod limits;
pub mod types;

pub use errors::{SimulationError, SimulationResult};
pub use types::{Pid, Tick};
