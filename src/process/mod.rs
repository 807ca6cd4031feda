/*!
 * Process Module
 * Simulated processes, their lifecycle states, and descriptor validation
 */

mod model;
pub mod types;
mod validation;

pub use model::Process;
pub use types::{ProcessAction, ProcessDescriptor, ProcessState};

pub(crate) use validation::validate_unique_ids;
