/*!
 * Descriptor Validation
 * Rejects malformed process descriptors before a run starts
 */

use super::types::ProcessDescriptor;
use crate::core::errors::{SimulationError, SimulationResult};
use crate::core::limits::is_probability;
use crate::core::types::Pid;
use std::collections::HashSet;

/// Validate a single descriptor
pub(crate) fn validate_descriptor(desc: &ProcessDescriptor) -> SimulationResult<()> {
    if desc.duration < 0 {
        return Err(SimulationError::NegativeDuration {
            pid: desc.id,
            duration: desc.duration,
        });
    }
    if desc.duration == 0 {
        return Err(SimulationError::ZeroDuration(desc.id));
    }
    if desc.start_time < 0 {
        return Err(SimulationError::NegativeStartTime {
            pid: desc.id,
            start_time: desc.start_time,
        });
    }
    if !is_probability(desc.io_request_probability) {
        return Err(SimulationError::probability(
            "io_request_probability",
            desc.io_request_probability,
        ));
    }
    Ok(())
}

/// Reject populations that reuse an id
pub(crate) fn validate_unique_ids<I>(ids: I) -> SimulationResult<()>
where
    I: IntoIterator<Item = Pid>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SimulationError::DuplicatePid(id));
        }
    }
    Ok(())
}
