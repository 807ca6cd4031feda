/*!
 * Scheduler Traits
 * Interface every scheduling policy implements
 */

use super::types::SchedulerPolicy;
use crate::process::Process;

/// A scheduling policy
///
/// Implementations are pure: they never mutate their inputs, and the same
/// inputs always produce the same choice.
pub trait SchedulingStrategy {
    /// Pick the process that should occupy the CPU this tick
    ///
    /// Returns `None` only when `ready` is empty and nothing is running.
    fn schedule<'a>(&self, ready: &'a [Process], running: Option<&'a Process>)
        -> Option<&'a Process>;

    /// Whether this policy may displace a running process
    fn is_preemptive(&self) -> bool;

    fn policy(&self) -> SchedulerPolicy;
}
