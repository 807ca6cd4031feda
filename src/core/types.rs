/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process identifier, unique across one submitted population
pub type Pid = u32;

/// Discrete simulated time unit
pub type Tick = u64;
