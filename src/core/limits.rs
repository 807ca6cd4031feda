/*!
 * Simulation Limits
 * Default knobs and bounds shared across subsystems
 */

/// Chance that a blocked process completes its I/O on a given tick
pub const DEFAULT_IO_COMPLETION_PROBABILITY: f64 = 0.2;

/// Run length used by the binary when `SIM_TICKS` is unset
pub const DEFAULT_RUN_TICKS: u64 = 100;

/// Size of the demo population used by the binary
pub const DEMO_PROCESS_COUNT: u32 = 10;

/// Check that a probability is finite and within [0, 1]
#[inline]
pub fn is_probability(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}
