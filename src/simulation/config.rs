/*!
 * Simulation Configuration
 * Explicit run knobs with environment overrides
 */

use crate::core::errors::{SimulationError, SimulationResult};
use crate::core::limits::{is_probability, DEFAULT_IO_COMPLETION_PROBABILITY};
use crate::os::OperatingSystem;
use crate::scheduler::SchedulerPolicy;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const ENV_POLICY: &str = "SIM_POLICY";
pub const ENV_IO_COMPLETION_PROBABILITY: &str = "SIM_IO_COMPLETION_PROBABILITY";
pub const ENV_SEED: &str = "SIM_SEED";

/// Configuration for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub policy: SchedulerPolicy,
    pub io_completion_probability: f64,
    /// Seed for every random draw; entropy when unset
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            policy: SchedulerPolicy::default(),
            io_completion_probability: DEFAULT_IO_COMPLETION_PROBABILITY,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SchedulerPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_io_completion_probability(mut self, probability: f64) -> Self {
        self.io_completion_probability = probability;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> SimulationResult<()> {
        if !is_probability(self.io_completion_probability) {
            return Err(SimulationError::probability(
                "io_completion_probability",
                self.io_completion_probability,
            ));
        }
        Ok(())
    }

    /// Defaults overridden by `SIM_POLICY`, `SIM_IO_COMPLETION_PROBABILITY`
    /// and `SIM_SEED`
    pub fn from_env() -> SimulationResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> SimulationResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(policy) = parse_var(&lookup, ENV_POLICY)? {
            config.policy = policy;
        }
        if let Some(probability) = parse_var(&lookup, ENV_IO_COMPLETION_PROBABILITY)? {
            config.io_completion_probability = probability;
        }
        config.seed = parse_var(&lookup, ENV_SEED)?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn build_os(&self) -> SimulationResult<OperatingSystem> {
        OperatingSystem::builder()
            .with_policy(self.policy)
            .with_io_completion_probability(self.io_completion_probability)
            .build()
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Parse an optional variable, rejecting values that do not parse
pub fn parse_var<T, F>(lookup: F, name: &str) -> SimulationResult<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SimulationError::InvalidEnvVar {
                name: name.to_string(),
                value: raw,
            }),
    }
}
