/*!
 * Scheduler Types
 * Policy selection and its string forms
 */

use crate::core::errors::SimulationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling policy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchedulerPolicy {
    /// First-in first-out, never preempts
    Fifo,
    /// Shortest remaining work first, re-evaluated every tick
    #[default]
    PreemptiveShortestJobFirst,
}

impl SchedulerPolicy {
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::PreemptiveShortestJobFirst => "psjf",
        }
    }
}

impl FromStr for SchedulerPolicy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fifo" | "fcfs" => Ok(Self::Fifo),
            "psjf" | "srtf" | "preemptive_sjf" | "preemptive_shortest_job_first" => {
                Ok(Self::PreemptiveShortestJobFirst)
            }
            _ => Err(SimulationError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for SchedulerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchedulerPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulerPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
