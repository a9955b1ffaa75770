use chrono::{DateTime, Utc};
use serde::Deserialize;
use strum_macros::Display;

use super::error::ScenarioError;
use super::minutes::Minutes;
use super::orbit::OrbitSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    /// Absolute time of the first sample, if any.
    #[serde(default)]
    pub epoch: Option<DateTime<Utc>>,
    pub end_time: Minutes,
    pub timeline: TimelineConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Display)]
#[serde(tag = "regime", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TimelineConfig {
    Leo {
        orbit: OrbitSpec,
        eclipse_length: Minutes,
        angles: Vec<f64>,
    },
    #[serde(rename = "l1l2")]
    #[strum(serialize = "l1l2")]
    L1L2 {
        times: Vec<Minutes>,
        eclipse_start: Minutes,
        eclipse_end: Minutes,
        integration_step: Minutes,
    },
    Constant {
        leo: bool,
        orbit: OrbitSpec,
        #[serde(default)]
        eclipse_length: Minutes,
        #[serde(default)]
        eclipse_start: Minutes,
        #[serde(default)]
        eclipse_end: Minutes,
        time_step: Minutes,
    },
    Spinner {
        rpm: f64,
        sides: u32,
        time_step: Minutes,
    },
}

impl TimelineConfig {
    pub fn orbit(&self) -> Option<&OrbitSpec> {
        match self {
            TimelineConfig::Leo { orbit, .. } | TimelineConfig::Constant { orbit, .. } => {
                Some(orbit)
            }
            TimelineConfig::L1L2 { .. } | TimelineConfig::Spinner { .. } => None,
        }
    }
}

impl Scenario {
    pub fn from_str(yaml: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_yaml::from_str(yaml)?;
        Ok(scenario)
    }

    pub fn from_file(path: &str) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Resolved orbit period in minutes, for regimes that have one.
    pub fn orbit_period(&self) -> Result<Option<f64>, ScenarioError> {
        self.timeline.orbit().map(OrbitSpec::period).transpose()
    }
}
