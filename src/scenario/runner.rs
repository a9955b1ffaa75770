use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use super::error::ScenarioError;
use super::parser::{Scenario, TimelineConfig};
use crate::timeline::{
    constant_timeline, leo_timeline, libration_timeline, spinner_profile, OrbitTimePoint,
    SpinnerProfile,
};

/// One output row: a sample, optionally pinned to wall-clock time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub point: OrbitTimePoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScenarioOutput {
    Samples(Vec<TimelineRow>),
    SunAngles(SpinnerProfile),
}

impl Scenario {
    pub fn run(&self) -> Result<ScenarioOutput, ScenarioError> {
        let end_time = self.end_time.0;
        let points: Vec<OrbitTimePoint> = match &self.timeline {
            TimelineConfig::Leo {
                orbit,
                eclipse_length,
                angles,
            } => leo_timeline(angles, orbit.period()?, end_time, eclipse_length.0)?.collect(),
            TimelineConfig::L1L2 {
                times,
                eclipse_start,
                eclipse_end,
                integration_step,
            } => {
                let times: Vec<f64> = times.iter().map(|m| m.0).collect();
                libration_timeline(
                    &times,
                    end_time,
                    eclipse_start.0,
                    eclipse_end.0,
                    integration_step.0,
                )?
                .collect()
            }
            TimelineConfig::Constant {
                leo,
                orbit,
                eclipse_length,
                eclipse_start,
                eclipse_end,
                time_step,
            } => constant_timeline(
                *leo,
                end_time,
                orbit.period()?,
                eclipse_length.0,
                eclipse_start.0,
                eclipse_end.0,
                time_step.0,
            )?
            .collect(),
            TimelineConfig::Spinner {
                rpm,
                sides,
                time_step,
            } => {
                let profile = spinner_profile(*rpm, *sides, time_step.0, end_time)?;
                return Ok(ScenarioOutput::SunAngles(profile));
            }
        };

        log::debug!(
            "{} scenario produced {} samples",
            self.timeline,
            points.len()
        );
        let rows = points
            .into_iter()
            .map(|point| {
                let timestamp = self
                    .epoch
                    .map(|epoch| offset_epoch(epoch, point.total_time))
                    .transpose()?;
                Ok(TimelineRow { timestamp, point })
            })
            .collect::<Result<Vec<_>, ScenarioError>>()?;
        Ok(ScenarioOutput::Samples(rows))
    }
}

fn offset_epoch(epoch: DateTime<Utc>, minutes: f64) -> Result<DateTime<Utc>, ScenarioError> {
    let out_of_range = || ScenarioError::Timestamp(format!("{epoch} + {minutes} min"));
    let millis = (minutes * 60_000.0).round();
    if millis.is_nan() || millis.abs() >= i64::MAX as f64 {
        return Err(out_of_range());
    }
    TimeDelta::try_milliseconds(millis as i64)
        .and_then(|delta| epoch.checked_add_signed(delta))
        .ok_or_else(out_of_range)
}
