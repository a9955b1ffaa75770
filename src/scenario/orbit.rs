use serde::Deserialize;
use sgp4::Elements;

use super::error::ScenarioError;
use super::minutes::Minutes;

const MINUTES_PER_DAY: f64 = 1440.0;

/// How the orbit period is given: directly, or from a TLE's mean motion.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum OrbitSpec {
    Period(Minutes),
    Tle(String),
}

impl OrbitSpec {
    /// Orbit period in minutes.
    pub fn period(&self) -> Result<f64, ScenarioError> {
        match self {
            OrbitSpec::Period(m) => Ok(m.0),
            OrbitSpec::Tle(tle) => {
                let elements = tle_elements(tle)?;
                if elements.mean_motion <= 0.0 {
                    return Err(ScenarioError::Tle(format!(
                        "non-positive mean motion {}",
                        elements.mean_motion
                    )));
                }
                let period = MINUTES_PER_DAY / elements.mean_motion;
                log::debug!(
                    "orbit period {:.3} min from tle {}",
                    period,
                    elements.object_name.as_deref().unwrap_or("<unnamed>")
                );
                Ok(period)
            }
        }
    }
}

/// Elements of a 2-line or named 3-line TLE. Blank lines are skipped.
fn tle_elements(tle: &str) -> Result<Elements, ScenarioError> {
    let lines: Vec<&str> = tle.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let (name, line1, line2) = match lines.as_slice() {
        [line1, line2] => (None, *line1, *line2),
        [name, line1, line2] => (Some(name.to_string()), *line1, *line2),
        other => {
            return Err(ScenarioError::Tle(format!(
                "expected 2 or 3 lines, got {}",
                other.len()
            )))
        }
    };
    Ok(Elements::from_tle(name, line1.as_bytes(), line2.as_bytes())?)
}

#[cfg(test)]
pub(crate) const ISS_TLE: &str = "ISS (ZARYA)
1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992
2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008";
