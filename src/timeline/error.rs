use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimelineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl TimelineError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        TimelineError::InvalidInput(msg.into())
    }
}

pub(crate) fn require_finite(name: &str, value: f64) -> Result<(), TimelineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TimelineError::invalid(format!("{name} must be finite, got {value}")))
    }
}

pub(crate) fn require_positive(name: &str, value: f64) -> Result<(), TimelineError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(TimelineError::invalid(format!("{name} must be > 0, got {value}")))
    }
}

/// Rejects runs whose orbit counter would not fit in a `u32`.
pub(crate) fn require_orbit_count(end_time: f64, orbit_length: f64) -> Result<(), TimelineError> {
    let orbits = end_time / orbit_length;
    if orbits < (u32::MAX - 2) as f64 {
        Ok(())
    } else {
        Err(TimelineError::invalid(format!(
            "end_time {end_time} spans {orbits:.3e} orbits of {orbit_length} min, more than the orbit counter holds"
        )))
    }
}

pub(crate) fn require_non_negative(name: &str, value: f64) -> Result<(), TimelineError> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(TimelineError::invalid(format!("{name} must be >= 0, got {value}")))
    }
}
