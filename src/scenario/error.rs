use thiserror::Error;

use crate::timeline::TimelineError;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid duration: {0}")]
    Duration(String),
    #[error("timestamp out of range: {0}")]
    Timestamp(String),
    #[error("invalid tle: {0}")]
    Tle(String),
    #[error("{0}")]
    Timeline(#[from] TimelineError),
}

impl From<sgp4::TleError> for ScenarioError {
    fn from(err: sgp4::TleError) -> Self {
        ScenarioError::Tle(err.to_string())
    }
}
