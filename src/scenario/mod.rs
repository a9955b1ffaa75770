mod error;
mod minutes;
mod orbit;
mod parser;
mod runner;

pub use error::ScenarioError;
pub use minutes::{parse_minutes, Minutes};
pub use orbit::OrbitSpec;
pub use parser::{Scenario, TimelineConfig};
pub use runner::{ScenarioOutput, TimelineRow};

#[cfg(test)]
pub(crate) use orbit::ISS_TLE;
