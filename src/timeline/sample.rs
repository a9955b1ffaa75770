use std::fmt;

use serde::{Deserialize, Serialize};

/// One point of a simulated timeline.
///
/// `orbit_number` and `time_in_orbit` are 0 for regimes where orbit
/// counting has no meaning (libration-point orbits).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitTimePoint {
    /// Elapsed simulation time, minutes.
    pub total_time: f64,
    pub orbit_number: u32,
    /// Time since the start of the current orbit, minutes.
    pub time_in_orbit: f64,
    pub in_sunlight: bool,
}

impl OrbitTimePoint {
    pub fn new(total_time: f64, orbit_number: u32, time_in_orbit: f64, in_sunlight: bool) -> Self {
        Self {
            total_time,
            orbit_number,
            time_in_orbit,
            in_sunlight,
        }
    }
}

impl fmt::Display for OrbitTimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "| Total Time = {} min | Orbit Number = {} | Time in Current Orbit = {} min | In Sunlight? = {} |",
            self.total_time, self.orbit_number, self.time_in_orbit, self.in_sunlight
        )
    }
}
