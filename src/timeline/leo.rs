use super::eclipse::EclipseWindow;
use super::error::{require_non_negative, require_orbit_count, require_positive, TimelineError};
use super::lookup::{AngleLookup, ClosestAngle};
use super::sample::OrbitTimePoint;

/// Local solar noon on the orbit-angle axis.
const NOON_DEG: f64 = 180.0;

/// Orbit-angle table converted to time, referenced to local solar noon.
///
/// Entry `i` of `orbit_times` is the time since noon at `angles[i]`, and
/// entry `i` of `time_steps` is the time it takes to get there from the
/// previous entry. Entry 0 is reached from the last entry across 360°.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleTimeTable {
    orbit_times: Vec<f64>,
    time_steps: Vec<f64>,
    reference: usize,
}

impl AngleTimeTable {
    pub fn build<L: AngleLookup>(
        lookup: &L,
        angles: &[f64],
        orbit_period: f64,
    ) -> Result<Self, TimelineError> {
        require_positive("orbit_period", orbit_period)?;
        let n = angles.len();
        if n < 2 {
            return Err(TimelineError::invalid(format!(
                "orbit angle table needs at least 2 entries, got {n}"
            )));
        }
        if angles[0] != 0.0 {
            log::warn!(
                "orbit angle table starts at {}°, wrap step assumes 0°",
                angles[0]
            );
        }

        let index = lookup.find_closest_index(angles, NOON_DEG).min(n - 1);
        let mins_per_degree = orbit_period / 360.0;
        let step = |from: f64, to: f64| (to - from) * mins_per_degree;

        let mut orbit_times = vec![0.0; n];
        let mut time_steps = vec![0.0; n];

        for i in index + 1..n {
            time_steps[i] = step(angles[i - 1], angles[i]);
            orbit_times[i] = orbit_times[i - 1] + time_steps[i];
        }

        // close the orbit: last entry -> 360° -> entry 0
        time_steps[0] = step(angles[n - 1], 360.0);
        if index != 0 {
            orbit_times[0] = orbit_times[n - 1] + time_steps[0];
        }

        for i in 1..index {
            time_steps[i] = step(angles[i - 1], angles[i]);
            orbit_times[i] = orbit_times[i - 1] + time_steps[i];
        }
        if index > 0 {
            time_steps[index] = step(angles[index - 1], angles[index]);
        }

        let table = Self {
            orbit_times,
            time_steps,
            reference: index,
        };
        let cycle = table.cycle_length();
        if cycle.is_nan() || cycle <= 0.0 {
            return Err(TimelineError::invalid(format!(
                "orbit angle table does not advance time over one orbit (cycle = {cycle} min)"
            )));
        }
        log::debug!(
            "angle table: {} entries, noon at index {}, cycle {:.3} min",
            n,
            index,
            cycle
        );
        Ok(table)
    }

    pub fn orbit_times(&self) -> &[f64] {
        &self.orbit_times
    }

    pub fn time_steps(&self) -> &[f64] {
        &self.time_steps
    }

    /// Index of the entry closest to local solar noon.
    pub fn reference_index(&self) -> usize {
        self.reference
    }

    /// Time needed to walk the whole table once.
    pub fn cycle_length(&self) -> f64 {
        self.time_steps.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.orbit_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbit_times.is_empty()
    }
}

/// Low Earth orbit timeline driven by a per-orbit angle table.
///
/// The walk starts at table entry 0. The orbit counter and table index
/// advance before the sample is emitted, and the time advance uses the
/// step into the next index.
#[derive(Debug, Clone)]
pub struct LeoTimeline {
    table: AngleTimeTable,
    window: EclipseWindow,
    end_time: f64,
    current_time: f64,
    index: usize,
    orbit_number: u32,
}

impl LeoTimeline {
    pub fn table(&self) -> &AngleTimeTable {
        &self.table
    }

    pub fn eclipse_window(&self) -> EclipseWindow {
        self.window
    }
}

impl Iterator for LeoTimeline {
    type Item = OrbitTimePoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_time > self.end_time {
            return None;
        }

        let orbit_time = self.table.orbit_times[self.index];
        let in_sunlight = self.window.is_sunlit(orbit_time);

        self.index += 1;
        if self.index >= self.table.len() {
            self.index = 0;
            self.orbit_number = self.orbit_number.checked_add(1)?;
        }

        let point = OrbitTimePoint::new(
            self.current_time,
            self.orbit_number,
            orbit_time,
            in_sunlight,
        );
        self.current_time += self.table.time_steps[self.index];
        Some(point)
    }
}

/// Builds a LEO timeline, locating noon with [ClosestAngle].
///
/// `orbit_angles` must be sorted ascending within [0, 360).
pub fn leo_timeline(
    orbit_angles: &[f64],
    orbit_period: f64,
    end_time: f64,
    eclipse_length: f64,
) -> Result<LeoTimeline, TimelineError> {
    leo_timeline_with(&ClosestAngle, orbit_angles, orbit_period, end_time, eclipse_length)
}

pub fn leo_timeline_with<L: AngleLookup>(
    lookup: &L,
    orbit_angles: &[f64],
    orbit_period: f64,
    end_time: f64,
    eclipse_length: f64,
) -> Result<LeoTimeline, TimelineError> {
    require_positive("orbit_period", orbit_period)?;
    require_non_negative("end_time", end_time)?;
    require_non_negative("eclipse_length", eclipse_length)?;
    if eclipse_length > orbit_period {
        return Err(TimelineError::invalid(format!(
            "eclipse_length {eclipse_length} exceeds orbit_period {orbit_period}"
        )));
    }

    if eclipse_length == 0.0 {
        log::warn!("eclipse_length is 0, every sample will be sunlit");
    }

    let table = AngleTimeTable::build(lookup, orbit_angles, orbit_period)?;
    require_orbit_count(end_time, table.cycle_length())?;
    Ok(LeoTimeline {
        table,
        window: EclipseWindow::centered_on_noon(orbit_period, eclipse_length),
        end_time,
        current_time: 0.0,
        index: 0,
        orbit_number: 1,
    })
}
