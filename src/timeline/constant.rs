use super::eclipse::EclipseWindow;
use super::error::{
    require_finite, require_non_negative, require_orbit_count, require_positive, TimelineError,
};
use super::sample::OrbitTimePoint;

#[derive(Debug, Clone, Copy, PartialEq)]
enum EclipsePolicy {
    /// Window on the in-orbit time axis.
    OrbitPhase(EclipseWindow),
    /// Window on the simulation time axis.
    Absolute(EclipseWindow),
}

/// Fixed-step timeline with constant orbit parameters.
///
/// Orbit number and time in orbit are derived from the orbit period in
/// both regimes.
#[derive(Debug, Clone)]
pub struct ConstantTimeline {
    policy: EclipsePolicy,
    end_time: f64,
    orbit_period: f64,
    time_step: f64,
    step: usize,
}

impl Iterator for ConstantTimeline {
    type Item = OrbitTimePoint;

    fn next(&mut self) -> Option<Self::Item> {
        let current_time = self.step as f64 * self.time_step;
        if current_time > self.end_time {
            return None;
        }

        let completed = (current_time / self.orbit_period).floor();
        let orbit_number = (completed as u32).checked_add(1)?;
        let orbit_time = current_time - self.orbit_period * completed;

        let in_sunlight = match self.policy {
            EclipsePolicy::OrbitPhase(window) => window.is_sunlit(orbit_time),
            EclipsePolicy::Absolute(window) => window.is_sunlit(current_time),
        };

        self.step += 1;
        Some(OrbitTimePoint::new(
            current_time,
            orbit_number,
            orbit_time,
            in_sunlight,
        ))
    }
}

/// When `is_leo` is set the eclipse is placed by `eclipse_length` around
/// local noon of each orbit, otherwise by the absolute
/// `eclipse_start`/`eclipse_end` window. The unused parameters are ignored.
pub fn constant_timeline(
    is_leo: bool,
    end_time: f64,
    orbit_period: f64,
    eclipse_length: f64,
    eclipse_start: f64,
    eclipse_end: f64,
    time_step: f64,
) -> Result<ConstantTimeline, TimelineError> {
    require_positive("orbit_period", orbit_period)?;
    require_positive("time_step", time_step)?;
    require_non_negative("end_time", end_time)?;
    require_orbit_count(end_time, orbit_period)?;

    let policy = if is_leo {
        require_non_negative("eclipse_length", eclipse_length)?;
        if eclipse_length > orbit_period {
            return Err(TimelineError::invalid(format!(
                "eclipse_length {eclipse_length} exceeds orbit_period {orbit_period}"
            )));
        }
        if eclipse_length == 0.0 {
            log::warn!("eclipse_length is 0, every sample will be sunlit");
        }
        EclipsePolicy::OrbitPhase(EclipseWindow::centered_on_noon(
            orbit_period,
            eclipse_length,
        ))
    } else {
        require_finite("eclipse_start", eclipse_start)?;
        require_finite("eclipse_end", eclipse_end)?;
        if eclipse_start > eclipse_end {
            return Err(TimelineError::invalid(format!(
                "eclipse_start {eclipse_start} is after eclipse_end {eclipse_end}"
            )));
        }
        EclipsePolicy::Absolute(EclipseWindow::absolute(eclipse_start, eclipse_end))
    };

    log::debug!(
        "constant timeline: {:?}, period {} min, step {} min, end {} min",
        policy,
        orbit_period,
        time_step,
        end_time
    );
    Ok(ConstantTimeline {
        policy,
        end_time,
        orbit_period,
        time_step,
        step: 0,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[test]
    fn absolute_window_excludes_boundaries() {
        let points: Vec<_> = constant_timeline(false, 25.0, 96.0, 0.0, 10.0, 20.0, 5.0)
            .unwrap()
            .collect();
        let times: Vec<_> = points.iter().map(|p| p.total_time).collect();
        let sun: Vec<_> = points.iter().map(|p| p.in_sunlight).collect();
        assert_eq!(times, vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0]);
        assert_eq!(sun, vec![true, true, true, false, true, true]);
    }

    #[test]
    fn orbit_fields_are_kept_outside_leo() {
        let points: Vec<_> = constant_timeline(false, 25.0, 10.0, 0.0, 0.0, 0.0, 5.0)
            .unwrap()
            .collect();
        let orbits: Vec<_> = points.iter().map(|p| p.orbit_number).collect();
        let in_orbit: Vec<_> = points.iter().map(|p| p.time_in_orbit).collect();
        assert_eq!(orbits, vec![1, 1, 2, 2, 3, 3]);
        assert_eq!(in_orbit, vec![0.0, 5.0, 0.0, 5.0, 0.0, 5.0]);
    }

    #[test]
    fn leo_window_repeats_every_orbit() {
        let points: Vec<_> = constant_timeline(true, 192.0, 96.0, 36.0, 0.0, 0.0, 6.0)
            .unwrap()
            .collect();
        assert_eq!(points.len(), 33);
        assert_eq!(points.last().unwrap().orbit_number, 3);
        for point in &points {
            let shadowed = point.time_in_orbit > 30.0 && point.time_in_orbit < 66.0;
            assert_eq!(point.in_sunlight, !shadowed, "{point}");
            assert_eq!(
                point.orbit_number,
                (point.total_time / 96.0).floor() as u32 + 1
            );
        }
    }

    #[test]
    fn overshoot_stops_at_first_time_past_end() {
        let points: Vec<_> = constant_timeline(false, 9.0, 96.0, 0.0, 0.0, 0.0, 4.0)
            .unwrap()
            .collect();
        let times: Vec<_> = points.iter().map(|p| p.total_time).collect();
        assert_eq!(times, vec![0.0, 4.0, 8.0]);
    }

    #[test]
    fn no_drift_over_many_steps() {
        let last = constant_timeline(false, 1000.0, 96.0, 0.0, 0.0, 0.0, 0.1)
            .unwrap()
            .last()
            .unwrap();
        assert_eq!(last.total_time, 10000.0 * 0.1);
    }

    #[test]
    fn orbit_counter_overflow_is_rejected() {
        let err = constant_timeline(false, 1e4, 1e-6, 0.0, 0.0, 0.0, 1e3).unwrap_err();
        assert!(matches!(err, TimelineError::InvalidInput(_)));
    }

    #[test]
    fn many_short_orbits_keep_positive_numbers() {
        let points: Vec<_> = constant_timeline(false, 1e4, 1e-3, 0.0, 0.0, 0.0, 1e3)
            .unwrap()
            .collect();
        assert_eq!(points.len(), 11);
        assert_eq!(points[0].orbit_number, 1);
        assert!(points
            .windows(2)
            .all(|w| w[0].orbit_number < w[1].orbit_number));
    }

    #[rstest]
    #[case(true, 0.0, 1.0, 0.0, 0.0, 0.0)]
    #[case(true, 96.0, 0.0, 0.0, 0.0, 0.0)]
    #[case(true, 96.0, 1.0, 100.0, 0.0, 0.0)]
    #[case(false, 96.0, 1.0, 0.0, 20.0, 10.0)]
    #[case(false, 96.0, -1.0, 0.0, 0.0, 0.0)]
    fn invalid_input(
        #[case] is_leo: bool,
        #[case] period: f64,
        #[case] step: f64,
        #[case] length: f64,
        #[case] start: f64,
        #[case] end: f64,
    ) {
        let err = constant_timeline(is_leo, 100.0, period, length, start, end, step).unwrap_err();
        assert!(matches!(err, TimelineError::InvalidInput(_)));
    }
}
