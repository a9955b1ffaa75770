use serde::Serialize;

use super::error::{require_finite, require_positive, TimelineError};

/// Largest number of angles a single `Vec<f64>` can hold.
const MAX_ENTRIES: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Sun angles for each face of a spinning spacecraft.
///
/// Every side's sequence starts with a 0° entry, followed by one angle per
/// sampled time `time_step, 2 * time_step, ...` strictly below the end time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpinnerProfile {
    pub time_step: f64,
    pub sides: Vec<Vec<f64>>,
}

impl SpinnerProfile {
    pub fn num_sides(&self) -> usize {
        self.sides.len()
    }

    /// Number of entries per side, including the leading zero.
    pub fn len(&self) -> usize {
        self.sides.first().map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Time axis matching each side's sequence, usable as the L1/L2
    /// sun-angle time table.
    pub fn times(&self) -> Vec<f64> {
        (0..self.len())
            .map(|k| k as f64 * self.time_step)
            .collect()
    }
}

pub fn spinner_profile(
    rpm: f64,
    num_sides: u32,
    time_step: f64,
    end_time: f64,
) -> Result<SpinnerProfile, TimelineError> {
    if num_sides == 0 {
        return Err(TimelineError::invalid("spinner needs at least one side"));
    }
    require_positive("rpm", rpm)?;
    require_positive("time_step", time_step)?;
    require_finite("end_time", end_time)?;

    let offset_angle = 360.0 / num_sides as f64;
    let samples = if end_time > time_step {
        ((end_time - time_step) / time_step).ceil()
    } else {
        0.0
    };
    let entries = (samples + 1.0) * num_sides as f64;
    if entries >= MAX_ENTRIES as f64 {
        return Err(TimelineError::invalid(format!(
            "spinner profile of {num_sides} sides x {samples:.3e} samples is too large, increase time_step"
        )));
    }
    let samples = samples as usize;

    let mut sides: Vec<Vec<f64>> = (0..num_sides)
        .map(|_| {
            let mut angles = Vec::with_capacity(samples + 1);
            angles.push(0.0);
            angles
        })
        .collect();

    for k in 0..samples {
        let t = time_step + k as f64 * time_step;
        let fraction = (t * rpm).rem_euclid(1.0);
        for (side, angles) in sides.iter_mut().enumerate() {
            angles.push((fraction * 360.0 + offset_angle * side as f64).rem_euclid(360.0));
        }
    }

    log::debug!(
        "spinner profile: {} sides, {} samples, {} rpm",
        num_sides,
        samples,
        rpm
    );
    Ok(SpinnerProfile { time_step, sides })
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[test]
    fn two_sided_half_turn() {
        let profile = spinner_profile(1.0, 2, 0.5, 1.0).unwrap();
        assert_eq!(profile.sides, vec![vec![0.0, 180.0], vec![0.0, 0.0]]);
        assert_eq!(profile.times(), vec![0.0, 0.5]);
    }

    #[test]
    fn four_sides_quarter_rpm() {
        let profile = spinner_profile(0.25, 4, 1.0, 4.0).unwrap();
        assert_eq!(profile.num_sides(), 4);
        assert_eq!(profile.sides[0], vec![0.0, 90.0, 180.0, 270.0]);
        assert_eq!(profile.sides[1], vec![0.0, 180.0, 270.0, 0.0]);
        assert_eq!(profile.sides[3], vec![0.0, 0.0, 90.0, 180.0]);
        assert_eq!(profile.times(), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn end_before_first_step_keeps_leading_zero() {
        let profile = spinner_profile(2.0, 3, 1.0, 1.0).unwrap();
        assert_eq!(profile.len(), 1);
        assert!(profile.sides.iter().all(|side| side == &vec![0.0]));
    }

    #[test]
    fn angles_stay_in_range() {
        let profile = spinner_profile(3.7, 6, 0.05, 20.0).unwrap();
        assert!(profile
            .sides
            .iter()
            .flatten()
            .all(|a| (0.0..360.0).contains(a)));
        assert!(profile.sides.iter().all(|s| s.len() == profile.len()));
    }

    #[test]
    fn tiny_step_is_rejected() {
        let err = spinner_profile(1.0, 1, 1e-300, 1.0).unwrap_err();
        assert!(matches!(err, TimelineError::InvalidInput(_)));
    }

    #[rstest]
    #[case(1.0, 0, 0.5)]
    #[case(0.0, 2, 0.5)]
    #[case(-1.0, 2, 0.5)]
    #[case(1.0, 2, 0.0)]
    #[case(1.0, 2, f64::INFINITY)]
    fn invalid_input(#[case] rpm: f64, #[case] sides: u32, #[case] step: f64) {
        let err = spinner_profile(rpm, sides, step, 10.0).unwrap_err();
        assert!(matches!(err, TimelineError::InvalidInput(_)));
    }
}
