use super::eclipse::EclipseWindow;
use super::error::{require_finite, require_non_negative, require_positive, TimelineError};
use super::sample::OrbitTimePoint;

/// Libration-point (L1/L2) timeline driven by an external time table.
///
/// The loop runs on its own counter advancing by `integration_step`, while
/// each emitted sample takes its time from the table. Once the table is
/// exhausted the last entry is repeated.
#[derive(Debug, Clone)]
pub struct LibrationTimeline {
    times: Vec<f64>,
    window: EclipseWindow,
    end_time: f64,
    integration_step: f64,
    step: usize,
}

impl Iterator for LibrationTimeline {
    type Item = OrbitTimePoint;

    fn next(&mut self) -> Option<Self::Item> {
        let time_run = self.step as f64 * self.integration_step;
        if time_run > self.end_time {
            return None;
        }

        let last = self.times.len() - 1;
        let current_time = self.times[self.step.min(last)];
        let in_sunlight = self.window.is_sunlit(current_time);

        self.step += 1;
        Some(OrbitTimePoint::new(current_time, 0, 0.0, in_sunlight))
    }
}

/// `times_for_sun_angles` must be sorted ascending.
pub fn libration_timeline(
    times_for_sun_angles: &[f64],
    end_time: f64,
    eclipse_start: f64,
    eclipse_end: f64,
    integration_step: f64,
) -> Result<LibrationTimeline, TimelineError> {
    if times_for_sun_angles.is_empty() {
        return Err(TimelineError::invalid("sun angle time table is empty"));
    }
    require_positive("integration_step", integration_step)?;
    require_non_negative("end_time", end_time)?;
    require_finite("eclipse_start", eclipse_start)?;
    require_finite("eclipse_end", eclipse_end)?;
    if eclipse_start > eclipse_end {
        return Err(TimelineError::invalid(format!(
            "eclipse_start {eclipse_start} is after eclipse_end {eclipse_end}"
        )));
    }

    log::debug!(
        "libration timeline: {} table entries, step {} min, end {} min",
        times_for_sun_angles.len(),
        integration_step,
        end_time
    );
    Ok(LibrationTimeline {
        times: times_for_sun_angles.to_vec(),
        window: EclipseWindow::absolute(eclipse_start, eclipse_end),
        end_time,
        integration_step,
        step: 0,
    })
}
