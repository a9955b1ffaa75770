//! Timeline generators for spacecraft power and thermal simulation.
//!
//! Each generator validates its inputs up front and returns a finite,
//! restartable iterator of [OrbitTimePoint]s. The walk stops at the first
//! time past the requested end, which is still emitted.

mod constant;
mod eclipse;
mod error;
mod l1l2;
mod leo;
mod lookup;
mod sample;
mod spinner;

pub use constant::{constant_timeline, ConstantTimeline};
pub use eclipse::EclipseWindow;
pub use error::TimelineError;
pub use l1l2::{libration_timeline, LibrationTimeline};
pub use leo::{leo_timeline, leo_timeline_with, AngleTimeTable, LeoTimeline};
pub use lookup::{AngleLookup, ClosestAngle};
pub use sample::OrbitTimePoint;
pub use spinner::{spinner_profile, SpinnerProfile};
