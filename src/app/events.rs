//! Outbound application events.
//!
//! The [`MonitorService`](super::service::MonitorService) emits these through
//! the [`EventSink`](super::ports::EventSink) port; the production adapter
//! renders them as line-oriented log text for the operator console.

use crate::error::RangingError;
use crate::level::FillLevel;
use crate::sensors::barometer::EnvReading;

/// Structured events emitted by the sampling core.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorEvent {
    /// The monitor has started sampling.
    Started,

    /// A cycle produced a validated distance and classified tier.
    DistanceMeasured { distance_cm: f32, level: FillLevel },

    /// The classified tier differs from the previous successful cycle's.
    LevelChanged { from: FillLevel, to: FillLevel },

    /// A cycle was skipped; the indicator keeps its previous state.
    MeasurementFailed(RangingError),

    /// An environmental sample from the independent barometer channel.
    Environment(EnvReading),
}
