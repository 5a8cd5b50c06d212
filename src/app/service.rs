//! The sampling service — one measure→convert→classify→display cycle.
//!
//! Both error kinds (echo timeout, out-of-range distance) are absorbed
//! here: the failure is emitted to the sink, the indicator is left exactly
//! as the previous cycle set it, and the next cycle begins at the fixed
//! cadence. The cadence itself is the only retry mechanism.

use crate::app::events::MonitorEvent;
use crate::app::ports::{EventSink, IndicatorPort, RangingPort};
use crate::level::FillLevel;

/// Outcome of one sampling cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The indicator was updated to the given tier.
    Updated(FillLevel),
    /// The cycle was skipped; the indicator state persists.
    Skipped,
}

/// Orchestrates the periodic measurement cycle and tracks tier transitions.
pub struct MonitorService {
    last_level: Option<FillLevel>,
    cycles: u64,
    failed_cycles: u64,
}

impl MonitorService {
    pub fn new() -> Self {
        Self {
            last_level: None,
            cycles: 0,
            failed_cycles: 0,
        }
    }

    /// Run one cycle: measure, classify, drive the indicator.
    ///
    /// On any measurement failure the remainder of the cycle is skipped and
    /// the previously shown tier stays lit — a blank or "unknown" display
    /// would be worse than a slightly stale one.
    pub fn run_cycle<R, I, S>(&mut self, ranger: &mut R, indicator: &mut I, sink: &mut S) -> CycleOutcome
    where
        R: RangingPort,
        I: IndicatorPort,
        S: EventSink,
    {
        self.cycles += 1;

        let reading = match ranger.measure() {
            Ok(r) => r,
            Err(e) => {
                self.failed_cycles += 1;
                sink.emit(&MonitorEvent::MeasurementFailed(e));
                return CycleOutcome::Skipped;
            }
        };

        let level = FillLevel::classify(reading.distance_cm);
        indicator.show(level);
        sink.emit(&MonitorEvent::DistanceMeasured {
            distance_cm: reading.distance_cm,
            level,
        });

        if let Some(prev) = self.last_level {
            if prev != level {
                sink.emit(&MonitorEvent::LevelChanged { from: prev, to: level });
            }
        }
        self.last_level = Some(level);

        CycleOutcome::Updated(level)
    }

    /// Tier shown by the most recent successful cycle.
    pub fn current_level(&self) -> Option<FillLevel> {
        self.last_level
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn failed_cycles(&self) -> u64 {
        self.failed_cycles
    }
}

impl Default for MonitorService {
    fn default() -> Self {
        Self::new()
    }
}
