//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured monitor events to the
//! ESP-IDF logger (which goes to UART / USB-CDC in production). Line-
//! oriented text for the operator console; no other component consumes it.

use log::{info, warn};

use crate::app::events::MonitorEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`MonitorEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &MonitorEvent) {
        match event {
            MonitorEvent::Started => {
                info!("START | monitor sampling");
            }
            MonitorEvent::DistanceMeasured { distance_cm, level } => {
                info!("RANGE | {:.2} cm | bin is {}", distance_cm, level);
            }
            MonitorEvent::LevelChanged { from, to } => {
                info!("LEVEL | {} -> {}", from, to);
            }
            MonitorEvent::MeasurementFailed(e) => {
                warn!("SKIP  | {}", e);
            }
            MonitorEvent::Environment(env) => {
                info!(
                    "ENV   | T={:.2} C | P={:.2} hPa | alt={:.2} m",
                    env.temperature_c,
                    env.pressure_pa as f32 / 100.0,
                    env.altitude_m,
                );
            }
        }
    }
}
