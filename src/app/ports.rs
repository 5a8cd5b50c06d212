//! Port traits — the hexagonal boundary between the sampling logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ MonitorService (domain)
//! ```
//!
//! Driven adapters (the ranging driver, the indicator bank, the log sink)
//! implement these traits. The [`MonitorService`](super::service::MonitorService)
//! consumes them via generics, so the cycle logic never touches hardware
//! directly and runs unchanged in host tests.

use crate::error::RangingError;
use crate::level::FillLevel;
use crate::sensors::ultrasonic::RangingReading;

// ───────────────────────────────────────────────────────────────
// Ranging port (driven adapter: sensor → domain)
// ───────────────────────────────────────────────────────────────

/// One measurement attempt per call; a failed attempt is an error, never a
/// sentinel reading.
pub trait RangingPort {
    fn measure(&mut self) -> Result<RangingReading, RangingError>;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → display)
// ───────────────────────────────────────────────────────────────

/// Write-side port: activate exactly the output for `level`, deactivating
/// all others. Implementations must be idempotent.
pub trait IndicatorPort {
    fn show(&mut self, level: FillLevel);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → diagnostics)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`MonitorEvent`](super::events::MonitorEvent)s
/// through this port. Adapters decide where they go (serial log in
/// production, a recording vector in tests).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::MonitorEvent);
}
