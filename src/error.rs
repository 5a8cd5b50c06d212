//! Unified error types for the BinGuard firmware.
//!
//! A single `Error` enum that every subsystem can convert into, keeping the
//! sampling loop's error handling uniform. All variants are `Copy` so they
//! can be cheaply passed through the event sink without allocation.
//!
//! Nothing here is fatal: ranging and barometer failures are logged and the
//! affected cycle is skipped; the device keeps attempting measurements
//! forever.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The ultrasonic ranging subsystem failed for one cycle.
    Ranging(RangingError),
    /// The barometric sensor could not be read.
    Baro(BaroError),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ranging(e) => write!(f, "ranging: {e}"),
            Self::Baro(e) => write!(f, "baro: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Ranging errors
// ---------------------------------------------------------------------------

/// Which echo wait phase timed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoPhase {
    /// The echo input never reached the active level.
    WaitingHigh,
    /// The echo input never returned to the inactive level.
    WaitingLow,
}

/// One failed measurement attempt. Non-fatal: the sampling loop logs the
/// failure, leaves the indicator untouched and retries on the next cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangingError {
    /// The echo input failed to transition within the timeout bound.
    Timeout(EchoPhase),
    /// The computed distance (cm) is outside the sensor's physical envelope.
    OutOfRange(f32),
}

impl fmt::Display for RangingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout(EchoPhase::WaitingHigh) => write!(f, "echo never asserted"),
            Self::Timeout(EchoPhase::WaitingLow) => write!(f, "echo never deasserted"),
            Self::OutOfRange(cm) => write!(f, "distance {cm:.1} cm out of physical range"),
        }
    }
}

impl From<RangingError> for Error {
    fn from(e: RangingError) -> Self {
        Self::Ranging(e)
    }
}

// ---------------------------------------------------------------------------
// Barometer errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaroError {
    /// An I²C transaction failed.
    I2c,
    /// The EEPROM calibration block contains 0x0000/0xFFFF words.
    BadCalibration,
}

impl fmt::Display for BaroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I2c => write!(f, "I2C transaction failed"),
            Self::BadCalibration => write!(f, "calibration block invalid"),
        }
    }
}

impl From<BaroError> for Error {
    fn from(e: BaroError) -> Self {
        Self::Baro(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
