//! GPIO / peripheral pin assignments for the BinGuard main board.
//!
//! Single source of truth for the default wiring — [`BoardConfig`]
//! (see `config.rs`) is seeded from these constants and passed into the
//! drivers at construction, so nothing below `main()` hard-codes a pin.
//!
//! [`BoardConfig`]: crate::config::BoardConfig

// ---------------------------------------------------------------------------
// Ultrasonic ranging sensor (HC-SR04)
// ---------------------------------------------------------------------------

/// Digital output: asserted HIGH to request one ranging cycle.
pub const TRIGGER_GPIO: i32 = 5;
/// Digital input: pulse width is proportional to round-trip time of flight.
pub const ECHO_GPIO: i32 = 18;

// ---------------------------------------------------------------------------
// Fill-level indicator LEDs (one per tier, mutually exclusive)
// ---------------------------------------------------------------------------

pub const LED_EMPTY_GPIO: i32 = 32;
pub const LED_QUARTER_GPIO: i32 = 25;
pub const LED_HALF_GPIO: i32 = 26;
pub const LED_THREE_QUARTER_GPIO: i32 = 27;
pub const LED_FULL_GPIO: i32 = 33;

// ---------------------------------------------------------------------------
// I²C bus (BMP180 environmental sensor)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 21;
pub const I2C_SCL_GPIO: i32 = 22;

/// I²C clock frequency for the BMP180 (standard mode).
pub const I2C_FREQ_HZ: u32 = 100_000;
