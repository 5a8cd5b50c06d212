//! System configuration parameters.
//!
//! All tunable parameters for the BinGuard monitor. [`SystemConfig`] holds
//! the timing and range tunables; [`BoardConfig`] holds the pin roles so the
//! drivers are decoupled from any specific board wiring.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::pins;

/// Core system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Trigger waveform ---
    /// Trigger held LOW this long before each measurement to guarantee a
    /// known baseline.
    pub trigger_settle_ms: u32,
    /// Trigger assertion duration. The deployed sensor is driven with a
    /// multi-millisecond pulse; datasheet-timed modules can shorten this
    /// to the microsecond scale without touching the driver.
    pub trigger_assert_ms: u32,

    // --- Echo measurement ---
    /// Timeout bound applied independently to the rising-edge wait and the
    /// falling-edge wait.
    pub echo_timeout_ms: u32,

    // --- Distance validity ---
    /// Maximum physically meaningful distance (cm). Readings above this,
    /// or at/below zero, are rejected.
    pub max_range_cm: f32,

    // --- Timing ---
    /// Inter-sample period of the main loop (milliseconds).
    pub sample_period_ms: u32,
    /// Read the environmental sensor every N ranging cycles.
    pub env_sample_every: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Trigger waveform
            trigger_settle_ms: 2,
            trigger_assert_ms: 10,

            // Echo measurement
            echo_timeout_ms: 20,

            // Distance validity
            max_range_cm: 400.0,

            // Timing
            sample_period_ms: 1000, // 1 Hz
            env_sample_every: 2,    // every 2 s at the default cadence
        }
    }
}

impl SystemConfig {
    /// Range-check the configuration. Invalid values are rejected, not
    /// silently clamped.
    pub fn validate(&self) -> Result<(), Error> {
        if self.echo_timeout_ms == 0 {
            return Err(Error::Config("echo timeout must be non-zero"));
        }
        if self.trigger_assert_ms == 0 {
            return Err(Error::Config("trigger assert duration must be non-zero"));
        }
        if !(self.max_range_cm > 0.0) {
            return Err(Error::Config("max range must be positive"));
        }
        if self.sample_period_ms == 0 {
            return Err(Error::Config("sample period must be non-zero"));
        }
        if self.env_sample_every == 0 {
            return Err(Error::Config("env sample divisor must be non-zero"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Board wiring
// ---------------------------------------------------------------------------

/// GPIO roles for one board revision. Defaults match the main-board
/// schematic in `pins.rs`; a different wiring only needs a different
/// `BoardConfig` handed to `main()`'s construction phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub trigger_gpio: i32,
    pub echo_gpio: i32,
    pub led_empty_gpio: i32,
    pub led_quarter_gpio: i32,
    pub led_half_gpio: i32,
    pub led_three_quarter_gpio: i32,
    pub led_full_gpio: i32,
    pub i2c_sda_gpio: i32,
    pub i2c_scl_gpio: i32,
    /// I²C bus clock for the environmental sensor.
    pub i2c_freq_hz: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            trigger_gpio: pins::TRIGGER_GPIO,
            echo_gpio: pins::ECHO_GPIO,
            led_empty_gpio: pins::LED_EMPTY_GPIO,
            led_quarter_gpio: pins::LED_QUARTER_GPIO,
            led_half_gpio: pins::LED_HALF_GPIO,
            led_three_quarter_gpio: pins::LED_THREE_QUARTER_GPIO,
            led_full_gpio: pins::LED_FULL_GPIO,
            i2c_sda_gpio: pins::I2C_SDA_GPIO,
            i2c_scl_gpio: pins::I2C_SCL_GPIO,
            i2c_freq_hz: pins::I2C_FREQ_HZ,
        }
    }
}

impl BoardConfig {
    /// The five indicator lines in tier order (empty → full).
    pub fn indicator_gpios(&self) -> [i32; 5] {
        [
            self.led_empty_gpio,
            self.led_quarter_gpio,
            self.led_half_gpio,
            self.led_three_quarter_gpio,
            self.led_full_gpio,
        ]
    }

    /// Reject wirings that route two roles to the same pin.
    pub fn validate(&self) -> Result<(), Error> {
        let all = [
            self.trigger_gpio,
            self.echo_gpio,
            self.led_empty_gpio,
            self.led_quarter_gpio,
            self.led_half_gpio,
            self.led_three_quarter_gpio,
            self.led_full_gpio,
            self.i2c_sda_gpio,
            self.i2c_scl_gpio,
        ];
        for (i, a) in all.iter().enumerate() {
            if all[i + 1..].contains(a) {
                return Err(Error::Config("two roles share one GPIO"));
            }
        }
        Ok(())
    }
}
