//! Hardware adapter — real GPIO lines behind the ranging capability traits.
//!
//! This is the only module that binds the ranging driver to actual pins;
//! the driver itself only ever sees [`TriggerLine`] and [`EchoLine`].
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads and writes real GPIO levels via hw_init helpers.
//! On host/test: the echo level comes from an injection static, defaulting
//! to LOW (idle).

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

use crate::drivers::hw_init;
use crate::sensors::ultrasonic::{EchoLine, TriggerLine};

#[cfg(not(target_os = "espidf"))]
static SIM_ECHO_HIGH: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_echo_high(high: bool) {
    SIM_ECHO_HIGH.store(high, Ordering::Relaxed);
}

// ── Trigger output ────────────────────────────────────────────

pub struct GpioTrigger {
    pin: i32,
}

impl GpioTrigger {
    pub fn new(pin: i32) -> Self {
        Self { pin }
    }
}

impl TriggerLine for GpioTrigger {
    fn set_high(&mut self) {
        hw_init::gpio_write(self.pin, true);
    }

    fn set_low(&mut self) {
        hw_init::gpio_write(self.pin, false);
    }
}

// ── Echo input ────────────────────────────────────────────────

pub struct GpioEcho {
    #[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
    pin: i32,
}

impl GpioEcho {
    pub fn new(pin: i32) -> Self {
        Self { pin }
    }
}

#[cfg(target_os = "espidf")]
impl EchoLine for GpioEcho {
    fn is_high(&self) -> bool {
        hw_init::gpio_read(self.pin)
    }
}

#[cfg(not(target_os = "espidf"))]
impl EchoLine for GpioEcho {
    fn is_high(&self) -> bool {
        SIM_ECHO_HIGH.load(Ordering::Relaxed)
    }
}
