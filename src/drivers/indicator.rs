//! Fill-level indicator bank — five discrete LEDs, one per tier.
//!
//! Invariant: at most one line is active at any time. Every update clears
//! the whole bank before lighting the selected line, so a stuck "previous"
//! LED is impossible and repeated updates with the same tier are idempotent.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes real GPIO levels via hw_init helpers.
//! On host/test: the in-memory line states are the observable output.

use crate::config::BoardConfig;
use crate::drivers::hw_init;
use crate::level::FillLevel;

pub struct IndicatorDriver {
    pins: [i32; 5],
    lit: [bool; 5],
}

impl IndicatorDriver {
    /// Build the bank from the board wiring. All lines start dark
    /// (hw_init already drove the outputs low).
    pub fn new(board: &BoardConfig) -> Self {
        Self {
            pins: board.indicator_gpios(),
            lit: [false; 5],
        }
    }

    /// Light exactly the line for `level`, forcing all others inactive.
    pub fn show(&mut self, level: FillLevel) {
        for (i, &pin) in self.pins.iter().enumerate() {
            hw_init::gpio_write(pin, false);
            self.lit[i] = false;
        }
        let idx = level.line_index();
        hw_init::gpio_write(self.pins[idx], true);
        self.lit[idx] = true;
    }

    /// Darken the whole bank.
    pub fn all_off(&mut self) {
        for (i, &pin) in self.pins.iter().enumerate() {
            hw_init::gpio_write(pin, false);
            self.lit[i] = false;
        }
    }

    /// The currently lit tier, if any.
    pub fn active(&self) -> Option<FillLevel> {
        const TIERS: [FillLevel; 5] = [
            FillLevel::Empty,
            FillLevel::Quarter,
            FillLevel::Half,
            FillLevel::ThreeQuarter,
            FillLevel::Full,
        ];
        self.lit.iter().position(|&on| on).map(|i| TIERS[i])
    }

    /// Number of simultaneously active lines.
    pub fn active_count(&self) -> usize {
        self.lit.iter().filter(|&&on| on).count()
    }
}

impl crate::app::ports::IndicatorPort for IndicatorDriver {
    fn show(&mut self, level: FillLevel) {
        IndicatorDriver::show(self, level);
    }
}
