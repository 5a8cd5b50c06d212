//! BinGuard Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single sequential sampling loop:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  GpioTrigger/GpioEcho   Esp32TimeAdapter   LogEventSink  │
//! │  (ranging lines)        (MonotonicClock)   (EventSink)   │
//! │                                                          │
//! │  ──────────────── Port Trait Boundary ───────────────    │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │            MonitorService (pure logic)             │  │
//! │  │  measure → convert → classify → indicate           │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                                                          │
//! │  Independent side channel: Bmp180 → log stream only      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{info, warn};

use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::AnyIOPin;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;

use binguard::adapters::hardware::{GpioEcho, GpioTrigger};
use binguard::adapters::log_sink::LogEventSink;
use binguard::adapters::time::Esp32TimeAdapter;
use binguard::app::events::MonitorEvent;
use binguard::app::ports::EventSink;
use binguard::app::service::MonitorService;
use binguard::config::{BoardConfig, SystemConfig};
use binguard::drivers::hw_init;
use binguard::drivers::indicator::IndicatorDriver;
use binguard::sensors::barometer::Bmp180;
use binguard::sensors::ultrasonic::UltrasonicRanger;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  BinGuard v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    let board = BoardConfig::default();
    config.validate().map_err(|e| anyhow::anyhow!("{e}"))?;
    board.validate().map_err(|e| anyhow::anyhow!("{e}"))?;

    // ── 3. Peripheral bring-up ────────────────────────────────
    if let Err(e) = hw_init::init_peripherals(&board) {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 4. Construct adapters ─────────────────────────────────
    let mut ranger = UltrasonicRanger::new(
        GpioTrigger::new(board.trigger_gpio),
        GpioEcho::new(board.echo_gpio),
        Esp32TimeAdapter::new(),
        &config,
    );
    let mut indicator = IndicatorDriver::new(&board);
    let mut sink = LogEventSink::new();
    let mut service = MonitorService::new();

    // ── 5. Environmental side channel (BMP180 over I²C) ───────
    // A missing or failing barometer never blocks the fill-level core.
    let peripherals = Peripherals::take()?;
    // SAFETY: the I²C pin numbers come from the validated BoardConfig and
    // are not claimed by any other driver.
    let (sda, scl) = unsafe {
        (
            AnyIOPin::new(board.i2c_sda_gpio),
            AnyIOPin::new(board.i2c_scl_gpio),
        )
    };
    let i2c_cfg = I2cConfig::new().baudrate(Hertz(board.i2c_freq_hz));
    let mut baro = match I2cDriver::new(peripherals.i2c0, sda, scl, &i2c_cfg) {
        Ok(i2c) => match Bmp180::new(i2c, FreeRtos) {
            Ok(b) => Some(b),
            Err(e) => {
                warn!("BMP180 init failed ({}), continuing without environment data", e);
                None
            }
        },
        Err(e) => {
            warn!("I2C init failed ({}), continuing without environment data", e);
            None
        }
    };

    sink.emit(&MonitorEvent::Started);
    info!("System ready. Entering sampling loop.");

    // ── 6. Sampling loop ──────────────────────────────────────
    let mut cycle: u64 = 0;
    loop {
        service.run_cycle(&mut ranger, &mut indicator, &mut sink);

        cycle += 1;
        if cycle % u64::from(config.env_sample_every) == 0 {
            if let Some(b) = baro.as_mut() {
                match b.read_environment() {
                    Ok(env) => sink.emit(&MonitorEvent::Environment(env)),
                    Err(e) => warn!("baro read failed: {}", e),
                }
            }
        }

        FreeRtos::delay_ms(config.sample_period_ms);
    }
}
