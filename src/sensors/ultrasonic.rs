//! HC-SR04 ultrasonic ranging driver.
//!
//! One measurement is: shape the trigger waveform, then time the echo pulse
//! whose width is proportional to round-trip time of flight. Both echo wait
//! phases are deliberately tight busy-polls — the transitions are
//! sub-millisecond electrical edges and a scheduler yield would miss them —
//! each bounded by its own independently anchored deadline so the device can
//! never hang on a dead sensor.
//!
//! ## Dual-target design
//!
//! The driver is generic over [`TriggerLine`], [`EchoLine`] and
//! [`MonotonicClock`], so the exact same timing logic runs against real GPIO
//! on the target and against a simulated clock and signal in host tests.

use core::time::Duration;

use crate::config::SystemConfig;
use crate::error::{EchoPhase, RangingError};

/// Speed of sound in cm/µs at room temperature.
pub const SPEED_OF_SOUND_CM_PER_US: f32 = 0.0343;

// ---------------------------------------------------------------------------
// Capability traits (the hardware seam)
// ---------------------------------------------------------------------------

/// The trigger output line.
pub trait TriggerLine {
    fn set_high(&mut self);
    fn set_low(&mut self);
}

/// The echo input line.
pub trait EchoLine {
    fn is_high(&self) -> bool;
}

/// Monotonic time source plus the cooperative hold used to shape the
/// trigger waveform. The echo busy-polls only ever call [`now_us`];
/// [`delay_us`] yields to the scheduler.
///
/// [`now_us`]: MonotonicClock::now_us
/// [`delay_us`]: MonotonicClock::delay_us
pub trait MonotonicClock {
    fn now_us(&self) -> u64;
    fn delay_us(&self, us: u64);
}

// ---------------------------------------------------------------------------
// Measurement result
// ---------------------------------------------------------------------------

/// One successful measurement. Created fresh per sampling cycle and
/// discarded at the end of it; failed attempts are a [`RangingError`]
/// instead, so an invalid reading can never masquerade as a near-zero one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangingReading {
    /// Measured echo pulse width.
    pub pulse_width: Duration,
    /// Validated distance to the bin contents.
    pub distance_cm: f32,
}

// ---------------------------------------------------------------------------
// Pulse timer
// ---------------------------------------------------------------------------

/// Trigger waveform timing, in microseconds.
#[derive(Debug, Clone, Copy)]
pub struct TriggerTiming {
    pub settle_us: u64,
    pub assert_us: u64,
    pub timeout_us: u64,
}

impl TriggerTiming {
    pub fn from_config(cfg: &SystemConfig) -> Self {
        Self {
            settle_us: u64::from(cfg.trigger_settle_ms) * 1_000,
            assert_us: u64::from(cfg.trigger_assert_ms) * 1_000,
            timeout_us: u64::from(cfg.echo_timeout_ms) * 1_000,
        }
    }
}

/// Generates the trigger waveform and measures the echo pulse width
/// against the timeout bound.
pub struct PulseTimer<T, E, C> {
    trigger: T,
    echo: E,
    clock: C,
    timing: TriggerTiming,
}

impl<T: TriggerLine, E: EchoLine, C: MonotonicClock> PulseTimer<T, E, C> {
    pub fn new(trigger: T, echo: E, clock: C, timing: TriggerTiming) -> Self {
        Self {
            trigger,
            echo,
            clock,
            timing,
        }
    }

    /// Request one ranging cycle and measure the echo pulse width.
    ///
    /// No internal retry — the sampling cadence is the retry policy.
    pub fn measure_pulse(&mut self) -> Result<Duration, RangingError> {
        // Known-low baseline, then the assert pulse.
        self.trigger.set_low();
        self.clock.delay_us(self.timing.settle_us);
        self.trigger.set_high();
        self.clock.delay_us(self.timing.assert_us);
        self.trigger.set_low();

        // Rising edge: deadline anchored at the moment polling begins.
        let deadline = self.clock.now_us() + self.timing.timeout_us;
        while !self.echo.is_high() {
            if self.clock.now_us() > deadline {
                return Err(RangingError::Timeout(EchoPhase::WaitingHigh));
            }
        }
        let start = self.clock.now_us();

        // Falling edge: fresh deadline anchored at the rising edge.
        let deadline = start + self.timing.timeout_us;
        while self.echo.is_high() {
            if self.clock.now_us() > deadline {
                return Err(RangingError::Timeout(EchoPhase::WaitingLow));
            }
        }
        let end = self.clock.now_us();

        Ok(Duration::from_micros(end - start))
    }
}

// ---------------------------------------------------------------------------
// Distance conversion
// ---------------------------------------------------------------------------

/// Converts a measured pulse width into a physical distance, enforcing
/// plausibility bounds.
#[derive(Debug, Clone, Copy)]
pub struct DistanceConverter {
    max_range_cm: f32,
}

impl DistanceConverter {
    pub fn new(max_range_cm: f32) -> Self {
        Self { max_range_cm }
    }

    /// `cm = µs × 0.0343 / 2` — the division accounts for the round trip.
    ///
    /// A result at/below zero or beyond the configured range is rejected;
    /// there is no in-band sentinel value for "invalid".
    pub fn pulse_to_cm(&self, pulse_width: Duration) -> Result<f32, RangingError> {
        let cm = pulse_width.as_micros() as f32 * SPEED_OF_SOUND_CM_PER_US / 2.0;
        if cm <= 0.0 || cm > self.max_range_cm {
            return Err(RangingError::OutOfRange(cm));
        }
        Ok(cm)
    }
}

// ---------------------------------------------------------------------------
// Combined ranger
// ---------------------------------------------------------------------------

/// Pulse timer plus converter: one call yields a validated reading.
pub struct UltrasonicRanger<T, E, C> {
    timer: PulseTimer<T, E, C>,
    converter: DistanceConverter,
}

impl<T: TriggerLine, E: EchoLine, C: MonotonicClock> UltrasonicRanger<T, E, C> {
    pub fn new(trigger: T, echo: E, clock: C, cfg: &SystemConfig) -> Self {
        Self {
            timer: PulseTimer::new(trigger, echo, clock, TriggerTiming::from_config(cfg)),
            converter: DistanceConverter::new(cfg.max_range_cm),
        }
    }

    pub fn measure(&mut self) -> Result<RangingReading, RangingError> {
        let pulse_width = self.timer.measure_pulse()?;
        let distance_cm = self.converter.pulse_to_cm(pulse_width)?;
        Ok(RangingReading {
            pulse_width,
            distance_cm,
        })
    }
}

impl<T: TriggerLine, E: EchoLine, C: MonotonicClock> crate::app::ports::RangingPort
    for UltrasonicRanger<T, E, C>
{
    fn measure(&mut self) -> Result<RangingReading, RangingError> {
        UltrasonicRanger::measure(self)
    }
}
