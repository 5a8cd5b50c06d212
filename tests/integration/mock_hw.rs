//! Simulated hardware for integration tests.
//!
//! [`SimClock`] models a monotonic microsecond clock where every poll costs
//! one tick, so busy-wait loops make progress and timeouts actually expire.
//! [`SimEcho`] is a pulse scheduled in absolute sim time; [`SimTrigger`]
//! records every edge with its timestamp so tests can assert on the
//! waveform shape.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use binguard::app::events::MonitorEvent;
use binguard::app::ports::{EventSink, RangingPort};
use binguard::error::RangingError;
use binguard::sensors::ultrasonic::{
    EchoLine, MonotonicClock, RangingReading, TriggerLine, SPEED_OF_SOUND_CM_PER_US,
};

// ── Simulated clock ───────────────────────────────────────────

/// Shared simulation time handle.
pub type SimTime = Rc<Cell<u64>>;

pub fn sim_time() -> SimTime {
    Rc::new(Cell::new(0))
}

pub struct SimClock {
    now: SimTime,
    tick_us: u64,
}

impl SimClock {
    /// Every `now_us()` query advances time by `tick_us`, modelling the
    /// cost of one poll iteration.
    pub fn new(now: SimTime, tick_us: u64) -> Self {
        Self { now, tick_us }
    }
}

impl MonotonicClock for SimClock {
    fn now_us(&self) -> u64 {
        let t = self.now.get() + self.tick_us;
        self.now.set(t);
        t
    }

    fn delay_us(&self, us: u64) {
        self.now.set(self.now.get() + us);
    }
}

// ── Simulated echo line ───────────────────────────────────────

/// Echo pulse scheduled in absolute sim time: high in `[rise_at, fall_at)`.
pub struct SimEcho {
    now: SimTime,
    pub rise_at: u64,
    pub fall_at: u64,
}

impl SimEcho {
    pub fn pulse(now: SimTime, rise_at: u64, width_us: u64) -> Self {
        Self {
            now,
            rise_at,
            fall_at: rise_at + width_us,
        }
    }

    /// An echo line that never asserts.
    pub fn silent(now: SimTime) -> Self {
        Self {
            now,
            rise_at: u64::MAX,
            fall_at: u64::MAX,
        }
    }

    /// An echo line that asserts and never releases.
    pub fn stuck_high(now: SimTime, rise_at: u64) -> Self {
        Self {
            now,
            rise_at,
            fall_at: u64::MAX,
        }
    }
}

impl EchoLine for SimEcho {
    fn is_high(&self) -> bool {
        let t = self.now.get();
        t >= self.rise_at && t < self.fall_at
    }
}

// ── Simulated trigger line ────────────────────────────────────

pub struct SimTrigger {
    now: SimTime,
    /// `(timestamp_us, level)` per edge.
    pub edges: Rc<RefCell<Vec<(u64, bool)>>>,
}

impl SimTrigger {
    pub fn new(now: SimTime) -> Self {
        Self {
            now,
            edges: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn record(&self, level: bool) {
        let t = self.now.get();
        self.edges.borrow_mut().push((t, level));
    }
}

impl TriggerLine for SimTrigger {
    fn set_high(&mut self) {
        self.record(true);
    }

    fn set_low(&mut self) {
        self.record(false);
    }
}

// ── Scripted ranger (service-level tests) ─────────────────────

/// Replays a queue of measurement results.
pub struct ScriptedRanger {
    script: VecDeque<Result<RangingReading, RangingError>>,
}

impl ScriptedRanger {
    pub fn new(script: Vec<Result<RangingReading, RangingError>>) -> Self {
        Self {
            script: script.into(),
        }
    }

    pub fn reading(distance_cm: f32) -> Result<RangingReading, RangingError> {
        let width_us = (distance_cm * 2.0 / SPEED_OF_SOUND_CM_PER_US) as u64;
        Ok(RangingReading {
            pulse_width: core::time::Duration::from_micros(width_us),
            distance_cm,
        })
    }
}

impl RangingPort for ScriptedRanger {
    fn measure(&mut self) -> Result<RangingReading, RangingError> {
        self.script.pop_front().expect("measurement script exhausted")
    }
}

// ── Recording event sink ──────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<MonitorEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, MonitorEvent::MeasurementFailed(_)))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &MonitorEvent) {
        self.events.push(event.clone());
    }
}
