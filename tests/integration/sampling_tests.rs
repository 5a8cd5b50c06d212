//! Service-level tests: cycle orchestration, error absorption, indicator
//! persistence across failed cycles and the tier-transition events.
//!
//! The real [`IndicatorDriver`] runs here (its host build tracks line
//! states in memory), so mutual exclusivity is asserted against the same
//! code that drives the LEDs in production.

use binguard::app::events::MonitorEvent;
use binguard::app::service::{CycleOutcome, MonitorService};
use binguard::config::BoardConfig;
use binguard::drivers::indicator::IndicatorDriver;
use binguard::error::{EchoPhase, RangingError};
use binguard::level::FillLevel;

use crate::mock_hw::{RecordingSink, ScriptedRanger};

fn indicator() -> IndicatorDriver {
    IndicatorDriver::new(&BoardConfig::default())
}

#[test]
fn successful_cycle_lights_exactly_one_line() {
    let mut ranger = ScriptedRanger::new(vec![ScriptedRanger::reading(25.0)]);
    let mut bank = indicator();
    let mut sink = RecordingSink::new();
    let mut service = MonitorService::new();

    let outcome = service.run_cycle(&mut ranger, &mut bank, &mut sink);

    assert_eq!(outcome, CycleOutcome::Updated(FillLevel::Half));
    assert_eq!(bank.active(), Some(FillLevel::Half));
    assert_eq!(bank.active_count(), 1);
    assert!(matches!(
        sink.events[0],
        MonitorEvent::DistanceMeasured { level: FillLevel::Half, .. }
    ));
}

#[test]
fn timeout_skips_cycle_and_previous_tier_stays_lit() {
    let mut ranger = ScriptedRanger::new(vec![
        ScriptedRanger::reading(35.0),
        Err(RangingError::Timeout(EchoPhase::WaitingHigh)),
    ]);
    let mut bank = indicator();
    let mut sink = RecordingSink::new();
    let mut service = MonitorService::new();

    service.run_cycle(&mut ranger, &mut bank, &mut sink);
    assert_eq!(bank.active(), Some(FillLevel::Quarter));

    let outcome = service.run_cycle(&mut ranger, &mut bank, &mut sink);
    assert_eq!(outcome, CycleOutcome::Skipped);
    // The display persists — no reset to an "unknown" state.
    assert_eq!(bank.active(), Some(FillLevel::Quarter));
    assert_eq!(bank.active_count(), 1);
    assert_eq!(service.current_level(), Some(FillLevel::Quarter));
    assert_eq!(sink.failures(), 1);
}

#[test]
fn out_of_range_skips_cycle_identically() {
    let mut ranger = ScriptedRanger::new(vec![
        ScriptedRanger::reading(15.0),
        Err(RangingError::OutOfRange(450.0)),
    ]);
    let mut bank = indicator();
    let mut sink = RecordingSink::new();
    let mut service = MonitorService::new();

    service.run_cycle(&mut ranger, &mut bank, &mut sink);
    let outcome = service.run_cycle(&mut ranger, &mut bank, &mut sink);

    assert_eq!(outcome, CycleOutcome::Skipped);
    assert_eq!(bank.active(), Some(FillLevel::ThreeQuarter));
    assert_eq!(sink.failures(), 1);
    assert!(matches!(
        sink.events.last(),
        Some(MonitorEvent::MeasurementFailed(RangingError::OutOfRange(_)))
    ));
}

#[test]
fn failure_before_any_success_leaves_bank_dark() {
    let mut ranger = ScriptedRanger::new(vec![Err(RangingError::Timeout(
        EchoPhase::WaitingLow,
    ))]);
    let mut bank = indicator();
    let mut sink = RecordingSink::new();
    let mut service = MonitorService::new();

    let outcome = service.run_cycle(&mut ranger, &mut bank, &mut sink);

    assert_eq!(outcome, CycleOutcome::Skipped);
    assert_eq!(bank.active(), None);
    assert_eq!(service.current_level(), None);
}

#[test]
fn tier_transition_emits_one_change_event() {
    let mut ranger = ScriptedRanger::new(vec![
        ScriptedRanger::reading(35.0),
        ScriptedRanger::reading(34.0), // same tier — no transition
        ScriptedRanger::reading(15.0), // Quarter -> ThreeQuarter
    ]);
    let mut bank = indicator();
    let mut sink = RecordingSink::new();
    let mut service = MonitorService::new();

    for _ in 0..3 {
        service.run_cycle(&mut ranger, &mut bank, &mut sink);
    }

    let changes: Vec<_> = sink
        .events
        .iter()
        .filter(|e| matches!(e, MonitorEvent::LevelChanged { .. }))
        .collect();
    assert_eq!(changes.len(), 1);
    assert_eq!(
        changes[0],
        &MonitorEvent::LevelChanged {
            from: FillLevel::Quarter,
            to: FillLevel::ThreeQuarter,
        }
    );
}

#[test]
fn mutual_exclusivity_holds_across_many_cycles() {
    let distances = [45.0, 5.0, 35.0, 15.0, 25.0, 10.0, 40.0, 120.0];
    let mut ranger =
        ScriptedRanger::new(distances.iter().map(|&d| ScriptedRanger::reading(d)).collect());
    let mut bank = indicator();
    let mut sink = RecordingSink::new();
    let mut service = MonitorService::new();

    for _ in distances {
        service.run_cycle(&mut ranger, &mut bank, &mut sink);
        assert_eq!(bank.active_count(), 1);
    }
    assert_eq!(service.cycles(), distances.len() as u64);
    assert_eq!(service.failed_cycles(), 0);
}
