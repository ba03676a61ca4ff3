//! Metrics Ledger Unit Tests.
//!
//! Verifies cumulative accounting in isolation: the ledger is fed
//! hand-built step results (it never mutates the stores itself) and must
//! produce exact cumulative histories and snapshot totals.

use memsim_core::common::Symbol;
use memsim_core::sim::{AccessOutcome, StepResult};
use memsim_core::stats::MetricsLedger;

/// A hit priced with the default constants.
fn hit(c: char) -> StepResult {
    StepResult {
        symbol: Symbol(c),
        outcome: AccessOutcome::Hit,
        sram_delay: 5,
        dram_delay: 0,
        sram_energy: 0.5,
        dram_energy: 0.0,
        evicted: None,
    }
}

/// A miss priced with the default constants.
fn miss(c: char) -> StepResult {
    StepResult {
        symbol: Symbol(c),
        outcome: AccessOutcome::Miss,
        sram_delay: 0,
        dram_delay: 50,
        sram_energy: 0.6,
        dram_energy: 2.0,
        evicted: None,
    }
}

#[test]
fn empty_ledger_snapshot_is_zero() {
    let ledger = MetricsLedger::default();
    let snapshot = ledger.snapshot();

    assert_eq!(ledger.steps(), 0);
    assert_eq!(snapshot.steps, 0);
    assert_eq!(snapshot.hits, 0);
    assert_eq!(snapshot.misses, 0);
    assert_eq!(snapshot.sram_delay, 0);
    assert_eq!(snapshot.dram_delay, 0);
    assert_eq!(snapshot.sram_energy, 0.0);
    assert_eq!(snapshot.dram_total_energy, 0.0);
    assert_eq!(snapshot.hit_rate(), 0.0);
}

/// Each history entry is the previous entry plus the step's delta.
#[test]
fn record_appends_cumulative_values() {
    let mut ledger = MetricsLedger::default();
    ledger.record(&miss('A'), 0.0);
    ledger.record(&hit('A'), 0.0);
    ledger.record(&hit('A'), 3.0);

    assert_eq!(ledger.steps(), 3);
    assert_eq!(ledger.sram_delay(), &[0, 5, 10]);
    assert_eq!(ledger.dram_delay(), &[50, 50, 50]);
    assert_eq!(ledger.hit_count(), &[0, 1, 2]);
    assert_eq!(ledger.miss_count(), &[1, 1, 1]);

    let sram_energy = ledger.sram_energy();
    assert!((sram_energy[0] - 0.6).abs() < 1e-9);
    assert!((sram_energy[1] - 1.1).abs() < 1e-9);
    assert!((sram_energy[2] - 1.6).abs() < 1e-9);

    let refresh = ledger.refresh_energy();
    assert_eq!(refresh[0], 0.0);
    assert_eq!(refresh[1], 0.0);
    assert!((refresh[2] - 3.0).abs() < 1e-9);
}

#[test]
fn snapshot_reflects_totals() {
    let mut ledger = MetricsLedger::default();
    ledger.record(&miss('A'), 0.0);
    ledger.record(&miss('B'), 0.0);
    ledger.record(&hit('A'), 3.0);

    let snapshot = ledger.snapshot();
    assert_eq!(snapshot.steps, 3);
    assert_eq!(snapshot.hits, 1);
    assert_eq!(snapshot.misses, 2);
    assert_eq!(snapshot.writes, 2);
    assert_eq!(snapshot.sram_delay, 5);
    assert_eq!(snapshot.dram_delay, 100);
    assert!((snapshot.dram_energy - 4.0).abs() < 1e-9);
    assert!((snapshot.refresh_energy - 3.0).abs() < 1e-9);
    assert!((snapshot.dram_total_energy - 7.0).abs() < 1e-9);
}

#[test]
fn hit_rate_is_percentage_of_accesses() {
    let mut ledger = MetricsLedger::default();
    ledger.record(&miss('A'), 0.0);
    ledger.record(&hit('A'), 0.0);
    ledger.record(&hit('A'), 0.0);
    ledger.record(&hit('A'), 0.0);

    let snapshot = ledger.snapshot();
    assert!((snapshot.hit_rate() - 75.0).abs() < 1e-9);
}

#[test]
fn clear_discards_everything() {
    let mut ledger = MetricsLedger::default();
    ledger.record(&miss('A'), 0.0);
    ledger.record(&hit('A'), 3.0);

    ledger.clear();
    assert_eq!(ledger.steps(), 0);
    assert!(ledger.sram_delay().is_empty());
    assert!(ledger.refresh_energy().is_empty());

    let snapshot = ledger.snapshot();
    assert_eq!(snapshot.hits, 0);
    assert_eq!(snapshot.misses, 0);
    assert_eq!(snapshot.writes, 0);
}
