//! # Unit Components
//!
//! Central hub for the core's unit tests, organized to mirror the source
//! tree: configuration, memory stores, simulation driving, and metrics.



/// Unit tests for access resolution and the driver state machine, plus
/// sequence-level property tests.
pub mod sim;

/// Unit tests for the metrics ledger and snapshots.
pub mod stats;
