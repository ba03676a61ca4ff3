//! SRAM/DRAM memory hierarchy simulator library.
//!
//! This crate models the timing and energy behavior of a two-level memory
//! hierarchy as symbols from an input string are accessed one at a time:
//! 1. **Memory:** A small fully-associative SRAM cache with LRU eviction,
//!    backed by a bounded DRAM residency set.
//! 2. **Accesses:** Hit/miss resolution with fixed per-access delay and
//!    energy costs, plus periodic DRAM refresh energy.
//! 3. **Driving:** An externally stepped state machine (load, step, run,
//!    pause, reset) that any front end can pace.
//! 4. **Metrics:** Append-only cumulative histories and snapshots for
//!    charting and reporting.
//!
//! The core emits pure data and never depends on any rendering capability;
//! graphical, terminal, and headless harness front ends all drive the same
//! interface.

/// Common types (symbols, errors).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// Memory hierarchy models (LRU cache store, DRAM backing store).
pub mod mem;
/// Access resolution and the simulation driver state machine.
pub mod sim;
/// Metrics ledger, snapshots, and report printing.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Simulation error taxonomy.
pub use crate::common::SimError;
/// Main driver type; owns the cache, backing store, and metrics ledger.
pub use crate::sim::Simulation;
/// Cumulative metrics summary returned by `Simulation::current_metrics`.
pub use crate::stats::MetricsSnapshot;
