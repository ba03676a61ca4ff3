//! Simulation driving and per-access resolution.
//!
//! This module contains:
//! 1. **Access Processor:** Resolves one symbol against the cache and
//!    backing store and prices the access in delay and energy.
//! 2. **Driver:** The externally stepped state machine that owns all
//!    simulation state and feeds the metrics ledger.

/// Per-access hit/miss resolution and cost accounting.
pub mod access;

/// Simulation driver state machine.
pub mod driver;

pub use access::{AccessOutcome, AccessProcessor, StepResult};
pub use driver::{DriverState, Simulation, StepReport};
