//! Simulation error definitions.
//!
//! This module defines the error taxonomy for the simulation core. It provides:
//! 1. **Recoverable usage errors:** Rejected before any state mutation.
//! 2. **Fatal run errors:** Surfaced to the caller and terminal for the run.
//! 3. **Result alias:** The crate-wide `Result` type.
//!
//! The core never retries or silently recovers; every error is returned to
//! the caller, which decides whether to reset and start over.

use thiserror::Error;

use crate::sim::DriverState;

/// Errors produced by the simulation core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// `load` was called with an empty input sequence.
    ///
    /// Recoverable: rejected before any state mutation.
    #[error("input sequence is empty")]
    InputEmpty,

    /// The backing store ran out of slots while admitting a new symbol.
    ///
    /// Fatal for the current run: the driver transitions to
    /// [`DriverState::Errored`] and accepts no further steps until reset.
    /// Metrics accumulated before the failure remain valid and inspectable.
    #[error("backing store exhausted: all {capacity} slots are resident")]
    BackingStoreExhausted {
        /// Configured backing store capacity at the time of the failure.
        capacity: usize,
    },

    /// `step` was called in a state that cannot advance.
    ///
    /// Recoverable usage error: rejected with no state mutation. Raised in
    /// [`DriverState::Idle`], [`DriverState::Completed`], and
    /// [`DriverState::Errored`].
    #[error("cannot step while {state}")]
    InvalidStep {
        /// Driver state at the time of the rejected call.
        state: DriverState,
    },
}

/// Crate-wide result alias for fallible simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;
