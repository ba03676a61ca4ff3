//! Common types shared across the memory hierarchy simulator.
//!
//! This module provides the fundamental building blocks used by every other
//! component. It includes:
//! 1. **Symbol Type:** A strong type for the atomic unit of input.
//! 2. **Error Handling:** The simulation error taxonomy and result alias.

/// Error types for the simulation core.
pub mod error;

/// The atomic unit of simulated input.
pub mod symbol;

pub use error::{Result, SimError};
pub use symbol::Symbol;
