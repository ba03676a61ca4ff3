//! Per-access hit/miss resolution and cost accounting.
//!
//! The access processor resolves one symbol against the two storage levels
//! and prices the access:
//! 1. **Hit:** One SRAM access delay plus SRAM read energy; the entry is
//!    touched to most-recently-used. No backing store interaction.
//! 2. **Miss:** One DRAM access delay plus DRAM read energy; the symbol is
//!    admitted into the backing store if new, then filled into the cache
//!    (possibly evicting the LRU entry) for SRAM write energy. The fill
//!    itself charges no additional SRAM delay.
//!
//! The processor mutates the stores but never the metrics ledger; cumulative
//! accounting stays with the driver so it can be tested independently of
//! store mutation.

use serde::Serialize;
use tracing::debug;

use crate::common::{Result, Symbol};
use crate::config::{EnergyConfig, TimingConfig};
use crate::mem::{BackingStore, LruStore};

/// Outcome of a single access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccessOutcome {
    /// The symbol was already cached.
    Hit,
    /// The symbol had to be fetched from the backing store.
    Miss,
}

/// Delay and energy deltas produced by one access.
///
/// All fields are per-step deltas, not cumulative values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepResult {
    /// The symbol that was accessed.
    pub symbol: Symbol,
    /// Whether the access hit or missed the cache.
    pub outcome: AccessOutcome,
    /// SRAM delay charged this step, in time units.
    pub sram_delay: u64,
    /// DRAM delay charged this step, in time units.
    pub dram_delay: u64,
    /// SRAM energy charged this step, in energy units.
    pub sram_energy: f64,
    /// DRAM energy charged this step, in energy units.
    pub dram_energy: f64,
    /// Symbol evicted from the cache to make room, if any.
    pub evicted: Option<Symbol>,
}

/// Resolves accesses and prices them against the configured cost model.
///
/// Note that the configured DRAM write energy is never charged here: the
/// miss path reads from DRAM and writes into SRAM, so only the SRAM write
/// constant applies. The constant is kept configurable for front ends that
/// display the full cost table.
#[derive(Debug, Clone)]
pub struct AccessProcessor {
    timing: TimingConfig,
    energy: EnergyConfig,
}

impl AccessProcessor {
    /// Creates a processor with the given timing and energy constants.
    pub const fn new(timing: TimingConfig, energy: EnergyConfig) -> Self {
        Self { timing, energy }
    }

    /// Resolves one symbol against the cache and backing store.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::BackingStoreExhausted`] if the symbol misses,
    /// is new, and the backing store has no free slot. The cache is not
    /// mutated in that case; the failure is fatal for the run and the
    /// caller is expected to stop stepping.
    ///
    /// [`SimError::BackingStoreExhausted`]: crate::common::SimError::BackingStoreExhausted
    pub fn process(
        &self,
        cache: &mut LruStore,
        backing: &mut BackingStore,
        symbol: Symbol,
    ) -> Result<StepResult> {
        if cache.contains(symbol) {
            let _ = cache.touch(symbol);
            debug!(%symbol, "cache hit");
            return Ok(StepResult {
                symbol,
                outcome: AccessOutcome::Hit,
                sram_delay: self.timing.sram_access_delay,
                dram_delay: 0,
                sram_energy: self.energy.sram_read,
                dram_energy: 0.0,
                evicted: None,
            });
        }

        // Miss: the fetch must be backed before the cache fill happens.
        let _ = backing.admit(symbol)?;
        let evicted = cache.insert(symbol);
        debug!(%symbol, ?evicted, "cache miss");

        Ok(StepResult {
            symbol,
            outcome: AccessOutcome::Miss,
            sram_delay: 0,
            dram_delay: self.timing.dram_access_delay,
            sram_energy: self.energy.sram_write,
            dram_energy: self.energy.dram_read,
            evicted,
        })
    }
}
