//! DRAM backing store model.
//!
//! The backing store is a bounded residency set: a symbol is admitted on its
//! first-ever miss, takes the lowest free slot, and stays resident until the
//! simulation is reset. There is no eviction path. Admitting a new symbol
//! once every slot is taken is a fatal error for the run.

use std::collections::HashMap;

use tracing::debug;

use crate::common::{Result, SimError, Symbol};

/// Bounded set of symbols resident in DRAM.
#[derive(Debug, Clone)]
pub struct BackingStore {
    /// Slot contents, indexed by slot id. `None` marks a free slot.
    slots: Vec<Option<Symbol>>,
    /// Symbol to slot id lookup.
    index: HashMap<Symbol, usize>,
}

impl BackingStore {
    /// Creates an empty backing store with the given capacity.
    ///
    /// A capacity of zero is clamped to one entry.
    pub fn new(capacity: usize) -> Self {
        let safe_capacity = if capacity == 0 { 1 } else { capacity };
        Self {
            slots: vec![None; safe_capacity],
            index: HashMap::with_capacity(safe_capacity),
        }
    }

    /// Returns the configured capacity in entries.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of resident symbols.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no symbols are resident.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Checks whether the given symbol is resident.
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Returns the slot id holding the given symbol, if resident.
    pub fn slot_of(&self, symbol: Symbol) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Admits a symbol, assigning it the lowest free slot.
    ///
    /// Admission is idempotent: a symbol that is already resident keeps its
    /// slot. Residency is permanent until [`BackingStore::clear`].
    ///
    /// # Errors
    ///
    /// Returns [`SimError::BackingStoreExhausted`] if the symbol is new and
    /// every slot is taken. The store is left unchanged.
    pub fn admit(&mut self, symbol: Symbol) -> Result<usize> {
        if let Some(slot) = self.slot_of(symbol) {
            return Ok(slot);
        }
        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(SimError::BackingStoreExhausted {
                capacity: self.slots.len(),
            })?;
        self.slots[slot] = Some(symbol);
        let _ = self.index.insert(symbol, slot);
        debug!(%symbol, slot, "admitted into backing store");
        Ok(slot)
    }

    /// Removes every resident symbol, returning the store to its initial
    /// state.
    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.index.clear();
    }

    /// Iterates over the resident symbols as `(slot id, symbol)` pairs, in
    /// slot order. Intended for front ends rendering the DRAM grid.
    pub fn entries(&self) -> impl Iterator<Item = (usize, Symbol)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| entry.map(|symbol| (slot, symbol)))
    }
}
