//! Fully-associative LRU cache store.
//!
//! This module implements the SRAM cache model. It maintains:
//! 1. **Slot assignment:** Each cached symbol occupies one slot, mirroring a
//!    cell in a visual memory grid. New entries take the lowest free slot;
//!    an evicted entry's slot is reused by the symbol that displaced it.
//! 2. **Recency order:** A strict total order over the current entries,
//!    updated by move-to-end on every touch and insert. Eviction always
//!    removes the current head of that order.
//!
//! # Performance
//!
//! `touch` and `insert` are O(n) in the entry count (linear scan of the
//! recency queue). Capacities here are grid-sized (single digits to a few
//! dozen), so constant factors dominate and an intrusive list would not pay
//! for itself.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::common::Symbol;

/// Fixed-capacity associative store with least-recently-used eviction.
///
/// The number of entries never exceeds the configured capacity. Every symbol
/// held here is expected to also be resident in the backing store; the cache
/// never holds data the backing store has not seen (write-back is not
/// modeled).
#[derive(Debug, Clone)]
pub struct LruStore {
    /// Slot contents, indexed by slot id. `None` marks a free slot.
    slots: Vec<Option<Symbol>>,
    /// Symbol to slot id lookup.
    index: HashMap<Symbol, usize>,
    /// Recency order: front is least recently used, back is most recent.
    recency: VecDeque<Symbol>,
}

impl LruStore {
    /// Creates an empty cache store with the given capacity.
    ///
    /// A capacity of zero is clamped to one entry.
    pub fn new(capacity: usize) -> Self {
        let safe_capacity = if capacity == 0 { 1 } else { capacity };
        Self {
            slots: vec![None; safe_capacity],
            index: HashMap::with_capacity(safe_capacity),
            recency: VecDeque::with_capacity(safe_capacity),
        }
    }

    /// Returns the configured capacity in entries.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of symbols currently cached.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no symbols are cached.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Checks whether the given symbol is cached (a hit).
    ///
    /// Membership is not mutated; a caller resolving a hit must follow up
    /// with [`LruStore::touch`] to record the access.
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Returns the slot id holding the given symbol, if cached.
    pub fn slot_of(&self, symbol: Symbol) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Returns the symbol next in line for eviction, if any.
    pub fn lru(&self) -> Option<Symbol> {
        self.recency.front().copied()
    }

    /// Marks an existing entry as most recently used.
    ///
    /// Returns `false` if the symbol is not cached, which is a precondition
    /// violation on the caller's part; the store is left unchanged in that
    /// case.
    pub fn touch(&mut self, symbol: Symbol) -> bool {
        if !self.index.contains_key(&symbol) {
            return false;
        }
        self.move_to_back(symbol);
        true
    }

    /// Inserts a symbol as most recently used, evicting if necessary.
    ///
    /// At capacity, the least-recently-used entry is removed and returned;
    /// the newcomer takes over its slot. Under capacity, the newcomer takes
    /// the lowest free slot and nothing is evicted. Inserting a symbol that
    /// is already cached just refreshes its recency.
    pub fn insert(&mut self, symbol: Symbol) -> Option<Symbol> {
        if self.index.contains_key(&symbol) {
            self.move_to_back(symbol);
            return None;
        }

        let mut evicted = None;
        let slot = if self.index.len() >= self.slots.len() {
            let (victim, slot) = self.evict();
            debug!(%victim, incoming = %symbol, "cache eviction");
            evicted = Some(victim);
            slot
        } else {
            self.first_free_slot()
        };

        self.slots[slot] = Some(symbol);
        let _ = self.index.insert(symbol, slot);
        self.recency.push_back(symbol);
        evicted
    }

    /// Removes every entry, returning the store to its initial state.
    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.index.clear();
        self.recency.clear();
    }

    /// Iterates over the current entries as `(slot id, symbol)` pairs,
    /// in slot order. Intended for front ends rendering the cache grid.
    pub fn entries(&self) -> impl Iterator<Item = (usize, Symbol)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| entry.map(|symbol| (slot, symbol)))
    }

    /// Removes and returns the least-recently-used entry and its slot.
    ///
    /// Callers guarantee the store is non-empty.
    fn evict(&mut self) -> (Symbol, usize) {
        debug_assert!(!self.recency.is_empty(), "evict from empty cache");
        let victim = self.recency.pop_front().unwrap_or(Symbol('\0'));
        let slot = self.index.remove(&victim).unwrap_or(0);
        self.slots[slot] = None;
        (victim, slot)
    }

    /// Returns the lowest free slot id.
    ///
    /// Callers guarantee a free slot exists (the store is under capacity).
    fn first_free_slot(&self) -> usize {
        self.slots
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.slots.len() - 1)
    }

    /// Moves an existing entry to the most-recently-used position.
    fn move_to_back(&mut self, symbol: Symbol) {
        if let Some(pos) = self.recency.iter().position(|&s| s == symbol) {
            let _ = self.recency.remove(pos);
        }
        self.recency.push_back(symbol);
    }
}
