//! LRU Cache Store Unit Tests.
//!
//! Verifies the fully-associative SRAM cache model: slot assignment,
//! recency tracking, strict LRU eviction, and reset behavior. The store is
//! exercised in isolation; hit/miss pricing is covered by the access
//! processor tests.

use memsim_core::common::Symbol;
use memsim_core::mem::LruStore;

fn sym(c: char) -> Symbol {
    Symbol(c)
}

// ══════════════════════════════════════════════════════════
// 1. Construction
// ══════════════════════════════════════════════════════════

/// Zero capacity is clamped to one entry.
#[test]
fn zero_capacity_clamped_to_one() {
    let cache = LruStore::new(0);
    assert_eq!(cache.capacity(), 1);
    assert!(cache.is_empty());
}

#[test]
fn new_cache_is_empty() {
    let cache = LruStore::new(3);
    assert_eq!(cache.capacity(), 3);
    assert_eq!(cache.len(), 0);
    assert!(!cache.contains(sym('A')));
    assert_eq!(cache.lru(), None);
}

// ══════════════════════════════════════════════════════════
// 2. Insertion and slot assignment
// ══════════════════════════════════════════════════════════

/// Under capacity, newcomers take the lowest free slot and nothing is
/// evicted.
#[test]
fn insert_under_capacity_takes_lowest_free_slot() {
    let mut cache = LruStore::new(3);

    assert_eq!(cache.insert(sym('A')), None);
    assert_eq!(cache.insert(sym('B')), None);

    assert_eq!(cache.slot_of(sym('A')), Some(0));
    assert_eq!(cache.slot_of(sym('B')), Some(1));
    assert_eq!(cache.len(), 2);
}

/// Inserting a symbol that is already cached evicts nothing and keeps the
/// size unchanged.
#[test]
fn reinsert_existing_symbol_is_a_recency_refresh() {
    let mut cache = LruStore::new(2);
    let _ = cache.insert(sym('A'));
    let _ = cache.insert(sym('B'));

    assert_eq!(cache.insert(sym('A')), None);
    assert_eq!(cache.len(), 2);

    // 'A' is now most recent, so the next eviction takes 'B'.
    assert_eq!(cache.insert(sym('C')), Some(sym('B')));
}

// ══════════════════════════════════════════════════════════
// 3. LRU eviction
// ══════════════════════════════════════════════════════════

/// The scripted reference pattern: insert A, B, C into a capacity-3 cache,
/// touch A, insert D. B is the least recently used entry and is evicted.
#[test]
fn eviction_removes_least_recently_touched() {
    let mut cache = LruStore::new(3);
    let _ = cache.insert(sym('A'));
    let _ = cache.insert(sym('B'));
    let _ = cache.insert(sym('C'));

    assert!(cache.touch(sym('A')));

    let evicted = cache.insert(sym('D'));
    assert_eq!(evicted, Some(sym('B')));
    assert!(cache.contains(sym('A')));
    assert!(cache.contains(sym('C')));
    assert!(cache.contains(sym('D')));
    assert_eq!(cache.len(), 3);
}

/// With no touches, eviction follows strict insertion order.
#[test]
fn eviction_follows_insertion_order_without_touches() {
    let mut cache = LruStore::new(2);
    let _ = cache.insert(sym('A'));
    let _ = cache.insert(sym('B'));

    assert_eq!(cache.lru(), Some(sym('A')));
    assert_eq!(cache.insert(sym('C')), Some(sym('A')));
    assert_eq!(cache.insert(sym('D')), Some(sym('B')));
}

/// The incoming entry reuses the slot freed by the victim, mirroring the
/// visual grid cell takeover in the reference front end.
#[test]
fn eviction_reuses_victim_slot() {
    let mut cache = LruStore::new(2);
    let _ = cache.insert(sym('A'));
    let _ = cache.insert(sym('B'));
    assert_eq!(cache.slot_of(sym('A')), Some(0));

    let evicted = cache.insert(sym('C'));
    assert_eq!(evicted, Some(sym('A')));
    assert_eq!(cache.slot_of(sym('C')), Some(0));
    assert_eq!(cache.slot_of(sym('B')), Some(1));
}

/// Size never exceeds capacity no matter how many inserts happen.
#[test]
fn len_never_exceeds_capacity() {
    let mut cache = LruStore::new(3);
    for c in 'A'..='Z' {
        let _ = cache.insert(sym(c));
        assert!(cache.len() <= cache.capacity());
    }
    assert_eq!(cache.len(), 3);
}

// ══════════════════════════════════════════════════════════
// 4. Touch
// ══════════════════════════════════════════════════════════

/// Touching an absent symbol is a precondition violation and mutates
/// nothing.
#[test]
fn touch_absent_symbol_returns_false() {
    let mut cache = LruStore::new(2);
    let _ = cache.insert(sym('A'));

    assert!(!cache.touch(sym('Z')));
    assert_eq!(cache.lru(), Some(sym('A')));
    assert_eq!(cache.len(), 1);
}

/// Repeatedly touching the same entry never causes eviction and keeps the
/// size unchanged.
#[test]
fn repeated_touch_keeps_size_unchanged() {
    let mut cache = LruStore::new(2);
    let _ = cache.insert(sym('A'));
    let _ = cache.insert(sym('B'));

    for _ in 0..10 {
        assert!(cache.touch(sym('A')));
        assert_eq!(cache.len(), 2);
    }
    assert_eq!(cache.lru(), Some(sym('B')));
}

// ══════════════════════════════════════════════════════════
// 5. Reset and inspection
// ══════════════════════════════════════════════════════════

#[test]
fn clear_returns_to_initial_state() {
    let mut cache = LruStore::new(3);
    let _ = cache.insert(sym('A'));
    let _ = cache.insert(sym('B'));

    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.lru(), None);
    assert_eq!(cache.slot_of(sym('A')), None);
    assert_eq!(cache.capacity(), 3);
}

/// `entries` reports `(slot, symbol)` pairs in slot order for rendering.
#[test]
fn entries_iterate_in_slot_order() {
    let mut cache = LruStore::new(3);
    let _ = cache.insert(sym('X'));
    let _ = cache.insert(sym('Y'));

    let entries: Vec<(usize, Symbol)> = cache.entries().collect();
    assert_eq!(entries, vec![(0, sym('X')), (1, sym('Y'))]);
}
