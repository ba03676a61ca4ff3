//! Memory hierarchy models.
//!
//! This module provides the two storage levels the simulator accounts for:
//! 1. **LRU Cache Store:** A small fully-associative SRAM cache with strict
//!    least-recently-used eviction.
//! 2. **Backing Store:** The DRAM residency set behind the cache; admission
//!    is permanent for the run and overflow is fatal.

/// DRAM backing store (bounded residency set).
pub mod backing;

/// Fully-associative LRU cache store.
pub mod cache;

pub use backing::BackingStore;
pub use cache::LruStore;
