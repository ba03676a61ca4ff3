//! Configuration system for the memory hierarchy simulator.
//!
//! This module defines all configuration structures used to parameterize a
//! simulation. It provides:
//! 1. **Defaults:** Baseline constants (capacities, delays, energies).
//! 2. **Structures:** Hierarchical config for the cache, backing store,
//!    access timing, and energy accounting.
//!
//! Configuration is supplied as JSON (every field is optional and falls back
//! to its default) or via `Config::default()` for front ends that take the
//! baseline hardware.

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values match the reference hardware model: a 3x3 fully-associative
/// SRAM cache in front of a 6x6 DRAM store.
mod defaults {
    /// SRAM cache capacity in entries (3x3 grid).
    pub const CACHE_CAPACITY: usize = 9;

    /// DRAM backing store capacity in entries (6x6 grid).
    pub const BACKING_CAPACITY: usize = 36;

    /// DRAM refresh cadence: refresh energy accrues once every N steps.
    pub const REFRESH_INTERVAL: u64 = 10;

    /// SRAM access delay in time units, charged once per cache hit.
    pub const SRAM_ACCESS_DELAY: u64 = 5;

    /// DRAM access delay in time units, charged once per cache miss.
    pub const DRAM_ACCESS_DELAY: u64 = 50;

    /// Energy per SRAM read, in energy units.
    pub const SRAM_READ_ENERGY: f64 = 0.5;

    /// Energy per SRAM write, in energy units.
    pub const SRAM_WRITE_ENERGY: f64 = 0.6;

    /// Energy per DRAM read, in energy units.
    pub const DRAM_READ_ENERGY: f64 = 2.0;

    /// Energy per DRAM write, in energy units.
    pub const DRAM_WRITE_ENERGY: f64 = 2.2;

    /// Energy per DRAM refresh event, in energy units.
    pub const DRAM_REFRESH_ENERGY: f64 = 3.0;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use memsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.cache.capacity, 9);
/// assert_eq!(config.backing.capacity, 36);
/// ```
///
/// Deserializing a partial override from JSON:
///
/// ```
/// use memsim_core::config::Config;
///
/// let json = r#"{
///     "cache": { "capacity": 3 },
///     "backing": { "refresh_interval": 5 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.cache.capacity, 3);
/// assert_eq!(config.backing.refresh_interval, 5);
/// assert_eq!(config.timing.dram_access_delay, 50);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// SRAM cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,
    /// DRAM backing store configuration.
    #[serde(default)]
    pub backing: BackingConfig,
    /// Access delay configuration.
    #[serde(default)]
    pub timing: TimingConfig,
    /// Energy accounting configuration.
    #[serde(default)]
    pub energy: EnergyConfig,
}

/// SRAM cache parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Number of entries the cache holds before LRU eviction kicks in.
    #[serde(default = "CacheConfig::default_capacity")]
    pub capacity: usize,
}

impl CacheConfig {
    /// Returns the default cache capacity.
    fn default_capacity() -> usize {
        defaults::CACHE_CAPACITY
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::CACHE_CAPACITY,
        }
    }
}

/// DRAM backing store parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct BackingConfig {
    /// Number of symbols the backing store can hold. Admitting a new symbol
    /// beyond this is fatal for the run.
    #[serde(default = "BackingConfig::default_capacity")]
    pub capacity: usize,

    /// Refresh energy accrues at steps that are exact multiples of this
    /// interval. An interval of 0 disables refresh accounting.
    #[serde(default = "BackingConfig::default_refresh_interval")]
    pub refresh_interval: u64,
}

impl BackingConfig {
    /// Returns the default backing store capacity.
    fn default_capacity() -> usize {
        defaults::BACKING_CAPACITY
    }

    /// Returns the default refresh interval in steps.
    fn default_refresh_interval() -> u64 {
        defaults::REFRESH_INTERVAL
    }
}

impl Default for BackingConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::BACKING_CAPACITY,
            refresh_interval: defaults::REFRESH_INTERVAL,
        }
    }
}

/// Access delay parameters, in abstract time units.
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    /// Delay charged for an SRAM access (cache hit).
    #[serde(default = "TimingConfig::default_sram_access_delay")]
    pub sram_access_delay: u64,

    /// Delay charged for a DRAM access (cache miss).
    #[serde(default = "TimingConfig::default_dram_access_delay")]
    pub dram_access_delay: u64,
}

impl TimingConfig {
    /// Returns the default SRAM access delay.
    fn default_sram_access_delay() -> u64 {
        defaults::SRAM_ACCESS_DELAY
    }

    /// Returns the default DRAM access delay.
    fn default_dram_access_delay() -> u64 {
        defaults::DRAM_ACCESS_DELAY
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            sram_access_delay: defaults::SRAM_ACCESS_DELAY,
            dram_access_delay: defaults::DRAM_ACCESS_DELAY,
        }
    }
}

/// Energy accounting parameters, in abstract energy units.
#[derive(Debug, Clone, Deserialize)]
pub struct EnergyConfig {
    /// Energy charged per SRAM read (hit path).
    #[serde(default = "EnergyConfig::default_sram_read")]
    pub sram_read: f64,

    /// Energy charged per SRAM write (miss path fill).
    #[serde(default = "EnergyConfig::default_sram_write")]
    pub sram_write: f64,

    /// Energy charged per DRAM read (miss path).
    #[serde(default = "EnergyConfig::default_dram_read")]
    pub dram_read: f64,

    /// Energy per DRAM write.
    ///
    /// Configured for completeness but never charged: the miss path reads
    /// from DRAM and writes into SRAM, so no accounting path consumes this
    /// constant.
    #[serde(default = "EnergyConfig::default_dram_write")]
    pub dram_write: f64,

    /// Energy charged per DRAM refresh event.
    #[serde(default = "EnergyConfig::default_dram_refresh")]
    pub dram_refresh: f64,
}

impl EnergyConfig {
    /// Returns the default SRAM read energy.
    fn default_sram_read() -> f64 {
        defaults::SRAM_READ_ENERGY
    }

    /// Returns the default SRAM write energy.
    fn default_sram_write() -> f64 {
        defaults::SRAM_WRITE_ENERGY
    }

    /// Returns the default DRAM read energy.
    fn default_dram_read() -> f64 {
        defaults::DRAM_READ_ENERGY
    }

    /// Returns the default DRAM write energy.
    fn default_dram_write() -> f64 {
        defaults::DRAM_WRITE_ENERGY
    }

    /// Returns the default DRAM refresh energy.
    fn default_dram_refresh() -> f64 {
        defaults::DRAM_REFRESH_ENERGY
    }
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            sram_read: defaults::SRAM_READ_ENERGY,
            sram_write: defaults::SRAM_WRITE_ENERGY,
            dram_read: defaults::DRAM_READ_ENERGY,
            dram_write: defaults::DRAM_WRITE_ENERGY,
            dram_refresh: defaults::DRAM_REFRESH_ENERGY,
        }
    }
}
