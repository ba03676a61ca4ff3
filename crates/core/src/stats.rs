//! Metrics collection and reporting.
//!
//! This module tracks the per-step and cumulative costs of a simulation run.
//! It provides:
//! 1. **Ledger:** Cumulative per-step histories for SRAM/DRAM delay, energy,
//!    and refresh energy, plus hit/miss/write counters.
//! 2. **Snapshot:** A point-in-time summary for front ends.
//! 3. **Reporting:** Sectioned plain-text report printing.
//!
//! The ledger is append-only: exactly one entry per processed symbol, where
//! `history[i] = history[i-1] + delta`. Histories are therefore monotonically
//! non-decreasing and always `steps` entries long.

use serde::Serialize;

use crate::sim::access::{AccessOutcome, StepResult};

/// Cumulative per-step histories and running counters for one run.
#[derive(Debug, Clone, Default)]
pub struct MetricsLedger {
    sram_delay: Vec<u64>,
    dram_delay: Vec<u64>,
    sram_energy: Vec<f64>,
    dram_energy: Vec<f64>,
    refresh_energy: Vec<f64>,
    hit_count: Vec<u64>,
    miss_count: Vec<u64>,
    hits: u64,
    misses: u64,
    writes: u64,
}

impl MetricsLedger {
    /// Returns the number of steps recorded so far.
    pub fn steps(&self) -> u64 {
        self.sram_delay.len() as u64
    }

    /// Cumulative SRAM delay after each step, in time units.
    pub fn sram_delay(&self) -> &[u64] {
        &self.sram_delay
    }

    /// Cumulative DRAM delay after each step, in time units.
    pub fn dram_delay(&self) -> &[u64] {
        &self.dram_delay
    }

    /// Cumulative SRAM energy after each step, in energy units.
    pub fn sram_energy(&self) -> &[f64] {
        &self.sram_energy
    }

    /// Cumulative DRAM access energy after each step, in energy units.
    pub fn dram_energy(&self) -> &[f64] {
        &self.dram_energy
    }

    /// Cumulative DRAM refresh energy after each step, in energy units.
    pub fn refresh_energy(&self) -> &[f64] {
        &self.refresh_energy
    }

    /// Cumulative cache-hit count after each step.
    pub fn hit_count(&self) -> &[u64] {
        &self.hit_count
    }

    /// Cumulative cache-miss count after each step.
    pub fn miss_count(&self) -> &[u64] {
        &self.miss_count
    }

    /// Appends one step's deltas to every history.
    ///
    /// Called exactly once per processed symbol by the driver; the access
    /// processor itself never touches the ledger.
    pub fn record(&mut self, result: &StepResult, refresh_energy: f64) {
        match result.outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Miss => {
                self.misses += 1;
                // Every miss fills a cache slot.
                self.writes += 1;
            }
        }
        self.sram_delay
            .push(self.sram_delay.last().copied().unwrap_or(0) + result.sram_delay);
        self.dram_delay
            .push(self.dram_delay.last().copied().unwrap_or(0) + result.dram_delay);
        self.sram_energy
            .push(self.sram_energy.last().copied().unwrap_or(0.0) + result.sram_energy);
        self.dram_energy
            .push(self.dram_energy.last().copied().unwrap_or(0.0) + result.dram_energy);
        self.refresh_energy
            .push(self.refresh_energy.last().copied().unwrap_or(0.0) + refresh_energy);
        self.hit_count.push(self.hits);
        self.miss_count.push(self.misses);
    }

    /// Returns a snapshot of the cumulative totals.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let dram_access_energy = self.dram_energy.last().copied().unwrap_or(0.0);
        let refresh_energy = self.refresh_energy.last().copied().unwrap_or(0.0);
        MetricsSnapshot {
            steps: self.steps(),
            hits: self.hits,
            misses: self.misses,
            writes: self.writes,
            sram_delay: self.sram_delay.last().copied().unwrap_or(0),
            dram_delay: self.dram_delay.last().copied().unwrap_or(0),
            sram_energy: self.sram_energy.last().copied().unwrap_or(0.0),
            dram_energy: dram_access_energy,
            refresh_energy,
            dram_total_energy: dram_access_energy + refresh_energy,
        }
    }

    /// Discards every history and counter.
    pub fn clear(&mut self) {
        self.sram_delay.clear();
        self.dram_delay.clear();
        self.sram_energy.clear();
        self.dram_energy.clear();
        self.refresh_energy.clear();
        self.hit_count.clear();
        self.miss_count.clear();
        self.hits = 0;
        self.misses = 0;
        self.writes = 0;
    }
}

/// Section names for selective report output.
///
/// Valid section identifiers: `"summary"`, `"delay"`, `"energy"`,
/// `"accesses"`. Pass an empty slice to `print_sections` to print all
/// sections.
pub const REPORT_SECTIONS: &[&str] = &["summary", "delay", "energy", "accesses"];

/// Point-in-time summary of a run's cumulative metrics.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricsSnapshot {
    /// Number of symbols processed.
    pub steps: u64,
    /// Cache hit count.
    pub hits: u64,
    /// Cache miss count.
    pub misses: u64,
    /// Cache write (fill) count.
    pub writes: u64,
    /// Total SRAM delay, in time units.
    pub sram_delay: u64,
    /// Total DRAM delay, in time units.
    pub dram_delay: u64,
    /// Total SRAM energy, in energy units.
    pub sram_energy: f64,
    /// Total DRAM access energy, in energy units.
    pub dram_energy: f64,
    /// Total DRAM refresh energy, in energy units.
    pub refresh_energy: f64,
    /// DRAM access energy plus refresh energy, in energy units.
    pub dram_total_energy: f64,
}

impl MetricsSnapshot {
    /// Fraction of accesses that hit the cache, in percent.
    ///
    /// Returns zero before the first step.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            100.0 * (self.hits as f64 / total as f64)
        }
    }

    /// Prints only the requested report sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"`, `"delay"`,
    /// `"energy"`, or `"accesses"`. Pass an empty slice to print all
    /// sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);

        if want("summary") {
            println!("\n==================================================");
            println!("MEMORY HIERARCHY SIMULATION REPORT");
            println!("==================================================");
            println!("steps                  {}", self.steps);
            println!("cache.hits             {}", self.hits);
            println!("cache.misses           {}", self.misses);
            println!("cache.hit_rate         {:.2}%", self.hit_rate());
            println!("--------------------------------------------------");
        }
        if want("delay") {
            println!("DELAY");
            println!("  sram.total           {} ns", self.sram_delay);
            println!("  dram.total           {} ns", self.dram_delay);
            println!(
                "  combined             {} ns",
                self.sram_delay + self.dram_delay
            );
            println!("--------------------------------------------------");
        }
        if want("energy") {
            println!("ENERGY");
            println!("  sram.total           {:.1} pJ", self.sram_energy);
            println!("  dram.access          {:.1} pJ", self.dram_energy);
            println!("  dram.refresh         {:.1} pJ", self.refresh_energy);
            println!("  dram.total           {:.1} pJ", self.dram_total_energy);
            println!("--------------------------------------------------");
        }
        if want("accesses") {
            println!("ACCESSES");
            println!("  sram (hits)          {}", self.hits);
            println!("  dram (misses)        {}", self.misses);
            println!("  sram.writes          {}", self.writes);
        }
        println!("==================================================");
    }

    /// Prints all report sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
