//! Simulation driver state machine.
//!
//! The driver owns every piece of simulation state: the cache store, the
//! backing store, the metrics ledger, and the remaining-input cursor. It
//! consumes the loaded input one symbol per `step`, invokes the access
//! processor, accrues refresh energy on its fixed cadence, and appends the
//! resulting deltas to the ledger.
//!
//! Stepping is strictly sequential and externally paced: the core performs
//! no blocking or waiting of its own, and callers must not overlap `step`
//! with another `step` or `reset` (single-writer discipline). Auto-advance
//! timers live in the presentation layer; pausing simply stops further
//! `step` calls and never rolls back completed steps.

use std::fmt;

use serde::Serialize;
use tracing::{debug, error, info, trace};

use crate::common::{Result, SimError, Symbol};
use crate::config::Config;
use crate::mem::{BackingStore, LruStore};
use crate::sim::access::{AccessProcessor, StepResult};
use crate::stats::{MetricsLedger, MetricsSnapshot};

/// Driver lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DriverState {
    /// No input loaded.
    Idle,
    /// Input loaded, cursor at the first symbol.
    Ready,
    /// Auto-advancing under an external pacing loop.
    Running,
    /// Cursor frozen mid-input; stepping may resume at any time.
    Paused,
    /// Input exhausted; only reset or a fresh load can follow.
    Completed,
    /// A fatal access error occurred; only reset can follow.
    Errored,
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Errored => "errored",
        };
        write!(f, "{name}")
    }
}

/// Everything a front end needs to render one completed step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepReport {
    /// One-based step number of this access.
    pub step: u64,
    /// Delay/energy deltas and hit/miss outcome for the accessed symbol.
    pub result: StepResult,
    /// Refresh energy charged this step (zero unless a refresh occurred).
    pub refresh_energy: f64,
    /// Whether a DRAM refresh fell on this step.
    pub refreshed: bool,
    /// Number of symbols left to process after this step.
    pub remaining: usize,
}

/// The simulation: owns all state and steps through the loaded input.
///
/// # Examples
///
/// ```
/// use memsim_core::config::Config;
/// use memsim_core::sim::{AccessOutcome, Simulation};
///
/// let mut sim = Simulation::new(Config::default());
/// sim.load("ABA").unwrap();
///
/// assert_eq!(sim.step().unwrap().result.outcome, AccessOutcome::Miss);
/// assert_eq!(sim.step().unwrap().result.outcome, AccessOutcome::Miss);
/// assert_eq!(sim.step().unwrap().result.outcome, AccessOutcome::Hit);
///
/// let metrics = sim.current_metrics();
/// assert_eq!(metrics.steps, 3);
/// assert_eq!(metrics.hits + metrics.misses, 3);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    config: Config,
    processor: AccessProcessor,
    cache: LruStore,
    backing: BackingStore,
    ledger: MetricsLedger,
    input: Vec<Symbol>,
    cursor: usize,
    state: DriverState,
}

impl Simulation {
    /// Creates an idle simulation with the given configuration.
    pub fn new(config: Config) -> Self {
        let processor = AccessProcessor::new(config.timing.clone(), config.energy.clone());
        let cache = LruStore::new(config.cache.capacity);
        let backing = BackingStore::new(config.backing.capacity);
        Self {
            config,
            processor,
            cache,
            backing,
            ledger: MetricsLedger::default(),
            input: Vec::new(),
            cursor: 0,
            state: DriverState::Idle,
        }
    }

    /// Returns the current driver state.
    pub const fn state(&self) -> DriverState {
        self.state
    }

    /// Returns the active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the cache store, for inspection and rendering.
    pub const fn cache(&self) -> &LruStore {
        &self.cache
    }

    /// Returns the backing store, for inspection and rendering.
    pub const fn backing(&self) -> &BackingStore {
        &self.backing
    }

    /// Returns the metrics ledger, including the per-step histories.
    pub const fn ledger(&self) -> &MetricsLedger {
        &self.ledger
    }

    /// Returns the number of symbols not yet processed.
    pub fn remaining(&self) -> usize {
        self.input.len() - self.cursor
    }

    /// Returns a snapshot of the cumulative metrics.
    ///
    /// Available in every state; after a fatal error this reflects all
    /// steps completed before the failure.
    pub fn current_metrics(&self) -> MetricsSnapshot {
        self.ledger.snapshot()
    }

    /// Loads a fresh input sequence and moves to [`DriverState::Ready`].
    ///
    /// All prior state (cache, backing store, ledger) is cleared first, so
    /// no residue from a previous run survives. Input is case-normalized to
    /// ASCII uppercase, matching the reference front end.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InputEmpty`] for an empty sequence; nothing is
    /// mutated in that case.
    pub fn load(&mut self, text: &str) -> Result<()> {
        let symbols: Vec<Symbol> = text
            .chars()
            .map(|c| Symbol::from(c).to_ascii_uppercase())
            .collect();
        if symbols.is_empty() {
            return Err(SimError::InputEmpty);
        }
        self.clear_owned_state();
        self.input = symbols;
        self.state = DriverState::Ready;
        info!(symbols = self.input.len(), "input loaded");
        Ok(())
    }

    /// Processes exactly one symbol and appends its deltas to the ledger.
    ///
    /// Refresh energy is charged additively at steps that are exact
    /// multiples of the configured refresh interval; refresh never affects
    /// hit/miss resolution.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidStep`] if the driver is idle, completed, or
    ///   errored; nothing is mutated.
    /// - [`SimError::BackingStoreExhausted`] if the access processor cannot
    ///   admit a new symbol; the driver moves to [`DriverState::Errored`]
    ///   and the ledger keeps everything accrued before the failure.
    pub fn step(&mut self) -> Result<StepReport> {
        match self.state {
            DriverState::Ready | DriverState::Running | DriverState::Paused => {}
            state => return Err(SimError::InvalidStep { state }),
        }

        // Ready/Running/Paused guarantee unconsumed input.
        debug_assert!(self.cursor < self.input.len());
        let symbol = self.input[self.cursor];

        let result = match self
            .processor
            .process(&mut self.cache, &mut self.backing, symbol)
        {
            Ok(result) => result,
            Err(err) => {
                error!(%symbol, %err, "fatal access error");
                self.state = DriverState::Errored;
                return Err(err);
            }
        };
        self.cursor += 1;

        let step = self.ledger.steps() + 1;
        let interval = self.config.backing.refresh_interval;
        let refreshed = interval != 0 && step % interval == 0;
        let refresh_energy = if refreshed {
            trace!(step, "dram refresh");
            self.config.energy.dram_refresh
        } else {
            0.0
        };
        self.ledger.record(&result, refresh_energy);

        self.state = if self.cursor == self.input.len() {
            debug!(steps = step, "input exhausted");
            DriverState::Completed
        } else if self.state == DriverState::Running {
            DriverState::Running
        } else {
            DriverState::Paused
        };

        Ok(StepReport {
            step,
            result,
            refresh_energy,
            refreshed,
            remaining: self.input.len() - self.cursor,
        })
    }

    /// Steps repeatedly until the input is exhausted.
    ///
    /// The driver is in [`DriverState::Running`] for the duration and ends
    /// in [`DriverState::Completed`]. Front ends that want per-step pacing
    /// should call [`Simulation::step`] themselves instead.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Simulation::step`]; a fatal access
    /// error leaves the driver in [`DriverState::Errored`].
    pub fn run(&mut self) -> Result<MetricsSnapshot> {
        match self.state {
            DriverState::Ready | DriverState::Running | DriverState::Paused => {}
            state => return Err(SimError::InvalidStep { state }),
        }
        self.state = DriverState::Running;
        while self.state == DriverState::Running {
            let _ = self.step()?;
        }
        Ok(self.current_metrics())
    }

    /// Freezes an auto-advancing run at the current cursor.
    ///
    /// Has no effect unless the driver is [`DriverState::Running`].
    /// Completed steps are never rolled back.
    pub fn pause(&mut self) {
        if self.state == DriverState::Running {
            self.state = DriverState::Paused;
            debug!("simulation paused");
        }
    }

    /// Discards all state and returns to [`DriverState::Idle`].
    ///
    /// Valid in every state, including after a fatal error.
    pub fn reset(&mut self) {
        self.clear_owned_state();
        self.input.clear();
        self.state = DriverState::Idle;
        info!("simulation reset");
    }

    /// Clears the stores, ledger, and cursor (but not the loaded input).
    fn clear_owned_state(&mut self) {
        self.cache.clear();
        self.backing.clear();
        self.ledger.clear();
        self.cursor = 0;
    }
}

impl Default for Simulation {
    /// Returns an idle simulation with the default configuration.
    fn default() -> Self {
        Self::new(Config::default())
    }
}
