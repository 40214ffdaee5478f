//! Benchmark harness comparing the selection strategies
//!
//! Each trial shuffles `[0, n)`, times one strategy over the whole
//! permutation, and checks the answer. The `k` smallest values of such a
//! permutation are exactly `{0, ..., k - 1}`, so every correct strategy must
//! return `k - 1`. A wrong answer stops the run with
//! [`SelectError::InvariantViolation`].
//!
//! Randomness comes from a [`StdRng`] seeded from [`BenchConfig::seed`]. Every
//! strategy replays the same sequence of permutations, so a run is
//! reproducible and the strategies are timed on identical inputs.
//!
//! # Example
//!
//! ```rust
//! use kth_smallest::harness::{BenchConfig, Harness};
//! use kth_smallest::select::Strategy;
//!
//! let config = BenchConfig { num_elements: 1_000, k: 10, trials: 3, seed: 7 };
//! let harness = Harness::new(config).unwrap();
//! let summary = harness.run_strategy(Strategy::FusedHeap, |_| {}).unwrap();
//! assert_eq!(summary.trials, 3);
//! ```

use std::hint::black_box;
use std::time::{Duration, Instant};

use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::SelectError;
use crate::select::Strategy;

/// Default stream length
pub const DEFAULT_NUM_ELEMENTS: usize = 128 * 1024;
/// Default number of smallest values retained
pub const DEFAULT_K: usize = 256;
/// Default number of trials per strategy
pub const DEFAULT_TRIALS: usize = 100;
/// Default seed for the permutation generator
pub const DEFAULT_SEED: u64 = 0x5eed_cafe;

/// Parameters of a benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Stream length `n`; each trial permutes `[0, n)`
    pub num_elements: usize,
    /// Rank of the value selected (1-based)
    pub k: usize,
    /// Trials per strategy
    pub trials: usize,
    /// Seed of the permutation generator
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            num_elements: DEFAULT_NUM_ELEMENTS,
            k: DEFAULT_K,
            trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
        }
    }
}

impl BenchConfig {
    /// Checks the preconditions of a run before any trial starts
    ///
    /// # Errors
    /// - [`SelectError::InvalidCapacity`] unless `1 <= k <= num_elements`
    /// - [`SelectError::ZeroTrials`] if `trials` is zero
    /// - [`SelectError::TooManyElements`] if `[0, num_elements)` does not fit in `u32`
    pub fn validate(&self) -> Result<(), SelectError> {
        if self.k == 0 || self.k > self.num_elements {
            return Err(SelectError::InvalidCapacity {
                k: self.k,
                len: self.num_elements,
            });
        }
        if self.trials == 0 {
            return Err(SelectError::ZeroTrials);
        }
        if u32::try_from(self.num_elements).is_err() {
            return Err(SelectError::TooManyElements {
                num_elements: self.num_elements,
            });
        }
        Ok(())
    }

    /// The answer every strategy must produce on a permutation of `[0, n)`
    pub fn expected_kth(&self) -> u32 {
        // validate() guarantees 1 <= k <= n <= u32::MAX
        (self.k - 1) as u32
    }
}

/// Result of a single timed trial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Strategy that ran the trial
    pub strategy: Strategy,
    /// 0-based trial index
    pub trial: usize,
    /// Value returned by the strategy
    pub kth: u32,
    /// Wall-clock time of the selection alone, excluding the shuffle
    pub elapsed: Duration,
}

/// Timing statistics of one strategy across all its trials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategySummary {
    pub strategy: Strategy,
    /// Completed trials
    pub trials: usize,
    /// Sum of all trial times
    pub total: Duration,
    /// Fastest trial
    pub min: Duration,
    /// Slowest trial
    pub max: Duration,
}

impl StrategySummary {
    fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            trials: 0,
            total: Duration::ZERO,
            min: Duration::MAX,
            max: Duration::ZERO,
        }
    }

    fn record(&mut self, elapsed: Duration) {
        self.trials += 1;
        self.total += elapsed;
        self.min = self.min.min(elapsed);
        self.max = self.max.max(elapsed);
    }

    /// Mean elapsed time per trial
    pub fn mean(&self) -> Duration {
        match u32::try_from(self.trials) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.total / n,
            Err(_) => Duration::from_secs_f64(self.total.as_secs_f64() / self.trials as f64),
        }
    }
}

/// Returns `[0, n)` in an order drawn from `rng`
///
/// # Errors
/// Returns [`SelectError::TooManyElements`] if `n` exceeds `u32::MAX`.
pub fn shuffled_range<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<u32>, SelectError> {
    let end = u32::try_from(n).map_err(|_| SelectError::TooManyElements { num_elements: n })?;
    let mut values: Vec<u32> = (0..end).collect();
    values.shuffle(rng);
    Ok(values)
}

/// Drives strategies through repeated timed trials
#[derive(Debug, Clone)]
pub struct Harness {
    config: BenchConfig,
}

impl Harness {
    /// Creates a harness after validating `config`
    pub fn new(config: BenchConfig) -> Result<Self, SelectError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Runs every trial of `strategy`, calling `on_trial` after each one
    ///
    /// # Errors
    /// Returns [`SelectError::InvariantViolation`] as soon as a trial produces
    /// the wrong answer; no further trials run.
    pub fn run_strategy<F>(
        &self,
        strategy: Strategy,
        on_trial: F,
    ) -> Result<StrategySummary, SelectError>
    where
        F: FnMut(&TrialOutcome),
    {
        self.run_trials(strategy, |values, k| strategy.select(values, k), on_trial)
    }

    /// Trial loop behind [`Harness::run_strategy`], timing `select` as `strategy`
    fn run_trials<S, F>(
        &self,
        strategy: Strategy,
        mut select: S,
        mut on_trial: F,
    ) -> Result<StrategySummary, SelectError>
    where
        S: FnMut(&[u32], usize) -> Result<u32, SelectError>,
        F: FnMut(&TrialOutcome),
    {
        let BenchConfig {
            num_elements,
            k,
            trials,
            seed,
        } = self.config;
        let expected = self.config.expected_kth();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut summary = StrategySummary::new(strategy);

        for trial in 0..trials {
            let values = shuffled_range(num_elements, &mut rng)?;

            let start = Instant::now();
            let kth = select(black_box(values.as_slice()), k)?;
            let elapsed = start.elapsed();

            if kth != expected {
                error!("{strategy}: trial {trial} returned {kth}, expected {expected}");
                return Err(SelectError::InvariantViolation {
                    strategy: strategy.name(),
                    expected,
                    actual: kth,
                });
            }

            debug!("{strategy}: trial {trial} took {elapsed:?}");
            summary.record(elapsed);
            on_trial(&TrialOutcome {
                strategy,
                trial,
                kth,
                elapsed,
            });
        }

        info!(
            "{strategy}: {} trials, mean {:?}, min {:?}, max {:?}",
            summary.trials,
            summary.mean(),
            summary.min,
            summary.max
        );
        Ok(summary)
    }

    /// Runs each of `strategies` in order, stopping at the first failure
    pub fn run_all<F>(
        &self,
        strategies: &[Strategy],
        on_trial: F,
    ) -> Result<Vec<StrategySummary>, SelectError>
    where
        F: FnMut(&TrialOutcome),
    {
        self.run_all_with(strategies, |strategy, values, k| strategy.select(values, k), on_trial)
    }

    fn run_all_with<S, F>(
        &self,
        strategies: &[Strategy],
        mut select: S,
        mut on_trial: F,
    ) -> Result<Vec<StrategySummary>, SelectError>
    where
        S: FnMut(Strategy, &[u32], usize) -> Result<u32, SelectError>,
        F: FnMut(&TrialOutcome),
    {
        info!(
            "benchmarking {} strategies: n = {}, k = {}, {} trials, seed {:#x}",
            strategies.len(),
            self.config.num_elements,
            self.config.k,
            self.config.trials,
            self.config.seed
        );
        strategies
            .iter()
            .map(|&strategy| {
                self.run_trials(
                    strategy,
                    |values, k| select(strategy, values, k),
                    &mut on_trial,
                )
            })
            .collect()
    }
}
