//! Counting engine: enumerates candidate configurations and tallies the
//! ones that satisfy every hint.
//!
//! # Pipeline
//!
//! ```text
//!   hints ──▶ CandidateStrategy ──▶ Candidates ──▶ satisfies_all ──▶ count
//!              (BruteForce |          (lazy)         (per config,
//!               Propagation)                          short-circuit)
//! ```
//!
//! The strategy only decides which configurations get built. Every
//! candidate is checked against the full hint list, so all strategies agree
//! on the count; [`BruteForce`] is the reference.
//!
//! # Module Structure
//!
//! - [`domains`] - Per-floor candidate sets
//! - [`permutations`] - Domain-restricted permutation enumeration
//! - [`candidates`] - Lazy configuration sequences and color partitions
//! - [`strategy`] - The [`CandidateStrategy`] seam and [`BruteForce`]
//! - [`propagation`] - The [`Propagation`] accelerator
//! - [`satisfaction`] - Per-configuration hint evaluation

pub mod candidates;
pub mod config;
pub mod domains;
pub mod permutations;
pub mod propagation;
pub mod satisfaction;
pub mod stats;
pub mod strategy;


pub use candidates::{Candidates, ColorPartition};
pub use config::EngineConfig;
pub use domains::{AttributeSet, FloorDomains};
pub use propagation::{propagate, Propagation};
pub use satisfaction::{first_violation, satisfies_all};
pub use stats::CountStats;
pub use strategy::{BruteForce, CandidateStrategy};

use log::debug;

use crate::domain::TowerConfiguration;
use crate::hints::{Hint, HintSummary};

/// Counts configurations satisfying hint lists, using strategy `S` to
/// generate candidates.
///
/// # Examples
///
/// ```
/// use picasso_tower::domain::{Animal, Color};
/// use picasso_tower::engine::{CountingEngine, Propagation};
/// use picasso_tower::hints::Hint;
///
/// let hints = [Hint::relative(Animal::Rabbit, Color::Green, -2).unwrap()];
/// let engine = CountingEngine::new(Propagation);
/// assert_eq!(engine.count(&hints), 1728);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CountingEngine<S = BruteForce> {
    strategy: S,
    parallel: bool,
}

impl<S: CandidateStrategy> CountingEngine<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            parallel: false,
        }
    }

    /// Counts color partitions concurrently. Only effective with the
    /// `parallel` feature; otherwise counting stays sequential.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Number of configurations satisfying every hint, in `0..=14_400`.
    pub fn count(&self, hints: &[Hint]) -> u32 {
        self.count_with_stats(hints).count
    }

    pub fn count_with_stats(&self, hints: &[Hint]) -> CountStats {
        let name = self.strategy.name();
        debug!(
            "counting {} hints ({}) with the {name} strategy",
            hints.len(),
            HintSummary::of(hints)
        );

        let candidates = self.strategy.candidates(hints);
        let stats = if self.parallel {
            tally_partitioned(name, candidates, hints)
        } else {
            tally(name, candidates, hints)
        };

        debug!("{stats}");
        stats
    }

    /// Lazily yields every configuration satisfying all hints.
    pub fn solutions<'h>(&self, hints: &'h [Hint]) -> impl Iterator<Item = TowerConfiguration> + 'h {
        self.strategy
            .candidates(hints)
            .filter(move |config| satisfies_all(hints, config))
    }
}

fn tally(
    name: &'static str,
    candidates: impl Iterator<Item = TowerConfiguration>,
    hints: &[Hint],
) -> CountStats {
    candidates.fold(CountStats::new(name), |mut stats, config| {
        stats.examined += 1;
        if satisfies_all(hints, &config) {
            stats.count += 1;
        }
        stats
    })
}

#[cfg(feature = "parallel")]
fn tally_partitioned(name: &'static str, candidates: Candidates, hints: &[Hint]) -> CountStats {
    use rayon::prelude::*;

    candidates
        .color_partitions()
        .into_par_iter()
        .map(|partition| tally(name, partition, hints))
        .reduce(|| CountStats::new(name), CountStats::merge)
}

#[cfg(not(feature = "parallel"))]
fn tally_partitioned(name: &'static str, candidates: Candidates, hints: &[Hint]) -> CountStats {
    log::warn!("parallel counting needs the `parallel` feature; counting sequentially");
    tally(name, candidates, hints)
}

/// Counts with the strategy and threading chosen by `config`.
pub fn count_with_config(hints: &[Hint], config: &EngineConfig) -> CountStats {
    if config.propagation {
        CountingEngine::new(Propagation)
            .with_parallel(config.parallel)
            .count_with_stats(hints)
    } else {
        CountingEngine::new(BruteForce)
            .with_parallel(config.parallel)
            .count_with_stats(hints)
    }
}

/// Number of tower configurations satisfying every hint.
///
/// Uses exhaustive enumeration; see [`CountingEngine`] for other strategies.
///
/// # Examples
///
/// ```
/// use picasso_tower::count_assignments;
/// use picasso_tower::domain::{Animal, Floor};
/// use picasso_tower::hints::Hint;
///
/// assert_eq!(count_assignments(&[]), 14_400);
/// assert_eq!(count_assignments(&[Hint::absolute(Animal::Rabbit, Floor::First)]), 2_880);
/// ```
pub fn count_assignments(hints: &[Hint]) -> u32 {
    CountingEngine::new(BruteForce).count(hints)
}
