//! Configuration for counting runs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects how [`count_with_config`](super::count_with_config) searches.
///
/// The result never depends on these settings, only the amount of work does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Narrow per-floor domains before enumerating.
    pub propagation: bool,
    /// Count color partitions on the rayon pool. Needs the `parallel` feature.
    pub parallel: bool,
}

impl EngineConfig {
    pub fn with_propagation(mut self, propagation: bool) -> Self {
        self.propagation = propagation;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
