use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Outcome of one counting run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CountStats {
    /// Name of the candidate strategy used.
    pub strategy: &'static str,
    /// Candidates built and checked against the hints.
    pub examined: u32,
    /// Candidates that satisfied every hint.
    pub count: u32,
}

impl CountStats {
    pub fn new(strategy: &'static str) -> Self {
        Self {
            strategy,
            examined: 0,
            count: 0,
        }
    }

    /// Folds the tallies of another partition of the same run into this one.
    pub fn merge(mut self, other: Self) -> Self {
        self.examined += other.examined;
        self.count += other.count;
        self
    }
}

impl fmt::Display for CountStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} candidates satisfy all hints",
            self.strategy, self.count, self.examined
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_adds_tallies() {
        let a = CountStats {
            strategy: "brute-force",
            examined: 120,
            count: 3,
        };
        let b = CountStats {
            strategy: "brute-force",
            examined: 120,
            count: 1,
        };
        let merged = a.merge(b);
        assert_eq!(merged.examined, 240);
        assert_eq!(merged.count, 4);
        assert_eq!(merged.strategy, "brute-force");
    }

    #[test]
    fn display_format() {
        let stats = CountStats {
            strategy: "propagation",
            examined: 24,
            count: 2,
        };
        assert_eq!(
            stats.to_string(),
            "propagation: 2 of 24 candidates satisfy all hints"
        );
    }
}
