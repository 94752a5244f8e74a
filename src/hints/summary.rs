//! Per-kind tally of a hint list.

use std::fmt;

use super::hint::{Hint, HintKind};

/// Counts of each hint kind in a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HintSummary {
    pub absolute: usize,
    pub relative: usize,
    pub neighbor: usize,
}

impl HintSummary {
    pub fn of(hints: &[Hint]) -> Self {
        hints.iter().fold(Self::default(), |mut summary, hint| {
            match hint.kind() {
                HintKind::Absolute => summary.absolute += 1,
                HintKind::Relative => summary.relative += 1,
                HintKind::Neighbor => summary.neighbor += 1,
            }
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.absolute + self.relative + self.neighbor
    }

    /// Returns `true` if no hint can narrow per-floor domains.
    pub fn neighbor_only(&self) -> bool {
        self.absolute == 0 && self.relative == 0
    }
}

impl fmt::Display for HintSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} absolute, {} relative, {} neighbor",
            self.absolute, self.relative, self.neighbor
        )
    }
}
