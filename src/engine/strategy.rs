//! Candidate generation strategies.

use super::candidates::Candidates;
use crate::hints::Hint;

/// Produces the candidate configurations a counting run checks.
///
/// # Contract
///
/// Implementations must:
/// - Be pure: the same hints always give the same sequence
/// - Yield every configuration satisfying all `hints` exactly once
/// - Never yield a configuration twice
///
/// They may skip configurations that provably violate some hint; the
/// engine still checks every hint on every yielded candidate.
pub trait CandidateStrategy: Send + Sync {
    fn candidates(&self, hints: &[Hint]) -> Candidates;

    /// Returns a human-readable name for this strategy.
    fn name(&self) -> &'static str;
}

/// Enumerates all 14,400 configurations regardless of the hints.
///
/// This is the reference strategy: its count defines correctness.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl CandidateStrategy for BruteForce {
    fn candidates(&self, _hints: &[Hint]) -> Candidates {
        Candidates::all()
    }

    fn name(&self) -> &'static str {
        "brute-force"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Animal, Floor, TOTAL_CONFIGURATIONS};

    #[test]
    fn brute_force_ignores_hints() {
        let hints = [Hint::absolute(Animal::Rabbit, Floor::First)];
        assert_eq!(
            BruteForce.candidates(&hints).count(),
            TOTAL_CONFIGURATIONS as usize
        );
        assert_eq!(BruteForce.name(), "brute-force");
    }
}
