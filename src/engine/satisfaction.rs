//! Evaluates a hint list against one configuration.

use crate::domain::TowerConfiguration;
use crate::hints::Hint;

/// Returns `true` if `config` satisfies every hint. Stops at the first failure.
///
/// An empty list is satisfied by every configuration.
pub fn satisfies_all(hints: &[Hint], config: &TowerConfiguration) -> bool {
    hints.iter().all(|hint| hint.is_satisfied(config))
}

/// Index of the first hint `config` violates, if any.
pub fn first_violation(hints: &[Hint], config: &TowerConfiguration) -> Option<usize> {
    hints.iter().position(|hint| !hint.is_satisfied(config))
}
