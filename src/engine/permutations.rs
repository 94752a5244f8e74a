//! Lazy enumeration of permutations restricted by per-position domains.

use super::domains::AttributeSet;
use crate::domain::FLOOR_COUNT;

/// Iterates every permutation `p` of `0..FLOOR_COUNT` with
/// `domains[i].contains(p[i])` for each position `i`.
///
/// Permutations come out in lexicographic order. With full domains this is
/// all `5! = 120` of them; an empty domain anywhere yields nothing. A clone
/// snapshots the current position, so cloning a fresh iterator restarts it.
#[derive(Debug, Clone)]
pub struct DomainPermutations {
    domains: [AttributeSet; FLOOR_COUNT],
    chosen: [usize; FLOOR_COUNT],
    /// Next value to try at each depth.
    cursor: [usize; FLOOR_COUNT],
    used: AttributeSet,
    depth: usize,
    exhausted: bool,
}

impl DomainPermutations {
    pub fn new(domains: [AttributeSet; FLOOR_COUNT]) -> Self {
        Self {
            domains,
            chosen: [0; FLOOR_COUNT],
            cursor: [0; FLOOR_COUNT],
            used: AttributeSet::EMPTY,
            depth: 0,
            exhausted: false,
        }
    }

    pub fn full() -> Self {
        Self::new([AttributeSet::FULL; FLOOR_COUNT])
    }

    /// Steps back one level, releasing the value chosen there.
    fn backtrack(&mut self) {
        self.depth -= 1;
        self.used = self.used.with(self.chosen[self.depth], false);
    }
}

impl Iterator for DomainPermutations {
    type Item = [usize; FLOOR_COUNT];

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted {
            if self.depth == FLOOR_COUNT {
                let permutation = self.chosen;
                self.backtrack();
                return Some(permutation);
            }

            let depth = self.depth;
            let candidate = (self.cursor[depth]..FLOOR_COUNT)
                .find(|v| self.domains[depth].contains(*v) && !self.used.contains(*v));

            match candidate {
                Some(value) => {
                    self.chosen[depth] = value;
                    self.cursor[depth] = value + 1;
                    self.used = self.used.with(value, true);
                    self.depth += 1;
                    if self.depth < FLOOR_COUNT {
                        self.cursor[self.depth] = 0;
                    }
                }
                None if depth == 0 => self.exhausted = true,
                None => self.backtrack(),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn full_domains_yield_all_120_distinct_permutations() {
        let all: Vec<_> = DomainPermutations::full().collect();
        assert_eq!(all.len(), 120);

        let unique: HashSet<_> = all.iter().copied().collect();
        assert_eq!(unique.len(), 120);

        for p in &all {
            let mut sorted = *p;
            sorted.sort_unstable();
            assert_eq!(sorted, [0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn order_is_lexicographic() {
        let all: Vec<_> = DomainPermutations::full().collect();
        assert_eq!(all[0], [0, 1, 2, 3, 4]);
        assert_eq!(all[1], [0, 1, 2, 4, 3]);
        assert_eq!(all[119], [4, 3, 2, 1, 0]);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn restricted_position_is_honoured() {
        let mut domains = [AttributeSet::FULL; FLOOR_COUNT];
        domains[0] = AttributeSet::single(3);
        let all: Vec<_> = DomainPermutations::new(domains).collect();
        assert_eq!(all.len(), 24);
        assert!(all.iter().all(|p| p[0] == 3));
    }

    #[test]
    fn empty_domain_yields_nothing() {
        let mut domains = [AttributeSet::FULL; FLOOR_COUNT];
        domains[2] = AttributeSet::EMPTY;
        assert_eq!(DomainPermutations::new(domains).count(), 0);
    }

    #[test]
    fn infeasible_combination_yields_nothing() {
        // Two positions that may only take the same value.
        let mut domains = [AttributeSet::FULL; FLOOR_COUNT];
        domains[1] = AttributeSet::single(0);
        domains[4] = AttributeSet::single(0);
        assert_eq!(DomainPermutations::new(domains).count(), 0);
    }

    #[test]
    fn clone_restarts_from_saved_position() {
        let fresh = DomainPermutations::full();
        let mut consumed = fresh.clone();
        consumed.by_ref().take(10).for_each(drop);
        assert_eq!(fresh.clone().count(), 120);
        assert_eq!(consumed.count(), 110);
    }
}
