//! Candidate configuration sequences built from floor domains.

use super::domains::FloorDomains;
use super::permutations::DomainPermutations;
use crate::domain::{Animal, Color, TowerConfiguration, FLOOR_COUNT};

fn colors_of(permutation: [usize; FLOOR_COUNT]) -> [Color; FLOOR_COUNT] {
    permutation.map(|i| Color::ALL[i])
}

fn animals_of(permutation: [usize; FLOOR_COUNT]) -> [Animal; FLOOR_COUNT] {
    permutation.map(|i| Animal::ALL[i])
}

/// Lazy, finite sequence of configurations: every color permutation allowed
/// by the domains crossed with every allowed animal permutation.
///
/// Each configuration appears at most once. Cloning a fresh sequence
/// restarts it.
#[derive(Debug, Clone)]
pub struct Candidates {
    colors: DomainPermutations,
    animals_template: DomainPermutations,
    animals: DomainPermutations,
    current_colors: Option<[Color; FLOOR_COUNT]>,
}

impl Candidates {
    pub fn new(domains: &FloorDomains) -> Self {
        let animals = DomainPermutations::new(domains.animal_sets());
        Self {
            colors: DomainPermutations::new(domains.color_sets()),
            animals_template: animals.clone(),
            animals,
            current_colors: None,
        }
    }

    /// The unrestricted sequence of all 14,400 configurations.
    pub fn all() -> Self {
        Self::new(&FloorDomains::full())
    }

    pub fn empty() -> Self {
        Self::new(&FloorDomains::wiped())
    }

    /// Splits the remaining sequence into one partition per color
    /// permutation. Partitions are disjoint and their union is `self`.
    pub fn color_partitions(self) -> Vec<ColorPartition> {
        let mut partitions = Vec::new();
        if let Some(colors) = self.current_colors {
            partitions.push(ColorPartition {
                colors,
                animals: self.animals,
            });
        }
        partitions.extend(self.colors.map(|p| ColorPartition {
            colors: colors_of(p),
            animals: self.animals_template.clone(),
        }));
        partitions
    }
}

impl Iterator for Candidates {
    type Item = TowerConfiguration;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(colors) = self.current_colors {
                if let Some(animals) = self.animals.next() {
                    return Some(TowerConfiguration::from_permutations(
                        colors,
                        animals_of(animals),
                    ));
                }
            }
            let colors = self.colors.next()?;
            self.current_colors = Some(colors_of(colors));
            self.animals = self.animals_template.clone();
        }
    }
}

/// All candidates sharing one color permutation.
#[derive(Debug, Clone)]
pub struct ColorPartition {
    colors: [Color; FLOOR_COUNT],
    animals: DomainPermutations,
}

impl ColorPartition {
    pub fn colors(&self) -> [Color; FLOOR_COUNT] {
        self.colors
    }
}

impl Iterator for ColorPartition {
    type Item = TowerConfiguration;

    fn next(&mut self) -> Option<Self::Item> {
        self.animals
            .next()
            .map(|animals| TowerConfiguration::from_permutations(self.colors, animals_of(animals)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Floor, TOTAL_CONFIGURATIONS};
    use crate::hints::Locatable;
    use std::collections::HashSet;

    #[test]
    fn all_candidates_are_distinct_and_complete() {
        let seen: HashSet<TowerConfiguration> = Candidates::all().collect();
        assert_eq!(seen.len(), TOTAL_CONFIGURATIONS as usize);
    }

    #[test]
    fn empty_yields_nothing() {
        assert_eq!(Candidates::empty().count(), 0);
    }

    #[test]
    fn restricted_domains_shrink_the_sequence() {
        let mut domains = FloorDomains::full();
        domains.pin(Locatable::Color(Color::Red), Floor::Third);
        let candidates: Vec<_> = Candidates::new(&domains).collect();
        assert_eq!(candidates.len(), 24 * 120);
        assert!(candidates.iter().all(|c| c.color_at(Floor::Third) == Color::Red));
    }

    #[test]
    fn partitions_cover_the_sequence() {
        let partitions = Candidates::all().color_partitions();
        assert_eq!(partitions.len(), 120);
        let total: usize = partitions.into_iter().map(|p| p.count()).sum();
        assert_eq!(total, TOTAL_CONFIGURATIONS as usize);
    }

    #[test]
    fn partitions_of_a_started_sequence_cover_the_rest() {
        let mut candidates = Candidates::all();
        candidates.by_ref().take(130).for_each(drop);
        let rest: usize = candidates
            .color_partitions()
            .into_iter()
            .map(|p| p.count())
            .sum();
        assert_eq!(rest, TOTAL_CONFIGURATIONS as usize - 130);
    }

    #[test]
    fn partition_keeps_its_colors_fixed() {
        let partition = Candidates::all().color_partitions().remove(0);
        let colors = partition.colors();
        assert!(partition.clone().all(|c| Floor::ALL
            .iter()
            .all(|f| c.color_at(*f) == colors[f.index()])));
        assert_eq!(partition.count(), 120);
    }
}
