//! Per-floor candidate sets for colors and animals.

use crate::domain::{Animal, Color, Floor, FloorAssignment, FLOOR_COUNT};
use crate::hints::Locatable;

/// Bitset over the five members of one attribute set, addressed by `index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeSet(u8);

impl AttributeSet {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self((1 << FLOOR_COUNT) - 1);

    pub const fn single(index: usize) -> Self {
        Self(1 << index)
    }

    pub const fn contains(self, index: usize) -> bool {
        self.0 & (1 << index) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// The sole member, if the set has exactly one.
    pub fn only(self) -> Option<usize> {
        (self.len() == 1).then(|| self.0.trailing_zeros() as usize)
    }

    /// Copy of this set with `index` added or removed.
    pub const fn with(self, index: usize, present: bool) -> Self {
        if present {
            Self(self.0 | (1 << index))
        } else {
            Self(self.0 & !(1 << index))
        }
    }

    /// Removes `index`; returns `true` if it was present.
    pub fn remove(&mut self, index: usize) -> bool {
        let present = self.contains(index);
        self.0 &= !(1 << index);
        present
    }

    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..FLOOR_COUNT).filter(move |i| self.contains(*i))
    }
}

/// Which attribute table a locatable value lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Track {
    Color,
    Animal,
}

fn slot(locatable: Locatable) -> (Track, usize) {
    match locatable {
        Locatable::Color(color) => (Track::Color, color.index()),
        Locatable::Animal(animal) => (Track::Animal, animal.index()),
    }
}

/// Candidate colors and animals for every floor.
///
/// Starts full and only ever shrinks. A floor whose color or animal set is
/// empty makes the whole search space empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloorDomains {
    colors: [AttributeSet; FLOOR_COUNT],
    animals: [AttributeSet; FLOOR_COUNT],
}

impl Default for FloorDomains {
    fn default() -> Self {
        Self::full()
    }
}

impl FloorDomains {
    pub const fn full() -> Self {
        Self {
            colors: [AttributeSet::FULL; FLOOR_COUNT],
            animals: [AttributeSet::FULL; FLOOR_COUNT],
        }
    }

    pub const fn wiped() -> Self {
        Self {
            colors: [AttributeSet::EMPTY; FLOOR_COUNT],
            animals: [AttributeSet::EMPTY; FLOOR_COUNT],
        }
    }

    pub fn color_sets(&self) -> [AttributeSet; FLOOR_COUNT] {
        self.colors
    }

    pub fn animal_sets(&self) -> [AttributeSet; FLOOR_COUNT] {
        self.animals
    }

    pub fn colors_at(&self, floor: Floor) -> impl Iterator<Item = Color> {
        self.colors[floor.index()].iter().filter_map(Color::from_index)
    }

    pub fn animals_at(&self, floor: Floor) -> impl Iterator<Item = Animal> {
        self.animals[floor.index()].iter().filter_map(Animal::from_index)
    }

    /// Every (color, animal) pair still possible on `floor`.
    pub fn assignments(&self, floor: Floor) -> impl Iterator<Item = FloorAssignment> + '_ {
        self.colors_at(floor).flat_map(move |color| {
            self.animals_at(floor)
                .map(move |animal| FloorAssignment::new(floor, color, animal))
        })
    }

    pub fn allows(&self, locatable: Locatable, floor: Floor) -> bool {
        let (track, index) = slot(locatable);
        self.sets(track)[floor.index()].contains(index)
    }

    /// Returns `true` if some floor has no color or no animal left.
    pub fn is_wiped_out(&self) -> bool {
        self.colors.iter().chain(self.animals.iter()).any(|s| s.is_empty())
    }

    /// Upper bound on the configurations these domains can still produce.
    pub fn size_bound(&self) -> u64 {
        let product = |sets: &[AttributeSet; FLOOR_COUNT]| -> u64 {
            sets.iter().map(|s| s.len() as u64).product()
        };
        product(&self.colors) * product(&self.animals)
    }

    fn sets(&self, track: Track) -> &[AttributeSet; FLOOR_COUNT] {
        match track {
            Track::Color => &self.colors,
            Track::Animal => &self.animals,
        }
    }

    fn sets_mut(&mut self, track: Track) -> &mut [AttributeSet; FLOOR_COUNT] {
        match track {
            Track::Color => &mut self.colors,
            Track::Animal => &mut self.animals,
        }
    }

    /// Removes `locatable` from the candidates of `floor`.
    pub(crate) fn remove(&mut self, locatable: Locatable, floor: Floor) -> bool {
        let (track, index) = slot(locatable);
        self.sets_mut(track)[floor.index()].remove(index)
    }

    /// Fixes `locatable` to `floor`: it becomes the only candidate there and
    /// disappears from every other floor.
    pub(crate) fn pin(&mut self, locatable: Locatable, floor: Floor) {
        let (track, index) = slot(locatable);
        for (i, set) in self.sets_mut(track).iter_mut().enumerate() {
            if i == floor.index() {
                *set = if set.contains(index) {
                    AttributeSet::single(index)
                } else {
                    AttributeSet::EMPTY
                };
            } else {
                set.remove(index);
            }
        }
    }

    pub(crate) fn wipe(&mut self) {
        *self = Self::wiped();
    }

    /// All-different reasoning on both tables:
    /// - a floor with a single candidate removes it from every other floor
    /// - a value with a single candidate floor claims that floor
    /// - a value with no candidate floor wipes the domains
    pub(crate) fn eliminate_singletons(&mut self) {
        if !self.eliminate_in(Track::Color) || !self.eliminate_in(Track::Animal) {
            self.wipe();
        }
    }

    /// Returns `false` if some value has no candidate floor left.
    fn eliminate_in(&mut self, track: Track) -> bool {
        let sets = self.sets_mut(track);
        for floor in 0..FLOOR_COUNT {
            if let Some(value) = sets[floor].only() {
                for (other, set) in sets.iter_mut().enumerate() {
                    if other != floor {
                        set.remove(value);
                    }
                }
            }
        }

        for value in 0..FLOOR_COUNT {
            let mut holders = (0..FLOOR_COUNT).filter(|f| sets[*f].contains(value));
            match (holders.next(), holders.next()) {
                (None, _) => return false,
                (Some(floor), None) => sets[floor] = AttributeSet::single(value),
                _ => {}
            }
        }
        true
    }
}
