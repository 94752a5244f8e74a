//! Full tower configuration with O(1) lookups in both directions.

use std::fmt;

use super::attributes::{Animal, Color, Floor, FLOOR_COUNT};
use super::error::InvalidConfiguration;
use crate::hints::Locatable;

/// The color and animal living on one floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloorAssignment {
    pub floor: Floor,
    pub color: Color,
    pub animal: Animal,
}

impl FloorAssignment {
    pub const fn new(floor: Floor, color: Color, animal: Animal) -> Self {
        Self {
            floor,
            color,
            animal,
        }
    }
}

/// One complete candidate solution.
///
/// Holds a floor→color bijection and an independent floor→animal bijection,
/// together with their inverses so that every lookup is a single array read.
///
/// # Internal Structure
/// - `colors` / `animals`: indexed by [`Floor::index`]
/// - `color_floors` / `animal_floors`: indexed by [`Color::index`] / [`Animal::index`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TowerConfiguration {
    colors: [Color; FLOOR_COUNT],
    animals: [Animal; FLOOR_COUNT],
    color_floors: [Floor; FLOOR_COUNT],
    animal_floors: [Floor; FLOOR_COUNT],
}

impl TowerConfiguration {
    /// Builds a configuration from floor-indexed color and animal tables.
    ///
    /// `colors[i]` and `animals[i]` live on `Floor::ALL[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration::DuplicateColor`] or
    /// [`InvalidConfiguration::DuplicateAnimal`] if either table repeats a
    /// value (with five slots, no repeats means a bijection).
    ///
    /// # Examples
    ///
    /// ```
    /// use picasso_tower::domain::{Animal, Color, Floor, TowerConfiguration};
    ///
    /// let tower = TowerConfiguration::new(Color::ALL, Animal::ALL).unwrap();
    /// assert_eq!(tower.color_at(Floor::First), Color::Red);
    /// assert_eq!(tower.floor_of_animal(Animal::Chicken), Floor::Fifth);
    /// ```
    pub fn new(
        colors: [Color; FLOOR_COUNT],
        animals: [Animal; FLOOR_COUNT],
    ) -> Result<Self, InvalidConfiguration> {
        let mut color_floors = [None; FLOOR_COUNT];
        let mut animal_floors = [None; FLOOR_COUNT];

        for (floor, (color, animal)) in Floor::ALL.iter().zip(colors.iter().zip(animals.iter())) {
            if color_floors[color.index()].replace(*floor).is_some() {
                return Err(InvalidConfiguration::DuplicateColor(*color));
            }
            if animal_floors[animal.index()].replace(*floor).is_some() {
                return Err(InvalidConfiguration::DuplicateAnimal(*animal));
            }
        }

        // Five distinct values over five slots cover every index.
        Ok(Self {
            colors,
            animals,
            color_floors: color_floors.map(|f| f.unwrap_or(Floor::First)),
            animal_floors: animal_floors.map(|f| f.unwrap_or(Floor::First)),
        })
    }

    /// Builds a configuration from per-floor triples given in any order.
    ///
    /// # Errors
    ///
    /// Fails if a floor is repeated or missing, or if a color or animal is
    /// used on more than one floor.
    pub fn from_assignments(
        assignments: impl IntoIterator<Item = FloorAssignment>,
    ) -> Result<Self, InvalidConfiguration> {
        let mut slots: [Option<(Color, Animal)>; FLOOR_COUNT] = [None; FLOOR_COUNT];

        for assignment in assignments {
            let slot = &mut slots[assignment.floor.index()];
            if slot.is_some() {
                return Err(InvalidConfiguration::DuplicateFloor(assignment.floor));
            }
            *slot = Some((assignment.color, assignment.animal));
        }

        let mut colors = Color::ALL;
        let mut animals = Animal::ALL;
        for floor in Floor::ALL {
            let (color, animal) =
                slots[floor.index()].ok_or(InvalidConfiguration::MissingFloor(floor))?;
            colors[floor.index()] = color;
            animals[floor.index()] = animal;
        }

        Self::new(colors, animals)
    }

    /// Builds a configuration from tables the caller guarantees to be
    /// permutations. Used by the enumeration, which never produces repeats.
    pub(crate) fn from_permutations(
        colors: [Color; FLOOR_COUNT],
        animals: [Animal; FLOOR_COUNT],
    ) -> Self {
        let mut color_floors = [Floor::First; FLOOR_COUNT];
        let mut animal_floors = [Floor::First; FLOOR_COUNT];
        for floor in Floor::ALL {
            color_floors[colors[floor.index()].index()] = floor;
            animal_floors[animals[floor.index()].index()] = floor;
        }
        Self {
            colors,
            animals,
            color_floors,
            animal_floors,
        }
    }

    pub fn color_at(&self, floor: Floor) -> Color {
        self.colors[floor.index()]
    }

    pub fn animal_at(&self, floor: Floor) -> Animal {
        self.animals[floor.index()]
    }

    pub fn floor_of_color(&self, color: Color) -> Floor {
        self.color_floors[color.index()]
    }

    pub fn floor_of_animal(&self, animal: Animal) -> Floor {
        self.animal_floors[animal.index()]
    }

    /// Floor holding a color or an animal.
    pub fn floor_of(&self, locatable: impl Into<Locatable>) -> Floor {
        match locatable.into() {
            Locatable::Color(color) => self.floor_of_color(color),
            Locatable::Animal(animal) => self.floor_of_animal(animal),
        }
    }

    /// Returns the triple living on `floor`.
    pub fn assignment_at(&self, floor: Floor) -> FloorAssignment {
        FloorAssignment::new(floor, self.color_at(floor), self.animal_at(floor))
    }

    /// Iterates the five floors bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = FloorAssignment> + '_ {
        Floor::ALL.iter().map(move |floor| self.assignment_at(*floor))
    }
}

impl fmt::Display for TowerConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>5} | {:<6} | {:<11}", "Floor", "Color", "Animal")?;
        for floor in Floor::ALL.iter().rev() {
            writeln!(
                f,
                "{:>5} | {:<6} | {:<11}",
                floor.number(),
                self.color_at(*floor).name(),
                self.animal_at(*floor).name()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TowerConfiguration {
        // Floor | Color  | Animal
        //   5   | Green  | Grasshopper
        //   4   | Yellow | Frog
        //   3   | Red    | Bird
        //   2   | Blue   | Chicken
        //   1   | Orange | Rabbit
        TowerConfiguration::new(
            [Color::Orange, Color::Blue, Color::Red, Color::Yellow, Color::Green],
            [
                Animal::Rabbit,
                Animal::Chicken,
                Animal::Bird,
                Animal::Frog,
                Animal::Grasshopper,
            ],
        )
        .unwrap()
    }

    #[test]
    fn lookups_agree_in_both_directions() {
        let tower = sample();
        for floor in Floor::ALL {
            assert_eq!(tower.floor_of_color(tower.color_at(floor)), floor);
            assert_eq!(tower.floor_of_animal(tower.animal_at(floor)), floor);
        }
        assert_eq!(tower.floor_of_color(Color::Green), Floor::Fifth);
        assert_eq!(tower.floor_of_animal(Animal::Rabbit), Floor::First);
        assert_eq!(tower.animal_at(Floor::Third), Animal::Bird);
        assert_eq!(tower.floor_of(Color::Yellow), Floor::Fourth);
        assert_eq!(tower.floor_of(Animal::Chicken), Floor::Second);
    }

    #[test]
    fn duplicate_color_is_rejected() {
        let result = TowerConfiguration::new(
            [Color::Red, Color::Red, Color::Blue, Color::Yellow, Color::Orange],
            Animal::ALL,
        );
        assert_eq!(result, Err(InvalidConfiguration::DuplicateColor(Color::Red)));
    }

    #[test]
    fn duplicate_animal_is_rejected() {
        let result = TowerConfiguration::new(
            Color::ALL,
            [
                Animal::Frog,
                Animal::Rabbit,
                Animal::Frog,
                Animal::Bird,
                Animal::Chicken,
            ],
        );
        assert_eq!(result, Err(InvalidConfiguration::DuplicateAnimal(Animal::Frog)));
    }

    #[test]
    fn from_assignments_accepts_any_order() {
        let triples: Vec<_> = sample().iter().collect();
        let reversed = TowerConfiguration::from_assignments(triples.into_iter().rev()).unwrap();
        assert_eq!(reversed, sample());
    }

    #[test]
    fn from_assignments_rejects_missing_floor() {
        let triples: Vec<_> = sample().iter().take(4).collect();
        assert_eq!(
            TowerConfiguration::from_assignments(triples),
            Err(InvalidConfiguration::MissingFloor(Floor::Fifth))
        );
    }

    #[test]
    fn from_assignments_rejects_repeated_floor() {
        let mut triples: Vec<_> = sample().iter().collect();
        triples.push(triples[0]);
        assert_eq!(
            TowerConfiguration::from_assignments(triples),
            Err(InvalidConfiguration::DuplicateFloor(Floor::First))
        );
    }

    #[test]
    fn from_permutations_matches_checked_builder() {
        let colors = [Color::Orange, Color::Blue, Color::Red, Color::Yellow, Color::Green];
        let animals = [
            Animal::Rabbit,
            Animal::Chicken,
            Animal::Bird,
            Animal::Frog,
            Animal::Grasshopper,
        ];
        assert_eq!(
            TowerConfiguration::from_permutations(colors, animals),
            TowerConfiguration::new(colors, animals).unwrap()
        );
    }

    #[test]
    fn display_lists_top_floor_first() {
        let rendered = sample().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("Green") && lines[1].contains("Grasshopper"));
        assert!(lines[5].contains("Orange") && lines[5].contains("Rabbit"));
    }
}
