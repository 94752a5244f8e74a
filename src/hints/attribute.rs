//! Hint endpoints: any attribute, or the locatable subset of them.

use std::fmt;

use crate::domain::{Animal, Color, Floor, TowerConfiguration};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Any value a hint may mention: a floor literal, a color or an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Attribute {
    Floor(Floor),
    Color(Color),
    Animal(Animal),
}

impl Attribute {
    /// Returns the locatable view of this attribute, or `None` for a floor literal.
    pub fn as_locatable(self) -> Option<Locatable> {
        match self {
            Self::Floor(_) => None,
            Self::Color(color) => Some(Locatable::Color(color)),
            Self::Animal(animal) => Some(Locatable::Animal(animal)),
        }
    }

    pub fn is_locatable(self) -> bool {
        self.as_locatable().is_some()
    }

    /// Floor this attribute occupies in `config`. A floor literal is its own floor.
    pub fn floor_in(self, config: &TowerConfiguration) -> Floor {
        match self {
            Self::Floor(floor) => floor,
            Self::Color(color) => config.floor_of_color(color),
            Self::Animal(animal) => config.floor_of_animal(animal),
        }
    }
}

impl From<Floor> for Attribute {
    fn from(floor: Floor) -> Self {
        Self::Floor(floor)
    }
}

impl From<Color> for Attribute {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<Animal> for Attribute {
    fn from(animal: Animal) -> Self {
        Self::Animal(animal)
    }
}

impl From<Locatable> for Attribute {
    fn from(locatable: Locatable) -> Self {
        match locatable {
            Locatable::Color(color) => Self::Color(color),
            Locatable::Animal(animal) => Self::Animal(animal),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Floor(floor) => write!(f, "{floor}"),
            Self::Color(color) => write!(f, "{color}"),
            Self::Animal(animal) => write!(f, "{animal}"),
        }
    }
}

/// An attribute whose floor depends on the configuration.
///
/// Relative and neighbor hints only accept locatable endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Locatable {
    Color(Color),
    Animal(Animal),
}

impl Locatable {
    pub fn floor_in(self, config: &TowerConfiguration) -> Floor {
        config.floor_of(self)
    }
}

impl From<Color> for Locatable {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<Animal> for Locatable {
    fn from(animal: Animal) -> Self {
        Self::Animal(animal)
    }
}

impl fmt::Display for Locatable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Attribute::from(*self), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_literal_is_not_locatable() {
        assert!(!Attribute::from(Floor::Third).is_locatable());
        assert_eq!(
            Attribute::from(Color::Red).as_locatable(),
            Some(Locatable::Color(Color::Red))
        );
        assert_eq!(
            Attribute::from(Animal::Bird).as_locatable(),
            Some(Locatable::Animal(Animal::Bird))
        );
    }

    #[test]
    fn floor_in_resolves_each_kind() {
        let tower = TowerConfiguration::new(Color::ALL, Animal::ALL).unwrap();
        assert_eq!(Attribute::Floor(Floor::Fourth).floor_in(&tower), Floor::Fourth);
        assert_eq!(Attribute::Color(Color::Blue).floor_in(&tower), Floor::Third);
        assert_eq!(Locatable::Animal(Animal::Rabbit).floor_in(&tower), Floor::Second);
    }

    #[test]
    fn locatable_round_trips_through_attribute() {
        let locatable = Locatable::from(Animal::Chicken);
        assert_eq!(Attribute::from(locatable).as_locatable(), Some(locatable));
        assert_eq!(locatable.to_string(), "Chicken");
    }
}
