use super::attributes::{Animal, Color, Floor};
use thiserror::Error;

/// Errors raised when a [`TowerConfiguration`](super::TowerConfiguration) is
/// built by hand from mappings that are not bijections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidConfiguration {
    #[error("Color {0} is assigned to more than one floor")]
    DuplicateColor(Color),

    #[error("Animal {0} is assigned to more than one floor")]
    DuplicateAnimal(Animal),

    #[error("{0} is assigned more than once")]
    DuplicateFloor(Floor),

    #[error("{0} has no assignment")]
    MissingFloor(Floor),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_color_display() {
        let e = InvalidConfiguration::DuplicateColor(Color::Red);
        assert_eq!(e.to_string(), "Color Red is assigned to more than one floor");
    }

    #[test]
    fn missing_floor_display() {
        let e = InvalidConfiguration::MissingFloor(Floor::Fourth);
        assert_eq!(e.to_string(), "Floor 4 has no assignment");
    }

    #[test]
    fn error_equality() {
        assert_eq!(
            InvalidConfiguration::DuplicateAnimal(Animal::Frog),
            InvalidConfiguration::DuplicateAnimal(Animal::Frog)
        );
        assert_ne!(
            InvalidConfiguration::DuplicateFloor(Floor::First),
            InvalidConfiguration::MissingFloor(Floor::First)
        );
    }
}
