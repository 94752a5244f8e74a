//! Fixed attribute sets of the tower: floors, colors and animals.
//!
//! Every set has exactly [`FLOOR_COUNT`] members. Each type exposes a dense
//! 0-based `index()` so that per-floor tables and bitsets can be addressed
//! without hashing.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of floors, and therefore the size of every attribute set.
pub const FLOOR_COUNT: usize = 5;

/// One of the five totally ordered tower positions, bottom (`First`) to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Floor {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Floor {
    /// All floors, bottom to top.
    pub const ALL: [Floor; FLOOR_COUNT] = [
        Floor::First,
        Floor::Second,
        Floor::Third,
        Floor::Fourth,
        Floor::Fifth,
    ];

    /// 0-based position (`First` → 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 1-based floor number (`First` → 1), used for signed offsets.
    pub const fn number(self) -> i8 {
        self as i8 + 1
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Resolves a 1-based floor number; `None` outside `1..=5`.
    pub fn from_number(number: i8) -> Option<Self> {
        if number < 1 {
            return None;
        }
        Self::from_index((number - 1) as usize)
    }

    /// Returns the floor `offset` levels above this one (negative = below).
    pub fn offset_by(self, offset: i8) -> Option<Self> {
        self.number().checked_add(offset).and_then(Self::from_number)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Floor {}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
}

impl Color {
    pub const ALL: [Color; FLOOR_COUNT] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Orange => "Orange",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Animal {
    Frog,
    Rabbit,
    Grasshopper,
    Bird,
    Chicken,
}

impl Animal {
    pub const ALL: [Animal; FLOOR_COUNT] = [
        Animal::Frog,
        Animal::Rabbit,
        Animal::Grasshopper,
        Animal::Bird,
        Animal::Chicken,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Frog => "Frog",
            Self::Rabbit => "Rabbit",
            Self::Grasshopper => "Grasshopper",
            Self::Bird => "Bird",
            Self::Chicken => "Chicken",
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense_and_round_trip() {
        for (i, floor) in Floor::ALL.iter().enumerate() {
            assert_eq!(floor.index(), i);
            assert_eq!(Floor::from_index(i), Some(*floor));
        }
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(Color::from_index(i), Some(*color));
        }
        for (i, animal) in Animal::ALL.iter().enumerate() {
            assert_eq!(Animal::from_index(i), Some(*animal));
        }
        assert_eq!(Floor::from_index(FLOOR_COUNT), None);
        assert_eq!(Color::from_index(FLOOR_COUNT), None);
        assert_eq!(Animal::from_index(FLOOR_COUNT), None);
    }

    #[test]
    fn floor_numbers_are_one_based() {
        assert_eq!(Floor::First.number(), 1);
        assert_eq!(Floor::Fifth.number(), 5);
        assert_eq!(Floor::from_number(3), Some(Floor::Third));
        assert_eq!(Floor::from_number(0), None);
        assert_eq!(Floor::from_number(6), None);
        assert_eq!(Floor::from_number(-1), None);
    }

    #[test]
    fn offset_by_stays_inside_tower() {
        assert_eq!(Floor::First.offset_by(4), Some(Floor::Fifth));
        assert_eq!(Floor::Fifth.offset_by(-4), Some(Floor::First));
        assert_eq!(Floor::Third.offset_by(0), Some(Floor::Third));
        assert_eq!(Floor::Fifth.offset_by(1), None);
        assert_eq!(Floor::First.offset_by(-1), None);
        assert_eq!(Floor::Third.offset_by(i8::MAX), None);
    }

    #[test]
    fn floors_are_totally_ordered() {
        assert!(Floor::First < Floor::Second);
        assert!(Floor::Fourth < Floor::Fifth);
    }

    #[test]
    fn display_names() {
        assert_eq!(Floor::Second.to_string(), "Floor 2");
        assert_eq!(Color::Orange.to_string(), "Orange");
        assert_eq!(Animal::Grasshopper.to_string(), "Grasshopper");
    }
}
