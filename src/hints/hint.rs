//! The three hint shapes and their satisfaction predicates.
//!
//! | Kind       | Holds when                                   | Endpoints          |
//! |------------|----------------------------------------------|--------------------|
//! | `Absolute` | `a` and `b` are on the same floor            | floor, color, animal |
//! | `Relative` | `floor(a) - floor(b) == offset`              | color, animal      |
//! | `Neighbor` | `abs(floor(a) - floor(b)) == 1`              | color, animal      |

use std::fmt;

use super::attribute::{Attribute, Locatable};
use super::error::InvalidHint;
use crate::domain::{TowerConfiguration, FLOOR_COUNT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest magnitude a relative offset can have in a five-floor tower.
pub const MAX_OFFSET: i8 = FLOOR_COUNT as i8 - 1;

/// Discriminant of a [`Hint`], used for reporting and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HintKind {
    Absolute,
    Relative,
    Neighbor,
}

impl fmt::Display for HintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute => write!(f, "Absolute"),
            Self::Relative => write!(f, "Relative"),
            Self::Neighbor => write!(f, "Neighbor"),
        }
    }
}

fn locate(kind: HintKind, attribute: Attribute) -> Result<Locatable, InvalidHint> {
    match attribute {
        Attribute::Floor(floor) => Err(InvalidHint::NotLocatable { kind, floor }),
        Attribute::Color(color) => Ok(Locatable::Color(color)),
        Attribute::Animal(animal) => Ok(Locatable::Animal(animal)),
    }
}

/// Two attributes share a floor.
///
/// ```
/// use picasso_tower::domain::{Color, Floor};
/// use picasso_tower::hints::AbsoluteHint;
///
/// // "The third floor is red"
/// let hint = AbsoluteHint::new(Floor::Third, Color::Red);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AbsoluteHint {
    a: Attribute,
    b: Attribute,
}

impl AbsoluteHint {
    pub fn new(a: impl Into<Attribute>, b: impl Into<Attribute>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    pub fn a(&self) -> Attribute {
        self.a
    }

    pub fn b(&self) -> Attribute {
        self.b
    }

    pub fn is_satisfied(&self, config: &TowerConfiguration) -> bool {
        self.a.floor_in(config) == self.b.floor_in(config)
    }
}

/// `floor(a) - floor(b) == offset`.
///
/// "The frog lives three floors below the yellow floor" is
/// `RelativeHint::new(Animal::Frog, Color::Yellow, -3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RelativeHintRepr"))]
pub struct RelativeHint {
    a: Locatable,
    b: Locatable,
    offset: i8,
}

impl RelativeHint {
    /// # Errors
    ///
    /// - [`InvalidHint::NotLocatable`] if either endpoint is a floor literal
    /// - [`InvalidHint::OffsetOutOfRange`] if `|offset| > MAX_OFFSET`
    pub fn new(
        a: impl Into<Attribute>,
        b: impl Into<Attribute>,
        offset: i32,
    ) -> Result<Self, InvalidHint> {
        let a = locate(HintKind::Relative, a.into())?;
        let b = locate(HintKind::Relative, b.into())?;
        let offset = i8::try_from(offset)
            .ok()
            .filter(|o| (-MAX_OFFSET..=MAX_OFFSET).contains(o))
            .ok_or(InvalidHint::OffsetOutOfRange {
                offset,
                max: MAX_OFFSET,
            })?;
        Ok(Self { a, b, offset })
    }

    pub fn a(&self) -> Locatable {
        self.a
    }

    pub fn b(&self) -> Locatable {
        self.b
    }

    pub fn offset(&self) -> i8 {
        self.offset
    }

    pub fn is_satisfied(&self, config: &TowerConfiguration) -> bool {
        self.a.floor_in(config).number() - self.b.floor_in(config).number() == self.offset
    }
}

/// Two attributes live on adjacent floors, in either order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "NeighborHintRepr"))]
pub struct NeighborHint {
    a: Locatable,
    b: Locatable,
}

impl NeighborHint {
    /// # Errors
    ///
    /// [`InvalidHint::NotLocatable`] if either endpoint is a floor literal.
    pub fn new(a: impl Into<Attribute>, b: impl Into<Attribute>) -> Result<Self, InvalidHint> {
        Ok(Self {
            a: locate(HintKind::Neighbor, a.into())?,
            b: locate(HintKind::Neighbor, b.into())?,
        })
    }

    pub fn a(&self) -> Locatable {
        self.a
    }

    pub fn b(&self) -> Locatable {
        self.b
    }

    pub fn is_satisfied(&self, config: &TowerConfiguration) -> bool {
        (self.a.floor_in(config).number() - self.b.floor_in(config).number()).abs() == 1
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RelativeHintRepr {
    a: Attribute,
    b: Attribute,
    offset: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RelativeHintRepr> for RelativeHint {
    type Error = InvalidHint;

    fn try_from(repr: RelativeHintRepr) -> Result<Self, Self::Error> {
        Self::new(repr.a, repr.b, repr.offset)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct NeighborHintRepr {
    a: Attribute,
    b: Attribute,
}

#[cfg(feature = "serde")]
impl TryFrom<NeighborHintRepr> for NeighborHint {
    type Error = InvalidHint;

    fn try_from(repr: NeighborHintRepr) -> Result<Self, Self::Error> {
        Self::new(repr.a, repr.b)
    }
}

/// A declarative constraint over one [`TowerConfiguration`].
///
/// The variant set is closed; evaluation dispatches by `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Hint {
    Absolute(AbsoluteHint),
    Relative(RelativeHint),
    Neighbor(NeighborHint),
}

impl Hint {
    /// Shorthand for `Hint::Absolute(AbsoluteHint::new(a, b))`.
    pub fn absolute(a: impl Into<Attribute>, b: impl Into<Attribute>) -> Self {
        Self::Absolute(AbsoluteHint::new(a, b))
    }

    pub fn relative(
        a: impl Into<Attribute>,
        b: impl Into<Attribute>,
        offset: i32,
    ) -> Result<Self, InvalidHint> {
        RelativeHint::new(a, b, offset).map(Self::Relative)
    }

    pub fn neighbor(a: impl Into<Attribute>, b: impl Into<Attribute>) -> Result<Self, InvalidHint> {
        NeighborHint::new(a, b).map(Self::Neighbor)
    }

    pub fn kind(&self) -> HintKind {
        match self {
            Self::Absolute(_) => HintKind::Absolute,
            Self::Relative(_) => HintKind::Relative,
            Self::Neighbor(_) => HintKind::Neighbor,
        }
    }

    pub fn is_satisfied(&self, config: &TowerConfiguration) -> bool {
        match self {
            Self::Absolute(hint) => hint.is_satisfied(config),
            Self::Relative(hint) => hint.is_satisfied(config),
            Self::Neighbor(hint) => hint.is_satisfied(config),
        }
    }
}

impl From<AbsoluteHint> for Hint {
    fn from(hint: AbsoluteHint) -> Self {
        Self::Absolute(hint)
    }
}

impl From<RelativeHint> for Hint {
    fn from(hint: RelativeHint) -> Self {
        Self::Relative(hint)
    }
}

impl From<NeighborHint> for Hint {
    fn from(hint: NeighborHint) -> Self {
        Self::Neighbor(hint)
    }
}

impl fmt::Display for AbsoluteHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is on the same floor as {}", self.a, self.b)
    }
}

impl fmt::Display for RelativeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let distance = self.offset.unsigned_abs();
        let unit = if distance == 1 { "floor" } else { "floors" };
        match self.offset {
            0 => write!(f, "{} is on the same floor as {}", self.a, self.b),
            o if o < 0 => write!(f, "{} is {distance} {unit} below {}", self.a, self.b),
            _ => write!(f, "{} is {distance} {unit} above {}", self.a, self.b),
        }
    }
}

impl fmt::Display for NeighborHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} neighbors {}", self.a, self.b)
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(hint) => fmt::Display::fmt(hint, f),
            Self::Relative(hint) => fmt::Display::fmt(hint, f),
            Self::Neighbor(hint) => fmt::Display::fmt(hint, f),
        }
    }
}
