//! picasso_tower - counting solutions of the Picasso Tower puzzle
//!
//! A five-floor tower gives every floor one color and one animal, each used
//! exactly once. Given a list of hints relating floors, colors and animals,
//! [`count_assignments`] returns how many of the 14,400 possible
//! configurations satisfy all of them.
//!
//! ```
//! use picasso_tower::domain::{Animal, Color};
//! use picasso_tower::hints::Hint;
//!
//! // "The rabbit lives two floors below the green floor"
//! let hints = [Hint::relative(Animal::Rabbit, Color::Green, -2)?];
//! assert_eq!(picasso_tower::count_assignments(&hints), 1728);
//! # Ok::<(), picasso_tower::hints::InvalidHint>(())
//! ```

pub mod domain;
pub mod engine;
pub mod hints;

pub use domain::{Animal, Color, Floor, InvalidConfiguration, TowerConfiguration};
pub use engine::{count_assignments, count_with_config, CountingEngine, EngineConfig};
pub use hints::{Hint, InvalidHint};
