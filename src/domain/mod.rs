//! Entity model: attribute sets and full tower configurations.

mod attributes;
mod configuration;
mod error;

pub use attributes::{Animal, Color, Floor, FLOOR_COUNT};
pub use configuration::{FloorAssignment, TowerConfiguration};
pub use error::InvalidConfiguration;

/// Number of distinct configurations: 5! color orders × 5! animal orders.
pub const TOTAL_CONFIGURATIONS: u32 = 14_400;
