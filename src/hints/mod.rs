//! Hints: declarative constraints over a single tower configuration.
//!
//! A hint list is read-only and caller-owned; a configuration satisfies the
//! list when it satisfies every hint in it.

mod attribute;
mod error;
mod hint;
mod summary;

pub use attribute::{Attribute, Locatable};
pub use error::InvalidHint;
pub use hint::{AbsoluteHint, Hint, HintKind, NeighborHint, RelativeHint, MAX_OFFSET};
pub use summary::HintSummary;
