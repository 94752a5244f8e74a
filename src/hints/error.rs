use super::hint::HintKind;
use crate::domain::Floor;
use thiserror::Error;

/// Errors raised while constructing a hint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHint {
    #[error("{kind} hint cannot use {floor} as an endpoint; only colors and animals are locatable")]
    NotLocatable { kind: HintKind, floor: Floor },

    #[error("Relative offset {offset} is outside [-{max}, {max}]")]
    OffsetOutOfRange { offset: i32, max: i8 },
}
