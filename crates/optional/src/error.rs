use primitives::{Exhausted, PrimitiveKind};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum OptionalError {
    /// `get` on an empty optional.
    #[error("no {kind} value present")]
    Absent { kind: PrimitiveKind },
    /// Read past the single value of an optional's iterator.
    #[error(transparent)]
    Exhausted(#[from] Exhausted),
}

pub type Result<T, E = OptionalError> = core::result::Result<T, E>;
