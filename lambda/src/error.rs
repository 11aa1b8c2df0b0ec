use thiserror::Error;

/// Returned when building a [`crate::These`] from a pair of options that are both `None`.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("neither side of the pair was present")]
pub struct NeitherPresent;
