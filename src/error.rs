use thiserror::Error;

/// A positional operation was given an index outside the range valid for the
/// list's current length and mode.
///
/// No mutation has happened when this is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("index {index} out of range for list of length {len}")]
pub struct IndexError {
    /// The index as passed by the caller.
    pub index: isize,
    /// The list length at the time of the call.
    pub len: usize,
}

impl IndexError {
    pub(crate) fn new(index: isize, len: usize) -> Self {
        tracing::trace!(index, len, "rejected out-of-range index");
        Self { index, len }
    }
}

pub type Result<T> = std::result::Result<T, IndexError>;
