use std::result;

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for checked sequence reads.
///
/// A missing value in [`Sequence::index`](crate::Sequence::index) is not an
/// error; it is reported through the `-1` sentinel.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Index too high: index: {index}, len: {len}")]
    IndexTooHigh { index: usize, len: usize },
    #[error("Invalid range {from}..{to} for sequence of len {len}")]
    InvalidRange { from: usize, to: usize, len: usize },
    #[error("Value not found in sequence")]
    ValueNotFound,
}
