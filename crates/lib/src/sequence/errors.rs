//! Error types for ordered sequence operations.
//!
//! Both variants describe a caller violating a sequence constraint. Neither is
//! transient, and a failed operation never leaves a partial mutation behind.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::value::Kind;

/// Structured error types for [`OrderedSequence`](super::OrderedSequence) operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A value's kind conflicts with the kind the sequence is locked to
    #[error(
        "type mismatch: cannot add {offered} value when sequence holds {established} values"
    )]
    TypeMismatch { offered: Kind, established: Kind },

    /// A position lies outside the populated part of the sequence
    #[error("position {position} is outside {}", describe_range(.len))]
    OutOfRange { position: i64, len: usize },
}

fn describe_range(len: &usize) -> String {
    match len.checked_sub(1) {
        Some(last) => format!("valid range [0..{last}]"),
        None => "an empty sequence".to_string(),
    }
}

impl SequenceError {
    /// Check if this error is a rejected insert of the wrong kind
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, SequenceError::TypeMismatch { .. })
    }

    /// Check if this error is a positional lookup past either end
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, SequenceError::OutOfRange { .. })
    }

    /// Get the requested position if this is a range error
    pub fn position(&self) -> Option<i64> {
        match self {
            SequenceError::OutOfRange { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Get the valid inclusive position range carried by a range error.
    ///
    /// Returns `None` for other errors and for range errors raised against an
    /// empty sequence, where no position is valid.
    pub fn valid_range(&self) -> Option<RangeInclusive<usize>> {
        match self {
            SequenceError::OutOfRange { len, .. } => len.checked_sub(1).map(|last| 0..=last),
            _ => None,
        }
    }

    /// Get the `(offered, established)` kinds if this is a type mismatch
    pub fn kinds(&self) -> Option<(Kind, Kind)> {
        match self {
            SequenceError::TypeMismatch {
                offered,
                established,
            } => Some((*offered, *established)),
            _ => None,
        }
    }
}

// Conversion from SequenceError to the main Error type
impl From<SequenceError> for crate::Error {
    fn from(err: SequenceError) -> Self {
        crate::Error::Sequence(err)
    }
}
