//!
//! Ordseq: a sorted, homogeneous sequence of integers or strings.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: An element is either a 64-bit signed integer or a text string.
//! * **Sequences (`sequence::OrderedSequence`)**: A singly-linked chain of owned nodes kept in ascending order on every insert.
//! * **Mode (`sequence::Mode`)**: The element kind a sequence is locked to. The first insert sets it and only `clear` resets it.
//!
//! ```
//! use ordseq::{OrderedSequence, Value};
//!
//! let mut fruits = OrderedSequence::new();
//! fruits
//!     .insert_many(["watermelon", "banana", "apple", "kiwi", "cherry", "banana"])
//!     .unwrap();
//!
//! assert_eq!(fruits.to_string(), "[apple, banana, banana, cherry, kiwi, watermelon]");
//! assert_eq!(fruits.delete_all(&Value::from("banana")), 2);
//! assert!(fruits.at(4).is_err());
//! ```

pub mod sequence;
pub mod value;

pub use sequence::{Mode, OrderedSequence, SequenceError};
pub use value::{Kind, Value};

/// Result type used throughout the Ordseq library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Ordseq library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured sequence errors from the sequence module
    #[error(transparent)]
    Sequence(sequence::SequenceError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Sequence(_) => "sequence",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is a rejected insert of the wrong element kind.
    ///
    /// Mixed-kind JSON input surfaces as a serialization error carrying the
    /// mismatch message, so only direct sequence errors are matched here.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Error::Sequence(err) => err.is_type_mismatch(),
            _ => false,
        }
    }

    /// Check if this error is a positional lookup outside the sequence.
    pub fn is_out_of_range(&self) -> bool {
        match self {
            Error::Sequence(err) => err.is_out_of_range(),
            _ => false,
        }
    }

    /// Check if this error came from (de)serialization.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
