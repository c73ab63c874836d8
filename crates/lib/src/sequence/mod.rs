//! Sorted, homogeneous sequence built on a singly-linked chain of owned nodes.
//!
//! [`OrderedSequence`] keeps its elements in ascending order at all times.
//! The first successful insert locks the sequence to that value's [`Kind`];
//! later inserts of the other kind are rejected while the sequence holds
//! elements. [`OrderedSequence::clear`] resets the lock; a sequence emptied by
//! deletes keeps reporting its old mode but accepts either kind on the next
//! insert.
//!
//! Every operation walks the chain from the head. There is no index, so
//! search and positional access are linear.

mod errors;
mod iter;


use std::fmt;

use tracing::{debug, trace};

pub use errors::SequenceError;
pub use iter::{IntoIter, Iter};

use crate::value::{Kind, Value};

/// The element kind a sequence is locked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Nothing inserted since creation or the last clear
    #[default]
    Unset,
    /// Holds integers only
    Integer,
    /// Holds strings only
    String,
}

impl Mode {
    /// Returns the locked kind, or `None` while unset
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Mode::Unset => None,
            Mode::Integer => Some(Kind::Integer),
            Mode::String => Some(Kind::String),
        }
    }

    /// Returns true until the first successful insert
    pub fn is_unset(&self) -> bool {
        matches!(self, Mode::Unset)
    }
}

impl From<Kind> for Mode {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Integer => Mode::Integer,
            Kind::String => Mode::String,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => fmt::Display::fmt(&kind, f),
            None => f.write_str("unset"),
        }
    }
}

/// One link of the chain. Each node exclusively owns its successor.
struct Node {
    value: Value,
    next: Option<Box<Node>>,
}

/// An ascending, homogeneous sequence of [`Value`]s.
///
/// Duplicates are kept. A new value lands after every element strictly less
/// than it and after the run of equal elements that follows the head, except
/// that a value not greater than the current head always becomes the new head.
///
/// ```
/// # use ordseq::{OrderedSequence, Value};
/// let mut seq = OrderedSequence::new();
/// seq.insert_many([33, 7, 15, 3, 33]).unwrap();
/// assert_eq!(seq.to_vec(), [3, 7, 15, 33, 33].map(Value::Int));
///
/// // The first insert locked the sequence to integers
/// assert!(seq.insert("kiwi").unwrap_err().is_type_mismatch());
/// ```
#[derive(Default)]
pub struct OrderedSequence {
    head: Option<Box<Node>>,
    count: usize,
    mode: Mode,
}

impl OrderedSequence {
    /// Creates a new empty sequence with no mode set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the kind this sequence is currently locked to.
    ///
    /// Deleting every element does not reset the mode: it keeps reporting the
    /// old kind until the next insert relocks it to that value's kind. Only
    /// [`clear`](Self::clear) resets it to [`Mode::Unset`] immediately.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the sequence holds no elements
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Inserts a value at its sorted position.
    ///
    /// On an empty sequence the value's kind becomes the sequence's mode.
    /// Otherwise a value of the other kind fails with
    /// [`SequenceError::TypeMismatch`] and the sequence is left untouched.
    pub fn insert(&mut self, item: impl Into<Value>) -> Result<(), SequenceError> {
        let item = item.into();
        self.admit(&item)?;

        let goes_first = self.head.as_ref().is_none_or(|head| item <= head.value);
        let index = if goes_first {
            0
        } else {
            // Past the head, then past every successor that does not exceed the item
            1 + self.iter().skip(1).take_while(|value| **value <= item).count()
        };

        let link = self.link_at(index);
        let next = link.take();
        *link = Some(Box::new(Node { value: item, next }));
        self.count += 1;
        Ok(())
    }

    /// Inserts each item in order.
    ///
    /// Stops at the first item of the wrong kind and returns its
    /// [`SequenceError::TypeMismatch`]. Items inserted before it stay in place.
    pub fn insert_many<I>(&mut self, items: I) -> Result<(), SequenceError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        for item in items {
            self.insert(item)?;
        }
        Ok(())
    }

    /// Returns true if any element is exactly equal to `item`.
    ///
    /// A value of the other kind is never contained; this is not an error.
    pub fn contains(&self, item: &Value) -> bool {
        self.iter().any(|value| value == item)
    }

    /// Removes the first element equal to `item`.
    ///
    /// Returns whether an element was removed.
    pub fn delete(&mut self, item: &Value) -> bool {
        let Some(index) = self.iter().position(|value| value == item) else {
            return false;
        };

        let link = self.link_at(index);
        let Some(removed) = link.take() else {
            return false;
        };
        *link = removed.next;
        self.count -= 1;
        trace!(value = %item, len = self.count, "Deleted element");
        true
    }

    /// Removes every element equal to `item`, returning how many were removed.
    pub fn delete_all(&mut self, item: &Value) -> usize {
        let mut removed = 0;
        while self.delete(item) {
            removed += 1;
        }
        trace!(value = %item, removed, "Deleted all matching elements");
        removed
    }

    /// Returns the element at a zero-based position.
    ///
    /// Fails with [`SequenceError::OutOfRange`] for negative positions and
    /// positions at or past [`len`](Self::len).
    pub fn at(&self, position: i64) -> Result<&Value, SequenceError> {
        usize::try_from(position)
            .ok()
            .and_then(|index| self.get(index))
            .ok_or(SequenceError::OutOfRange {
                position,
                len: self.count,
            })
    }

    /// Returns the element at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.iter().nth(index)
    }

    /// Returns the smallest element
    pub fn first(&self) -> Option<&Value> {
        self.head.as_ref().map(|head| &head.value)
    }

    /// Returns the largest element
    pub fn last(&self) -> Option<&Value> {
        self.iter().last()
    }

    /// Drops every element and resets the mode to [`Mode::Unset`]
    pub fn clear(&mut self) {
        let released = self.count;
        self.release_chain();
        self.count = 0;
        self.mode = Mode::Unset;
        trace!(released, "Cleared sequence");
    }

    /// Returns a snapshot of all elements in ascending order
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }

    /// Returns a lazy iterator over the elements in ascending order
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Serializes the elements as a JSON array
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builds a sequence from a JSON array, inserting each element in turn
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks `item` against the mode, locking the mode on an empty sequence
    fn admit(&mut self, item: &Value) -> Result<(), SequenceError> {
        let offered = item.kind();
        match self.mode.kind() {
            Some(established) if self.count > 0 => {
                if offered != established {
                    debug!(%offered, %established, "Rejected insert of mismatched kind");
                    return Err(SequenceError::TypeMismatch {
                        offered,
                        established,
                    });
                }
            }
            _ => {
                self.mode = Mode::from(offered);
                debug!(mode = %self.mode, "Locked sequence mode");
            }
        }
        Ok(())
    }

    /// Returns the link holding the node at `index`, or the trailing empty
    /// link when `index` is past the last node
    fn link_at(&mut self, index: usize) -> &mut Option<Box<Node>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    fn pop_front(&mut self) -> Option<Value> {
        self.head.take().map(|head| {
            let Node { value, next } = *head;
            self.head = next;
            self.count -= 1;
            value
        })
    }

    /// Unlinks nodes one at a time so long chains don't recurse in `Drop`
    fn release_chain(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl Drop for OrderedSequence {
    fn drop(&mut self) {
        self.release_chain();
    }
}

impl PartialEq for OrderedSequence {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl Eq for OrderedSequence {}

impl fmt::Debug for OrderedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for OrderedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

// Serialized as a plain array of values. Deserializing goes through `insert`,
// so the result is sorted and homogeneous regardless of the input order.
impl serde::Serialize for OrderedSequence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> serde::Deserialize<'de> for OrderedSequence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{Error, SeqAccess, Visitor};

        struct SequenceVisitor;

        impl<'de> Visitor<'de> for SequenceVisitor {
            type Value = OrderedSequence;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of integers or a sequence of strings")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut sequence = OrderedSequence::new();
                while let Some(value) = seq.next_element::<Value>()? {
                    sequence.insert(value).map_err(A::Error::custom)?;
                }
                Ok(sequence)
            }
        }

        deserializer.deserialize_seq(SequenceVisitor)
    }
}
