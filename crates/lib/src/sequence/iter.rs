//! Head-to-tail iterators over an [`OrderedSequence`].

use std::fmt;
use std::iter::FusedIterator;

use super::{Node, OrderedSequence};
use crate::value::Value;

/// Borrowing iterator returned by [`OrderedSequence::iter`].
///
/// Walks the chain lazily from the head. The iterator holds a shared borrow
/// of the sequence, so the sequence cannot be mutated while it is alive.
#[derive(Clone)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(sequence: &'a OrderedSequence) -> Self {
        Self {
            next: sequence.head.as_deref(),
            remaining: sequence.count,
        }
    }
}

// Remaining values in list form, walked iteratively
impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Consuming iterator returned by `OrderedSequence::into_iter`.
///
/// Yields owned values head-to-tail, releasing each node as it goes.
#[derive(Debug)]
pub struct IntoIter {
    sequence: OrderedSequence,
}

impl IntoIter {
    pub(super) fn new(sequence: OrderedSequence) -> Self {
        Self { sequence }
    }
}

impl Iterator for IntoIter {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequence.count, Some(self.sequence.count))
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl<'a> IntoIterator for &'a OrderedSequence {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for OrderedSequence {
    type Item = Value;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
