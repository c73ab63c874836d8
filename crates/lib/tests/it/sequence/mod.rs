//! OrderedSequence integration tests
//!
//! Tests are organized by operation group: insertion and ordering, deletion,
//! positional access and traversal, and serialization.

mod access_tests;
mod serialization_tests;
