//! Positional access and traversal tests

use ordseq::{OrderedSequence, Value};

use crate::helpers::*;

// ===== POSITIONAL ACCESS =====

#[test]
fn test_at_bounds_return_min_and_max() {
    let seq = numbers();
    let last = seq.len() as i64 - 1;

    assert_eq!(seq.at(0).unwrap(), &Value::Int(3));
    assert_eq!(seq.at(last).unwrap(), &Value::Int(33));
    assert_eq!(seq.at(2).unwrap(), &Value::Int(15));
}

#[test]
fn test_at_outside_range_fails() {
    let seq = numbers();

    let below = seq.at(-1).unwrap_err();
    assert!(below.is_out_of_range());
    assert_eq!(below.position(), Some(-1));
    assert_eq!(below.valid_range(), Some(0..=4));

    let past = seq.at(seq.len() as i64).unwrap_err();
    assert!(past.is_out_of_range());
    assert_eq!(past.position(), Some(5));
}

#[test]
fn test_at_reports_valid_range() {
    let seq = int_sequence(&[1, 2, 3]);
    let err = seq.at(10).unwrap_err();

    assert_eq!(err.valid_range(), Some(0..=2));
    assert_eq!(err.to_string(), "position 10 is outside valid range [0..2]");
}

#[test]
fn test_at_on_empty_sequence() {
    let seq = OrderedSequence::new();
    let err = seq.at(0).unwrap_err();

    assert!(err.is_out_of_range());
    assert_eq!(err.valid_range(), None);
    assert_eq!(err.to_string(), "position 0 is outside an empty sequence");
}

#[test]
fn test_get_first_last() {
    let seq = fruits();
    assert_eq!(seq.get(0), Some(&Value::from("apple")));
    assert_eq!(seq.get(3), Some(&Value::from("cherry")));
    assert_eq!(seq.get(6), None);
    assert_eq!(seq.first(), Some(&Value::from("apple")));
    assert_eq!(seq.last(), Some(&Value::from("watermelon")));

    let empty = OrderedSequence::new();
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
}

// ===== TRAVERSAL =====

#[test]
fn test_iter_matches_to_vec() {
    let seq = fruits();
    let iterated: Vec<Value> = seq.iter().cloned().collect();
    assert_eq!(iterated, seq.to_vec());
}

#[test]
fn test_iter_is_restartable() {
    let seq = numbers();
    let first_pass: Vec<&Value> = seq.iter().collect();
    let second_pass: Vec<&Value> = seq.iter().collect();
    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_iter_is_lazy_and_exact_size() {
    let seq = numbers();
    let mut iter = seq.iter();
    assert_eq!(iter.len(), 5);

    assert_eq!(iter.next(), Some(&Value::Int(3)));
    assert_eq!(iter.len(), 4);

    let rest: Vec<&Value> = iter.by_ref().collect();
    assert_eq!(rest.len(), 4);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_for_loop_over_reference() {
    let seq = int_sequence(&[2, 1]);
    let mut sum = 0;
    for value in &seq {
        sum += value.as_int().unwrap();
    }
    assert_eq!(sum, 3);
}

#[test]
fn test_into_iter_yields_owned_values() {
    let seq = fruits();
    let expected = seq.to_vec();
    let owned: Vec<Value> = seq.into_iter().collect();
    assert_eq!(owned, expected);
}

#[test]
fn test_snapshot_is_independent_of_later_mutation() {
    let mut seq = numbers();
    let snapshot = seq.to_vec();

    seq.delete_all(&Value::Int(33));
    seq.insert(1).unwrap();

    assert_eq!(snapshot, ints(&[3, 7, 15, 33, 33]));
    assert_eq!(seq.to_vec(), ints(&[1, 3, 7, 15]));
}

#[test]
fn test_display_and_debug() {
    assert_eq!(numbers().to_string(), "[3, 7, 15, 33, 33]");
    assert_eq!(OrderedSequence::new().to_string(), "[]");
    assert_eq!(
        format!("{:?}", text_sequence(&["b", "a"])),
        r#"[Text("a"), Text("b")]"#
    );
}

#[test]
fn test_equality_is_elementwise() {
    assert_eq!(int_sequence(&[3, 1, 2]), int_sequence(&[1, 2, 3]));
    assert_ne!(int_sequence(&[1, 2]), int_sequence(&[1, 2, 2]));
    assert_ne!(int_sequence(&[1]), text_sequence(&["1"]));
}
