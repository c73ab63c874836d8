//! JSON serialization tests

use ordseq::{Mode, OrderedSequence};

use crate::helpers::*;

#[test]
fn test_integers_serialize_as_number_array() {
    let json = numbers().to_json_string().unwrap();
    assert_eq!(json, "[3,7,15,33,33]");
}

#[test]
fn test_strings_serialize_as_string_array() {
    let json = text_sequence(&["kiwi", "apple"]).to_json_string().unwrap();
    assert_eq!(json, r#"["apple","kiwi"]"#);
}

#[test]
fn test_deserialize_sorts_input() {
    let seq = OrderedSequence::from_json_str("[33, 7, 15, 3, 33]").unwrap();
    assert_eq!(seq, numbers());
    assert_eq!(seq.mode(), Mode::Integer);
}

#[test]
fn test_deserialize_empty_array() {
    let seq = OrderedSequence::from_json_str("[]").unwrap();
    assert!(seq.is_empty());
    assert_eq!(seq.mode(), Mode::Unset);
}

#[test]
fn test_deserialize_rejects_mixed_kinds() {
    let err = OrderedSequence::from_json_str(r#"[1, "two", 3]"#).unwrap_err();

    assert!(err.is_serialization_error());
    assert_eq!(err.module(), "serialize");
    assert!(err.to_string().contains("type mismatch"));
}

#[test]
fn test_deserialize_rejects_non_scalar_elements() {
    let err = OrderedSequence::from_json_str("[1.5, true]").unwrap_err();
    assert!(err.is_serialization_error());
    assert!(!err.is_type_mismatch());
}

#[test]
fn test_sequence_error_converts_to_crate_error() {
    let mut seq = numbers();
    let err: ordseq::Error = seq.insert("x").unwrap_err().into();

    assert!(err.is_type_mismatch());
    assert_eq!(err.module(), "sequence");

    let err: ordseq::Error = seq.at(99).unwrap_err().into();
    assert!(err.is_out_of_range());
}
