//! Tests for location string decomposition.

use tote_labels_core::{SLOT_COUNT, parse_location};

fn slots(values: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = values.iter().map(|s| s.to_string()).collect();
    out.resize(SLOT_COUNT, String::new());
    out
}

#[test]
fn underscores_and_spaces_both_delimit() {
    assert_eq!(parse_location(Some("A_B C")), *slots(&["A", "B", "C"]));
}

#[test]
fn empty_and_missing_inputs_yield_empty_slots() {
    assert_eq!(parse_location(Some("")), *slots(&[]));
    assert_eq!(parse_location(None), *slots(&[]));
    assert_eq!(parse_location(Some("   ")), *slots(&[]));
}

#[test]
fn always_exactly_seven_slots() {
    for input in ["", "A", "A_B", "1_2_3_4_5_6_7_8_9_10", "x y z w v u t s"] {
        assert_eq!(
            parse_location(Some(input)).len(),
            SLOT_COUNT,
            "input {input:?} must fill exactly {SLOT_COUNT} slots"
        );
    }
}

#[test]
fn tokens_beyond_the_last_slot_are_dropped() {
    assert_eq!(
        parse_location(Some("1_2_3_4_5_6_7_8_9")),
        *slots(&["1", "2", "3", "4", "5", "6", "7"])
    );
}

#[test]
fn delimiter_runs_collapse() {
    assert_eq!(
        parse_location(Some("A__B   C_ D")),
        *slots(&["A", "B", "C", "D"])
    );
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse_location(Some("  A12 B3  ")), *slots(&["A12", "B3"]));
}

#[test]
fn tokens_keep_non_delimiter_punctuation() {
    assert_eq!(
        parse_location(Some("A-1_B/2")),
        *slots(&["A-1", "B/2"])
    );
}

#[test]
fn reparse_of_a_full_result_is_identity() {
    let first = parse_location(Some("ZN1 A_07_3_B 12 X"));
    assert!(first.iter().all(|s| !s.is_empty()), "all seven slots filled");
    let rejoined = first.join("_");
    assert_eq!(parse_location(Some(rejoined.as_str())), first);
}
