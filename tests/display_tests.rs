//! Integration tests for the dump format and the Display implementations.
//!
//! Both containers must render their live elements separated by exactly two
//! spaces, with no trailing separator and no output at all when empty.

#![cfg(all(feature = "ordered-set", feature = "sequence"))]

use dense_collections::dense::{BoundedOrderedSet, CursorSequence};
use rstest::rstest;
use std::fmt::Write as _;

// =============================================================================
// BoundedOrderedSet Display Tests
// =============================================================================

#[rstest]
fn test_set_empty_display() {
    let set = BoundedOrderedSet::new();
    assert_eq!(format!("{set}"), "");
}

#[rstest]
fn test_set_single_display() {
    let set: BoundedOrderedSet = [42].into_iter().collect();
    assert_eq!(format!("{set}"), "42");
}

#[rstest]
fn test_set_display_after_reset_is_empty() {
    let mut set: BoundedOrderedSet = [1, 2, 3].into_iter().collect();
    set.reset();
    assert_eq!(set.to_string(), "");
}

#[rstest]
fn test_set_dump_appends_to_existing_text() {
    let set: BoundedOrderedSet = [1, 2].into_iter().collect();
    let mut out = String::from("set: ");
    set.dump(&mut out).unwrap();
    write!(out, ";").unwrap();
    assert_eq!(out, "set: 1  2;");
}

// =============================================================================
// CursorSequence Display Tests
// =============================================================================

#[rstest]
fn test_sequence_empty_display() {
    let sequence: CursorSequence<i32> = CursorSequence::new();
    assert_eq!(format!("{sequence}"), "");
}

#[rstest]
fn test_sequence_display_ignores_cursor() {
    let mut sequence: CursorSequence<&str> = ["x", "y", "z"].into_iter().collect();
    let before = sequence.to_string();
    sequence.start();
    sequence.advance().unwrap();
    assert_eq!(sequence.to_string(), before);
    assert_eq!(before, "x  y  z");
}

#[rstest]
fn test_sequence_dump_to_io_matches_display() {
    let sequence: CursorSequence<f64> = [1.5, -2.0].into_iter().collect();
    let mut bytes = Vec::new();
    sequence.dump_to(&mut bytes).unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), sequence.to_string());
    assert_eq!(sequence.to_string(), "1.5  -2");
}
