mod common;

use common::{key_a1, nested_fixture};
use dequal_core::{all_equal, deep_equal, Record, Value};

// ===== ORDERED SEQUENCES =====

#[test]
fn test_array_order_matters() {
    assert!(deep_equal(&Value::array([1, 2, 3]), &Value::array([1, 2, 3])));
    assert!(!deep_equal(&Value::array([1, 2, 3]), &Value::array([3, 2, 1])));
}

#[test]
fn test_array_length_mismatch() {
    assert!(!deep_equal(&Value::array([1, 2]), &Value::array([1, 2, 3])));
    assert!(deep_equal(
        &Value::array(Vec::<Value>::new()),
        &Value::array(Vec::<Value>::new())
    ));
}

#[test]
fn test_nested_arrays_compare_recursively() {
    let a = Value::array([Value::array([1]), Value::array([2, 3])]);
    let b = Value::array([Value::array([1]), Value::array([2, 3])]);
    let c = Value::array([Value::array([1]), Value::array([2, 4])]);
    assert!(deep_equal(&a, &b));
    assert!(!deep_equal(&a, &c));
}

// ===== SETS =====

#[test]
fn test_set_order_insensitive() {
    assert!(deep_equal(&Value::set([1, 2, 3]), &Value::set([3, 2, 1])));
}

#[test]
fn test_set_cardinality_mismatch() {
    assert!(!deep_equal(&Value::set([1, 2]), &Value::set([1, 2, 3])));
}

#[test]
fn test_set_structured_elements_match_by_structure() {
    let a = Value::set([Value::array([1, 2]), Value::from("s")]);
    let b = Value::set([Value::from("s"), Value::array([1, 2])]);
    assert!(deep_equal(&a, &b));

    let c = Value::set([Value::from("s"), Value::array([2, 1])]);
    assert!(!deep_equal(&a, &c));
}

#[test]
fn test_set_scalar_membership_is_direct() {
    assert!(!deep_equal(&Value::set([1, 2]), &Value::set([1, 3])));
    assert!(!deep_equal(&Value::set(["1"]), &Value::set([1])));
}

// ===== MAPS =====

#[test]
fn test_map_structured_keys_match_by_structure() {
    let a = Value::map([(key_a1(), 2)]);
    let b = Value::map([(key_a1(), 2)]);
    assert!(deep_equal(&a, &b));
}

#[test]
fn test_map_value_mismatch() {
    let a = Value::map([(key_a1(), 2)]);
    let b = Value::map([(key_a1(), 3)]);
    assert!(!deep_equal(&a, &b));
}

#[test]
fn test_map_unmatched_structured_key() {
    let a = Value::map([(key_a1(), 2)]);
    let b = Value::map([(Value::record([("a", 2)]), 2)]);
    assert!(!deep_equal(&a, &b));
}

#[test]
fn test_map_order_insensitive() {
    let a = Value::map([("x", 1), ("y", 2)]);
    let b = Value::map([("y", 2), ("x", 1)]);
    assert!(deep_equal(&a, &b));
}

#[test]
fn test_map_cardinality_mismatch() {
    let a = Value::map([("x", 1)]);
    let b = Value::map([("x", 1), ("y", 2)]);
    assert!(!deep_equal(&a, &b));
}

// ===== RECORDS =====

#[test]
fn test_record_field_count_strictness() {
    let a = Value::record([("a", 1)]);
    let b = Value::record([("a", 1), ("b", 2)]);
    assert!(!deep_equal(&a, &b));
    assert!(!deep_equal(&b, &a));
}

#[test]
fn test_record_field_order_irrelevant() {
    let a = Value::record([("a", 1), ("b", 2)]);
    let b = Value::record([("b", 2), ("a", 1)]);
    assert!(deep_equal(&a, &b));
}

#[test]
fn test_record_undefined_field_is_still_a_field() {
    let a = Value::record([("a", Value::Undefined)]);
    let b = Value::record([("b", Value::Undefined)]);
    assert!(!deep_equal(&a, &b));
}

#[test]
fn test_classed_records() {
    let a = Value::from(Record::with_class("Point").field("x", 1).field("y", 2));
    let b = Value::from(Record::with_class("Point").field("y", 2).field("x", 1));
    assert!(deep_equal(&a, &b));
}

#[test]
fn test_nested_fixture_is_equal_to_fresh_copy() {
    assert!(deep_equal(&nested_fixture(), &nested_fixture()));
}

// ===== SCALARS =====

#[test]
fn test_scalars() {
    assert!(deep_equal(&Value::from("a"), &Value::from("a")));
    assert!(!deep_equal(&Value::from("a"), &Value::from("b")));
    assert!(deep_equal(&Value::from(0.0), &Value::from(-0.0)));
    assert!(!deep_equal(&Value::from(0), &Value::from(false)));
    assert!(!deep_equal(&Value::from(""), &Value::Null));
    assert!(!deep_equal(&Value::Undefined, &Value::from(1)));
}

#[test]
fn test_scalar_vs_structured() {
    assert!(!deep_equal(&Value::from("1"), &Value::array(["1"])));
    assert!(!deep_equal(&Value::Null, &Value::array(Vec::<Value>::new())));
}

// ===== ALL EQUAL =====

#[test]
fn test_all_equal() {
    assert!(all_equal(&[Value::from(1), Value::from(1), Value::from(1)]));
    assert!(!all_equal(&[Value::from(1), Value::from(1), Value::from(2)]));
}

#[test]
fn test_all_equal_vacuous() {
    assert!(all_equal(&[]));
    assert!(all_equal(&[Value::from(1)]));
    assert!(all_equal(&[Value::from(f64::NAN)]));
}

#[test]
fn test_all_equal_structural() {
    assert!(all_equal(&[key_a1(), key_a1(), key_a1()]));
    assert!(!all_equal(&[key_a1(), Value::record([("a", 2)]), key_a1()]));
}
