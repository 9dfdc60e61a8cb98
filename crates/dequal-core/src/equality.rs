//! Structural equality engine
//!
//! [`deep_equal`] decides whether two values are structurally equivalent:
//!
//! 1. identical references and equal primitives are equal;
//! 2. values of different kinds are unequal;
//! 3. arrays compare element-wise by position;
//! 4. sets compare by cardinality and membership up to structural
//!    equivalence of structured elements, each element of `b` matching at
//!    most one element of `a`;
//! 5. maps compare by cardinality and per-key values, with structured keys
//!    paired one-to-one by structure and scalar keys required on both sides;
//! 6. records compare by class tag, exact field-name set and per-field values.
//!
//! Comparisons never fail. There is no cycle detection: comparing cyclic
//! structures recurses without bound.

use crate::value::{Record, Value, ValueMap, ValueSet};

/// Deep structural equality
///
/// # Example
///
/// ```
/// use dequal_core::{deep_equal, Value};
///
/// let a = Value::set([1, 2, 3]);
/// let b = Value::set([3, 2, 1]);
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&Value::array([1, 2, 3]), &Value::array([3, 2, 1])));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    if a.strict_equals(b) {
        return true;
    }
    match (a, b) {
        (Value::Array(xs), Value::Array(ys)) => arrays_equal(xs, ys),
        (Value::Set(xs), Value::Set(ys)) => sets_equal(xs, ys),
        (Value::Map(xs), Value::Map(ys)) => maps_equal(xs, ys),
        (Value::Record(xs), Value::Record(ys)) => records_equal(xs, ys),
        (Value::Lazy(xs), Value::Lazy(ys)) => {
            xs.same_producer(ys) && xs.usages() == ys.usages()
        }
        // Scalars only match via strict equality; mixed kinds never match
        _ => false,
    }
}

/// True iff every adjacent pair is [`deep_equal`]
///
/// Vacuously true for zero or one value. Stops at the first unequal pair.
pub fn all_equal(values: &[Value]) -> bool {
    values.windows(2).all(|pair| deep_equal(&pair[0], &pair[1]))
}

/// First candidate that is [`deep_equal`] to `target`
pub fn find_key<'a, I>(candidates: I, target: &Value) -> Option<&'a Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    candidates.into_iter().find(|key| deep_equal(key, target))
}

fn arrays_equal(xs: &[Value], ys: &[Value]) -> bool {
    xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
}

fn sets_equal(xs: &ValueSet, ys: &ValueSet) -> bool {
    if xs.len() != ys.len() {
        return false;
    }
    let mut claimed = vec![false; ys.len()];
    xs.iter().all(|elt| {
        if elt.is_object() {
            claim_match(ys.iter(), elt, &mut claimed).is_some()
        } else {
            ys.has(elt)
        }
    })
}

fn maps_equal(xs: &ValueMap, ys: &ValueMap) -> bool {
    if xs.len() != ys.len() {
        return false;
    }
    let mut claimed = vec![false; ys.len()];
    xs.iter().all(|(key, value)| {
        let probe = if key.is_object() {
            match claim_match(ys.keys(), key, &mut claimed) {
                Some(found) => found,
                None => return false,
            }
        } else {
            key
        };
        match ys.get(probe) {
            Some(other) => deep_equal(value, other),
            None => false,
        }
    })
}

/// First unclaimed candidate that is [`deep_equal`] to `target`
///
/// The match is marked in `claimed` (indexed like `candidates`), so each
/// candidate pairs with at most one target.
fn claim_match<'a, I>(candidates: I, target: &Value, claimed: &mut [bool]) -> Option<&'a Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let (idx, found) = candidates
        .into_iter()
        .enumerate()
        .find(|(idx, candidate)| !claimed[*idx] && deep_equal(candidate, target))?;
    claimed[idx] = true;
    Some(found)
}

fn records_equal(xs: &Record, ys: &Record) -> bool {
    if xs.class() != ys.class() {
        return false;
    }
    let all_fields_match = xs.entries().all(|(key, value)| match ys.get(key) {
        Some(other) => deep_equal(value, other),
        None => false,
    });
    all_fields_match && xs.len() == ys.len()
}
