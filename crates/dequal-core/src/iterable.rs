//! Iterable coercion and concatenation
//!
//! [`to_iterable_view`] normalises heterogeneous inputs into one iteration
//! protocol. The decision is made in two steps: a declared iteration
//! capability wins, otherwise records fall back to their field entries.

use std::rc::Rc;
use std::time::Instant;

use crate::errors::{DequalError, Result};
use crate::lazy::{LazySeq, ValueIter};
use crate::value::{Record, Value};
use crate::{log_op_end, log_op_error, log_op_start};

/// Uniform, re-traversable view over a value
#[derive(Debug, Clone)]
pub enum IterableView {
    /// `null` and `undefined`
    Empty,
    /// A value with its own iteration capability, passed through unchanged
    Sequence(Value),
    /// A record viewed as `[field, value]` pairs
    Entries(Rc<Record>),
}

impl IterableView {
    /// Start a traversal of the view
    ///
    /// Maps yield `[key, value]` arrays, strings yield one string per code
    /// point, lazy sequences are consumed (and their usage counter advanced).
    pub fn iter(&self) -> ValueIter {
        match self {
            IterableView::Empty => Box::new(std::iter::empty()),
            IterableView::Sequence(value) => sequence_iter(value),
            IterableView::Entries(record) => {
                let pairs: Vec<Value> = record
                    .entries()
                    .map(|(key, value)| Value::array([Value::string(key), value.clone()]))
                    .collect();
                Box::new(pairs.into_iter())
            }
        }
    }
}

fn sequence_iter(value: &Value) -> ValueIter {
    match value {
        Value::Array(items) => {
            let items = items.clone();
            Box::new((0..items.len()).map(move |idx| items[idx].clone()))
        }
        // Collections are immutable; snapshot the handles
        Value::Set(set) => {
            let items: Vec<Value> = set.iter().cloned().collect();
            Box::new(items.into_iter())
        }
        Value::Map(map) => {
            let pairs: Vec<Value> = map
                .iter()
                .map(|(k, v)| Value::array([k.clone(), v.clone()]))
                .collect();
            Box::new(pairs.into_iter())
        }
        Value::String(s) => {
            let chars: Vec<Value> = s.chars().map(|c| Value::string(c.to_string())).collect();
            Box::new(chars.into_iter())
        }
        Value::Lazy(seq) => seq.iter(),
        _ => Box::new(std::iter::empty()),
    }
}

/// Whether `x` is null/undefined or carries an iteration capability
pub fn is_seqable(x: &Value) -> bool {
    x.is_nullish() || x.kind().is_iterable()
}

/// Coerce a value into an [`IterableView`]
///
/// # Errors
///
/// * `NotIterable` - `x` is a number or boolean
pub fn to_iterable_view(x: &Value) -> Result<IterableView> {
    if x.is_nullish() {
        return Ok(IterableView::Empty);
    }
    if is_seqable(x) {
        return Ok(IterableView::Sequence(x.clone()));
    }
    if let Value::Record(record) = x {
        return Ok(IterableView::Entries(record.clone()));
    }
    tracing::debug!(value_kind = x.kind().as_str(), "value is not iterable");
    Err(DequalError::NotIterable {
        rendered: x.to_string(),
        kind: x.kind(),
    })
}

/// Concatenate collections into one lazy sequence
///
/// Every input is coerced up front, so an invalid input fails the call
/// itself and nothing is yielded, not even the elements of the inputs
/// before it. Each consumption of the result then traverses the inputs in
/// order.
///
/// # Example
///
/// ```
/// use dequal_core::{concat, Value};
///
/// let seq = concat([Value::array([1, 2]), Value::Null, Value::set([3])]).unwrap();
/// let items: Vec<f64> = seq.iter().filter_map(|v| v.as_f64()).collect();
/// assert_eq!(items, vec![1.0, 2.0, 3.0]);
/// ```
///
/// # Errors
///
/// * `NotIterable` - an input is a number or boolean
pub fn concat<I>(colls: I) -> Result<LazySeq>
where
    I: IntoIterator<Item = Value>,
{
    let colls: Vec<Value> = colls.into_iter().collect();
    let input_count = colls.len() as u64;
    log_op_start!("concat", input_count = input_count);
    let start = Instant::now();

    let views = colls
        .iter()
        .map(to_iterable_view)
        .collect::<Result<Vec<_>>>()
        .map_err(|e| {
            log_op_error!(
                "concat",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                input_count = input_count
            );
            e
        })?;

    let views = Rc::new(views);
    let seq = LazySeq::new(move || {
        let views = views.clone();
        Box::new((0..views.len()).flat_map(move |idx| views[idx].iter()))
    });

    log_op_end!(
        "concat",
        duration_ms = start.elapsed().as_millis() as u64,
        input_count = input_count
    );
    Ok(seq)
}
