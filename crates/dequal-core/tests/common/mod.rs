use dequal_core::{lazy, LazySeq, Record, Value};
use std::cell::Cell;
use std::rc::Rc;

/// Record `{a: 1}` as a fresh handle on every call
#[allow(dead_code)]
pub fn key_a1() -> Value {
    Value::record([("a", 1)])
}

/// Nested record with every structured kind inside it
#[allow(dead_code)]
pub fn nested_fixture() -> Value {
    Value::from(
        Record::new()
            .field("list", Value::array([1, 2, 3]))
            .field("tags", Value::set(["x", "y"]))
            .field("lookup", Value::map([(key_a1(), Value::from("found"))]))
            .field("inner", Value::record([("deep", Value::array([Value::Null]))])),
    )
}

/// Lazy sequence over `0..n` that counts producer invocations
#[allow(dead_code)]
pub fn counting_range(n: i32, calls: Rc<Cell<usize>>) -> LazySeq {
    lazy(move || {
        calls.set(calls.get() + 1);
        Box::new((0..n).map(Value::from))
    })
}

/// Numbers of a traversal, skipping anything else
#[allow(dead_code)]
pub fn numbers(iter: impl Iterator<Item = Value>) -> Vec<f64> {
    iter.filter_map(|v| v.as_f64()).collect()
}
