//! Value kind taxonomy
//!
//! Every runtime value belongs to exactly one kind. Structural comparison
//! only ever proceeds between values of the same kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of runtime type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    /// Ordered, index-addressable sequence
    Array,
    /// Unordered collection of unique elements
    Set,
    /// Unordered association of unique keys to values
    Map,
    /// Field-bearing structured record
    Record,
    /// Deferred, replayable sequence
    Lazy,
}

impl ValueKind {
    /// Stable lowercase name, used in log fields and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Set => "set",
            ValueKind::Map => "map",
            ValueKind::Record => "record",
            ValueKind::Lazy => "lazy",
        }
    }

    /// Whether values of this kind are opaque scalars
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            ValueKind::Undefined
                | ValueKind::Null
                | ValueKind::Boolean
                | ValueKind::Number
                | ValueKind::String
        )
    }

    /// Whether values of this kind advertise an iteration capability
    pub fn is_iterable(&self) -> bool {
        matches!(
            self,
            ValueKind::String
                | ValueKind::Array
                | ValueKind::Set
                | ValueKind::Map
                | ValueKind::Lazy
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
