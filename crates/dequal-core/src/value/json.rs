//! JSON interop
//!
//! JSON objects become plain records (in the key order serde_json yields),
//! arrays become ordered sequences. The reverse direction flattens sets to
//! arrays and maps to arrays of `[key, value]` pairs.

use serde_json::{Map as JsonMap, Number, Value as Json};

use super::Value;
use crate::errors::{DequalError, Result};

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::from(s),
            Json::Array(items) => Value::array(items.into_iter().map(Value::from)),
            Json::Object(fields) => {
                Value::record(fields.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}

impl Value {
    /// Render as JSON
    ///
    /// Lazy sequences are materialised by one traversal, which counts as a
    /// consumption. `Undefined` renders as `null`.
    ///
    /// # Errors
    ///
    /// * `Serialization` - a number is NaN or infinite
    pub fn to_json(&self) -> Result<Json> {
        match self {
            Value::Undefined | Value::Null => Ok(Json::Null),
            Value::Bool(b) => Ok(Json::Bool(*b)),
            Value::Number(n) => Number::from_f64(*n)
                .map(Json::Number)
                .ok_or_else(|| DequalError::Serialization {
                    message: format!("{} has no JSON representation", self),
                }),
            Value::String(s) => Ok(Json::String(s.to_string())),
            Value::Array(items) => items
                .iter()
                .map(Value::to_json)
                .collect::<Result<_>>()
                .map(Json::Array),
            Value::Set(set) => set
                .iter()
                .map(Value::to_json)
                .collect::<Result<_>>()
                .map(Json::Array),
            Value::Map(map) => map
                .iter()
                .map(|(k, v)| Ok(Json::Array(vec![k.to_json()?, v.to_json()?])))
                .collect::<Result<_>>()
                .map(Json::Array),
            Value::Record(record) => {
                let mut object = JsonMap::new();
                for (key, value) in record.entries() {
                    object.insert(key.to_string(), value.to_json()?);
                }
                Ok(Json::Object(object))
            }
            Value::Lazy(seq) => seq
                .iter()
                .map(|v| v.to_json())
                .collect::<Result<_>>()
                .map(Json::Array),
        }
    }
}
