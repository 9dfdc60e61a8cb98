use std::fmt;
use std::rc::Rc;

use super::Value;

/// Field-bearing structured record
///
/// Fields keep insertion order, which is also their enumeration order.
/// The optional class tag names the record's constructor; records are only
/// compared field-by-field when their tags match, and `None` is the plain
/// record.
#[derive(Clone, Default)]
pub struct Record {
    class: Option<Rc<str>>,
    fields: Vec<(Rc<str>, Value)>,
}

impl Record {
    /// Create an empty plain record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record tagged with a class name
    pub fn with_class(class: impl AsRef<str>) -> Self {
        Self {
            class: Some(Rc::from(class.as_ref())),
            fields: Vec::new(),
        }
    }

    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut record = Self::new();
        for (key, value) in fields {
            record.insert(key, value);
        }
        record
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn field(mut self, key: impl AsRef<str>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a field; an existing field keeps its position.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<Value>) -> Option<Value> {
        let key = key.as_ref();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| k.as_ref() == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((Rc::from(key), value));
                None
            }
        }
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|(k, _)| k.as_ref())
    }

    /// Fields in enumeration order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_ref(), v))
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(class) = &self.class {
            f.write_str(class)?;
            f.write_str(" ")?;
        }
        f.debug_map().entries(self.entries()).finish()
    }
}
