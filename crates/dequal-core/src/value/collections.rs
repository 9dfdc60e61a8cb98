use super::Value;

/// Insertion-ordered set of unique values
///
/// Uniqueness and membership use SameValueZero: scalars by value (NaN
/// included), structured values by handle identity.
#[derive(Clone, Default)]
pub struct ValueSet {
    items: Vec<Value>,
}

impl ValueSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Insert a value, returning false if an identical one is present
    pub fn insert(&mut self, value: Value) -> bool {
        if self.has(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Direct membership test
    pub fn has(&self, value: &Value) -> bool {
        self.items.iter().any(|item| item.same_value_zero(value))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl FromIterator<Value> for ValueSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut set = ValueSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

/// Insertion-ordered association of unique keys to values
///
/// Keys are matched with SameValueZero, like [`ValueSet`] elements.
#[derive(Clone, Default)]
pub struct ValueMap {
    entries: Vec<(Value, Value)>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or overwrite; an existing key keeps its position.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Direct key lookup
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.position(key).map(|idx| &self.entries[idx].1)
    }

    pub fn has(&self, key: &Value) -> bool {
        self.position(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    fn position(&self, key: &Value) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k.same_value_zero(key))
    }
}

impl FromIterator<(Value, Value)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = ValueMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_dedupes_scalars() {
        let set: ValueSet = [
            Value::from(1),
            Value::from(1.0),
            Value::from(f64::NAN),
            Value::from(f64::NAN),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
        assert!(set.has(&Value::from(f64::NAN)));
    }

    #[test]
    fn test_set_keeps_distinct_structured_handles() {
        let set: ValueSet = [Value::array([1]), Value::array([1])].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(!set.has(&Value::array([1])));
    }

    #[test]
    fn test_map_overwrite_keeps_position() {
        let mut map = ValueMap::new();
        map.insert(Value::from("a"), Value::from(1));
        map.insert(Value::from("b"), Value::from(2));
        let previous = map.insert(Value::from("a"), Value::from(3));

        assert!(matches!(previous, Some(Value::Number(n)) if n == 1.0));
        let keys: Vec<_> = map.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.get(&Value::from("a")).and_then(Value::as_f64), Some(3.0));
    }

    #[test]
    fn test_map_missing_key() {
        let map: ValueMap = [(Value::from(1), Value::from(2))].into_iter().collect();
        assert!(map.get(&Value::from(2)).is_none());
        assert!(!map.has(&Value::from("1")));
    }
}
