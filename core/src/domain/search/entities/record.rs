use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::{Map, Value};

/// A fetched row together with the values derived from it
///
/// Fetched fields are kept as they came back from the database. Derived
/// values live beside them and shadow a fetched field of the same name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
    derived: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            derived: Map::new(),
        }
    }

    /// Look a value up by name, derived values first
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.derived.get(name).or_else(|| self.fields.get(name))
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn derived(&self) -> &Map<String, Value> {
        &self.derived
    }

    pub fn set_derived(&mut self, name: impl Into<String>, value: Value) {
        self.derived.insert(name.into(), value);
    }

    /// Flatten into one JSON object
    pub fn into_value(self) -> Value {
        let mut merged = self.fields;
        merged.extend(self.derived);
        Value::Object(merged)
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Record::new(fields),
            _ => Record::default(),
        }
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let shadowed = self
            .fields
            .keys()
            .filter(|key| self.derived.contains_key(*key))
            .count();
        let mut map =
            serializer.serialize_map(Some(self.fields.len() + self.derived.len() - shadowed))?;

        for (key, value) in &self.fields {
            if !self.derived.contains_key(key) {
                map.serialize_entry(key, value)?;
            }
        }
        for (key, value) in &self.derived {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

type DeriveFn = dyn Fn(&Record) -> Value + Send + Sync;

/// A named value computed from every fetched row
#[derive(Clone)]
pub struct ColumnDerivation {
    pub name: String,
    compute: Arc<DeriveFn>,
}

impl ColumnDerivation {
    pub fn new<F>(name: impl Into<String>, compute: F) -> Self
    where
        F: Fn(&Record) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            compute: Arc::new(compute),
        }
    }

    pub fn apply(&self, record: &mut Record) {
        let value = (self.compute)(record);
        record.set_derived(self.name.clone(), value);
    }
}

impl fmt::Debug for ColumnDerivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDerivation")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
