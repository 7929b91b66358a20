//! # Records — the shape shared by every backend
//!
//! A [`Record`] is a flat JSON object: field names mapped to primitive values
//! (strings, numbers, booleans, dates-as-strings). Both the remote backend and
//! the fallback collections exchange records, so callers never see which one
//! served them.
//!
//! Updates use **shallow merge** semantics: [`Record::merge`] overwrites the
//! fields present in the patch and leaves every other field untouched.
//!
//! Typed entities (see [`crate::models`]) convert to and from records through
//! serde with [`Record::from_entity`] and [`Record::to_entity`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StoreResult;

/// Field holding the record identifier.
pub const ID_FIELD: &str = "id";
/// Field holding the creation timestamp.
pub const CREATED_AT_FIELD: &str = "created_at";

/// A flat mapping of field names to JSON values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// The record identifier, if one has been assigned.
    pub fn id(&self) -> Option<&str> {
        self.get_str(ID_FIELD).filter(|id| !id.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Shallow merge: every field in `patch` replaces the field of the same
    /// name, everything else is retained.
    pub fn merge(&mut self, patch: &Record) {
        for (key, value) in &patch.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Whether the field named by the filter holds the filter's value.
    ///
    /// Numbers compare by their decimal rendering so `"1"` matches `1`.
    pub fn matches(&self, filter: &Filter) -> bool {
        match self.0.get(&filter.column) {
            Some(Value::String(s)) => *s == filter.value,
            Some(Value::Number(n)) => n.to_string() == filter.value,
            Some(Value::Bool(b)) => b.to_string() == filter.value,
            _ => false,
        }
    }

    /// Serialize a typed entity into a record.
    pub fn from_entity<E: Serialize>(entity: &E) -> StoreResult<Self> {
        Ok(serde_json::from_value(serde_json::to_value(entity)?)?)
    }

    /// Deserialize the record into a typed entity.
    pub fn to_entity<E: DeserializeOwned>(&self) -> StoreResult<E> {
        Ok(serde_json::from_value(Value::Object(self.0.clone()))?)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.0)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Equality filter on a single column, e.g. tasks by `project_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let mut record = Record::new()
            .with("id", "1")
            .with("name", "Rahul Sharma")
            .with("paid_amount", 35000)
            .with("tags", json!(["a", "b"]));
        let before = record.clone();

        record.merge(&Record::new().with("paid_amount", 45000));

        assert_eq!(record.get("paid_amount"), Some(&json!(45000)));
        assert_eq!(record.get("name"), before.get("name"));
        assert_eq!(record.get("tags"), before.get("tags"));
        assert_eq!(record.len(), before.len());
    }

    #[test]
    fn test_filter_matches_strings_and_numbers() {
        let record = Record::new().with("project_id", "1").with("progress", 65);

        assert!(record.matches(&Filter::eq("project_id", "1")));
        assert!(!record.matches(&Filter::eq("project_id", "2")));
        assert!(record.matches(&Filter::eq("progress", "65")));
        assert!(!record.matches(&Filter::eq("missing", "1")));
    }

    #[test]
    fn test_empty_id_is_not_an_id() {
        assert_eq!(Record::new().with("id", "").id(), None);
        assert_eq!(Record::new().with("id", "c42").id(), Some("c42"));
        assert_eq!(Record::new().id(), None);
    }
}
