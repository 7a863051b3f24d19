//! Table records

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

static NULL: Value = Value::Null;

/// One row of table data: a mapping from field name to [`Value`].
///
/// Records are owned by whoever supplies the table data. The table only reads
/// them; a missing field behaves exactly like a field holding `Value::Null`.
///
/// ```
/// use calmtable::{Record, Value};
///
/// let record = Record::new().set("name", "Bob").set("age", 30);
/// assert_eq!(record.value("age"), &Value::Int(30));
/// assert!(record.value("email").is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Value of `field`, or `Value::Null` when the record lacks it.
    pub fn value(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&NULL)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_read_as_null() {
        let record = Record::new().set("name", "Ann");
        assert_eq!(record.get("age"), None);
        assert!(record.value("age").is_null());
        assert_eq!(record.value("name").display_text(), "Ann");
    }

    #[test]
    fn records_collect_from_pairs() {
        let record: Record = [("name", Value::from("Cid")), ("age", Value::from(40))]
            .into_iter()
            .collect();
        assert_eq!(record.len(), 2);
        assert!(record.contains("age"));
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut record = Record::new();
        assert!(record.is_empty());
        record.insert("age", 25);
        record.insert("age", 26);
        record.insert("name", "Ann");

        let mut fields = record
            .fields()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>();
        fields.sort();
        assert_eq!(fields, ["age=26", "name=Ann"]);
    }

    #[test]
    fn records_load_from_json_objects() {
        let records: Vec<Record> = serde_json::from_str(
            r#"[{"name": "Bob", "age": 30}, {"name": "Ann", "email": null}]"#,
        )
        .unwrap();
        assert_eq!(records[0].value("age"), &Value::Int(30));
        assert!(records[1].value("email").is_null());
        assert!(records[1].value("age").is_null());
    }
}
