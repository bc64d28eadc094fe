//! JSON → `RecordValue` normalization
//!
//! Registries return records with arbitrary string keys whose values may be
//! scalars, nested objects or nested lists. They are folded into the typed
//! [`RecordValue`] tree here, once, at the lookup boundary.

use serde_json::{Map, Value};

use crate::types::{Record, RecordValue};

/// Field name used when a `data` entry is not an object.
const BARE_VALUE_FIELD: &str = "value";

/// Normalize an arbitrary JSON value.
pub fn normalize_value(value: Value) -> RecordValue {
    match value {
        Value::Null => RecordValue::Scalar(String::new()),
        Value::Bool(b) => RecordValue::Scalar(b.to_string()),
        Value::Number(n) => RecordValue::Scalar(n.to_string()),
        Value::String(s) => RecordValue::Scalar(s),
        Value::Array(items) => RecordValue::List(items.into_iter().map(normalize_value).collect()),
        Value::Object(map) => RecordValue::Object(normalize_object(map)),
    }
}

/// Normalize a JSON object, keeping key order.
pub fn normalize_object(map: Map<String, Value>) -> Record {
    map.into_iter()
        .map(|(key, value)| (key, normalize_value(value)))
        .collect()
}

/// Normalize one entry of a registry's `data` list into a record.
pub fn normalize_record(value: Value) -> Record {
    match value {
        Value::Object(map) => normalize_object(map),
        other => Record::new().with(BARE_VALUE_FIELD, normalize_value(other)),
    }
}
