//! Public types shared by every registry client.

use serde::{Deserialize, Serialize};

// ============ Queries ============

/// A lookup request sent to a registry.
///
/// The company registry uses both fields (`id` is the RFC tax id); the brand
/// registry only sends `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryQuery {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RegistryQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
        }
    }

    pub fn by_name_and_id(name: impl Into<String>, id: Option<String>) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    /// A query with a blank name is never sent.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

// ============ Payload ============

/// Application status meaning "data present".
pub const STATUS_OK: u16 = 200;
/// Application status meaning "no match", accompanied by a human readable message.
pub const STATUS_NO_MATCH: u16 = 204;

/// A registry answer, normalized.
///
/// `status` is the registry's own application-level code, carried verbatim.
/// Interpreting it is left to whoever renders the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupPayload {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub records: Vec<Record>,
}

impl LookupPayload {
    pub fn new(status: u16, message: Option<String>, records: Vec<Record>) -> Self {
        Self {
            status,
            message,
            records,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    pub fn is_no_match(&self) -> bool {
        self.status == STATUS_NO_MATCH
    }
}

// ============ Records ============

/// One field value of a record.
///
/// Registry records are heterogeneous: a field may hold a plain value, a nested
/// object or a nested list. Everything is normalized into this shape at the
/// lookup boundary so nothing downstream branches on JSON types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum RecordValue {
    Scalar(String),
    Object(Record),
    List(Vec<RecordValue>),
}

impl RecordValue {
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[RecordValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

/// An ordered set of named fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, RecordValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: RecordValue) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: RecordValue) {
        self.fields.push((key.into(), value));
    }

    pub fn get(&self, key: &str) -> Option<&RecordValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// First nested list found under any of `keys`.
    pub fn list_any(&self, keys: &[&str]) -> Option<&[RecordValue]> {
        keys.iter()
            .find_map(|key| self.get(key).and_then(RecordValue::as_list))
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &RecordValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, RecordValue)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, RecordValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

// ============ Configuration ============

/// Which registry a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryKind {
    Company,
    Brand,
}

impl RegistryKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Brand => "brand",
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Connection settings for one registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Endpoint the query is POSTed to.
    pub base_url: String,
    /// Sent as `x-api-key` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Transport-level timeout for a single request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl RegistryConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_preserves_insertion_order() {
        let record = Record::new()
            .with("b", RecordValue::scalar("2"))
            .with("a", RecordValue::scalar("1"));
        let keys: Vec<&str> = record.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn list_any_tries_keys_in_order() {
        let record = Record::new()
            .with("name", RecordValue::scalar("Acme"))
            .with(
                "productsAndServices",
                RecordValue::List(vec![RecordValue::scalar("x")]),
            );
        let list = record.list_any(&["products_and_services", "productsAndServices"]);
        assert_eq!(list.map(<[RecordValue]>::len), Some(1));
        assert!(record.list_any(&["name"]).is_none());
    }

    #[test]
    fn blank_query_detected() {
        assert!(RegistryQuery::by_name("   ").is_blank());
        assert!(!RegistryQuery::by_name("Acme").is_blank());
    }

    #[test]
    fn brand_query_omits_missing_id() {
        let json = serde_json::to_string(&RegistryQuery::by_name("Acme")).unwrap_or_default();
        assert_eq!(json, r#"{"name":"Acme"}"#);
    }
}
