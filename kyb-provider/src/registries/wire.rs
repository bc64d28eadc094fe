//! Registry wire format
//!
//! Both registries answer with the same envelope:
//!
//! ```json
//! { "status": 200, "message": "optional text", "data": [ { ... }, ... ] }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::normalize_record;
use crate::types::LookupPayload;

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub status: u16,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "result")]
    pub data: Option<Value>,
}

impl Envelope {
    pub(crate) fn into_payload(self) -> LookupPayload {
        let records = match self.data {
            Some(Value::Array(items)) => items.into_iter().map(normalize_record).collect(),
            // A single object is treated as a one-element list.
            Some(value @ Value::Object(_)) => vec![normalize_record(value)],
            _ => Vec::new(),
        };
        LookupPayload::new(self.status, self.message, records)
    }
}

/// Company registry request body.
#[derive(Debug, Serialize)]
pub(crate) struct CompanyRequest<'a> {
    pub name: &'a str,
    pub id: &'a str,
}

/// Brand registry request body.
#[derive(Debug, Serialize)]
pub(crate) struct BrandRequest<'a> {
    pub name: &'a str,
}
