//! Request data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::vra::{null_tolerant_list, FieldOverride};

/// Input of the end-to-end submission flow
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentOptions {
    /// Catalog item name to request
    pub blueprint_name: String,
    /// Overrides merged into the request template, in order
    #[serde(default)]
    pub template_data: Vec<FieldOverride>,
}

impl DeploymentOptions {
    pub fn new(blueprint_name: impl Into<String>, template_data: Vec<FieldOverride>) -> Self {
        Self {
            blueprint_name: blueprint_name.into(),
            template_data,
        }
    }
}

/// Catalog request record as returned by the consumer API
///
/// Fields the client does not interpret are kept in `extra` so the record
/// can be written back out unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_item_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_completion: Option<RequestCompletion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_data: Option<RequestData>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Terminal outcome of a request
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestCompletion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_completion_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_details: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Key/value payload the request was submitted with
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RequestData {
    #[serde(default, deserialize_with = "null_tolerant_list")]
    pub entries: Vec<RequestEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Single request data entry
///
/// Values usually arrive wrapped as `{"type": "string", "value": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RequestEntry {
    pub key: String,
    #[serde(default)]
    pub value: Value,
}

impl RequestEntry {
    /// The comparable value: the inner `value` of a wrapped literal, else the raw value
    pub fn scalar(&self) -> &Value {
        match &self.value {
            Value::Object(wrapper) => wrapper.get("value").unwrap_or(&self.value),
            value => value,
        }
    }

    /// Exact match of the comparable value against its text form
    pub fn value_matches(&self, expected: &str) -> bool {
        match self.scalar() {
            Value::String(s) => s == expected,
            Value::Number(n) => n.to_string() == expected,
            Value::Bool(b) => b.to_string() == expected,
            _ => false,
        }
    }
}

impl RequestData {
    /// First entry with the given key
    pub fn entry(&self, key: &str) -> Option<&RequestEntry> {
        self.entries.iter().find(|e| e.key == key)
    }
}

impl SubmittedRequest {
    /// Request state, empty when absent
    pub fn state(&self) -> &str {
        self.state.as_deref().unwrap_or("")
    }

    /// Completion state, empty while the request is running
    pub fn completion_state(&self) -> &str {
        self.request_completion
            .as_ref()
            .and_then(|c| c.request_completion_state.as_deref())
            .unwrap_or("")
    }

    /// Catalog item the request was made against
    pub fn item_name(&self) -> &str {
        self.requested_item_name.as_deref().unwrap_or("")
    }

    /// Creation timestamp as sent by the server
    pub fn created_at(&self) -> &str {
        self.date_created.as_deref().unwrap_or("")
    }

    /// Look up a request data entry by key
    pub fn entry(&self, key: &str) -> Option<&RequestEntry> {
        self.request_data.as_ref().and_then(|d| d.entry(key))
    }

    /// True when any request data entry has this exact key and value
    pub fn has_field(&self, key: &str, value: &str) -> bool {
        self.request_data
            .as_ref()
            .map(|d| {
                d.entries
                    .iter()
                    .any(|e| e.key == key && e.value_matches(value))
            })
            .unwrap_or(false)
    }
}
