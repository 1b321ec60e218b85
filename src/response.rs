//! Response records exchanged with the request-execution collaborator.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of an executed request: raw text, or JSON already parsed by the
/// caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Text(String),
    Json(Value),
}

impl Default for ResponseBody {
    fn default() -> Self {
        ResponseBody::Json(Value::Null)
    }
}

impl ResponseBody {
    /// Structured view of the body. Text bodies that are not valid JSON have
    /// no value.
    #[must_use]
    pub fn to_value(&self) -> Option<Value> {
        match self {
            ResponseBody::Text(text) => crate::support::parse_json_response(text),
            ResponseBody::Json(value) => Some(value.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    pub status: u16,
    #[serde(default)]
    pub body: ResponseBody,
    /// Observed latency in milliseconds, when the executor measured one.
    #[serde(default)]
    pub response_time: Option<u64>,
}

impl ResponseRecord {
    #[must_use]
    pub const fn new(status: u16, body: ResponseBody, response_time: Option<u64>) -> Self {
        Self {
            status,
            body,
            response_time,
        }
    }
}
