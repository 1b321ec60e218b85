use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::path;

/// A response snapshot with values pulled out by a name-to-path schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedResponse {
    pub timestamp: String,
    pub original_data: Value,
    pub extracted_data: Map<String, Value>,
    pub validation_results: Map<String, Value>,
}

/// Extracts every `name -> path` entry of `schema` from `response`.
///
/// Paths that do not resolve are recorded as `null`.
#[must_use]
pub fn process_response(response: &Value, schema: &BTreeMap<String, String>) -> ProcessedResponse {
    let extracted_data = schema
        .iter()
        .map(|(name, field_path)| {
            let value = path::get(response, field_path)
                .cloned()
                .unwrap_or(Value::Null);
            (name.clone(), value)
        })
        .collect();

    ProcessedResponse {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        original_data: path::clone_deep(response),
        extracted_data,
        validation_results: Map::new(),
    }
}
