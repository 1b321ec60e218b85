//! Structural comparison of two response bodies.
//!
//! Whole-record identity and field-level differencing are independent: the
//! `identical` flag always reflects the full records, while `differences`
//! only ever lists the requested fields.
mod extract;
mod output;


use serde::Serialize;
use serde_json::Value;

use crate::path;

pub use extract::{ProcessedResponse, process_response};
pub use output::comparison_lines;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Difference {
    pub field: String,
    /// Value in the first record; absent when the path is undefined there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value1: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value2: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub total_differences: usize,
    pub identical: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub identical: bool,
    pub differences: Vec<Difference>,
    pub summary: ComparisonSummary,
}

/// Compares `left` and `right`, listing differences for each of `fields` in
/// the order given.
#[must_use]
pub fn compare<S>(left: &Value, right: &Value, fields: &[S]) -> ComparisonResult
where
    S: AsRef<str>,
{
    let identical = path::is_equal(left, right);
    let differences: Vec<Difference> = fields
        .iter()
        .filter_map(|field| {
            let field = field.as_ref();
            let value1 = path::get(left, field);
            let value2 = path::get(right, field);
            if path::is_equal_opt(value1, value2) {
                return None;
            }
            Some(Difference {
                field: field.to_owned(),
                value1: value1.cloned(),
                value2: value2.cloned(),
            })
        })
        .collect();

    tracing::debug!(
        identical,
        fields = fields.len(),
        differences = differences.len(),
        "Compared responses"
    );

    ComparisonResult {
        identical,
        summary: ComparisonSummary {
            total_differences: differences.len(),
            identical,
        },
        differences,
    }
}
