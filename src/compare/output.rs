use serde_json::Value;

use super::ComparisonResult;

const UNDEFINED_LABEL: &str = "undefined";

#[must_use]
pub fn comparison_lines(result: &ComparisonResult) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Identical: {}",
            if result.identical { "yes" } else { "no" }
        ),
        format!("Differences: {}", result.summary.total_differences),
    ];
    lines.extend(result.differences.iter().map(|difference| {
        format!(
            "  {}: {} -> {}",
            difference.field,
            render(difference.value1.as_ref()),
            render(difference.value2.as_ref())
        )
    }));
    lines
}

fn render(value: Option<&Value>) -> String {
    value.map_or_else(|| UNDEFINED_LABEL.to_owned(), Value::to_string)
}
