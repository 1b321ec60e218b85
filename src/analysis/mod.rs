//! Latency summaries over observed request timings.
mod output;
mod percentiles;


use serde::Serialize;
use serde_json::Value;

use crate::response::ResponseRecord;

pub use output::summary_lines;
pub use percentiles::nearest_rank;

/// Percentile reported as `p95`.
const PERCENTILE_P95: u64 = 95;
/// Field holding the latency in JSON response records.
const RESPONSE_TIME_FIELD: &str = "responseTime";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub min: u64,
    pub max: u64,
    pub average: f64,
    pub median: f64,
    pub p95: u64,
    pub total_requests: usize,
}

/// Summarizes the latencies of `records`.
///
/// Records without a latency are skipped. Returns `None` when no record
/// carries one.
#[must_use]
pub fn analyze(records: &[ResponseRecord]) -> Option<PerformanceSummary> {
    let latencies: Vec<u64> = records
        .iter()
        .filter_map(|record| record.response_time)
        .collect();
    analyze_latencies(&latencies)
}

/// Summarizes JSON response records, reading `responseTime` from each.
///
/// Missing, negative, fractional, or non-numeric latencies are skipped.
#[must_use]
pub fn analyze_values(records: &[Value]) -> Option<PerformanceSummary> {
    let latencies: Vec<u64> = records.iter().filter_map(latency_of).collect();
    analyze_latencies(&latencies)
}

/// Summarizes raw latency samples in milliseconds. Returns `None` for an
/// empty input.
#[must_use]
pub fn analyze_latencies(latencies: &[u64]) -> Option<PerformanceSummary> {
    let mut sorted = latencies.to_vec();
    sorted.sort_unstable();

    let min = *sorted.first()?;
    let max = *sorted.last()?;
    let count = sorted.len();
    let sum: u128 = sorted.iter().map(|value| u128::from(*value)).sum();
    let average = sum as f64 / count as f64;

    let mid = count / 2;
    let median = if count % 2 == 0 {
        let lower = *sorted.get(mid.checked_sub(1)?)?;
        let upper = *sorted.get(mid)?;
        (lower as f64 + upper as f64) / 2.0
    } else {
        *sorted.get(mid)? as f64
    };

    Some(PerformanceSummary {
        min,
        max,
        average,
        median,
        p95: nearest_rank(&sorted, PERCENTILE_P95)?,
        total_requests: count,
    })
}

/// Non-negative numeric `responseTime`, rounded to whole milliseconds.
fn latency_of(record: &Value) -> Option<u64> {
    let value = record.get(RESPONSE_TIME_FIELD)?;
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|ms| ms.is_finite() && *ms >= 0.0)
            .map(|ms| ms.round() as u64)
    })
}
