use super::PerformanceSummary;

/// Human-readable summary, one metric per line.
#[must_use]
pub fn summary_lines(summary: &PerformanceSummary) -> Vec<String> {
    vec![
        format!("Total Requests: {}", summary.total_requests),
        format!("Min/Max Latency: {}ms / {}ms", summary.min, summary.max),
        format!("Avg Latency: {:.2}ms", summary.average),
        format!("Median Latency: {:.2}ms", summary.median),
        format!("P95 Latency: {}ms", summary.p95),
    ]
}
