/// Divisor for whole-number percentiles.
const PERCENT_DIVISOR: u64 = 100;

/// Nearest-rank percentile over an ascending slice, without interpolation.
///
/// The index is `floor(percent * n / 100)`, clamped to the last element. At
/// small `n` this leans high: with one sample every percentile is that sample,
/// and with 20 samples p95 is already the maximum.
#[must_use]
pub fn nearest_rank(sorted: &[u64], percent: u64) -> Option<u64> {
    let last = sorted.len().checked_sub(1)?;
    let count = u64::try_from(sorted.len()).ok()?;
    let index = percent
        .saturating_mul(count)
        .checked_div(PERCENT_DIVISOR)
        .unwrap_or(0);
    let idx = usize::try_from(index).map_or(last, |value| value.min(last));
    sorted.get(idx).copied()
}
