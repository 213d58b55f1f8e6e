/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to two decimal places, half away from zero.
///
/// This is the single rounding rule used everywhere in the pipeline and is
/// always applied before any integer coercion.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Rounds to two decimals, then truncates toward zero.
///
/// Used where a fractional mean of a count column is displayed as a whole
/// number: 1000.6 becomes 1000, never 1001.
pub fn whole(v: f64) -> i64 {
    round2(v) as i64
}
