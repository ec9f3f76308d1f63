//! Numeric helpers shared by the metric formulas.

/// Arithmetic mean of a non-empty slice.
///
/// Callers validate emptiness; a zero-length slice would divide by zero.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Smallest and largest value of a non-empty slice.
pub(crate) fn sample_bounds(values: &[f64]) -> (f64, f64) {
    values.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), &v| (lo.min(v), hi.max(v)),
    )
}
