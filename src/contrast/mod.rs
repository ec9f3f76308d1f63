//! Scalar contrast formulas and a kind-based dispatcher.
//!
//! Each formula is a stateless pure function over already-extracted pixel
//! intensities. The [`contrast`] dispatcher adds a sample-length check in
//! front of the formulas so generic callers can iterate over kinds; callers
//! that already know the kind can invoke the formula directly and skip the
//! check.

use crate::util::math::{mean, sample_bounds};
use crate::util::{IqMetricsError, IqMetricsResult};

/// Selector for a scalar contrast formula.
///
/// `Ratio`, `Weber`, and `Difference` operate on exactly two intensities;
/// `Michelson` and `Rms` accept a sample of any non-zero length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contrast {
    /// `high / low`.
    Ratio,
    /// `|pixel - background| / background`.
    Weber,
    /// `(max - min) / (max + min)` over the sample.
    Michelson,
    /// Root-mean-square deviation from the sample mean.
    Rms,
    /// `|a - b|`.
    Difference,
}

impl Contrast {
    /// Sample length the dispatcher enforces, or `None` when any non-zero
    /// length is accepted.
    pub fn required_len(self) -> Option<usize> {
        match self {
            Contrast::Ratio | Contrast::Weber | Contrast::Difference => Some(2),
            Contrast::Michelson | Contrast::Rms => None,
        }
    }

    /// Stable lowercase name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Contrast::Ratio => "ratio",
            Contrast::Weber => "weber",
            Contrast::Michelson => "michelson",
            Contrast::Rms => "rms",
            Contrast::Difference => "difference",
        }
    }
}

/// Simple contrast ratio `high / low`.
pub fn ratio(high: f64, low: f64) -> IqMetricsResult<f64> {
    if low == 0.0 {
        return Err(IqMetricsError::ZeroDenominator { metric: "ratio" });
    }
    Ok(high / low)
}

/// Weber contrast `|pixel - background| / background`.
///
/// Not commutative: the second argument is the reference background the
/// deviation is measured against.
pub fn weber(pixel: f64, background: f64) -> IqMetricsResult<f64> {
    if background == 0.0 {
        return Err(IqMetricsError::ZeroDenominator { metric: "weber" });
    }
    Ok((pixel - background).abs() / background)
}

/// Absolute difference `|a - b|`. Commutative and total over all reals.
pub fn difference(a: f64, b: f64) -> f64 {
    (a - b).abs()
}

/// Michelson contrast `(max - min) / (max + min)` over the sample.
///
/// A constant sample yields 0.
pub fn michelson(sample: &[f64]) -> IqMetricsResult<f64> {
    if sample.is_empty() {
        return Err(IqMetricsError::EmptySample {
            metric: "michelson",
        });
    }
    let (min, max) = sample_bounds(sample);
    let denom = max + min;
    if denom == 0.0 {
        return Err(IqMetricsError::ZeroDenominator {
            metric: "michelson",
        });
    }
    Ok((max - min) / denom)
}

/// Root-mean-square contrast: the RMS deviation from the sample mean.
///
/// Defined for normalized intensities only; every sample value must lie in
/// the closed interval `[0, 1]` or the call fails.
pub fn rms(sample: &[f64]) -> IqMetricsResult<f64> {
    if sample.is_empty() {
        return Err(IqMetricsError::EmptySample { metric: "rms" });
    }
    for &value in sample {
        if !(0.0..=1.0).contains(&value) {
            return Err(IqMetricsError::ValueOutOfRange {
                metric: "rms",
                value,
            });
        }
    }
    let sample_mean = mean(sample);
    let variance = sample
        .iter()
        .map(|&v| (v - sample_mean) * (v - sample_mean))
        .sum::<f64>()
        / sample.len() as f64;
    Ok(variance.sqrt())
}

/// Evaluates the formula selected by `kind` on `sample`.
///
/// For two-argument kinds the sample must hold exactly two values, applied
/// in order (`sample[0]`, `sample[1]`); sample-based kinds receive the whole
/// slice. A length mismatch fails before the formula runs.
pub fn contrast(sample: &[f64], kind: Contrast) -> IqMetricsResult<f64> {
    if let Some(expected) = kind.required_len() {
        if sample.len() != expected {
            return Err(IqMetricsError::ArityMismatch {
                kind: kind.name(),
                expected,
                got: sample.len(),
            });
        }
    }
    match kind {
        Contrast::Ratio => ratio(sample[0], sample[1]),
        Contrast::Weber => weber(sample[0], sample[1]),
        Contrast::Difference => Ok(difference(sample[0], sample[1])),
        Contrast::Michelson => michelson(sample),
        Contrast::Rms => rms(sample),
    }
}
