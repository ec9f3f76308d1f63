//! Error types for iqmetrics.

use thiserror::Error;

/// Result alias for iqmetrics operations.
pub type IqMetricsResult<T> = std::result::Result<T, IqMetricsError>;

/// Errors raised when a metric precondition is violated.
///
/// Every operation in this crate either returns a complete result or fails
/// with one of these variants before producing any output. Nothing is
/// clamped, retried, or silently defaulted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IqMetricsError {
    /// A formula's denominator evaluated to zero.
    #[error("{metric}: denominator is zero")]
    ZeroDenominator {
        /// Name of the formula that was evaluated.
        metric: &'static str,
    },
    /// A sample value lies outside the domain required by the formula.
    #[error("{metric}: sample value {value} outside [0, 1]")]
    ValueOutOfRange {
        /// Name of the formula that was evaluated.
        metric: &'static str,
        /// The offending sample value.
        value: f64,
    },
    /// A sample-based formula received an empty sample.
    #[error("{metric}: sample is empty")]
    EmptySample {
        /// Name of the formula that was evaluated.
        metric: &'static str,
    },
    /// A dispatched sample does not match the arity of the requested kind.
    #[error("contrast kind {kind} expects a sample of length {expected}, got {got}")]
    ArityMismatch {
        /// Lowercase name of the contrast kind.
        kind: &'static str,
        /// Required sample length for the kind.
        expected: usize,
        /// Actual sample length.
        got: usize,
    },
    /// An image has zero width or height.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions {
        /// Image width in pixels.
        width: usize,
        /// Image height in pixels.
        height: usize,
    },
    /// A row stride is smaller than the image width.
    #[error("stride {stride} is smaller than width {width}")]
    InvalidStride {
        /// Image width in pixels.
        width: usize,
        /// Stride in elements between row starts.
        stride: usize,
    },
    /// The backing buffer is too small for the requested view.
    #[error("buffer holds {got} elements, view needs {needed}")]
    BufferTooSmall {
        /// Minimum number of elements the view requires.
        needed: usize,
        /// Number of elements in the buffer.
        got: usize,
    },
}
