//! Image-quality metrics for judging feature visibility in acquired images.
//!
//! Two independent components are provided: scalar contrast formulas with a
//! kind-based dispatcher ([`contrast`]), and a radially averaged 1D power
//! spectrum of a 2D image ([`spectrum`]). Both are pure, synchronous, and
//! stateless; callers supply already-extracted pixel samples or full images
//! and receive scalars or arrays back. Optional instrumentation is available
//! via the `tracing` feature.

pub mod contrast;
pub mod image;
pub mod spectrum;
pub mod util;

pub(crate) mod trace;

pub use contrast::{contrast, difference, michelson, ratio, rms, weber, Contrast};
pub use image::ImageView;
pub use spectrum::power_spectrum_1d;
pub use util::{IqMetricsError, IqMetricsResult};
