//! Radially averaged 1D power spectra of 2D images.
//!
//! The profiler takes the unnormalized forward 2D DFT of an image, squares
//! the coefficient magnitudes, centers the zero frequency, and averages the
//! power over integer radial bins. Bin `i` holds the mean power of every
//! coefficient whose Euclidean distance from the spectrum center truncates
//! to `i`, so bin 0 carries the DC component and the bin index grows with
//! spatial frequency in cycles across the image.
//!
//! The center sits at `(n - 1) / 2` per axis after the shift places the DC
//! coefficient at index `n / 2` (floor). Bins at or beyond half the smaller
//! image dimension are only partially sampled and are cut from the output,
//! except that a non-empty image always yields at least bin 0.

use rustfft::{num_complex::Complex, FftPlanner};

use crate::trace::{trace_event, trace_span};
use crate::util::IqMetricsResult;
use crate::ImageView;

/// Computes the radially averaged 1D power spectrum of a row-major image.
///
/// Returns one non-negative mean-power value per radial frequency bin,
/// ordered by increasing radius starting at the DC bin. The output length is
/// `max(1, min(width, height) / 2)`.
///
/// Fails if the image is empty (zero width or height) or the buffer is
/// shorter than `width * height`; no other shape is rejected.
pub fn power_spectrum_1d(data: &[f64], width: usize, height: usize) -> IqMetricsResult<Vec<f64>> {
    let image = ImageView::from_slice(data, width, height)?;
    let _guard = trace_span!("power_spectrum_1d", width, height).entered();

    let power = power_spectrum_2d(image);
    let profile = radial_mean(&power, width, height);
    trace_event!("power_spectrum_1d", bins = profile.len());
    Ok(profile)
}

/// Squared-magnitude 2D DFT of the image, row-major, unshifted.
fn power_spectrum_2d(image: ImageView<'_, f64>) -> Vec<f64> {
    let width = image.width();
    let height = image.height();

    let mut planner = FftPlanner::<f64>::new();
    let row_fft = planner.plan_fft_forward(width);
    let col_fft = planner.plan_fft_forward(height);

    let mut buf: Vec<Complex<f64>> = Vec::with_capacity(width * height);
    for y in 0..height {
        let row = image.row(y).expect("row within bounds");
        buf.extend(row.iter().map(|&v| Complex::new(v, 0.0)));
    }

    let mut scratch = vec![Complex::new(0.0, 0.0); row_fft.get_inplace_scratch_len()];
    for row in buf.chunks_exact_mut(width) {
        row_fft.process_with_scratch(row, &mut scratch);
    }

    let mut column = vec![Complex::new(0.0, 0.0); height];
    let mut scratch = vec![Complex::new(0.0, 0.0); col_fft.get_inplace_scratch_len()];
    for x in 0..width {
        for y in 0..height {
            column[y] = buf[y * width + x];
        }
        col_fft.process_with_scratch(&mut column, &mut scratch);
        for y in 0..height {
            buf[y * width + x] = column[y];
        }
    }

    buf.iter().map(|c| c.norm_sqr()).collect()
}

/// Mean power per integer radial bin of an unshifted 2D power spectrum.
///
/// The shift to centered coordinates is folded into the index arithmetic:
/// unshifted index `k` lands at `(k + n / 2) % n`, and distances are taken
/// from the geometric center `(n - 1) / 2` of each axis. Bin indices are the
/// truncated Euclidean distances, so every bin below half the smaller
/// dimension is fully sampled and present in the output.
fn radial_mean(power: &[f64], width: usize, height: usize) -> Vec<f64> {
    let cx = (width as f64 - 1.0) / 2.0;
    let cy = (height as f64 - 1.0) / 2.0;
    let shift_x = width / 2;
    let shift_y = height / 2;

    let mut sums: Vec<f64> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    for y in 0..height {
        let dy = ((y + shift_y) % height) as f64 - cy;
        for x in 0..width {
            let dx = ((x + shift_x) % width) as f64 - cx;
            let bin = dx.hypot(dy) as usize;
            if bin >= sums.len() {
                sums.resize(bin + 1, 0.0);
                counts.resize(bin + 1, 0);
            }
            sums[bin] += power[y * width + x];
            counts[bin] += 1;
        }
    }

    let cutoff = (width.min(height) / 2).max(1).min(sums.len());
    sums.iter()
        .zip(counts.iter())
        .take(cutoff)
        .map(|(&sum, &count)| sum / count as f64)
        .collect()
}
