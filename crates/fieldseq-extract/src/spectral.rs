//! Frequency axes and power spectra for series-backed derivations.
//!
//! The discrete Fourier transform itself is supplied by `rustfft`; this
//! module adapts it to the split real/imaginary in-place contract the
//! extraction layer consumes, and derives the centered frequency axis that
//! pairs with the shifted spectrum.

use fieldseq_core::{ExtractError, PointSeries, Result, Value};
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// In-place discrete Fourier transform over split real/imaginary arrays.
///
/// Both slices must have the same length. On return they hold the real and
/// imaginary components of the forward DFT in standard order: the
/// zero-frequency term at index 0, positive frequencies ascending, then
/// negative frequencies. Any length is accepted (powers of two are cheapest
/// to plan); lengths below 2 are left unchanged, their transform being the
/// identity.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn transform(real: &mut [f64], imag: &mut [f64]) {
    assert_eq!(real.len(), imag.len(), "split transform buffers must match");
    let len = real.len();
    if len < 2 {
        return;
    }

    let mut buffer: Vec<Complex<f64>> = real
        .iter()
        .zip(imag.iter())
        .map(|(&re, &im)| Complex::new(re, im))
        .collect();
    FftPlanner::new().plan_fft_forward(len).process(&mut buffer);

    for (slot, value) in real.iter_mut().zip(buffer.iter()) {
        *slot = value.re;
    }
    for (slot, value) in imag.iter_mut().zip(buffer.iter()) {
        *slot = value.im;
    }
}

/// Centered frequency axis for a uniformly-sampled series.
///
/// Spacing is taken from the first interval, `Δt = t[1] - t[0]`, and the
/// bin width is `1 / (Δt · count · 2)`. Element `i` holds
/// `(i - count/2) · df`: index 0 is the most negative frequency and the
/// zero term sits at index `count / 2`, matching the shifted layout of
/// [`power_spectrum`]. Units follow the input timestamps (per-millisecond
/// for epoch-millisecond points).
///
/// # Errors
///
/// Returns [`ExtractError::InsufficientPoints`] for series with fewer than
/// 2 points and [`ExtractError::InvalidSpacing`] when the first interval is
/// zero or negative.
pub fn frequency_axis(series: &PointSeries) -> Result<Vec<f64>> {
    let count = series.len();
    if count < 2 {
        return Err(ExtractError::InsufficientPoints {
            required: 2,
            actual: count,
        });
    }

    let points = series.points();
    let delta_ms = (points[1].time_ms - points[0].time_ms) as f64;
    if delta_ms <= 0.0 {
        return Err(ExtractError::InvalidSpacing { delta_ms });
    }

    let df = 1.0 / (delta_ms * count as f64 * 2.0);
    let half = (count / 2) as f64;
    Ok((0..count).map(|i| (i as f64 - half) * df).collect())
}

/// Power spectrum of a series' sample values, in centered order.
///
/// The real input is each point's numeric value (null and non-numeric
/// cells contribute 0.0) with a zero imaginary part. After the in-place
/// [`transform`] the power at each bin is `re² + im²`, and the result is
/// rotated from the transform's standard order into the same centered
/// layout as [`frequency_axis`], so the two align index-for-index.
#[must_use]
pub fn power_spectrum(series: &PointSeries) -> Vec<f64> {
    let mut real: Vec<f64> = series
        .points()
        .iter()
        .map(|p| p.value.as_ref().and_then(Value::as_number).unwrap_or(0.0))
        .collect();
    let mut imag = vec![0.0; real.len()];

    transform(&mut real, &mut imag);

    let mut power: Vec<f64> = real
        .iter()
        .zip(imag.iter())
        .map(|(&re, &im)| re * re + im * im)
        .collect();

    // Standard order -> centered: the zero-frequency bin lands on len / 2.
    let len = power.len();
    if len > 1 {
        power.rotate_left(len.div_ceil(2));
    }
    power
}
