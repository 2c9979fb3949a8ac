//! Equal-width partition of a value range.

use ndarray::Array1;
use rfmkit_primitives::CutPoints;

use crate::{MathError, check_num_class};

/// Interior points of an evenly spaced grid of `num_class + 1` points over
/// `[start, stop]`, endpoints excluded.
#[must_use]
pub fn linspace_interior(start: f64, stop: f64, num_class: usize) -> Vec<f64> {
    if num_class < 2 {
        return Vec::new();
    }
    let div = num_class as f64;
    let delta = stop - start;
    let step = delta / div;

    if step == 0.0 {
        (1..num_class).map(|i| (i as f64 / div) * delta + start).collect()
    } else {
        (1..num_class).map(|i| i as f64 * step + start).collect()
    }
}

/// Cut points splitting `[min(data), max(data)]` into equal-width buckets.
///
/// # Errors
/// Returns `MathError::InvalidNumClass` if `num_class < 2`,
/// `MathError::EmptyData` for empty input and
/// `MathError::NumericalInstability` if the data contains NaN or infinity.
pub fn min_max_cut_points(data: &Array1<f64>, num_class: usize) -> Result<CutPoints, MathError> {
    check_num_class(num_class)?;
    if data.is_empty() {
        return Err(MathError::EmptyData);
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(MathError::NumericalInstability("non-finite value in min-max input".into()));
    }

    let min_val = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(CutPoints::new(linspace_interior(min_val, max_val, num_class)))
}
