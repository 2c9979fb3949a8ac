//! Quantile cut points.

use ndarray::Array1;
use rfmkit_primitives::CutPoints;

use crate::{MathError, Standardizer, check_num_class};

/// Interior probability levels `1/k, 2/k, ..., (k-1)/k`.
///
/// Each level is computed as `i * (1/k)`, matching an evenly spaced grid
/// over `[0, 1]` with both endpoints dropped.
#[must_use]
pub fn quantile_levels(num_class: usize) -> Vec<f64> {
    if num_class < 2 {
        return Vec::new();
    }
    let step = 1.0 / num_class as f64;
    (1..num_class).map(|i| i as f64 * step).collect()
}

/// Linear interpolation that is exact at both ends.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 { b - diff * (1.0 - t) } else { a + diff * t }
}

/// Quantile of already sorted data, interpolating linearly between the two
/// nearest order statistics at virtual index `q * (n - 1)`.
///
/// # Errors
/// Returns `MathError::EmptyData` for empty input and
/// `MathError::InvalidProbability` if `q` is outside `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Result<f64, MathError> {
    if sorted.is_empty() {
        return Err(MathError::EmptyData);
    }
    if !(0.0..=1.0).contains(&q) {
        return Err(MathError::InvalidProbability(q));
    }

    let last = sorted.len() - 1;
    let virtual_index = last as f64 * q;
    let lower = virtual_index.floor();
    let gamma = virtual_index - lower;

    let lo = (lower as usize).min(last);
    let hi = (lo + 1).min(last);

    Ok(lerp(sorted[lo], sorted[hi], gamma))
}

/// Cut points from quantiles of the standardized data.
///
/// Returns the standardized values alongside the cut points, since grades
/// are assigned on the same scale the quantiles were taken on.
///
/// # Errors
/// Returns `MathError::InvalidNumClass` if `num_class < 2`,
/// `MathError::EmptyData` for empty input and
/// `MathError::NumericalInstability` if the data contains NaN or infinity.
pub fn quantile_cut_points(
    data: &Array1<f64>,
    num_class: usize,
) -> Result<(Array1<f64>, CutPoints), MathError> {
    check_num_class(num_class)?;
    if data.is_empty() {
        return Err(MathError::EmptyData);
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(MathError::NumericalInstability("non-finite value in quantile input".into()));
    }

    let standardized = Standardizer::new().apply(data);

    let mut sorted = standardized.to_vec();
    sorted.sort_by(f64::total_cmp);

    let points = quantile_levels(num_class)
        .into_iter()
        .map(|q| quantile_sorted(&sorted, q))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((standardized, CutPoints::new(points)))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(2, vec![0.5])]
    #[case(4, vec![0.25, 0.5, 0.75])]
    #[case(1, vec![])]
    fn levels_are_evenly_spaced(#[case] num_class: usize, #[case] expected: Vec<f64>) {
        let levels = quantile_levels(num_class);
        assert_eq!(levels.len(), expected.len());
        for (l, e) in levels.iter().zip(&expected) {
            assert_relative_eq!(*l, *e, epsilon = 1e-15);
        }
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(1.0, 4.0)]
    #[case(0.5, 2.5)]
    #[case(0.25, 1.75)]
    fn linear_interpolation(#[case] q: f64, #[case] expected: f64) {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(quantile_sorted(&sorted, q).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn quantile_rejects_bad_input() {
        assert!(matches!(quantile_sorted(&[], 0.5), Err(MathError::EmptyData)));
        assert!(matches!(quantile_sorted(&[1.0], 1.5), Err(MathError::InvalidProbability(_))));
    }

    #[test]
    fn median_of_standardized_one_to_ten() {
        let data = Array1::from_iter((1..=10).map(f64::from));
        let (standardized, cuts) = quantile_cut_points(&data, 2).unwrap();
        assert_eq!(cuts.len(), 1);
        assert_relative_eq!(cuts.as_slice()[0], 0.0, epsilon = 1e-12);
        assert_eq!(standardized.len(), 10);
    }

    #[test]
    fn quantile_points_are_scale_invariant() {
        let small = array![1.0, 5.0, 2.0, 8.0, 3.0];
        let large = small.mapv(|x| x * 1000.0 + 7.0);
        let (_, a) = quantile_cut_points(&small, 3).unwrap();
        let (_, b) = quantile_cut_points(&large, 3).unwrap();
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-9);
        }
    }

    #[test]
    fn quantile_cut_points_errors() {
        let empty: Array1<f64> = array![];
        assert!(matches!(quantile_cut_points(&empty, 3), Err(MathError::EmptyData)));
        assert!(matches!(
            quantile_cut_points(&array![1.0, 2.0], 1),
            Err(MathError::InvalidNumClass(1))
        ));
        assert!(quantile_cut_points(&array![1.0, f64::NAN], 2).is_err());
    }
}
