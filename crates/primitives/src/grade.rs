//! Grade and cut point type definitions.

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Ordinal grade in `[1, num_class]`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
pub struct Grade(pub u32);

impl Grade {
    /// Create a new grade.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw grade value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Ordered boundaries partitioning a value domain into `len() + 1` buckets.
///
/// Points are non-decreasing. Computed quantiles may repeat a value when
/// the data has ties; explicitly configured points are additionally checked
/// for strict ordering with [`CutPoints::is_strictly_ascending`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CutPoints(Vec<f64>);

impl CutPoints {
    /// Create cut points from a non-decreasing sequence.
    #[must_use]
    pub fn new(points: Vec<f64>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0] <= w[1]));
        Self(points)
    }

    /// Number of boundaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of buckets these boundaries produce.
    #[must_use]
    pub fn num_classes(&self) -> usize {
        self.0.len() + 1
    }

    /// Get the boundaries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Whether every point is finite and strictly greater than the previous one.
    #[must_use]
    pub fn is_strictly_ascending(points: &[f64]) -> bool {
        points.iter().all(|p| p.is_finite()) && points.windows(2).all(|w| w[0] < w[1])
    }
}

impl AsRef<[f64]> for CutPoints {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_roundtrip() {
        let grade: Grade = 3.into();
        assert_eq!(grade.get(), 3);
        assert_eq!(u32::from(grade), 3);
        assert_eq!(grade.to_string(), "3");
    }

    #[test]
    fn cut_points_buckets() {
        let cuts = CutPoints::new(vec![10.0, 20.0, 30.0]);
        assert_eq!(cuts.len(), 3);
        assert_eq!(cuts.num_classes(), 4);
        assert_eq!(cuts.as_slice(), &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn strictly_ascending_check() {
        assert!(CutPoints::is_strictly_ascending(&[1.0, 2.0, 3.0]));
        assert!(CutPoints::is_strictly_ascending(&[]));
        assert!(!CutPoints::is_strictly_ascending(&[1.0, 1.0]));
        assert!(!CutPoints::is_strictly_ascending(&[3.0, 2.0]));
        assert!(!CutPoints::is_strictly_ascending(&[1.0, f64::NAN]));
    }

    #[test]
    fn ties_are_allowed_for_computed_points() {
        let cuts = CutPoints::new(vec![0.5, 0.5, 1.0]);
        assert_eq!(cuts.num_classes(), 4);
    }
}
