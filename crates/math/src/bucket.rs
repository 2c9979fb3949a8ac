//! Assignment of values to ordinal grades.

use rfmkit_primitives::{CutPoints, Grade};

/// Grade of a single value against ascending cut points.
///
/// The first boundary `c[i]` with `x <= c[i]` yields grade `i + 1`, so a
/// value sitting exactly on a boundary lands in the lower bucket. Values
/// above every boundary (and NaN, which compares false everywhere) get the
/// top grade `cuts.len() + 1`.
#[must_use]
pub fn assign_grade(x: f64, cuts: &CutPoints) -> Grade {
    let idx = cuts.as_slice().iter().position(|&c| x <= c).unwrap_or(cuts.len());
    Grade::new(idx as u32 + 1)
}

/// Grade every value in `data`.
#[must_use]
pub fn assign_grades<'a, I>(data: I, cuts: &CutPoints) -> Vec<Grade>
where
    I: IntoIterator<Item = &'a f64>,
{
    data.into_iter().map(|&x| assign_grade(x, cuts)).collect()
}
