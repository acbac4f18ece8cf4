//! Element-wise closeness comparison under a relative tolerance.

use crate::dataset::FieldData;

/// Relative tolerance used by the quantization checks.
pub const DEFAULT_TOLERANCE: f64 = 5e-3;

/// Outcome of comparing a test array against its reference.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonOutcome {
    /// Every element is within tolerance of the reference
    Match,
    /// The arrays have different dimension shapes
    ShapeMismatch {
        test: Vec<usize>,
        reference: Vec<usize>,
    },
    /// At least one element differs beyond tolerance
    ValueMismatch {
        /// Flat index of the first offending element
        index: usize,
        test: f64,
        reference: f64,
    },
}

impl ComparisonOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, ComparisonOutcome::Match)
    }
}

/// Compare two arrays element-wise under a relative tolerance.
///
/// Elements are close when `|test - reference| <= rtol * |reference|`. NaN
/// on either side never compares close.
pub fn allclose(test: &FieldData, reference: &FieldData, rtol: f64) -> ComparisonOutcome {
    if test.shape != reference.shape || test.values.len() != reference.values.len() {
        return ComparisonOutcome::ShapeMismatch {
            test: test.shape.clone(),
            reference: reference.shape.clone(),
        };
    }

    for (index, (&a, &b)) in test.values.iter().zip(&reference.values).enumerate() {
        if !((a - b).abs() <= rtol * b.abs()) {
            return ComparisonOutcome::ValueMismatch {
                index,
                test: a,
                reference: b,
            };
        }
    }

    ComparisonOutcome::Match
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(values: &[f64]) -> FieldData {
        FieldData {
            shape: vec![values.len()],
            values: values.to_vec(),
        }
    }

    #[test]
    fn test_equal_arrays_match() {
        let a = field(&[1.0, 2.0, 3.0]);
        assert!(allclose(&a, &a, DEFAULT_TOLERANCE).is_match());
    }

    #[test]
    fn test_within_tolerance_matches() {
        let test = field(&[1.0, 2.0]);
        let reference = field(&[1.001, 2.001]);
        assert!(allclose(&test, &reference, DEFAULT_TOLERANCE).is_match());
    }

    #[test]
    fn test_beyond_tolerance_reports_first_index() {
        let test = field(&[1.0, 1.0]);
        let reference = field(&[1.0, 5.0]);
        assert_eq!(
            allclose(&test, &reference, DEFAULT_TOLERANCE),
            ComparisonOutcome::ValueMismatch {
                index: 1,
                test: 1.0,
                reference: 5.0,
            }
        );
    }

    #[test]
    fn test_exactly_at_tolerance_matches() {
        // 0.5 and 1.5 are exactly representable, so |a - b| == rtol * |b|
        let test = field(&[1.5]);
        let reference = field(&[1.0]);
        assert!(allclose(&test, &reference, 0.5).is_match());
    }

    #[test]
    fn test_zero_reference_requires_exact_match() {
        let exact = field(&[0.0]);
        let off = field(&[1e-12]);
        assert!(allclose(&exact, &exact, DEFAULT_TOLERANCE).is_match());
        assert!(!allclose(&off, &exact, DEFAULT_TOLERANCE).is_match());
    }

    #[test]
    fn test_nan_never_matches() {
        let with_nan = field(&[f64::NAN]);
        let plain = field(&[1.0]);
        assert!(!allclose(&with_nan, &plain, DEFAULT_TOLERANCE).is_match());
        assert!(!allclose(&plain, &with_nan, DEFAULT_TOLERANCE).is_match());
        assert!(!allclose(&with_nan, &with_nan, DEFAULT_TOLERANCE).is_match());
    }

    #[test]
    fn test_shape_mismatch_is_distinct() {
        let row = FieldData {
            shape: vec![1, 2],
            values: vec![1.0, 2.0],
        };
        let column = FieldData {
            shape: vec![2, 1],
            values: vec![1.0, 2.0],
        };
        assert_eq!(
            allclose(&row, &column, DEFAULT_TOLERANCE),
            ComparisonOutcome::ShapeMismatch {
                test: vec![1, 2],
                reference: vec![2, 1],
            }
        );
    }

    #[test]
    fn test_scalar_fields_compare() {
        let a = FieldData {
            shape: vec![],
            values: vec![273.15],
        };
        let b = FieldData {
            shape: vec![],
            values: vec![273.2],
        };
        assert!(allclose(&a, &b, DEFAULT_TOLERANCE).is_match());
    }
}
