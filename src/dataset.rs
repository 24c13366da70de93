//! Dataset assembly shared by the classifier adapters.
//!
//! The adapters accept a samples-by-features `ndarray` matrix plus an
//! integer target vector and hand the backend a `linfa::Dataset`. Row order
//! is preserved end to end, so prediction output lines up with input rows
//! without any reordering step.

use linfa::Dataset;
use ndarray::{Array1, Array2, Ix1};

use crate::error::EstimatorError;

/// Check that `x` and `y` describe the same number of samples.
pub fn check_same_rows(x: &Array2<f64>, y: &Array1<i32>) -> Result<(), EstimatorError> {
    if x.nrows() != y.len() {
        return Err(EstimatorError::ShapeMismatch {
            rows: x.nrows(),
            targets: y.len(),
        });
    }
    Ok(())
}

/// Assemble a labeled training dataset from a feature matrix and targets.
pub fn to_dataset(
    x: &Array2<f64>,
    y: &Array1<i32>,
) -> Result<Dataset<f64, i32, Ix1>, EstimatorError> {
    check_same_rows(x, y)?;
    Ok(Dataset::new(x.to_owned(), y.to_owned()))
}

/// Distinct class labels observed in `y`, ascending.
///
/// The length of the returned vector is the class count used to size
/// probability output.
pub fn class_labels(y: &Array1<i32>) -> Vec<i32> {
    let mut labels: Vec<i32> = y.to_vec();
    labels.sort_unstable();
    labels.dedup();
    labels
}

/// Encode integer targets as booleans for a binary trainer, with
/// `pos_label` mapped to `true`.
pub fn to_binary_targets(y: &Array1<i32>, pos_label: i32) -> Array1<bool> {
    y.mapv(|l| l == pos_label)
}

/// A held-out dataset attached to an adapter at construction time.
///
/// After each successful fit the adapter evaluates itself on this set and
/// logs the resulting accuracy.
#[derive(Debug, Clone)]
pub struct ValidationSet {
    pub x: Array2<f64>,
    pub y: Array1<i32>,
}

impl ValidationSet {
    pub fn new(x: Array2<f64>, y: Array1<i32>) -> Result<Self, EstimatorError> {
        check_same_rows(&x, &y)?;
        Ok(ValidationSet { x, y })
    }
}
