use ndarray::{Array1, Array2};

use crate::dataset::check_same_rows;
use crate::error::EstimatorError;
use crate::report::coefficients::CoefficientTable;
use crate::stats::Evaluation;

/// The estimator shape shared by the classifier adapters.
///
/// Implementations hold their hyperparameters from construction, create the
/// fitted model handle in `fit`, and answer every other method from that
/// handle. Methods other than `fit` return `NotFitted` until a fit has
/// succeeded; a second `fit` replaces the stored model completely.
pub trait Classifier {
    /// Fit the model on a samples-by-features matrix and integer class
    /// labels.
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<i32>) -> Result<(), EstimatorError>;

    /// Predicted class label for each input row, in input order.
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<i32>, EstimatorError>;

    /// Per-class probabilities, shape (n_samples, n_classes).
    ///
    /// Rows follow the input row order and sum to 1; columns follow
    /// ascending class-label order.
    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>, EstimatorError>;

    /// Accuracy of `predict` against the given labels.
    fn evaluate(&self, x: &Array2<f64>, y: &Array1<i32>) -> Result<Evaluation, EstimatorError> {
        check_same_rows(x, y)?;
        let yhat = self.predict(x)?;
        Ok(Evaluation::from_predictions(y, &yhat))
    }

    /// The fitted coefficient table, when the model exposes one.
    fn coefficients(&self) -> Result<CoefficientTable, EstimatorError>;

    /// Render the first `num_rows` coefficient rows to stdout. Logs a
    /// warning when the model has no coefficient table to show.
    fn print_coefficients(&self, num_rows: usize) {
        match self.coefficients() {
            Ok(table) => println!("{}", table.render(num_rows)),
            Err(e) => log::warn!("{}: no coefficients to print: {}", self.name(), e),
        }
    }

    /// Human readable name for the model.
    fn name(&self) -> &str {
        "classifier"
    }
}
