//! Evaluation metrics for fitted classifiers.

use std::fmt;

use ndarray::Array1;

/// Fraction of predictions equal to the true label.
///
/// # Arguments
///
/// * `y_true` - Ground-truth class labels.
/// * `y_pred` - Predicted class labels, same length as `y_true`.
///
/// # Returns
///
/// Accuracy in [0, 1]. An empty input evaluates to 0.
pub fn accuracy(y_true: &Array1<i32>, y_pred: &Array1<i32>) -> f64 {
    if y_true.is_empty() {
        return 0.0;
    }
    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    correct as f64 / y_true.len() as f64
}

/// Result of evaluating a fitted classifier on a labeled dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub metric: &'static str,
    pub value: f64,
    pub num_examples: usize,
    pub num_correct: usize,
}

impl Evaluation {
    /// Build an accuracy evaluation from true and predicted labels.
    pub fn from_predictions(y_true: &Array1<i32>, y_pred: &Array1<i32>) -> Self {
        let num_correct = y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|(t, p)| t == p)
            .count();
        Evaluation {
            metric: "accuracy",
            value: accuracy(y_true, y_pred),
            num_examples: y_true.len(),
            num_correct,
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {:.4} ({}/{} correct)",
            self.metric, self.value, self.num_correct, self.num_examples
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_counts_matches() {
        let y = Array1::from_vec(vec![0, 1, 1, 0]);
        let yhat = Array1::from_vec(vec![0, 1, 0, 0]);
        assert!((accuracy(&y, &yhat) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn evaluation_reports_counts() {
        let y = Array1::from_vec(vec![1, 1, 0]);
        let yhat = Array1::from_vec(vec![1, 1, 0]);
        let eval = Evaluation::from_predictions(&y, &yhat);
        assert_eq!(eval.num_examples, 3);
        assert_eq!(eval.num_correct, 3);
        assert_eq!(eval.value, 1.0);
        assert_eq!(format!("{}", eval), "accuracy: 1.0000 (3/3 correct)");
    }

    #[test]
    fn empty_input_is_zero_accuracy() {
        let y = Array1::from_vec(Vec::<i32>::new());
        let yhat = Array1::from_vec(Vec::<i32>::new());
        assert_eq!(accuracy(&y, &yhat), 0.0);
    }
}
