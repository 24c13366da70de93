use std::error::Error;
use std::fmt;

/// Errors surfaced by the classifier adapters.
///
/// Training failures coming out of the backend trainers are passed through
/// as `Train` with the backend's own message; nothing is retried or
/// translated beyond that.
#[derive(Debug)]
pub enum EstimatorError {
    /// A prediction, evaluation, or coefficient accessor was called before
    /// a successful `fit`.
    NotFitted,
    /// An invalid hyperparameter or hyperparameter combination.
    Config(String),
    /// Feature matrix row count and target length disagree.
    ShapeMismatch { rows: usize, targets: usize },
    /// The backend trainer rejected the problem or failed to solve it.
    Train(String),
}

impl fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EstimatorError::NotFitted => {
                write!(f, "model has not been fitted; call fit() first")
            }
            EstimatorError::Config(msg) => write!(f, "invalid configuration: {}", msg),
            EstimatorError::ShapeMismatch { rows, targets } => write!(
                f,
                "feature matrix has {} rows but target vector has {} entries",
                rows, targets
            ),
            EstimatorError::Train(msg) => write!(f, "training failed: {}", msg),
        }
    }
}

impl Error for EstimatorError {}
