use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_logistic::{MultiFittedLogisticRegression, MultiLogisticRegression};
use ndarray::{Array1, Array2};

use crate::config::{ClassWeights, LogisticConfig};
use crate::dataset::{check_same_rows, class_labels, ValidationSet};
use crate::error::EstimatorError;
use crate::models::classifier_trait::Classifier;
use crate::preprocessing::Scaler;
use crate::report::coefficients::{CoefficientRow, CoefficientTable};

/// Regularized logistic-regression classifier.
///
/// Training is delegated to the multinomial logistic trainer, so binary
/// problems are simply the two-class case and `predict_proba` always comes
/// back as one row per sample with one column per class. The trainer solves
/// with L-BFGS; `l2_penalty` becomes its regularization strength and
/// `convergence_threshold` its gradient tolerance, while `step_size` and
/// `lbfgs_memory_level` are tuned internally.
pub struct LogisticClassifier {
    config: LogisticConfig,
    validation: Option<ValidationSet>,
    model: Option<MultiFittedLogisticRegression<f64, i32>>,
    scaler: Option<Scaler>,
    classes: Vec<i32>,
}

impl LogisticClassifier {
    pub fn new(config: LogisticConfig) -> Self {
        LogisticClassifier {
            config,
            validation: None,
            model: None,
            scaler: None,
            classes: Vec::new(),
        }
    }

    /// Attach a held-out set; its accuracy is logged after each fit.
    pub fn with_validation_set(mut self, validation: ValidationSet) -> Self {
        self.validation = Some(validation);
        self
    }

    /// Number of classes observed during the last fit.
    pub fn num_classes(&self) -> Option<usize> {
        self.model.as_ref().map(|_| self.classes.len())
    }

    /// Class labels observed during the last fit, ascending. Probability
    /// columns follow this order.
    pub fn classes(&self) -> &[i32] {
        &self.classes
    }

    fn apply_scaler(&self, x: &Array2<f64>) -> Array2<f64> {
        match &self.scaler {
            Some(sc) => sc.transform(x),
            None => x.to_owned(),
        }
    }

    fn log_validation_accuracy(&self) {
        if let Some(v) = self.validation.as_ref() {
            match self.evaluate(&v.x, &v.y) {
                Ok(eval) => log::info!("{}: validation {}", self.name(), eval),
                Err(e) => log::warn!("{}: validation evaluation failed: {}", self.name(), e),
            }
        }
    }
}

impl Default for LogisticClassifier {
    fn default() -> Self {
        Self::new(LogisticConfig::default())
    }
}

impl Classifier for LogisticClassifier {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<i32>) -> Result<(), EstimatorError> {
        self.config.solver.ensure_supported()?;
        if self.config.l1_penalty != 0.0 {
            return Err(EstimatorError::Config(
                "nonzero l1_penalty is not supported by the lbfgs trainer; set it to 0.0"
                    .to_string(),
            ));
        }
        if self.config.class_weights != ClassWeights::Uniform {
            log::warn!(
                "{}: the logistic trainer does not honor class_weights; training unweighted",
                self.name()
            );
        }
        check_same_rows(x, y)?;

        let classes = class_labels(y);
        if classes.len() < 2 {
            return Err(EstimatorError::Config(
                "training data must contain at least two distinct classes".to_string(),
            ));
        }

        let scaler = if self.config.feature_rescaling {
            Some(Scaler::fit(x))
        } else {
            None
        };
        let xs = match &scaler {
            Some(sc) => sc.transform(x),
            None => x.to_owned(),
        };

        log::debug!(
            "{}: step_size {} and lbfgs_memory_level {} are tuned internally by the trainer",
            self.name(),
            self.config.step_size,
            self.config.lbfgs_memory_level
        );

        let train = Dataset::new(xs, y.to_owned());
        let model = MultiLogisticRegression::default()
            .alpha(self.config.l2_penalty)
            .gradient_tolerance(self.config.convergence_threshold)
            .max_iterations(self.config.max_iterations)
            .with_intercept(true)
            .fit(&train)
            .map_err(|e| EstimatorError::Train(e.to_string()))?;

        self.model = Some(model);
        self.scaler = scaler;
        self.classes = classes;

        if self.config.verbose {
            log::info!(
                "{}: fitted on {} samples, {} features, {} classes",
                self.name(),
                x.nrows(),
                x.ncols(),
                self.classes.len()
            );
        }
        self.log_validation_accuracy();

        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<i32>, EstimatorError> {
        let model = self.model.as_ref().ok_or(EstimatorError::NotFitted)?;
        let xs = self.apply_scaler(x);
        Ok(model.predict(&xs))
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>, EstimatorError> {
        let model = self.model.as_ref().ok_or(EstimatorError::NotFitted)?;
        let xs = self.apply_scaler(x);
        Ok(model.predict_probabilities(&xs))
    }

    fn coefficients(&self) -> Result<CoefficientTable, EstimatorError> {
        let model = self.model.as_ref().ok_or(EstimatorError::NotFitted)?;
        let params = model.params();
        let intercept = model.intercept();

        let mut rows = Vec::with_capacity((params.nrows() + 1) * self.classes.len());
        for (j, &class) in self.classes.iter().enumerate() {
            rows.push(CoefficientRow {
                name: "(intercept)".to_string(),
                class,
                value: intercept[j],
            });
        }
        for i in 0..params.nrows() {
            for (j, &class) in self.classes.iter().enumerate() {
                rows.push(CoefficientRow {
                    name: format!("feature_{}", i),
                    class,
                    value: params[(i, j)],
                });
            }
        }

        Ok(CoefficientTable { rows })
    }

    fn name(&self) -> &str {
        "logistic_classifier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_cluster_data() -> (Array2<f64>, Array1<i32>) {
        let x = Array2::from_shape_vec(
            (10, 3),
            vec![
                0.1, 0.2, 0.0, 0.3, 0.1, 0.2, 0.2, 0.0, 0.1, 0.0, 0.3, 0.3, 0.1, 0.1, 0.1, 5.1,
                5.2, 5.0, 5.3, 5.1, 5.2, 5.2, 5.0, 5.1, 5.0, 5.3, 5.3, 5.1, 5.1, 5.1,
            ],
        )
        .unwrap();
        let y = Array1::from_vec(vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1]);
        (x, y)
    }

    #[test]
    fn fit_and_predict_binary() {
        let (x, y) = two_cluster_data();
        let mut clf = LogisticClassifier::new(LogisticConfig {
            max_iterations: 100,
            ..LogisticConfig::default()
        });
        clf.fit(&x, &y).unwrap();

        assert_eq!(clf.num_classes(), Some(2));
        assert_eq!(clf.classes(), &[0, 1]);

        let yhat = clf.predict(&x).unwrap();
        assert_eq!(yhat.len(), x.nrows());
        assert_eq!(yhat.to_vec(), y.to_vec());
    }

    #[test]
    fn nonzero_l1_penalty_is_rejected() {
        let (x, y) = two_cluster_data();
        let mut clf = LogisticClassifier::new(LogisticConfig {
            l1_penalty: 0.5,
            ..LogisticConfig::default()
        });
        assert!(matches!(clf.fit(&x, &y), Err(EstimatorError::Config(_))));
    }

    #[test]
    fn single_class_targets_are_rejected() {
        let x = Array2::zeros((4, 2));
        let y = Array1::from_vec(vec![1, 1, 1, 1]);
        let mut clf = LogisticClassifier::default();
        assert!(matches!(clf.fit(&x, &y), Err(EstimatorError::Config(_))));
    }
}
