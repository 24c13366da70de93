use linfa::dataset::Pr;
use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_svm::Svm;
use ndarray::{Array1, Array2};

use crate::config::{ClassWeights, SvmConfig};
use crate::dataset::{check_same_rows, class_labels, to_binary_targets, ValidationSet};
use crate::error::EstimatorError;
use crate::models::classifier_trait::Classifier;
use crate::preprocessing::Scaler;
use crate::report::coefficients::CoefficientTable;

/// Linear support-vector-machine classifier for binary targets.
///
/// The backend returns a probability-like score per sample (the decision
/// margin squashed into [0, 1]); `predict` thresholds it at 0.5 and maps
/// back to the two training labels, and `predict_proba` exposes it as a
/// two-column matrix so both adapters satisfy the same interface. The
/// mis-classification `penalty` and the class weights combine into the
/// backend's per-class costs.
pub struct SvmClassifier {
    config: SvmConfig,
    validation: Option<ValidationSet>,
    model: Option<Svm<f64, Pr>>,
    scaler: Option<Scaler>,
    /// (negative label, positive label), ascending; set by fit.
    classes: Option<(i32, i32)>,
}

impl SvmClassifier {
    pub fn new(config: SvmConfig) -> Self {
        SvmClassifier {
            config,
            validation: None,
            model: None,
            scaler: None,
            classes: None,
        }
    }

    /// Attach a held-out set; its accuracy is logged after each fit.
    pub fn with_validation_set(mut self, validation: ValidationSet) -> Self {
        self.validation = Some(validation);
        self
    }

    /// Number of classes observed during the last fit (always 2).
    pub fn num_classes(&self) -> Option<usize> {
        self.classes.map(|_| 2)
    }

    fn apply_scaler(&self, x: &Array2<f64>) -> Array2<f64> {
        match &self.scaler {
            Some(sc) => sc.transform(x),
            None => x.to_owned(),
        }
    }

    /// Probability-like score of the positive class for each row.
    fn positive_scores(&self, x: &Array2<f64>) -> Result<Array1<f64>, EstimatorError> {
        let model = self.model.as_ref().ok_or(EstimatorError::NotFitted)?;
        let xs = self.apply_scaler(x);
        let scores: Array1<Pr> = model.predict(&xs);
        Ok(scores.mapv(|p| f64::from(*p)))
    }

    /// Per-class costs for the backend: penalty scaled by the class weights.
    fn pos_neg_costs(
        &self,
        y_bool: &Array1<bool>,
        neg_label: i32,
        pos_label: i32,
    ) -> Result<(f64, f64), EstimatorError> {
        let (w_pos, w_neg) = match &self.config.class_weights {
            ClassWeights::Uniform => (1.0, 1.0),
            ClassWeights::Auto => {
                let n = y_bool.len() as f64;
                let n_pos = y_bool.iter().filter(|&&b| b).count() as f64;
                let n_neg = n - n_pos;
                (n / (2.0 * n_pos), n / (2.0 * n_neg))
            }
            custom @ ClassWeights::Custom(_) => {
                let lookup = |label: i32| {
                    custom.weight_for(label).ok_or_else(|| {
                        EstimatorError::Config(format!(
                            "class_weights has no entry for training label {}",
                            label
                        ))
                    })
                };
                (lookup(pos_label)?, lookup(neg_label)?)
            }
        };
        Ok((self.config.penalty * w_pos, self.config.penalty * w_neg))
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

impl Default for SvmClassifier {
    fn default() -> Self {
        Self::new(SvmConfig::default())
    }
}

impl Classifier for SvmClassifier {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<i32>) -> Result<(), EstimatorError> {
        self.config.solver.ensure_supported()?;
        check_same_rows(x, y)?;

        let classes = class_labels(y);
        if classes.len() != 2 {
            return Err(EstimatorError::Config(format!(
                "svm classifier supports binary targets only; got {} distinct classes",
                classes.len()
            )));
        }
        let (neg_label, pos_label) = (classes[0], classes[1]);
        let y_bool = to_binary_targets(y, pos_label);
        let (c_pos, c_neg) = self.pos_neg_costs(&y_bool, neg_label, pos_label)?;

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
            "{}: max_iterations {} and lbfgs_memory_level {} are tuned internally by the trainer",
            self.name(),
            self.config.max_iterations,
            self.config.lbfgs_memory_level
        );

        let train = Dataset::new(xs, y_bool);
        let model = Svm::<f64, Pr>::params()
            .eps(self.config.convergence_threshold)
            .pos_neg_weights(c_pos, c_neg)
            .linear_kernel()
            .fit(&train)
            .map_err(|e| EstimatorError::Train(e.to_string()))?;

        self.model = Some(model);
        self.scaler = scaler;
        self.classes = Some((neg_label, pos_label));

        if self.config.verbose {
            log::info!(
                "{}: fitted on {} samples, {} features, labels ({}, {})",
                self.name(),
                x.nrows(),
                x.ncols(),
                neg_label,
                pos_label
            );
        }
        self.log_validation_accuracy();

        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<i32>, EstimatorError> {
        let (neg_label, pos_label) = self.classes.ok_or(EstimatorError::NotFitted)?;
        let scores = self.positive_scores(x)?;
        Ok(scores.mapv(|p| if p >= 0.5 { pos_label } else { neg_label }))
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>, EstimatorError> {
        let scores = self.positive_scores(x)?;
        let n = scores.len();
        let mut probs = Array2::zeros((n, 2));
        for (i, &p) in scores.iter().enumerate() {
            probs[(i, 0)] = 1.0 - p;
            probs[(i, 1)] = p;
        }
        Ok(probs)
    }

    fn coefficients(&self) -> Result<CoefficientTable, EstimatorError> {
        if self.model.is_none() {
            return Err(EstimatorError::NotFitted);
        }
        Err(EstimatorError::Config(
            "the svm backend keeps support vectors, not a dense coefficient table".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "svm_classifier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable_data() -> (Array2<f64>, Array1<i32>) {
        let x = Array2::from_shape_vec(
            (10, 2),
            vec![
                0.0, 0.1, 0.2, 0.0, 0.1, 0.3, 0.3, 0.2, 0.1, 0.1, 4.0, 4.1, 4.2, 4.0, 4.1, 4.3,
                4.3, 4.2, 4.1, 4.1,
            ],
        )
        .unwrap();
        let y = Array1::from_vec(vec![-1, -1, -1, -1, -1, 1, 1, 1, 1, 1]);
        (x, y)
    }

    #[test]
    fn fit_and_predict_binary() {
        let (x, y) = separable_data();
        let mut clf = SvmClassifier::default();
        clf.fit(&x, &y).unwrap();

        let yhat = clf.predict(&x).unwrap();
        assert_eq!(yhat.len(), x.nrows());
        assert_eq!(yhat.to_vec(), y.to_vec());
    }

    #[test]
    fn three_class_targets_are_rejected() {
        let x = Array2::zeros((6, 2));
        let y = Array1::from_vec(vec![0, 1, 2, 0, 1, 2]);
        let mut clf = SvmClassifier::default();
        assert!(matches!(clf.fit(&x, &y), Err(EstimatorError::Config(_))));
    }

    #[test]
    fn custom_weights_require_every_label() {
        let (x, y) = separable_data();
        let mut clf = SvmClassifier::new(SvmConfig {
            class_weights: ClassWeights::Custom(vec![(1, 2.0)]),
            ..SvmConfig::default()
        });
        assert!(matches!(clf.fit(&x, &y), Err(EstimatorError::Config(_))));
    }
}
