use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EstimatorError;

/// Solver requested for training.
///
/// The backend trains with L-BFGS; `Auto` resolves to it. `NewtonRaphson`
/// and `Fista` are accepted by the configuration for interface parity but
/// rejected when `fit` is called.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Solver {
    Auto,
    Lbfgs,
    NewtonRaphson,
    Fista,
}

impl Solver {
    pub fn ensure_supported(&self) -> Result<(), EstimatorError> {
        match self {
            Solver::Auto | Solver::Lbfgs => Ok(()),
            other => Err(EstimatorError::Config(format!(
                "solver {:?} is not available; the trainer implements lbfgs only (use auto)",
                other
            ))),
        }
    }
}

impl FromStr for Solver {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Solver::Auto),
            "lbfgs" => Ok(Solver::Lbfgs),
            "newton_raphson" | "newton" => Ok(Solver::NewtonRaphson),
            "fista" => Ok(Solver::Fista),
            _ => Err(format!(
                "Unknown solver: {}. Valid options are: auto, lbfgs, newton_raphson, fista",
                s
            )),
        }
    }
}

/// Per-class weighting applied during training.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ClassWeights {
    /// All classes weighted equally.
    Uniform,
    /// Inverse-frequency weights, n_samples / (n_classes * count_c).
    Auto,
    /// Explicit (label, weight) pairs; every training label must appear.
    Custom(Vec<(i32, f64)>),
}

impl ClassWeights {
    /// Look up the weight for `label`, if one is defined.
    pub fn weight_for(&self, label: i32) -> Option<f64> {
        match self {
            ClassWeights::Uniform => Some(1.0),
            ClassWeights::Auto => None,
            ClassWeights::Custom(pairs) => {
                pairs.iter().find(|(l, _)| *l == label).map(|(_, w)| *w)
            }
        }
    }
}

/// Hyperparameters for the logistic-regression adapter.
///
/// `l2_penalty` maps onto the backend's regularization strength and
/// `convergence_threshold` onto its gradient tolerance. `step_size` and
/// `lbfgs_memory_level` are kept for interface parity; the backend tunes
/// its line search and memory internally. A nonzero `l1_penalty` has no
/// backend path and fails `fit`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogisticConfig {
    pub l2_penalty: f64,
    pub l1_penalty: f64,
    pub solver: Solver,
    pub feature_rescaling: bool,
    pub convergence_threshold: f64,
    pub step_size: f64,
    pub lbfgs_memory_level: u32,
    pub max_iterations: u64,
    pub class_weights: ClassWeights,
    pub verbose: bool,
}

impl Default for LogisticConfig {
    fn default() -> Self {
        Self {
            l2_penalty: 0.01,
            l1_penalty: 0.0,
            solver: Solver::Auto,
            feature_rescaling: false,
            convergence_threshold: 0.01,
            step_size: 1.0,
            lbfgs_memory_level: 11,
            max_iterations: 10,
            class_weights: ClassWeights::Uniform,
            verbose: true,
        }
    }
}

/// Hyperparameters for the linear-SVM adapter.
///
/// `penalty` is the single mis-classification cost; combined with
/// `class_weights` it becomes the backend's positive/negative class costs.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SvmConfig {
    pub penalty: f64,
    pub solver: Solver,
    pub feature_rescaling: bool,
    pub convergence_threshold: f64,
    pub lbfgs_memory_level: u32,
    pub max_iterations: u64,
    pub class_weights: ClassWeights,
    pub verbose: bool,
}

impl Default for SvmConfig {
    fn default() -> Self {
        Self {
            penalty: 10.0,
            solver: Solver::Auto,
            feature_rescaling: true,
            convergence_threshold: 0.01,
            lbfgs_memory_level: 11,
            max_iterations: 10,
            class_weights: ClassWeights::Uniform,
            verbose: false,
        }
    }
}

/// Supported model types and their hyperparameters.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum ModelType {
    Logistic(LogisticConfig),
    Svm(SvmConfig),
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "logistic" => Ok(ModelType::Logistic(LogisticConfig::default())),
            "svm" => Ok(ModelType::Svm(SvmConfig::default())),
            _ => Err(format!(
                "Unknown model type: {}. Valid options are: logistic, svm",
                s
            )),
        }
    }
}
