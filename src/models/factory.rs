use crate::config::ModelType;
use crate::models::classifier_trait::Classifier;
use crate::models::logistic::LogisticClassifier;
use crate::models::svm::SvmClassifier;

/// Build a boxed classifier from a `ModelType`.
/// Currently this is a thin factory implemented as a single function.
pub fn build_model(model_type: ModelType) -> Box<dyn Classifier> {
    match model_type {
        ModelType::Logistic(config) => Box::new(LogisticClassifier::new(config)),
        ModelType::Svm(config) => Box::new(SvmClassifier::new(config)),
    }
}
