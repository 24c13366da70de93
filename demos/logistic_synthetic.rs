use anyhow::{Context, Result};
use ndarray::{Array1, Array2};
use rand::Rng;

use linear_classifiers::config::LogisticConfig;
use linear_classifiers::models::classifier_trait::Classifier;
use linear_classifiers::models::logistic::LogisticClassifier;

/// Generate a small synthetic dataset: one noisy cluster per class.
///
/// # Arguments
/// * `n_per_class` - Samples per class
/// * `n_features` - Feature count
/// * `n_classes` - Class count; labels are 0..n_classes
///
/// # Returns
/// A tuple of (`x`, `y`)
fn synthetic_clusters(
    n_per_class: usize,
    n_features: usize,
    n_classes: usize,
) -> (Array2<f64>, Array1<i32>) {
    let mut rng = rand::thread_rng();
    let mut rows = Vec::with_capacity(n_per_class * n_classes * n_features);
    let mut labels = Vec::with_capacity(n_per_class * n_classes);

    for class in 0..n_classes {
        let center = class as f64 * 3.0;
        for _ in 0..n_per_class {
            for _ in 0..n_features {
                rows.push(center + rng.gen_range(-0.5..0.5));
            }
            labels.push(class as i32);
        }
    }

    let x = Array2::from_shape_vec((n_per_class * n_classes, n_features), rows)
        .expect("row-major cluster data has matching shape");
    (x, Array1::from_vec(labels))
}

fn main() -> Result<()> {
    env_logger::init();

    let (x, y) = synthetic_clusters(20, 3, 3);
    println!("Features shape: {:?}", x.dim());
    println!("Labels: len={} first 10 = {:?}", y.len(), &y.to_vec()[..10]);

    let mut clf = LogisticClassifier::new(LogisticConfig {
        max_iterations: 100,
        verbose: true,
        ..LogisticConfig::default()
    });
    clf.fit(&x, &y).context("Failed to fit logistic classifier")?;

    let yhat = clf.predict(&x).context("Failed to predict")?;
    println!("Predictions: first 10 = {:?}", &yhat.to_vec()[..10]);

    let probs = clf.predict_proba(&x).context("Failed to predict probabilities")?;
    println!("Probabilities shape: {:?}", probs.dim());
    println!("First row: {:?}", probs.row(0).to_vec());

    let eval = clf.evaluate(&x, &y).context("Failed to evaluate")?;
    println!("Training {}", eval);

    clf.print_coefficients(18);

    Ok(())
}
