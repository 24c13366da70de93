use anyhow::{Context, Result};
use ndarray::{Array1, Array2};
use rand::Rng;

use linear_classifiers::config::SvmConfig;
use linear_classifiers::models::classifier_trait::Classifier;
use linear_classifiers::models::svm::SvmClassifier;

/// Generate a small binary dataset: two noisy clusters labeled -1 and 1.
fn synthetic_binary(n_per_class: usize, n_features: usize) -> (Array2<f64>, Array1<i32>) {
    let mut rng = rand::thread_rng();
    let mut rows = Vec::with_capacity(n_per_class * 2 * n_features);
    let mut labels = Vec::with_capacity(n_per_class * 2);

    for &(center, label) in &[(0.0, -1), (4.0, 1)] {
        for _ in 0..n_per_class {
            for _ in 0..n_features {
                rows.push(center + rng.gen_range(-0.5..0.5));
            }
            labels.push(label);
        }
    }

    let x = Array2::from_shape_vec((n_per_class * 2, n_features), rows)
        .expect("row-major cluster data has matching shape");
    (x, Array1::from_vec(labels))
}

fn main() -> Result<()> {
    env_logger::init();

    let (x, y) = synthetic_binary(20, 3);
    println!("Features shape: {:?}", x.dim());
    println!("Labels: len={} first 10 = {:?}", y.len(), &y.to_vec()[..10]);

    let mut clf = SvmClassifier::new(SvmConfig {
        verbose: true,
        ..SvmConfig::default()
    });
    clf.fit(&x, &y).context("Failed to fit svm classifier")?;

    let yhat = clf.predict(&x).context("Failed to predict")?;
    println!("Predictions: first 10 = {:?}", &yhat.to_vec()[..10]);

    let probs = clf.predict_proba(&x).context("Failed to predict probabilities")?;
    println!("Probabilities shape: {:?}", probs.dim());
    println!("First row: {:?}", probs.row(0).to_vec());

    let eval = clf.evaluate(&x, &y).context("Failed to evaluate")?;
    println!("Training {}", eval);

    Ok(())
}
