//! Feature standardization used by the `feature_rescaling` option.
//!
//! Provides a simple per-column mean/std `Scaler`. The scaler is fitted on
//! the training matrix, stored alongside the model, and applied to every
//! matrix the adapter sees afterwards so train and inference inputs go
//! through the same transform.

use ndarray::{Array1, Array2, Axis};

/// Simple standard scaler (per-column mean/std).
#[derive(Clone, Debug)]
pub struct Scaler {
    mean: Array1<f64>,
    std: Array1<f64>,
}

impl Scaler {
    /// Minimum stddev to avoid division by zero when transforming.
    const MIN_STD: f64 = 1e-9;

    /// Fit a scaler from a matrix where rows are samples and columns are
    /// features. Panics on an empty matrix; callers validate shapes first.
    pub fn fit(x: &Array2<f64>) -> Self {
        assert!(
            x.nrows() > 0 && x.ncols() > 0,
            "Scaler::fit requires a non-empty matrix"
        );

        let mean = x.mean_axis(Axis(0)).expect("non-empty matrix has a mean");
        let std = x
            .std_axis(Axis(0), 0.0)
            .mapv(|s| s.max(Self::MIN_STD));

        Scaler { mean, std }
    }

    /// Standardize all rows, returning a new matrix.
    pub fn transform(&self, x: &Array2<f64>) -> Array2<f64> {
        (x - &self.mean) / &self.std
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_computes_column_mean_and_std() {
        let x = Array2::from_shape_vec(
            (4, 2),
            vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0, 4.0, 40.0],
        )
        .unwrap();

        let sc = Scaler::fit(&x);
        assert!((sc.mean[0] - 2.5).abs() < 1e-9, "mean[0] = {}", sc.mean[0]);
        assert!((sc.mean[1] - 25.0).abs() < 1e-9, "mean[1] = {}", sc.mean[1]);
        assert!(sc.std[0] > 0.0);
        assert!(sc.std[1] > 0.0);
    }

    #[test]
    fn transform_standardizes_columns() {
        let x = Array2::from_shape_vec(
            (4, 2),
            vec![1.0, 100.0, 2.0, 200.0, 3.0, 300.0, 4.0, 400.0],
        )
        .unwrap();

        let t = Scaler::fit(&x).transform(&x);

        for c in 0..2 {
            let col = t.index_axis(Axis(1), c);
            let mean = col.sum() / 4.0;
            let var = col.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / 4.0;
            assert!(mean.abs() < 1e-9, "col {} mean after transform = {}", c, mean);
            assert!(
                (var.sqrt() - 1.0).abs() < 1e-9,
                "col {} std after transform = {}",
                c,
                var.sqrt()
            );
        }
    }

    #[test]
    fn constant_column_does_not_divide_by_zero() {
        let x = Array2::from_shape_vec((3, 1), vec![5.0, 5.0, 5.0]).unwrap();
        let t = Scaler::fit(&x).transform(&x);
        assert!(t.iter().all(|v| v.is_finite()));
    }
}
