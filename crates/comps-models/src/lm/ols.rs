//! General least-squares fit for multi-predictor designs
//!
//! Coefficients are estimated with an SVD-based least-squares solve rather
//! than normal-equations inversion; building and lot areas are positively
//! correlated in this market, and the conditioning of the solve is inspected
//! so a near-singular design fails loudly instead of returning noise.

use ndarray_linalg::LeastSquaresSvd;

use crate::error::{ModelError, Result};
use crate::lm::{Matrix, Predictor, Vector};
use comps_core::data::Dataset;

/// Condition numbers above this are treated as rank-deficient in practice.
const MAX_CONDITION: f64 = 1e12;

/// Result of fitting one design to the dataset's sale prices
///
/// Immutable once produced. The coefficient vector follows design order with
/// the intercept first; residuals are actual minus predicted.
#[derive(Debug, Clone)]
pub struct FittedModel {
    /// Predictor names in design order (intercept excluded)
    pub predictor_names: Vec<&'static str>,
    /// Coefficients, intercept first
    pub coefficients: Vector,
    /// Predicted sale price per observation
    pub fitted_values: Vector,
    /// Residuals (actual − predicted)
    pub residuals: Vector,
    /// Observed sale prices
    pub y: Vector,
    /// R-squared, reported as computed (not clamped to [0, 1])
    pub r_squared: f64,
    /// Number of observations
    pub n_obs: usize,
    /// Number of parameters including the intercept
    pub n_params: usize,
}

impl FittedModel {
    /// Fit a linear model of sale price on the given predictors
    ///
    /// Builds the design matrix `[1 | p1 | p2 | …]` and solves the
    /// least-squares problem by SVD. An empty predictor list fits the
    /// intercept-only model.
    pub fn fit(dataset: &Dataset, predictors: &[Predictor]) -> Result<Self> {
        let n = dataset.len();
        let p = predictors.len() + 1;

        if n < p {
            return Err(ModelError::InsufficientData {
                n_samples: n,
                n_params: p,
            });
        }

        let mut x = Matrix::zeros((n, p));
        for (i, obs) in dataset.iter().enumerate() {
            x[(i, 0)] = 1.0;
            for (j, predictor) in predictors.iter().enumerate() {
                x[(i, j + 1)] = predictor.value(obs);
            }
        }
        let y = dataset.prices();

        let ls = x
            .least_squares(&y)
            .map_err(|e| ModelError::Numerical {
                message: format!("SVD least squares failed: {e}"),
                operation: "least_squares".to_string(),
            })?;

        // Rank and conditioning inspection: a non-unique solution must not
        // be reported as if it were a real estimate.
        let rank = ls.rank as usize;
        let s_max = ls.singular_values.iter().cloned().fold(0.0, f64::max);
        let s_min = ls
            .singular_values
            .iter()
            .cloned()
            .fold(f64::INFINITY, f64::min);
        let condition = if s_min > 0.0 { s_max / s_min } else { f64::INFINITY };

        if rank < p || condition > MAX_CONDITION {
            return Err(ModelError::DegenerateFit {
                rank,
                n_params: p,
                condition,
            });
        }

        let coefficients = ls.solution;
        let fitted_values = x.dot(&coefficients);
        let residuals = &y - &fitted_values;

        let rss = residuals.mapv(|r| r * r).sum();
        let y_mean = y.mean().unwrap_or(0.0);
        let tss = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum::<f64>();

        if tss <= 0.0 {
            return Err(ModelError::ArithmeticDomain {
                message: "response has zero variance, R-squared is undefined".to_string(),
                operation: "fit".to_string(),
            });
        }
        let r_squared = 1.0 - rss / tss;

        Ok(Self {
            predictor_names: predictors.iter().map(Predictor::name).collect(),
            coefficients,
            fitted_values,
            residuals,
            y,
            r_squared,
            n_obs: n,
            n_params: p,
        })
    }

    /// Intercept term
    pub fn intercept(&self) -> f64 {
        self.coefficients[0]
    }

    /// Coefficient for a named predictor, if it is part of this design
    pub fn coefficient(&self, name: &str) -> Option<f64> {
        self.predictor_names
            .iter()
            .position(|&n| n == name)
            .map(|idx| self.coefficients[idx + 1])
    }

    /// Root-mean-squared residual
    pub fn rmse(&self) -> f64 {
        (self.residuals.mapv(|r| r * r).sum() / self.n_obs as f64).sqrt()
    }

    /// Mean absolute residual
    pub fn mean_absolute_error(&self) -> f64 {
        self.residuals.mapv(f64::abs).sum() / self.n_obs as f64
    }

    /// Per-observation percent error, residual / actual × 100
    pub fn percent_errors(&self) -> Vector {
        // price > 0 is a dataset invariant, so the division is safe
        (&self.residuals / &self.y) * 100.0
    }
}
