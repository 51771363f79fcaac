//! Closed-form univariate regression with slope inference
//!
//! The lot-only model additionally reports significance statistics, so it is
//! fit through the textbook closed form: slope and intercept from deviation
//! sums, R² from the Pearson correlation, and a two-sided p-value for the
//! slope from the t-distribution with n − 2 degrees of freedom. The estimate
//! must agree with the SVD solver on the same design (see the module tests).

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{ModelError, Result};
use crate::lm::Predictor;
use comps_core::data::Dataset;

/// Closed-form fit of sale price on a single predictor
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimpleRegression {
    /// Slope estimate (dollars per predictor unit)
    pub slope: f64,
    /// Intercept estimate (dollars)
    pub intercept: f64,
    /// R-squared from the Pearson correlation
    pub r_squared: f64,
    /// Two-sided p-value for the null hypothesis of zero slope
    pub p_value: f64,
    /// Standard error of the slope estimate
    pub std_err: f64,
    /// Residual degrees of freedom (n − 2)
    pub df: usize,
}

impl SimpleRegression {
    /// Fit the univariate model by the closed form
    pub fn fit(dataset: &Dataset, predictor: &Predictor) -> Result<Self> {
        let n = dataset.len();
        if n < 3 {
            // n − 2 degrees of freedom are needed for slope inference
            return Err(ModelError::InsufficientData {
                n_samples: n,
                n_params: 2,
            });
        }
        let nf = n as f64;

        let x: Vec<f64> = dataset.iter().map(|o| predictor.value(o)).collect();
        let y: Vec<f64> = dataset.iter().map(|o| o.price).collect();

        let x_mean = x.iter().sum::<f64>() / nf;
        let y_mean = y.iter().sum::<f64>() / nf;

        let ss_xx: f64 = x.iter().map(|&xi| (xi - x_mean).powi(2)).sum();
        let ss_yy: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let ss_xy: f64 = x
            .iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| (xi - x_mean) * (yi - y_mean))
            .sum();

        if ss_xx <= 0.0 {
            return Err(ModelError::ArithmeticDomain {
                message: format!("predictor '{}' has zero variance", predictor.name()),
                operation: "simple_fit".to_string(),
            });
        }
        if ss_yy <= 0.0 {
            return Err(ModelError::ArithmeticDomain {
                message: "response has zero variance, R-squared is undefined".to_string(),
                operation: "simple_fit".to_string(),
            });
        }

        let slope = ss_xy / ss_xx;
        let intercept = y_mean - slope * x_mean;

        let r = ss_xy / (ss_xx * ss_yy).sqrt();
        let r_squared = r * r;

        // Residual sum of squares through the identity RSS = SS_yy − β·SS_xy,
        // sigma² with n − 2 degrees of freedom
        let df = n - 2;
        let rss = (ss_yy - slope * ss_xy).max(0.0);
        let sigma2 = rss / df as f64;
        let std_err = (sigma2 / ss_xx).sqrt();

        let p_value = if std_err > 0.0 {
            let t = slope / std_err;
            let t_dist =
                StudentsT::new(0.0, 1.0, df as f64).map_err(|e| ModelError::Numerical {
                    message: format!("failed to create t-distribution: {e}"),
                    operation: "simple_fit".to_string(),
                })?;
            (2.0 * (1.0 - t_dist.cdf(t.abs()))).clamp(0.0, 1.0)
        } else {
            // A perfect fit leaves no residual variance; the slope is exact
            0.0
        };

        Ok(Self {
            slope,
            intercept,
            r_squared,
            p_value,
            std_err,
            df,
        })
    }

    /// Predicted price at a predictor value
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Whether the slope is significant at the 5% level
    pub fn significant(&self) -> bool {
        self.p_value < 0.05
    }
}
