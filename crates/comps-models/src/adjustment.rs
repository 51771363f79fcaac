//! Lot-size adjustment comparison
//!
//! Derives a typical-property baseline from dataset medians, then prices a
//! set of hypothetical lot-size deltas under two methods: the industry
//! percentage heuristic (±1% of baseline value per 500 sqft) and the fitted
//! regression coefficient. The recommended adjustment is the coefficient from
//! the richest model, judged against a caller-supplied target range.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lm::ols::FittedModel;
use comps_core::data::Dataset;


/// Industry heuristic: one percent of base value per 500 sqft of lot delta.
const HEURISTIC_PCT: f64 = 0.01;
const HEURISTIC_BLOCK_SQFT: f64 = 500.0;

/// Acceptable band for the recommended lot coefficient (dollars per sqft)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetRange {
    /// Lower bound, inclusive
    pub min: f64,
    /// Upper bound, inclusive
    pub max: f64,
}

impl Default for TargetRange {
    fn default() -> Self {
        // The appraiser's prior for this market: $100–$200 per sqft
        Self {
            min: 100.0,
            max: 200.0,
        }
    }
}

impl TargetRange {
    /// Judge a coefficient against the range
    pub fn verdict(&self, coefficient: f64) -> Verdict {
        if coefficient < self.min {
            Verdict::BelowRange
        } else if coefficient > self.max {
            Verdict::AboveRange
        } else {
            Verdict::WithinRange
        }
    }
}

/// Categorical comparison of the recommended coefficient to the target range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Coefficient falls inside the target range
    WithinRange,
    /// Coefficient is below the target range
    BelowRange,
    /// Coefficient is above the target range
    AboveRange,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::WithinRange => write!(f, "within range"),
            Verdict::BelowRange => write!(f, "below range"),
            Verdict::AboveRange => write!(f, "above range"),
        }
    }
}

/// Typical-property baseline derived from dataset medians
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Baseline {
    /// Median building area (sqft)
    pub median_building_sqft: f64,
    /// Median lot area (sqft)
    pub median_lot_sqft: f64,
    /// Median sale price per building sqft
    pub median_unit_price: f64,
    /// Baseline value: median building area × median unit price
    pub value: f64,
}

/// One hypothetical lot-size delta priced under both methods
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AdjustmentRow {
    /// Signed lot-size delta (sqft)
    pub delta: f64,
    /// Hypothetical lot size: median lot + delta
    pub lot_sqft: f64,
    /// Percentage-of-value adjustment (dollars)
    pub percentage: f64,
    /// Regression-coefficient adjustment (dollars)
    pub regression: f64,
}

/// Residual quality of the model behind the recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResidualSummary {
    /// Root-mean-squared residual (dollars)
    pub rmse: f64,
    /// Mean absolute residual (dollars)
    pub mean_absolute_error: f64,
    /// RMSE as a percentage of the mean sale price
    pub rmse_pct_of_mean_price: f64,
}

/// Prediction error for one comparable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyResidual {
    /// Property address
    pub address: String,
    /// Actual sale price
    pub actual: f64,
    /// Model-predicted sale price
    pub predicted: f64,
    /// Residual (actual − predicted)
    pub residual: f64,
    /// Residual as a percentage of the actual price
    pub pct_error: f64,
}

/// Full comparison of the two adjustment methods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Number of comparables behind the estimate
    pub n_obs: usize,
    /// Typical-property baseline
    pub baseline: Baseline,
    /// One row per requested delta, in request order
    pub rows: Vec<AdjustmentRow>,
    /// Residual quality of the recommending model
    pub residual_summary: ResidualSummary,
    /// Per-property prediction errors, in dataset order
    pub property_residuals: Vec<PropertyResidual>,
    /// R-squared of the recommending model
    pub model_r_squared: f64,
    /// Recommended adjustment: the fitted lot coefficient (dollars per sqft)
    pub recommended_adjustment: f64,
    /// Range the recommendation was judged against
    pub target: TargetRange,
    /// Verdict of that judgement
    pub verdict: Verdict,
}

/// Compare the percentage heuristic against the regression coefficient
///
/// `lot_coefficient` is the fitted coefficient for the lot-size predictor,
/// taken from the richest model; `model` supplies the residual diagnostics.
pub fn compare(
    dataset: &Dataset,
    model: &FittedModel,
    lot_coefficient: f64,
    deltas: &[f64],
    target: &TargetRange,
) -> Result<ComparisonReport> {
    let median_building_sqft = dataset.median_building_sqft();
    let median_lot_sqft = dataset.median_lot_sqft();
    let median_unit_price = dataset.median_unit_price()?;
    let baseline_value = median_building_sqft * median_unit_price;

    let rows = deltas
        .iter()
        .map(|&delta| AdjustmentRow {
            delta,
            lot_sqft: median_lot_sqft + delta,
            percentage: (delta / HEURISTIC_BLOCK_SQFT) * HEURISTIC_PCT * baseline_value,
            regression: delta * lot_coefficient,
        })
        .collect();

    let rmse = model.rmse();
    let residual_summary = ResidualSummary {
        rmse,
        mean_absolute_error: model.mean_absolute_error(),
        rmse_pct_of_mean_price: rmse / dataset.mean_price() * 100.0,
    };

    let pct_errors = model.percent_errors();
    let property_residuals = dataset
        .iter()
        .enumerate()
        .map(|(i, obs)| PropertyResidual {
            address: obs.address.clone(),
            actual: obs.price,
            predicted: model.fitted_values[i],
            residual: model.residuals[i],
            pct_error: pct_errors[i],
        })
        .collect();

    Ok(ComparisonReport {
        n_obs: dataset.len(),
        baseline: Baseline {
            median_building_sqft,
            median_lot_sqft,
            median_unit_price,
            value: baseline_value,
        },
        rows,
        residual_summary,
        property_residuals,
        model_r_squared: model.r_squared,
        recommended_adjustment: lot_coefficient,
        target: *target,
        verdict: target.verdict(lot_coefficient),
    })
}
