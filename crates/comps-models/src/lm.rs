//! Linear models over comparable-sales data
//!
//! This module provides the two fitting paths used by the analysis:
//! the general SVD-based least-squares solver for multi-predictor designs
//! and the closed-form univariate estimator with slope inference.
//!
//! Predictors are named scalar extractions over an [`Observation`], so a
//! design is just an ordered predictor list; the intercept column is always
//! implicit and comes first in the coefficient vector.

pub mod ols;
pub mod simple;

#[cfg(test)]
mod tests;

// Re-exports
pub use ols::FittedModel;
pub use simple::SimpleRegression;

use comps_core::data::Observation;

/// Matrix type alias for 2D arrays
pub type Matrix = ndarray::Array2<f64>;

/// Vector type alias for 1D arrays
pub type Vector = ndarray::Array1<f64>;

/// A named scalar-valued predictor over an observation
#[derive(Debug, Clone, Copy)]
pub struct Predictor {
    name: &'static str,
    extract: fn(&Observation) -> f64,
}

impl Predictor {
    /// Create a predictor from a name and an extraction function
    pub const fn new(name: &'static str, extract: fn(&Observation) -> f64) -> Self {
        Self { name, extract }
    }

    /// Predictor name, used for coefficient lookup and reporting
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluate the predictor for one observation
    pub fn value(&self, obs: &Observation) -> f64 {
        (self.extract)(obs)
    }

    /// Lot area in square feet
    pub const fn lot_sqft() -> Self {
        Self::new("lot_sqft", |o| o.lot_sqft)
    }

    /// Building area in square feet
    pub const fn building_sqft() -> Self {
        Self::new("building_sqft", |o| o.building_sqft)
    }

    /// Renovation status as a 0/1 indicator
    pub const fn renovated() -> Self {
        Self::new("renovated", Observation::renovated_indicator)
    }
}
