//! Regression engine and adjustment comparator
//!
//! This crate fits linear models to a comparable-sales dataset and compares
//! the regression-derived lot-size adjustment against the industry
//! percentage-of-value heuristic.
//!
//! Two fitting paths are provided:
//! - [`lm::FittedModel::fit`] — general multi-predictor least squares via a
//!   numerically stable SVD solve,
//! - [`lm::SimpleRegression::fit`] — the closed-form univariate estimator
//!   with t-distribution inference on the slope.

pub mod adjustment;
pub mod error;
pub mod lm;

pub use adjustment::{compare, ComparisonReport, TargetRange, Verdict};
pub use error::{ModelError, Result};
pub use lm::{FittedModel, Predictor, SimpleRegression};
