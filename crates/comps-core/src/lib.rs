//! Core data structures for comparable-sales regression analysis
//!
//! This crate provides the data layer consumed by the regression engine:
//! validated sale observations, the immutable dataset they form, and the
//! embedded Crown Heights comparables used by the analysis binary.

pub mod data;

pub use data::{DataError, Dataset, DatasetSummary, Observation, crown_heights_comps};
