//! Comparable-sales data structures
//!
//! This module provides the foundational data structures for the analysis:
//! individual sale observations, the validated dataset they form, and the
//! summary statistics the regression engine and reporter consume.

mod comps;
mod dataset;
mod observation;


// Re-exports
pub use comps::crown_heights_comps;
pub use dataset::{Dataset, DatasetSummary};
pub use observation::Observation;

/// Vector type alias for 1D arrays
pub type FloatArray = ndarray::Array1<f64>;

/// Error types specific to data operations
#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("Invalid observation '{address}': {field} must be positive, got {value}")]
    InvalidObservation {
        address: String,
        field: &'static str,
        value: f64,
    },

    #[error("Dataset is empty")]
    EmptyDataset,

    #[error("Arithmetic domain error: {0}")]
    ArithmeticDomain(String),
}

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;
