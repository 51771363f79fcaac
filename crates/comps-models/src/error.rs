//! Model-related error types

use thiserror::Error;

use comps_core::data::DataError;

/// Model-related errors
#[derive(Debug, Error)]
pub enum ModelError {
    /// Data-related error
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Insufficient data for model fitting
    #[error("Not enough data: {n_samples} samples for {n_params} parameters")]
    InsufficientData {
        /// Number of samples
        n_samples: usize,
        /// Number of parameters including the intercept
        n_params: usize,
    },

    /// Rank-deficient or near-singular design matrix
    #[error(
        "Degenerate fit: design matrix has rank {rank} of {n_params} \
         (condition number {condition:.3e})"
    )]
    DegenerateFit {
        /// Effective rank reported by the solver
        rank: usize,
        /// Number of parameters including the intercept
        n_params: usize,
        /// Ratio of largest to smallest singular value
        condition: f64,
    },

    /// Numerical computation error
    #[error("Numerical error: {message} (operation: {operation})")]
    Numerical {
        /// Error message
        message: String,
        /// Operation that failed
        operation: String,
    },

    /// Division by zero, zero-variance input, or similar domain violation
    #[error("Arithmetic domain error: {message} (operation: {operation})")]
    ArithmeticDomain {
        /// Error message
        message: String,
        /// Operation that failed
        operation: String,
    },
}

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
