//! Command-line surface
//!
//! The core contract is fixed; the flags only configure the target
//! coefficient range and the hypothetical delta list.

use clap::Parser;

use comps_models::TargetRange;

/// Lot-size premium regression analysis over the Crown Heights comparables
#[derive(Debug, Parser)]
#[command(name = "comps", version, about)]
pub struct Cli {
    /// Lower bound of the acceptable lot coefficient ($/sqft)
    #[arg(long, default_value_t = 100.0)]
    pub target_min: f64,

    /// Upper bound of the acceptable lot coefficient ($/sqft)
    #[arg(long, default_value_t = 200.0)]
    pub target_max: f64,

    /// Hypothetical lot-size deltas to price, in sqft
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = [-500.0, -200.0, 0.0, 200.0, 500.0, 1000.0]
    )]
    pub deltas: Vec<f64>,
}

impl Cli {
    /// Target range assembled from the bounds flags
    pub fn target_range(&self) -> anyhow::Result<TargetRange> {
        anyhow::ensure!(
            self.target_min <= self.target_max,
            "--target-min ({}) must not exceed --target-max ({})",
            self.target_min,
            self.target_max
        );
        Ok(TargetRange {
            min: self.target_min,
            max: self.target_max,
        })
    }
}
