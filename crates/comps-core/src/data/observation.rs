//! Single comparable-sale observation

use serde::{Deserialize, Serialize};

use super::{DataError, Result};

/// One comparable property sale
///
/// Immutable once constructed. Areas are in square feet, price in dollars.
/// The sale date is informational only and never enters a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Street address, used as the row label in reports
    pub address: String,
    /// Gross building area (sqft)
    pub building_sqft: f64,
    /// Lot area (sqft)
    pub lot_sqft: f64,
    /// Recorded sale price (dollars)
    pub price: f64,
    /// Whether the property was renovated before sale
    pub renovated: bool,
    /// Sale date as recorded, informational
    pub sale_date: String,
}

impl Observation {
    /// Create a validated observation
    ///
    /// Fails if any of building area, lot area, or price is not strictly
    /// positive (or is NaN).
    pub fn new(
        address: impl Into<String>,
        building_sqft: f64,
        lot_sqft: f64,
        price: f64,
        renovated: bool,
        sale_date: impl Into<String>,
    ) -> Result<Self> {
        let address = address.into();

        for (field, value) in [
            ("building_sqft", building_sqft),
            ("lot_sqft", lot_sqft),
            ("price", price),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(DataError::InvalidObservation {
                    address,
                    field,
                    value,
                });
            }
        }

        Ok(Self {
            address,
            building_sqft,
            lot_sqft,
            price,
            renovated,
            sale_date: sale_date.into(),
        })
    }

    /// Renovation flag as a 0/1 regressor value
    pub fn renovated_indicator(&self) -> f64 {
        if self.renovated { 1.0 } else { 0.0 }
    }

    /// Sale price per square foot of building area
    pub fn unit_price(&self) -> f64 {
        // building_sqft > 0 is a construction invariant
        self.price / self.building_sqft
    }
}
