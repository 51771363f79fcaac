//! Embedded Crown Heights comparable sales
//!
//! The eleven arm's-length sales with valid prices and dates used by the
//! lot-size premium analysis. Building areas are width × depth × stories,
//! lot areas are width × depth, kept as the original survey arithmetic.

use super::{Dataset, Observation, Result};

/// Load the Crown Heights comparables as an immutable dataset
pub fn crown_heights_comps() -> Result<Dataset> {
    let records = [
        ("104 Brooklyn Ave", 16.0 * 40.0 * 4.0, 16.0 * 72.5, 2_285_000.0, true, "7/25/2025"),
        ("843 Prospect Pl", 18.75 * 50.0 * 4.0, 18.75 * 91.0, 2_530_000.0, true, "11/4/2025"),
        ("674 Saint Marks Ave", 20.0 * 50.0 * 5.0, 20.0 * 125.29, 2_875_000.0, true, "3/21/2025"),
        ("1323 Dean St", 20.0 * 38.0 * 5.0, 20.0 * 107.21, 2_700_000.0, true, "1/7/2025"),
        ("854 Prospect Place", 20.0 * 45.0 * 4.0, 20.0 * 140.58, 2_050_000.0, false, "11/19/2024"),
        ("845 Prospect Place", 18.75 * 50.0 * 4.0, 18.75 * 91.0, 2_650_000.0, true, "4/18/2024"),
        ("1113 Bergen St", 20.0 * 40.0 * 4.0, 20.0 * 100.0, 2_700_000.0, true, "1/9/2024"),
        ("1290 Pacific St", 30.0 * 45.0 * 4.0, 50.0 * 114.0, 3_300_000.0, true, "8/26/2024"),
        ("1354 Pacific St", 20.0 * 40.0 * 5.0, 20.0 * 100.0, 2_450_000.0, true, "4/10/2024"),
        ("1352 Pacific St", 20.0 * 50.0 * 4.5, 20.0 * 100.0, 2_622_500.0, true, "7/16/2025"),
        ("1306 Dean St", 20.0 * 50.0 * 4.0, 20.0 * 114.42, 1_980_000.0, false, "4/5/2024"),
    ];

    let observations = records
        .into_iter()
        .map(|(address, building, lot, price, renovated, sale_date)| {
            Observation::new(address, building, lot, price, renovated, sale_date)
        })
        .collect::<Result<Vec<_>>>()?;

    Dataset::new(observations)
}
