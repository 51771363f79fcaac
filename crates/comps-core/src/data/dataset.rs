//! Immutable ordered collection of observations

use serde::{Deserialize, Serialize};

use super::{DataError, FloatArray, Observation, Result};

/// An ordered, read-only set of comparable sales
///
/// Order is irrelevant to every computation but preserved for reporting.
/// Constructed once at startup; every observation has already passed
/// positivity validation.
#[derive(Debug, Clone)]
pub struct Dataset {
    observations: Vec<Observation>,
}

/// Range and central-tendency summary of a dataset
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of observations
    pub n: usize,
    /// Building area range (min, max)
    pub building_range: (f64, f64),
    /// Lot area range (min, max)
    pub lot_range: (f64, f64),
    /// Sale price range (min, max)
    pub price_range: (f64, f64),
    /// Median building area
    pub median_building_sqft: f64,
    /// Median lot area
    pub median_lot_sqft: f64,
}

impl Dataset {
    /// Create a dataset from pre-built observations
    ///
    /// Fails on an empty input. Individual observations are validated at
    /// their own construction time.
    pub fn new(observations: Vec<Observation>) -> Result<Self> {
        if observations.is_empty() {
            return Err(DataError::EmptyDataset);
        }
        Ok(Self { observations })
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the dataset is empty (never true for a constructed dataset)
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Iterate over observations in load order
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Observations as a slice
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Sale prices as a response vector, in load order
    pub fn prices(&self) -> FloatArray {
        self.observations.iter().map(|o| o.price).collect()
    }

    /// Mean sale price
    pub fn mean_price(&self) -> f64 {
        let total: f64 = self.observations.iter().map(|o| o.price).sum();
        total / self.observations.len() as f64
    }

    /// Median building area
    pub fn median_building_sqft(&self) -> f64 {
        quantile(self.observations.iter().map(|o| o.building_sqft), 0.5)
    }

    /// Median lot area
    pub fn median_lot_sqft(&self) -> f64 {
        quantile(self.observations.iter().map(|o| o.lot_sqft), 0.5)
    }

    /// Median price per square foot of building area
    ///
    /// Fails if any unit price is non-finite, which would poison the median.
    pub fn median_unit_price(&self) -> Result<f64> {
        let unit_prices: Vec<f64> = self.observations.iter().map(|o| o.unit_price()).collect();
        if let Some(bad) = unit_prices.iter().find(|v| !v.is_finite()) {
            return Err(DataError::ArithmeticDomain(format!(
                "non-finite unit price {bad} while computing the median"
            )));
        }
        Ok(quantile(unit_prices.into_iter(), 0.5))
    }

    /// Range and median summary for the report header
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            n: self.len(),
            building_range: range(self.observations.iter().map(|o| o.building_sqft)),
            lot_range: range(self.observations.iter().map(|o| o.lot_sqft)),
            price_range: range(self.observations.iter().map(|o| o.price)),
            median_building_sqft: self.median_building_sqft(),
            median_lot_sqft: self.median_lot_sqft(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

/// Linearly interpolated quantile of a non-empty sequence
fn quantile(values: impl Iterator<Item = f64>, q: f64) -> f64 {
    let mut sorted: Vec<f64> = values.collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let idx = (sorted.len() as f64 - 1.0) * q;
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = idx - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

/// (min, max) of a non-empty sequence
fn range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
