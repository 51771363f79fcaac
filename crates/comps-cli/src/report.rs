//! Plain-text report rendering
//!
//! Formats numbers the pipeline has already computed; no statistics are
//! derived here.

use std::fmt;

use comps_core::data::DatasetSummary;
use comps_models::adjustment::ComparisonReport;
use comps_models::{FittedModel, SimpleRegression, Verdict};

const RULE: &str =
    "================================================================================";
const THIN_RULE: &str =
    "--------------------------------------------------------------------------------";

/// The full console report, assembled from computed results
pub struct Report<'a> {
    pub summary: DatasetSummary,
    pub model1: &'a SimpleRegression,
    pub model2: &'a FittedModel,
    pub model3: &'a FittedModel,
    pub comparison: &'a ComparisonReport,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.header(f)?;
        self.dataset_summary(f)?;
        self.model1_section(f)?;
        self.model2_section(f)?;
        self.model3_section(f)?;
        self.residual_section(f)?;
        self.comparison_section(f)?;
        self.recommendation_section(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "END OF ANALYSIS")?;
        writeln!(f, "{RULE}")
    }
}

impl Report<'_> {
    fn header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "LOT SIZE PREMIUM REGRESSION ANALYSIS")?;
        writeln!(f, "Crown Heights Comparable Properties")?;
        writeln!(f, "{RULE}")?;
        writeln!(f)
    }

    fn dataset_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        writeln!(f, "DATASET SUMMARY")?;
        writeln!(f, "{THIN_RULE}")?;
        writeln!(f, "Number of properties: {}", s.n)?;
        writeln!(
            f,
            "Building SQFT range: {:.0} - {:.0}",
            s.building_range.0, s.building_range.1
        )?;
        writeln!(
            f,
            "Lot SQFT range: {:.0} - {:.0}",
            s.lot_range.0, s.lot_range.1
        )?;
        writeln!(
            f,
            "Price range: {} - {}",
            dollars(s.price_range.0),
            dollars(s.price_range.1)
        )?;
        writeln!(f, "Median building SQFT: {:.0}", s.median_building_sqft)?;
        writeln!(f, "Median lot SQFT: {:.0}", s.median_lot_sqft)?;
        writeln!(f)
    }

    fn model1_section(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.model1;
        writeln!(f, "{RULE}")?;
        writeln!(f, "MODEL 1: SIMPLE LINEAR REGRESSION (LOT SIZE ONLY)")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Formula: Price = a + b * Lot_SQFT")?;
        writeln!(f)?;
        writeln!(f, "Intercept (a): {}", dollars(m.intercept))?;
        writeln!(f, "Slope (b): ${:.2} per SQFT", m.slope)?;
        writeln!(f, "R-squared: {:.4}", m.r_squared)?;
        writeln!(f, "P-value: {:.6}", m.p_value)?;
        writeln!(f, "Standard Error: ${:.2}", m.std_err)?;
        if m.significant() {
            writeln!(f, "Result is statistically significant (p < 0.05)")?;
        } else {
            writeln!(f, "Result is NOT statistically significant (p >= 0.05)")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Lot size alone explains {:.1}% of price variance",
            m.r_squared * 100.0
        )?;
        writeln!(f)
    }

    fn model2_section(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.model2;
        writeln!(f, "{RULE}")?;
        writeln!(f, "MODEL 2: MULTIPLE REGRESSION (BUILDING SQFT + LOT SIZE)")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Formula: Price = a + b1 * Building_SQFT + b2 * Lot_SQFT")?;
        writeln!(f)?;
        writeln!(f, "Intercept (a): {}", dollars(m.intercept()))?;
        write_coefficient(f, "Building SQFT coefficient (b1)", m, "building_sqft")?;
        write_coefficient(f, "Lot SQFT coefficient (b2)", m, "lot_sqft")?;
        writeln!(f, "R-squared: {:.4}", m.r_squared)?;
        writeln!(f)?;
        writeln!(
            f,
            "This model explains {:.1}% of price variance",
            m.r_squared * 100.0
        )?;
        writeln!(f)
    }

    fn model3_section(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.model3;
        writeln!(f, "{RULE}")?;
        writeln!(f, "MODEL 3: MULTIPLE REGRESSION (BUILDING + LOT + RENOVATION)")?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Formula: Price = a + b1 * Building_SQFT + b2 * Lot_SQFT + b3 * Renovated"
        )?;
        writeln!(f)?;
        writeln!(f, "Intercept (a): {}", dollars(m.intercept()))?;
        write_coefficient(f, "Building SQFT coefficient (b1)", m, "building_sqft")?;
        write_coefficient(f, "Lot SQFT coefficient (b2)", m, "lot_sqft")?;
        if let Some(c) = m.coefficient("renovated") {
            writeln!(f, "Renovation premium (b3): {}", dollars(c))?;
        }
        writeln!(f, "R-squared: {:.4}", m.r_squared)?;
        writeln!(f)?;
        writeln!(
            f,
            "This model explains {:.1}% of price variance",
            m.r_squared * 100.0
        )?;
        writeln!(f)
    }

    fn residual_section(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.comparison;
        writeln!(f, "{RULE}")?;
        writeln!(f, "RESIDUAL ANALYSIS (MODEL 3)")?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Root Mean Squared Error: {}",
            dollars(c.residual_summary.rmse)
        )?;
        writeln!(
            f,
            "Mean Absolute Error: {}",
            dollars(c.residual_summary.mean_absolute_error)
        )?;
        writeln!(f)?;
        writeln!(f, "RESIDUALS BY PROPERTY:")?;
        writeln!(f, "{THIN_RULE}")?;
        for r in &c.property_residuals {
            writeln!(
                f,
                "{:<25} Actual: {:>12}  Predicted: {:>12}  Error: {:>11} ({:>+5.1}%)",
                truncate(&r.address, 25),
                dollars(r.actual),
                dollars(r.predicted),
                dollars(r.residual),
                r.pct_error
            )?;
        }
        writeln!(f)
    }

    fn comparison_section(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.comparison;
        writeln!(f, "{RULE}")?;
        writeln!(f, "COMPARISON WITH INDUSTRY STANDARDS")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "PERCENTAGE-BASED METHOD (Industry Standard: 1% per 500 SQFT)")?;
        writeln!(f, "Formula: Adjustment = (Lot_Difference / 500) * 1% * Base_Value")?;
        writeln!(f)?;
        writeln!(
            f,
            "Typical property: {:.0} SQFT building * ${:.2}/SQFT = {}",
            c.baseline.median_building_sqft,
            c.baseline.median_unit_price,
            dollars(c.baseline.value)
        )?;
        writeln!(f, "Typical lot size: {:.0} SQFT", c.baseline.median_lot_sqft)?;
        writeln!(f)?;
        writeln!(f, "EXAMPLE ADJUSTMENTS:")?;
        writeln!(f, "{THIN_RULE}")?;
        for row in &c.rows {
            writeln!(
                f,
                "Lot size: {:>6.0} SQFT (delta {:>+5.0} SQFT)",
                row.lot_sqft, row.delta
            )?;
            writeln!(f, "  Percentage method: {:>12}", dollars_signed(row.percentage))?;
            writeln!(f, "  Regression method: {:>12}", dollars_signed(row.regression))?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn recommendation_section(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.comparison;
        writeln!(f, "{RULE}")?;
        writeln!(f, "RECOMMENDATIONS")?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "RECOMMENDED LOT SIZE ADJUSTMENT: ${:.2} per SQFT",
            c.recommended_adjustment
        )?;
        writeln!(f)?;
        writeln!(f, "RATIONALE:")?;
        writeln!(
            f,
            "  Derived from actual Crown Heights sales data (n={})",
            c.n_obs
        )?;
        writeln!(f, "  Accounts for building size and renovation status")?;
        writeln!(
            f,
            "  Model explains {:.1}% of price variance",
            c.model_r_squared * 100.0
        )?;
        writeln!(
            f,
            "  Root mean squared error: {} ({:.1}% of mean price)",
            dollars(c.residual_summary.rmse),
            c.residual_summary.rmse_pct_of_mean_price
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "TARGET RANGE (${:.0}-${:.0} per SQFT): estimate is {}",
            c.target.min, c.target.max, c.verdict
        )?;
        match c.verdict {
            Verdict::WithinRange => writeln!(
                f,
                "  ${:.2} falls within the target range",
                c.recommended_adjustment
            )?,
            Verdict::BelowRange => writeln!(
                f,
                "  ${:.2} is LOWER than the target range",
                c.recommended_adjustment
            )?,
            Verdict::AboveRange => writeln!(
                f,
                "  ${:.2} is HIGHER than the target range",
                c.recommended_adjustment
            )?,
        }
        writeln!(f)
    }
}

fn write_coefficient(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    model: &FittedModel,
    name: &str,
) -> fmt::Result {
    if let Some(c) = model.coefficient(name) {
        writeln!(f, "{label}: ${c:.2} per SQFT")?;
    }
    Ok(())
}

/// Format a dollar amount with thousands separators, rounded to whole dollars
fn dollars(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Like [`dollars`] but with an explicit sign for adjustments
fn dollars_signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", dollars(value))
    } else {
        dollars(value)
    }
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max { s } else { &s[..max] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollars_grouping() {
        assert_eq!(dollars(0.0), "$0");
        assert_eq!(dollars(950.0), "$950");
        assert_eq!(dollars(2_285_000.0), "$2,285,000");
        assert_eq!(dollars(-23_275.4), "-$23,275");
        assert_eq!(dollars(1_000.49), "$1,000");
    }

    #[test]
    fn test_dollars_signed() {
        assert_eq!(dollars_signed(23_275.0), "+$23,275");
        assert_eq!(dollars_signed(-23_275.0), "-$23,275");
        assert_eq!(dollars_signed(0.0), "+$0");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("674 Saint Marks Ave", 25), "674 Saint Marks Ave");
        assert_eq!(truncate("a very long address indeed", 10), "a very lon");
    }
}
