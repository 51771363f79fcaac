//! Lot-size premium analysis binary
//!
//! Loads the embedded comparables, fits the three nested models, compares
//! the regression-derived adjustment against the industry heuristic, and
//! prints the plain-text report. Any computational failure aborts with a
//! diagnostic on stderr and a non-zero exit code.

mod cli;
mod report;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use comps_core::data::crown_heights_comps;
use comps_models::{adjustment, FittedModel, Predictor, SimpleRegression};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let target = cli.target_range()?;

    let dataset = crown_heights_comps().context("loading comparables")?;

    let model1 = SimpleRegression::fit(&dataset, &Predictor::lot_sqft())
        .context("fitting model 1 (lot only)")?;
    let model2 = FittedModel::fit(
        &dataset,
        &[Predictor::building_sqft(), Predictor::lot_sqft()],
    )
    .context("fitting model 2 (building + lot)")?;
    let model3 = FittedModel::fit(
        &dataset,
        &[
            Predictor::building_sqft(),
            Predictor::lot_sqft(),
            Predictor::renovated(),
        ],
    )
    .context("fitting model 3 (building + lot + renovation)")?;

    let lot_coef = model3
        .coefficient("lot_sqft")
        .context("model 3 is missing the lot_sqft coefficient")?;

    let comparison = adjustment::compare(&dataset, &model3, lot_coef, &cli.deltas, &target)
        .context("comparing adjustment methods")?;

    let report = report::Report {
        summary: dataset.summary(),
        model1: &model1,
        model2: &model2,
        model3: &model3,
        comparison: &comparison,
    };
    print!("{report}");

    Ok(())
}
