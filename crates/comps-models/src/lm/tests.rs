//! Tests for the linear model engine
//!
//! Covers the general SVD path, the closed-form univariate path, and the
//! agreement between the two on a single-predictor design.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::error::ModelError;
use crate::lm::{FittedModel, Predictor, SimpleRegression};
use comps_core::data::{crown_heights_comps, Dataset, Observation};

// ==================== Test Fixtures ====================

fn obs(building: f64, lot: f64, price: f64, renovated: bool) -> Observation {
    Observation::new("fixture", building, lot, price, renovated, "1/1/2024").unwrap()
}

/// Exact plane: price = 500_000 + 100·building + 200·lot + 50_000·renovated
fn exact_plane_data() -> Dataset {
    let rows = [
        (2000.0, 1000.0, true),
        (2500.0, 1500.0, false),
        (3000.0, 1200.0, true),
        (3500.0, 2000.0, false),
        (4000.0, 1800.0, true),
        (4500.0, 2500.0, false),
    ];
    Dataset::new(
        rows.into_iter()
            .map(|(b, l, r)| {
                let price =
                    500_000.0 + 100.0 * b + 200.0 * l + if r { 50_000.0 } else { 0.0 };
                obs(b, l, price, r)
            })
            .collect(),
    )
    .unwrap()
}

/// Exact line in lot size: price = 1_000_000 + 300·lot
fn exact_line_data() -> Dataset {
    Dataset::new(
        [1000.0, 1500.0, 2000.0, 2500.0, 3000.0]
            .into_iter()
            .map(|l| obs(2500.0, l, 1_000_000.0 + 300.0 * l, true))
            .collect(),
    )
    .unwrap()
}

fn all_predictors() -> [Predictor; 3] {
    [
        Predictor::building_sqft(),
        Predictor::lot_sqft(),
        Predictor::renovated(),
    ]
}

// ==================== General Solver Tests ====================

#[test]
fn test_fit_recovers_exact_plane() {
    let ds = exact_plane_data();
    let model = FittedModel::fit(&ds, &all_predictors()).unwrap();

    assert_eq!(model.n_obs, 6);
    assert_eq!(model.n_params, 4);
    assert_relative_eq!(model.intercept(), 500_000.0, max_relative = 1e-8);
    assert_relative_eq!(
        model.coefficient("building_sqft").unwrap(),
        100.0,
        max_relative = 1e-8
    );
    assert_relative_eq!(
        model.coefficient("lot_sqft").unwrap(),
        200.0,
        max_relative = 1e-8
    );
    assert_relative_eq!(
        model.coefficient("renovated").unwrap(),
        50_000.0,
        max_relative = 1e-8
    );
    assert_abs_diff_eq!(model.r_squared, 1.0, epsilon = 1e-10);
}

#[test]
fn test_fit_residual_convention() {
    let ds = crown_heights_comps().unwrap();
    let model = FittedModel::fit(&ds, &all_predictors()).unwrap();

    // residual = actual − predicted, one per observation
    assert_eq!(model.residuals.len(), ds.len());
    for (i, o) in ds.iter().enumerate() {
        assert_abs_diff_eq!(
            model.residuals[i],
            o.price - model.fitted_values[i],
            epsilon = 1e-6
        );
    }

    // with an intercept, residuals sum to zero
    assert_abs_diff_eq!(model.residuals.sum(), 0.0, epsilon = 1.0);
}

#[test]
fn test_fit_intercept_only() {
    let ds = crown_heights_comps().unwrap();
    let model = FittedModel::fit(&ds, &[]).unwrap();

    assert_eq!(model.n_params, 1);
    assert_relative_eq!(model.intercept(), ds.mean_price(), max_relative = 1e-10);
    assert_abs_diff_eq!(model.r_squared, 0.0, epsilon = 1e-10);
}

#[test]
fn test_fit_insufficient_data() {
    let ds = Dataset::new(vec![
        obs(2000.0, 1000.0, 2_000_000.0, true),
        obs(2500.0, 1500.0, 2_200_000.0, false),
        obs(3000.0, 1200.0, 2_400_000.0, true),
    ])
    .unwrap();

    let result = FittedModel::fit(&ds, &all_predictors());
    match result.unwrap_err() {
        ModelError::InsufficientData {
            n_samples,
            n_params,
        } => {
            assert_eq!(n_samples, 3);
            assert_eq!(n_params, 4);
        }
        other => panic!("expected InsufficientData, got {other:?}"),
    }
}

#[test]
fn test_fit_duplicate_predictor_is_degenerate() {
    let ds = crown_heights_comps().unwrap();

    let result = FittedModel::fit(&ds, &[Predictor::lot_sqft(), Predictor::lot_sqft()]);
    assert!(matches!(
        result.unwrap_err(),
        ModelError::DegenerateFit { .. }
    ));
}

#[test]
fn test_fit_constant_predictor_is_degenerate() {
    // A constant extraction is perfectly collinear with the intercept column
    let constant = Predictor::new("constant", |_| 1.0);
    let ds = crown_heights_comps().unwrap();

    let result = FittedModel::fit(&ds, &[constant, Predictor::lot_sqft()]);
    assert!(matches!(
        result.unwrap_err(),
        ModelError::DegenerateFit { .. }
    ));
}

#[test]
fn test_fit_zero_variance_response() {
    let ds = Dataset::new(
        (0..5)
            .map(|i| obs(2000.0 + 100.0 * i as f64, 1000.0 + 50.0 * i as f64, 2_000_000.0, true))
            .collect(),
    )
    .unwrap();

    let result = FittedModel::fit(&ds, &[Predictor::lot_sqft()]);
    assert!(matches!(
        result.unwrap_err(),
        ModelError::ArithmeticDomain { .. }
    ));
}

#[test]
fn test_r_squared_invariant_to_row_order() {
    let ds = crown_heights_comps().unwrap();
    let mut reversed: Vec<Observation> = ds.observations().to_vec();
    reversed.reverse();
    let ds_reversed = Dataset::new(reversed).unwrap();

    let forward = FittedModel::fit(&ds, &all_predictors()).unwrap();
    let backward = FittedModel::fit(&ds_reversed, &all_predictors()).unwrap();

    assert_relative_eq!(forward.r_squared, backward.r_squared, max_relative = 1e-10);
}

#[test]
fn test_price_offset_shifts_only_intercept() {
    let ds = crown_heights_comps().unwrap();
    let offset = 250_000.0;
    let shifted = Dataset::new(
        ds.iter()
            .map(|o| {
                Observation::new(
                    o.address.clone(),
                    o.building_sqft,
                    o.lot_sqft,
                    o.price + offset,
                    o.renovated,
                    o.sale_date.clone(),
                )
                .unwrap()
            })
            .collect(),
    )
    .unwrap();

    let base = FittedModel::fit(&ds, &all_predictors()).unwrap();
    let moved = FittedModel::fit(&shifted, &all_predictors()).unwrap();

    assert_relative_eq!(
        moved.intercept(),
        base.intercept() + offset,
        max_relative = 1e-6
    );
    for name in ["building_sqft", "lot_sqft", "renovated"] {
        assert_relative_eq!(
            moved.coefficient(name).unwrap(),
            base.coefficient(name).unwrap(),
            max_relative = 1e-6
        );
    }
}

#[test]
fn test_nested_models_monotonic_r_squared() {
    let ds = crown_heights_comps().unwrap();

    let m1 = FittedModel::fit(&ds, &[Predictor::lot_sqft()]).unwrap();
    let m2 = FittedModel::fit(&ds, &[Predictor::building_sqft(), Predictor::lot_sqft()]).unwrap();
    let m3 = FittedModel::fit(&ds, &all_predictors()).unwrap();

    assert!(m2.r_squared >= m1.r_squared);
    assert!(m3.r_squared >= m2.r_squared);
    assert!(m3.r_squared > 0.0 && m3.r_squared <= 1.0);
}

#[test]
fn test_residual_diagnostics() {
    let ds = crown_heights_comps().unwrap();
    let model = FittedModel::fit(&ds, &all_predictors()).unwrap();

    let rmse = model.rmse();
    let mae = model.mean_absolute_error();
    assert!(rmse > 0.0 && rmse.is_finite());
    assert!(mae > 0.0 && mae <= rmse);

    let pct = model.percent_errors();
    assert_eq!(pct.len(), ds.len());
    for (i, o) in ds.iter().enumerate() {
        assert_relative_eq!(
            pct[i],
            model.residuals[i] / o.price * 100.0,
            max_relative = 1e-10
        );
    }
}

// ==================== Closed-Form Path Tests ====================

#[test]
fn test_simple_fit_exact_line() {
    let ds = exact_line_data();
    let fit = SimpleRegression::fit(&ds, &Predictor::lot_sqft()).unwrap();

    assert_relative_eq!(fit.slope, 300.0, max_relative = 1e-10);
    assert_relative_eq!(fit.intercept, 1_000_000.0, max_relative = 1e-10);
    assert_abs_diff_eq!(fit.r_squared, 1.0, epsilon = 1e-10);
    // a perfect fit leaves no residual variance
    assert_abs_diff_eq!(fit.std_err, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(fit.p_value, 0.0, epsilon = 1e-12);
    assert_eq!(fit.df, 3);
}

#[test]
fn test_simple_fit_crown_heights_lot_only() {
    let ds = crown_heights_comps().unwrap();
    let fit = SimpleRegression::fit(&ds, &Predictor::lot_sqft()).unwrap();

    // Larger lots fetch higher prices in this sample
    assert!(fit.slope > 0.0);
    assert!(fit.r_squared > 0.0 && fit.r_squared < 1.0);
    assert!(fit.p_value >= 0.0 && fit.p_value <= 1.0);
    assert!(fit.std_err > 0.0);
    assert_eq!(fit.df, 9);

    // prediction is the fitted line
    assert_relative_eq!(
        fit.predict(2000.0),
        fit.intercept + fit.slope * 2000.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_simple_fit_insufficient_data() {
    let ds = Dataset::new(vec![
        obs(2000.0, 1000.0, 2_000_000.0, true),
        obs(2500.0, 1500.0, 2_200_000.0, false),
    ])
    .unwrap();

    assert!(matches!(
        SimpleRegression::fit(&ds, &Predictor::lot_sqft()).unwrap_err(),
        ModelError::InsufficientData { n_samples: 2, .. }
    ));
}

#[test]
fn test_simple_fit_zero_variance_predictor() {
    let ds = Dataset::new(
        (0..5)
            .map(|i| obs(2000.0 + 100.0 * i as f64, 2000.0, 2_000_000.0 + 10_000.0 * i as f64, true))
            .collect(),
    )
    .unwrap();

    assert!(matches!(
        SimpleRegression::fit(&ds, &Predictor::lot_sqft()).unwrap_err(),
        ModelError::ArithmeticDomain { .. }
    ));
}

// ==================== Path Agreement Tests ====================

#[test]
fn test_closed_form_agrees_with_svd_solver() {
    let ds = crown_heights_comps().unwrap();

    let closed = SimpleRegression::fit(&ds, &Predictor::lot_sqft()).unwrap();
    let general = FittedModel::fit(&ds, &[Predictor::lot_sqft()]).unwrap();

    assert_relative_eq!(
        closed.slope,
        general.coefficient("lot_sqft").unwrap(),
        max_relative = 1e-6
    );
    assert_relative_eq!(closed.intercept, general.intercept(), max_relative = 1e-6);
    assert_relative_eq!(closed.r_squared, general.r_squared, max_relative = 1e-6);
}

#[test]
fn test_predictor_values() {
    let renovated = obs(3200.0, 2000.0, 2_700_000.0, true);
    assert_eq!(Predictor::building_sqft().value(&renovated), 3200.0);
    assert_eq!(Predictor::lot_sqft().value(&renovated), 2000.0);
    assert_eq!(Predictor::renovated().value(&renovated), 1.0);
    assert_eq!(Predictor::lot_sqft().name(), "lot_sqft");
}
