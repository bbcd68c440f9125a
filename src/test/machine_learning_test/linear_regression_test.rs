use super::*;
use crate::traits::Regressor;

#[test]
fn test_default_parameters() {
    let model = LinearRegression::default();
    assert!(model.get_fit_intercept());
    assert_eq!(model.get_epsilon(), 1e-12);
    assert_eq!(model.get_coefficients().unwrap_err(), ModelError::NotFitted);
    assert_eq!(model.get_intercept().unwrap_err(), ModelError::NotFitted);
}

#[test]
fn test_fit_recovers_exact_line() {
    // y = 2x + 1
    let x = array![[0.0], [1.0], [2.0], [3.0], [4.0]];
    let y = array![1.0, 3.0, 5.0, 7.0, 9.0];

    let mut model = LinearRegression::default();
    model.fit(x.view(), y.view()).unwrap();

    assert_abs_diff_eq!(model.get_intercept().unwrap(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(model.get_coefficients().unwrap()[0], 2.0, epsilon = 1e-9);

    let predictions = model.predict(array![[10.0], [-1.0]].view()).unwrap();
    assert_abs_diff_eq!(predictions[0], 21.0, epsilon = 1e-8);
    assert_abs_diff_eq!(predictions[1], -1.0, epsilon = 1e-8);
}

#[test]
fn test_fit_without_intercept() {
    let x = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
    let y = array![2.0, -1.0, 1.0];

    let mut model = LinearRegression::new(false, 1e-12);
    model.fit(x.view(), y.view()).unwrap();

    assert_eq!(model.get_intercept().unwrap(), 0.0);
    let coefficients = model.get_coefficients().unwrap();
    assert_abs_diff_eq!(coefficients[0], 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(coefficients[1], -1.0, epsilon = 1e-9);
}

#[test]
fn test_least_squares_on_noisy_data() {
    let x = array![[0.0], [1.0], [2.0], [3.0]];
    let y = array![1.0, 0.0, 3.0, 2.0];

    let mut model = LinearRegression::default();
    model.fit(x.view(), y.view()).unwrap();

    // slope = cov(x, y) / var(x) = 3.0 / 5.0, intercept = mean(y) - slope * mean(x)
    assert_abs_diff_eq!(model.get_coefficients().unwrap()[0], 0.6, epsilon = 1e-9);
    assert_abs_diff_eq!(model.get_intercept().unwrap(), 0.6, epsilon = 1e-9);
}

#[test]
fn test_refit_replaces_previous_solution() {
    let x = array![[0.0], [1.0], [2.0]];

    let mut model = LinearRegression::default();
    model.fit(x.view(), array![0.0, 1.0, 2.0].view()).unwrap();
    model.fit(x.view(), array![5.0, 5.0, 5.0].view()).unwrap();

    assert_abs_diff_eq!(model.get_coefficients().unwrap()[0], 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(model.get_intercept().unwrap(), 5.0, epsilon = 1e-9);
}

#[test]
fn test_fit_rejects_invalid_input() {
    let mut model = LinearRegression::default();

    let result = model.fit(array![[1.0], [2.0]].view(), array![1.0].view());
    assert!(matches!(result, Err(ModelError::InputValidationError(_))));

    let result = model.fit(array![[1.0], [2.0]].view(), array![1.0, f64::NAN].view());
    assert!(matches!(result, Err(ModelError::InputValidationError(_))));
}

#[test]
fn test_predict_errors() {
    let model = LinearRegression::default();
    assert_eq!(
        Regressor::predict_one(&model, array![1.0].view()).unwrap_err(),
        ModelError::NotFitted
    );

    let mut model = LinearRegression::default();
    model
        .fit(array![[1.0, 2.0], [2.0, 1.0], [3.0, 3.0]].view(), array![1.0, 2.0, 3.0].view())
        .unwrap();
    assert_eq!(
        model.predict(array![[1.0]].view()).unwrap_err(),
        ModelError::DimensionMismatch {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn test_regressor_trait() {
    let mut model = LinearRegression::default();
    Regressor::fit(&mut model, array![[0.0], [2.0]].view(), array![1.0, 5.0].view()).unwrap();
    let prediction = Regressor::predict_one(&model, array![1.0].view()).unwrap();
    assert_abs_diff_eq!(prediction, 3.0, epsilon = 1e-9);
}
