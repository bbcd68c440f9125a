use crate::ModelError;
use crate::metric::{mean_absolute_error, mean_squared_error, r2_score, root_mean_squared_error};
use crate::traits::Regressor;
use crate::utility::{remove_element, remove_row};
use log::{error, info, trace};
use ndarray::{Array1, ArrayView1, ArrayView2};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Smallest dataset that leaves a non-empty training set in every fold
const MIN_SAMPLES: usize = 2;

/// Regression error measures collected from the held-out predictions of a validation run.
///
/// # Fields
///
/// - `mean_absolute_error` - Mean absolute error of the held-out predictions
/// - `mean_squared_error` - Mean squared error of the held-out predictions
/// - `root_mean_squared_error` - Square root of the mean squared error
/// - `coefficient_of_determination` - R^2 of the held-out predictions against the targets
/// - `predictions` - Held-out prediction for every sample, in sample order
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    mean_absolute_error: f64,
    mean_squared_error: f64,
    root_mean_squared_error: f64,
    coefficient_of_determination: f64,
    predictions: Array1<f64>,
}

impl ValidationResult {
    /// Computes all measures of `predictions` against the true `targets`
    ///
    /// # Panics
    ///
    /// - Panics if the two arrays have different lengths
    pub fn new(targets: ArrayView1<f64>, predictions: Array1<f64>) -> Self {
        ValidationResult {
            mean_absolute_error: mean_absolute_error(&targets, &predictions),
            mean_squared_error: mean_squared_error(&targets, &predictions),
            root_mean_squared_error: root_mean_squared_error(&targets, &predictions),
            coefficient_of_determination: r2_score(&targets, &predictions),
            predictions,
        }
    }

    get_field!(get_mean_absolute_error, mean_absolute_error, f64);

    get_field!(get_mean_squared_error, mean_squared_error, f64);

    get_field!(get_root_mean_squared_error, root_mean_squared_error, f64);

    get_field!(
        get_coefficient_of_determination,
        coefficient_of_determination,
        f64
    );

    /// Returns the held-out predictions; entry `i` was made by the model trained without sample `i`
    pub fn get_predictions(&self) -> &Array1<f64> {
        &self.predictions
    }

    /// Generates a formatted summary of the measures
    ///
    /// # Returns
    ///
    /// * `String` - A multi-line report of the four measures and the fold count
    pub fn summary(&self) -> String {
        format!(
            "Leave-one-out validation over {} folds:\n\
             - Mean absolute error:          {:.6}\n\
             - Mean squared error:           {:.6}\n\
             - Root mean squared error:      {:.6}\n\
             - Coefficient of determination: {:.6}",
            self.predictions.len(),
            self.mean_absolute_error,
            self.mean_squared_error,
            self.root_mean_squared_error,
            self.coefficient_of_determination
        )
    }
}

/// Leave-one-out cross-validation for regression models.
///
/// For a dataset of N samples the model is trained N times, each time on every sample
/// except one, and then asked to predict the sample it did not see. The held-out
/// predictions are scored against the true targets.
///
/// Folds run in sample order. The first error raised by the model ends the run and is
/// returned as is; no partial result is produced.
///
/// # Examples
/// ```rust
/// use knn_loocv::machine_learning::LinearRegression;
/// use knn_loocv::validation::LeaveOneOutCrossValidation;
/// use ndarray::array;
///
/// let x = array![[0.0], [1.0], [2.0], [3.0]];
/// let y = array![0.0, 1.0, 2.0, 3.0];
///
/// let mut model = LinearRegression::default();
/// let result = LeaveOneOutCrossValidation::new()
///     .run(&mut model, x.view(), y.view())
///     .unwrap();
///
/// assert!(result.get_mean_absolute_error() < 1e-8);
/// assert!((result.get_coefficient_of_determination() - 1.0).abs() < 1e-8);
/// println!("{}", result.summary());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LeaveOneOutCrossValidation {
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl LeaveOneOutCrossValidation {
    /// Creates a validator without cancellation support
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator that stops before the next fold once `flag` is set
    pub fn with_cancellation(flag: Arc<AtomicBool>) -> Self {
        LeaveOneOutCrossValidation {
            cancel_flag: Some(flag),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Runs leave-one-out validation, retraining `model` from scratch in every fold
    ///
    /// # Parameters
    ///
    /// - `model` - The regression model; its `fit` must discard what it learned before
    /// - `x` - Feature matrix, each row is a sample
    /// - `y` - Target value of every sample
    ///
    /// # Returns
    ///
    /// - `Ok(ValidationResult)` - Error measures over all held-out predictions
    /// - `Err(ModelError::InputValidationError)` - If `x` and `y` disagree in length or contain NaN or infinite values
    /// - `Err(ModelError::InsufficientData)` - If there are fewer than two samples
    /// - `Err(ModelError::Cancelled)` - If the cancellation flag was set
    /// - `Err(ModelError)` - The first error raised by the model's `fit` or `predict_one`
    pub fn run<R>(
        &self,
        model: &mut R,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
    ) -> Result<ValidationResult, ModelError>
    where
        R: Regressor + ?Sized,
    {
        self.run_folds(x, y, |x_train, y_train, held_out| {
            model.fit(x_train, y_train)?;
            model.predict_one(held_out)
        })
    }

    /// Runs leave-one-out validation with a fresh model from `factory` in every fold
    ///
    /// No state can carry over between folds, whatever the model's `fit` does.
    /// Errors are the same as for [`LeaveOneOutCrossValidation::run`].
    pub fn run_with_factory<R, F>(
        &self,
        mut factory: F,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
    ) -> Result<ValidationResult, ModelError>
    where
        R: Regressor,
        F: FnMut() -> R,
    {
        self.run_folds(x, y, |x_train, y_train, held_out| {
            let mut model = factory();
            model.fit(x_train, y_train)?;
            model.predict_one(held_out)
        })
    }

    fn run_folds<F>(
        &self,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        mut fold: F,
    ) -> Result<ValidationResult, ModelError>
    where
        F: FnMut(ArrayView2<f64>, ArrayView1<f64>, ArrayView1<f64>) -> Result<f64, ModelError>,
    {
        check_dataset(x, y)?;

        let n_samples = x.nrows();
        let mut predictions = Array1::<f64>::zeros(n_samples);

        for i in 0..n_samples {
            if self.is_cancelled() {
                info!(
                    "Leave-one-out validation cancelled after {} of {} folds",
                    i, n_samples
                );
                return Err(ModelError::Cancelled { completed_folds: i });
            }

            let x_train = remove_row(&x, i)?;
            let y_train = remove_element(&y, i)?;

            predictions[i] = fold(x_train.view(), y_train.view(), x.row(i)).inspect_err(|e| {
                error!("Fold {} of {} failed: {}", i + 1, n_samples, e);
            })?;

            trace!(
                "Fold {} of {}: target {}, prediction {}",
                i + 1,
                n_samples,
                y[i],
                predictions[i]
            );
        }

        let result = ValidationResult::new(y, predictions);
        info!(
            "Leave-one-out validation finished over {} folds, MAE: {}, MSE: {}, RMSE: {}, R2: {}",
            n_samples,
            result.mean_absolute_error,
            result.mean_squared_error,
            result.root_mean_squared_error,
            result.coefficient_of_determination
        );

        Ok(result)
    }
}

fn check_dataset(x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<(), ModelError> {
    if x.nrows() != y.len() {
        return Err(ModelError::InputValidationError(format!(
            "Input data and target vector have different lengths, x rows: {}, y length: {}",
            x.nrows(),
            y.len()
        )));
    }

    if x.nrows() < MIN_SAMPLES {
        return Err(ModelError::InsufficientData {
            required: MIN_SAMPLES,
            actual: x.nrows(),
        });
    }

    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(ModelError::InputValidationError(
            "Input data contains NaN or infinite values".to_string(),
        ));
    }

    Ok(())
}
