use crate::math::{sum_of_square_total, sum_of_squared_errors};
use ndarray::{ArrayBase, Data, Ix1};


fn check_lengths(left: usize, right: usize) {
    if left != right {
        panic!(
            "Input arrays must have the same length. Predicted: {}, Actual: {}",
            left, right
        );
    }
}

/// Calculates the Mean Squared Error between predicted and actual values.
///
/// Mean Squared Error measures the average of the squared differences between predicted values and ground truth values.
///
/// # Parameters
///
/// - `y_true` - Ground-truth values for each sample
/// - `y_pred` - Predicted values for each sample
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use knn_loocv::metric::mean_squared_error;
///
/// let actual = array![3.0, -0.5, 2.0, 7.0];
/// let predicted = array![2.5, 0.0, 2.1, 7.8];
/// let mse = mean_squared_error(&actual, &predicted);
/// // MSE = (0.25 + 0.25 + 0.01 + 0.64) / 4 = 0.2875
/// assert!((mse - 0.2875).abs() < 1e-10);
/// ```
///
/// # Returns
///
/// - `f64` - Mean squared error (returns 0.0 when the input arrays are empty)
///
/// # Panics
///
/// - Panics if the two arrays have different lengths
pub fn mean_squared_error<S1, S2>(y_true: &ArrayBase<S1, Ix1>, y_pred: &ArrayBase<S2, Ix1>) -> f64
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    check_lengths(y_pred.len(), y_true.len());

    let n = y_true.len();
    if n == 0 {
        return 0.0;
    }

    sum_of_squared_errors(y_pred, y_true) / n as f64
}

/// Calculates the Root Mean Squared Error (RMSE) between predicted and actual values.
///
/// RMSE is the square root of the Mean Squared Error, giving a metric in the same units as the original data.
///
/// # Parameters
///
/// - `y_true` - Actual target values for each sample
/// - `y_pred` - Predicted values for each sample
///
/// # Examples
/// ```rust
/// use knn_loocv::metric::root_mean_squared_error;
/// use ndarray::array;
///
/// let targets = array![1.0, 2.0, 3.0];
/// let predictions = array![2.0, 3.0, 4.0];
/// let rmse = root_mean_squared_error(&targets, &predictions);
/// assert!((rmse - 1.0).abs() < 1e-6);
/// ```
///
/// # Returns
///
/// - `f64` - Root mean squared error (returns 0.0 when the input arrays are empty)
///
/// # Panics
///
/// - Panics if the two arrays have different lengths
pub fn root_mean_squared_error<S1, S2>(
    y_true: &ArrayBase<S1, Ix1>,
    y_pred: &ArrayBase<S2, Ix1>,
) -> f64
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    mean_squared_error(y_true, y_pred).max(0.0).sqrt()
}

/// Calculates the Mean Absolute Error (MAE) between predicted and actual values.
///
/// MAE measures the average absolute difference between predicted values and target values without considering error direction.
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use knn_loocv::metric::mean_absolute_error;
///
/// let targets = array![1.0, 2.0, 3.0];
/// let predictions = array![2.0, 3.0, 4.0];
/// // MAE = (|2 - 1| + |3 - 2| + |4 - 3|) / 3 = 1.0
/// assert!((mean_absolute_error(&targets, &predictions) - 1.0).abs() < 1e-6);
/// ```
///
/// # Returns
///
/// - `f64` - Mean absolute error (returns 0.0 when the input arrays are empty)
///
/// # Panics
///
/// - Panics if the two arrays have different lengths
pub fn mean_absolute_error<S1, S2>(y_true: &ArrayBase<S1, Ix1>, y_pred: &ArrayBase<S2, Ix1>) -> f64
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    check_lengths(y_pred.len(), y_true.len());

    if y_true.is_empty() {
        return 0.0;
    }

    let sum_absolute_errors = y_true
        .iter()
        .zip(y_pred.iter())
        .fold(0.0, |acc, (&actual, &pred)| acc + (pred - actual).abs());

    sum_absolute_errors / y_true.len() as f64
}

/// Calculate the R-squared (coefficient of determination) score.
///
/// R^2 measures how well predictions explain the variance in the target values using the formula R^2 = 1 - (SSE / SST).
///
/// When the targets are constant (SST within rounding error of zero, relative to the
/// squared magnitude of the targets) the ratio is undefined; the score is
/// 1.0 if the predictions reproduce the targets exactly and 0.0 otherwise.
///
/// # Parameters
///
/// - `y_true` - Actual target values for each sample
/// - `y_pred` - Predicted values for each sample
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use knn_loocv::metric::r2_score;
///
/// let actual = array![1.0, 3.0, 5.0];
/// let predicted = array![2.0, 3.0, 4.0];
/// // mean = 3, SSE = 1 + 0 + 1 = 2, SST = 4 + 0 + 4 = 8, so R^2 = 1 - (2/8) = 0.75
/// assert!((r2_score(&actual, &predicted) - 0.75).abs() < 1e-6);
/// ```
///
/// # Returns
///
/// - `f64` - R-squared value (returns 0.0 when the input arrays are empty)
///
/// # Panics
///
/// - Panics if the two arrays have different lengths
pub fn r2_score<S1, S2>(y_true: &ArrayBase<S1, Ix1>, y_pred: &ArrayBase<S2, Ix1>) -> f64
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    check_lengths(y_pred.len(), y_true.len());

    if y_true.is_empty() {
        return 0.0;
    }

    let sse = sum_of_squared_errors(y_pred, y_true);
    let sst = sum_of_square_total(y_true);

    // targets are constant when their spread is rounding noise relative to their magnitude
    let tolerance = f64::EPSILON * y_true.mapv(|v| v * v).sum();
    if sst <= tolerance {
        return if sse <= tolerance { 1.0 } else { 0.0 };
    }

    1.0 - (sse / sst)
}
