use super::{check_query, preliminary_check};
use crate::ModelError;
use crate::traits::Regressor;
use log::debug;
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// # Linear Regression model implementation
///
/// Fits an ordinary least squares model through a singular value decomposition of the
/// design matrix. Rank-deficient and underdetermined problems get the minimum-norm solution.
///
/// ## Fields
///
/// - `coefficients` - Model coefficients (slopes), None before training
/// - `intercept` - Model intercept, None before training
/// - `fit_intercept` - Whether to include an intercept term in the model
/// - `epsilon` - Singular values below this are treated as zero
///
/// ## Examples
/// ```rust
/// use knn_loocv::machine_learning::linear_regression::LinearRegression;
/// use ndarray::array;
///
/// let mut model = LinearRegression::new(true, 1e-12);
/// let x = array![[1.0, 2.0], [2.0, 3.0], [3.0, 5.0], [4.0, 4.0]];
/// let y = array![9.0, 14.0, 22.0, 21.0]; // y = 1 + 2*x0 + 3*x1
/// model.fit(x.view(), y.view()).unwrap();
///
/// let predictions = model.predict(array![[5.0, 6.0]].view()).unwrap();
/// assert!((predictions[0] - 29.0).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct LinearRegression {
    /// Coefficients (slopes)
    coefficients: Option<Array1<f64>>,
    /// Intercept
    intercept: Option<f64>,
    /// Whether to fit an intercept
    fit_intercept: bool,
    /// Singular value cutoff for the least squares solve
    epsilon: f64,
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            fit_intercept: true,
            epsilon: 1e-12,
        }
    }
}

impl LinearRegression {
    /// Creates a new linear regression model with custom parameters
    pub fn new(fit_intercept: bool, epsilon: f64) -> Self {
        LinearRegression {
            coefficients: None,
            intercept: None,
            fit_intercept,
            epsilon,
        }
    }

    get_field!(get_fit_intercept, fit_intercept, bool);

    get_field!(get_epsilon, epsilon, f64);

    /// Returns the model coefficients if the model has been fitted
    ///
    /// # Returns
    ///
    /// - `Ok(&Array1<f64>)` - The model coefficients
    /// - `Err(ModelError::NotFitted)` - If the model has not been fitted yet
    pub fn get_coefficients(&self) -> Result<&Array1<f64>, ModelError> {
        self.coefficients.as_ref().ok_or(ModelError::NotFitted)
    }

    /// Returns the intercept term if the model has been fitted
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - The intercept value (0.0 when `fit_intercept` is false)
    /// - `Err(ModelError::NotFitted)` - If the model has not been fitted yet
    pub fn get_intercept(&self) -> Result<f64, ModelError> {
        self.intercept.ok_or(ModelError::NotFitted)
    }

    /// Fits the linear regression model by least squares
    ///
    /// # Parameters
    ///
    /// - `x` - Feature matrix, each row is a sample, each column is a feature
    /// - `y` - Target variable vector
    ///
    /// # Returns
    ///
    /// - `Ok(&mut self)` - Returns mutable reference to self for method chaining
    /// - `Err(ModelError::InputValidationError)` - Input does not match expectation
    /// - `Err(ModelError::ProcessingError)` - If the solve fails or produces non-finite values
    pub fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<&mut Self, ModelError> {
        preliminary_check(&x, Some(y.len()))?;
        if y.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::InputValidationError(
                "Target vector contains NaN or infinite values".to_string(),
            ));
        }

        let n_samples = x.nrows();
        let n_features = x.ncols();
        let offset = usize::from(self.fit_intercept);

        let design = DMatrix::from_fn(n_samples, n_features + offset, |i, j| {
            if j < offset { 1.0 } else { x[[i, j - offset]] }
        });
        let targets = DVector::from_iterator(n_samples, y.iter().copied());

        let solution = design
            .svd(true, true)
            .solve(&targets, self.epsilon)
            .map_err(|e| ModelError::ProcessingError(e.to_string()))?;

        if solution.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::ProcessingError(
                "Least squares solution contains NaN or infinite values".to_string(),
            ));
        }

        let intercept = if self.fit_intercept { solution[0] } else { 0.0 };
        let coefficients: Array1<f64> = solution.iter().skip(offset).copied().collect();

        debug!(
            "Linear regression fitted on {} samples, intercept: {}, coefficients: {}",
            n_samples, intercept, coefficients
        );

        self.coefficients = Some(coefficients);
        self.intercept = Some(intercept);

        Ok(self)
    }

    /// Makes predictions using the trained model
    ///
    /// # Parameters
    ///
    /// * `x` - Prediction data, each row is a sample, each column is a feature
    ///
    /// # Returns
    ///
    /// - `Ok(Array1<f64>)` - One prediction per row
    /// - `Err(ModelError::NotFitted)` - If the model has not been fitted yet
    /// - `Err(ModelError::DimensionMismatch)` - If number of features does not match training data
    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>, ModelError> {
        if x.nrows() == 0 {
            return Err(ModelError::InputValidationError(
                "Cannot predict on empty dataset".to_string(),
            ));
        }

        x.outer_iter()
            .map(|row| self.predict_row(row))
            .collect::<Result<Vec<f64>, ModelError>>()
            .map(Array1::from)
    }

    fn predict_row(&self, x: ArrayView1<f64>) -> Result<f64, ModelError> {
        let coefficients = self.coefficients.as_ref().ok_or(ModelError::NotFitted)?;
        check_query(&x, coefficients.len())?;

        Ok(self.intercept.unwrap_or(0.0) + x.dot(coefficients))
    }
}

impl Regressor for LinearRegression {
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<(), ModelError> {
        LinearRegression::fit(self, x, y).map(|_| ())
    }

    fn predict_one(&self, x: ArrayView1<f64>) -> Result<f64, ModelError> {
        self.predict_row(x)
    }
}
