/// Error type shared by every model and helper in this crate
pub mod error;
pub use error::ModelError;

/// A macro that generates a getter method for any field.
///
/// This macro creates a public getter method that returns the value of the specified
/// field. The field type must be `Copy`.
///
/// # Parameters
///
/// - `$method_name` - The name of the getter method (e.g., get_k)
/// - `$field_name` - The name of the field to access (e.g., k)
/// - `$return_type` - The return type of the getter method
#[cfg(any(feature = "machine_learning", feature = "validation"))]
macro_rules! get_field {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name
        }
    };
}

/// A macro that generates a public getter method returning an optional field as a reference.
///
/// # Parameters
///
/// - `$method_name` - The identifier for the generated getter method name
/// - `$field_name` - The identifier of the struct field to access
/// - `$return_type` - The type expression for the return value (typically `Option<&Type>`)
#[cfg(feature = "machine_learning")]
macro_rules! get_field_as_ref {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field as a reference")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name.as_ref()
        }
    };
}

/// Module `math` contains the numeric building blocks used by the models and metrics.
///
/// # Distance Calculations
/// - `squared_euclidean_distance_row` - Squared Euclidean distance between two vectors
/// - `manhattan_distance_row` - Manhattan (L1) distance between two vectors
/// - `minkowski_distance_row` - Generalized Minkowski distance with parameter p
///
/// # Statistical Functions
/// - `sum_of_square_total` - Total variability measurement (SST)
/// - `sum_of_squared_errors` - Sum of squared prediction errors (SSE)
///
/// # Example
/// ```rust
/// use knn_loocv::math::{manhattan_distance_row, sum_of_square_total};
/// use ndarray::array;
///
/// let v1 = array![1.0, 2.0];
/// let v2 = array![4.0, 6.0];
/// assert_eq!(manhattan_distance_row(&v1, &v2), 7.0);
/// assert_eq!(sum_of_square_total(&array![1.0, 2.0, 3.0]), 2.0);
/// ```
#[cfg(feature = "math")]
pub mod math;

/// Module `machine_learning` provides the k-nearest-neighbor classifier, the similarity
/// measures it ranks neighbors by, and a least squares regressor.
///
/// # Classification
/// - **KNN**: K-Nearest Neighbors with a distance (Euclidean, Manhattan, Minkowski or custom)
///   or a kernel (Linear, Polynomial, RBF, Sigmoid or custom) as similarity
///
/// # Regression
/// - **LinearRegression**: Ordinary least squares with optional intercept
///
/// # Similarity
/// - `Distance` / `Kernel` - Traits for custom similarity functions
/// - `Similarity` - The active mode of a KNN model, exactly one of distance or kernel
///
/// # Examples
/// ```rust
/// use knn_loocv::machine_learning::*;
/// use ndarray::array;
///
/// let x = array![[0.0, 0.0], [0.0, 1.0], [5.0, 5.0], [5.0, 6.0]];
/// let y = array![0, 0, 1, 1];
///
/// let mut knn = KNN::default();
/// knn.set_kernel(KernelType::RBF { gamma: 0.5 });
/// knn.fit(x.view(), y.view()).unwrap();
/// assert_eq!(knn.predict_one(array![4.5, 5.5].view()).unwrap(), Some(1));
/// ```
#[cfg(feature = "machine_learning")]
pub mod machine_learning;

/// A convenience module that re-exports the most commonly used types and traits from this crate.
///
/// # Examples
/// ```rust
/// use knn_loocv::prelude::*;
///
/// let knn: KNN<i32> = KNN::default();
/// assert_eq!(knn.get_k(), 3);
/// ```
pub mod prelude;

/// Helpers for slicing datasets.
///
/// - **remove_row**: Copy of a 2D array without one row
/// - **remove_element**: Copy of a 1D array without one element
#[cfg(feature = "utility")]
pub mod utility;

/// Regression evaluation metrics.
///
/// - **mean_squared_error**: Average of squared differences between predicted and actual values
/// - **root_mean_squared_error**: Square root of MSE, providing error in original data units
/// - **mean_absolute_error**: Average magnitude of prediction errors without considering direction
/// - **r2_score**: Coefficient of determination measuring explained variance (R² score)
///
/// All functions take the true values first and the predictions second.
///
/// # Examples
/// ```rust
/// use knn_loocv::metric::*;
/// use ndarray::array;
///
/// let actuals = array![2.8, 2.1, 3.3, 4.2];
/// let predictions = array![3.0, 2.0, 3.5, 4.1];
/// let mse = mean_squared_error(&actuals, &predictions);
/// let r2 = r2_score(&actuals, &predictions);
/// assert!(mse < 0.05);
/// assert!(r2 > 0.9);
/// ```
#[cfg(feature = "metric")]
pub mod metric;

/// Traits the models in this crate implement and the validator consumes
pub mod traits;

/// Leave-one-out cross-validation for regression models.
///
/// See [`validation::LeaveOneOutCrossValidation`].
#[cfg(feature = "validation")]
pub mod validation;
