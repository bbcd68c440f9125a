pub use crate::error::ModelError;
pub use crate::traits::{Classifier, Regressor};

#[cfg(feature = "machine_learning")]
pub use crate::machine_learning::{
    Distance, DistanceCalculationMetric, KNN, Kernel, KernelType, LinearRegression,
    ScoreDirection, Similarity,
};

#[cfg(feature = "metric")]
pub use crate::metric::{mean_absolute_error, mean_squared_error, r2_score, root_mean_squared_error};

#[cfg(feature = "utility")]
pub use crate::utility::{remove_element, remove_row};

#[cfg(feature = "validation")]
pub use crate::validation::{LeaveOneOutCrossValidation, ValidationResult};
