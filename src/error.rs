use thiserror::Error;

/// Error types that can occur during model operations
///
/// # Variants
///
/// - `NotFitted` - The model has no training data yet
/// - `DimensionMismatch` - A query does not have the feature count the model was trained with
/// - `InsufficientData` - The dataset is too small for the requested operation
/// - `InputValidationError` - The input data does not meet the expected format or validation rules
/// - `ProcessingError` - Something went wrong while computing a result
/// - `Cancelled` - A cancellable run was stopped from outside
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error(
        "Model has not been fitted. Certain methods require the model to be fitted before use."
    )]
    NotFitted,
    #[error("Feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("Insufficient data: at least {required} samples are required, got {actual}")]
    InsufficientData { required: usize, actual: usize },
    #[error("Input validation error: {0}")]
    InputValidationError(String),
    #[error("Processing error: {0}")]
    ProcessingError(String),
    #[error("Run cancelled after {completed_folds} completed folds")]
    Cancelled { completed_folds: usize },
}

impl ModelError {
    /// Returns `true` when the error means the model cannot answer a query in its
    /// current configuration: it was never fitted, or the query has the wrong shape.
    pub fn is_unconfigured(&self) -> bool {
        matches!(
            self,
            ModelError::NotFitted | ModelError::DimensionMismatch { .. }
        )
    }
}
