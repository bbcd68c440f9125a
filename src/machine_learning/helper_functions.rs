use super::*;

/// Performs validation checks on a training set.
///
/// This function validates that:
/// - The input data matrix is not empty
/// - The input data does not contain NaN or infinite values
/// - When a target length is provided, it matches the number of rows in the input data
///
/// # Parameters
///
/// - `x` - A 2D array of feature values where rows represent samples and columns represent features
/// - `n_targets` - The number of targets or labels paired with `x`, if any
///
/// # Returns
///
/// - `Ok(())` - If all validation checks pass
/// - `Err(ModelError::InputValidationError)` - If any validation check fails, with an informative error message
pub fn preliminary_check<S>(x: &ArrayBase<S, Ix2>, n_targets: Option<usize>) -> Result<(), ModelError>
where
    S: Data<Elem = f64>,
{
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(ModelError::InputValidationError(
            "Input data is empty".to_string(),
        ));
    }

    for (i, row) in x.outer_iter().enumerate() {
        for (j, &val) in row.iter().enumerate() {
            if !val.is_finite() {
                return Err(ModelError::InputValidationError(format!(
                    "Input data contains NaN or infinite value at position [{}][{}]",
                    i, j
                )));
            }
        }
    }

    if let Some(n_targets) = n_targets {
        if n_targets != x.nrows() {
            return Err(ModelError::InputValidationError(format!(
                "Input data and target vector have different lengths, x rows: {}, y length: {}",
                x.nrows(),
                n_targets
            )));
        }
    }
    Ok(())
}

/// Validates a single query sample against the feature count of a fitted model.
///
/// # Returns
///
/// - `Ok(())` - If the sample has `n_features` finite values
/// - `Err(ModelError::DimensionMismatch)` - If the sample has the wrong length
/// - `Err(ModelError::InputValidationError)` - If the sample contains NaN or infinite values
pub fn check_query<S>(query: &ArrayBase<S, Ix1>, n_features: usize) -> Result<(), ModelError>
where
    S: Data<Elem = f64>,
{
    if query.len() != n_features {
        return Err(ModelError::DimensionMismatch {
            expected: n_features,
            actual: query.len(),
        });
    }

    if let Some(pos) = query.iter().position(|v| !v.is_finite()) {
        return Err(ModelError::InputValidationError(format!(
            "Query contains NaN or infinite value at position {}",
            pos
        )));
    }

    Ok(())
}
