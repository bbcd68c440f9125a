use crate::ModelError;
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix1, Ix2};

fn indices_without(len: usize, index: usize) -> Vec<usize> {
    (0..len).filter(|&i| i != index).collect()
}

/// Returns a copy of `x` with row `index` removed
///
/// The remaining rows keep their original order and every column is preserved.
///
/// # Parameters
///
/// - `x` - A 2D array where rows represent samples and columns represent features
/// - `index` - The row to leave out
///
/// # Returns
///
/// - `Ok(Array2<f64>)` - An array with `x.nrows() - 1` rows
/// - `Err(ModelError::InputValidationError)` - If `index` is out of bounds
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use knn_loocv::utility::remove_row;
///
/// let x = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
/// let reduced = remove_row(&x, 1).unwrap();
/// assert_eq!(reduced, array![[1.0, 2.0], [5.0, 6.0]]);
/// ```
pub fn remove_row<S>(x: &ArrayBase<S, Ix2>, index: usize) -> Result<Array2<f64>, ModelError>
where
    S: Data<Elem = f64>,
{
    if index >= x.nrows() {
        return Err(ModelError::InputValidationError(format!(
            "Row index {} is out of bounds for an array with {} rows",
            index,
            x.nrows()
        )));
    }

    Ok(x.select(Axis(0), &indices_without(x.nrows(), index)))
}

/// Returns a copy of `y` with the element at `index` removed
///
/// Used alongside [`remove_row`] so that the remaining targets stay aligned with the remaining rows.
///
/// # Returns
///
/// - `Ok(Array1<f64>)` - An array with `y.len() - 1` elements
/// - `Err(ModelError::InputValidationError)` - If `index` is out of bounds
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use knn_loocv::utility::remove_element;
///
/// let y = array![1.0, 2.0, 3.0];
/// assert_eq!(remove_element(&y, 0).unwrap(), array![2.0, 3.0]);
/// ```
pub fn remove_element<S>(y: &ArrayBase<S, Ix1>, index: usize) -> Result<Array1<f64>, ModelError>
where
    S: Data<Elem = f64>,
{
    if index >= y.len() {
        return Err(ModelError::InputValidationError(format!(
            "Element index {} is out of bounds for an array of length {}",
            index,
            y.len()
        )));
    }

    Ok(y.select(Axis(0), &indices_without(y.len(), index)))
}
