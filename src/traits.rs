use crate::ModelError;
use ndarray::{ArrayView1, ArrayView2};

/// A regression model that can be trained on a feature matrix and then queried one sample at a time.
///
/// Every call to `fit` must replace whatever the model learned before; leave-one-out
/// validation relies on this to retrain the same instance once per fold.
pub trait Regressor {
    /// Trains the model on `x` (samples × features) and the matching targets `y`.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - If training succeeded
    /// - `Err(ModelError)` - If the data is malformed or training failed
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<(), ModelError>;

    /// Predicts the target of a single sample.
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - The predicted value
    /// - `Err(ModelError::NotFitted)` - If `fit` has not been called yet
    fn predict_one(&self, x: ArrayView1<f64>) -> Result<f64, ModelError>;
}

/// A classifier that assigns a label of type `T` to a single sample.
pub trait Classifier<T> {
    /// Predicts the label of a single sample.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))` - The predicted label
    /// - `Ok(None)` - If no label could be chosen
    /// - `Err(ModelError)` - If the model is not usable for this query
    fn predict_one(&self, x: ArrayView1<f64>) -> Result<Option<T>, ModelError>;
}
