use super::similarity::{Distance, Kernel, Similarity};
use super::{check_query, preliminary_check};
use crate::ModelError;
use crate::traits::Classifier;
use ahash::AHashMap;
use log::debug;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use std::hash::Hash;

/// K-Nearest Neighbors (KNN) Classifier
///
/// A non-parametric classification algorithm that classifies new data points
/// based on the majority class of its k nearest neighbors.
///
/// Closeness is measured by the active [`Similarity`]: a distance (smaller is closer)
/// or a kernel (larger is closer). Setting one replaces the other.
///
/// # Type Parameters
///
/// * `T` - The type of target labels. Must implement `Clone`, `Hash`, and `Eq` traits.
///
/// # Fields
///
/// - `k` - Number of neighbors to consider for classification, never below 1
/// - `x_train` - Training data features as a 2D array
/// - `y_train` - Training data labels
/// - `similarity` - Distance or kernel used for ranking neighbors
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use knn_loocv::machine_learning::knn::KNN;
/// use knn_loocv::machine_learning::{DistanceCalculationMetric, Similarity};
///
/// let x_train = array![[0.0, 0.0], [0.0, 1.0], [5.0, 5.0], [5.0, 6.0]];
/// let y_train = array![0, 0, 1, 1];
///
/// let mut knn = KNN::new(1, Similarity::distance(DistanceCalculationMetric::Euclidean));
/// knn.fit(x_train.view(), y_train.view()).unwrap();
///
/// assert_eq!(knn.predict_one(array![0.0, 0.5].view()).unwrap(), Some(0));
/// assert_eq!(knn.predict_one(array![5.0, 5.5].view()).unwrap(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct KNN<T> {
    k: usize,
    x_train: Option<Array2<f64>>,
    y_train: Option<Array1<T>>,
    similarity: Similarity,
}

impl<T: Clone + Hash + Eq> Default for KNN<T> {
    /// Creates a new KNN classifier with default parameters:
    /// - k = 3
    /// - similarity = Euclidean distance
    fn default() -> Self {
        KNN {
            k: 3,
            x_train: None,
            y_train: None,
            similarity: Similarity::default(),
        }
    }
}

impl<T: Clone + Hash + Eq> KNN<T> {
    /// Creates a new KNN classifier with the specified parameters
    ///
    /// # Parameters
    ///
    /// - `k` - Number of neighbors to use for classification (values below 1 are raised to 1)
    /// - `similarity` - Distance or kernel used to rank neighbors
    pub fn new(k: usize, similarity: Similarity) -> Self {
        KNN {
            k: k.max(1),
            x_train: None,
            y_train: None,
            similarity,
        }
    }

    get_field!(get_k, k, usize);

    /// Sets the number of neighbors, raising values below 1 to 1
    pub fn set_k(&mut self, k: usize) -> &mut Self {
        self.k = k.max(1);
        self
    }

    /// Returns the active similarity measure
    pub fn get_similarity(&self) -> &Similarity {
        &self.similarity
    }

    /// Installs a distance function and switches to distance mode
    pub fn set_distance<D: Distance + 'static>(&mut self, distance: D) -> &mut Self {
        self.similarity = Similarity::distance(distance);
        self
    }

    /// Installs a kernel function and switches to kernel mode
    pub fn set_kernel<K: Kernel + 'static>(&mut self, kernel: K) -> &mut Self {
        self.similarity = Similarity::kernel(kernel);
        self
    }

    /// Replaces the similarity measure
    pub fn set_similarity(&mut self, similarity: Similarity) -> &mut Self {
        self.similarity = similarity;
        self
    }

    get_field_as_ref!(get_x_train, x_train, Option<&Array2<f64>>);

    get_field_as_ref!(get_y_train, y_train, Option<&Array1<T>>);

    /// Fits the KNN classifier to the training data
    ///
    /// # Parameters
    ///
    /// - `x` - Training features as a 2D array (samples × features)
    /// - `y` - Training labels as a 1D array
    ///
    /// # Returns
    ///
    /// - `Ok(&mut Self)` - The instance
    /// - `Err(ModelError::InputValidationError)` - Input does not match expectation, or the
    ///   active similarity has an invalid parameter
    ///
    /// # Notes
    ///
    /// KNN is a lazy learning algorithm, and the calculation is done in the prediction phase.
    pub fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<T>) -> Result<&mut Self, ModelError> {
        self.similarity.validate()?;
        preliminary_check(&x, Some(y.len()))?;

        self.x_train = Some(x.to_owned());
        self.y_train = Some(y.to_owned());

        debug!(
            "KNN fitted with {} samples, {} features, k = {}",
            x.nrows(),
            x.ncols(),
            self.k
        );

        Ok(self)
    }

    fn training_data(&self) -> Result<(&Array2<f64>, &Array1<T>), ModelError> {
        match (&self.x_train, &self.y_train) {
            (Some(x), Some(y)) if x.nrows() > 0 && x.nrows() == y.len() => Ok((x, y)),
            _ => Err(ModelError::NotFitted),
        }
    }

    /// Scores `query` against every training sample, in training order
    fn scores(&self, query: ArrayView1<f64>, x_train: &Array2<f64>) -> Result<Vec<f64>, ModelError> {
        // a similarity installed after fit has not been checked yet
        self.similarity.validate()?;

        let scores: Vec<f64> = x_train
            .outer_iter()
            .map(|row| self.similarity.score(query, row))
            .collect();

        if let Some(i) = scores.iter().position(|s| s.is_nan()) {
            return Err(ModelError::ProcessingError(format!(
                "Similarity between the query and training sample {} is NaN",
                i
            )));
        }

        Ok(scores)
    }

    /// Returns the nearest training samples for `query`, closest first
    ///
    /// Samples are ranked by the active similarity with a stable sort, so samples with
    /// equal scores keep their training order. At most `k` entries are returned; when
    /// `k` exceeds the training set size every sample is returned.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<(usize, f64)>)` - Training row indices paired with their scores
    /// - `Err(ModelError::NotFitted)` - If the model has not been fitted yet
    /// - `Err(ModelError::DimensionMismatch)` - If `query` has the wrong number of features
    pub fn kneighbors(&self, query: ArrayView1<f64>) -> Result<Vec<(usize, f64)>, ModelError> {
        let (x_train, _) = self.training_data()?;
        check_query(&query, x_train.ncols())?;

        let scores = self.scores(query, x_train)?;
        Ok(self.rank(&scores))
    }

    fn rank(&self, scores: &[f64]) -> Vec<(usize, f64)> {
        let n_samples = scores.len();
        if self.k > n_samples {
            debug!(
                "k = {} exceeds the {} training samples, voting with all of them",
                self.k, n_samples
            );
        }
        let k = self.k.min(n_samples);

        let direction = self.similarity.direction();
        let mut ranked: Vec<(f64, usize)> = scores.iter().copied().zip(0..n_samples).collect();
        ranked.sort_by(|a, b| direction.compare(a.0, b.0));

        ranked
            .into_iter()
            .take(k)
            .map(|(score, idx)| (idx, score))
            .collect()
    }

    /// Predicts the label for a single data point
    ///
    /// With `k == 1` the label of the closest training sample is returned directly
    /// (the first one in training order when several are equally close). Otherwise the
    /// `k` closest samples vote; when labels tie on votes, the label whose first vote
    /// came from the closer neighbor wins.
    ///
    /// # Parameters
    ///
    /// * `x` - The data point to classify as a 1D array
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))` - The predicted label
    /// - `Ok(None)` - If no label received a vote
    /// - `Err(ModelError::NotFitted)` - If the model has not been fitted yet
    /// - `Err(ModelError::DimensionMismatch)` - If `x` has the wrong number of features
    pub fn predict_one(&self, x: ArrayView1<f64>) -> Result<Option<T>, ModelError> {
        let (x_train, y_train) = self.training_data()?;
        check_query(&x, x_train.ncols())?;

        let scores = self.scores(x, x_train)?;

        if self.k == 1 {
            let direction = self.similarity.direction();
            let best = scores
                .iter()
                .enumerate()
                .fold(None, |best: Option<(usize, f64)>, (i, &s)| match best {
                    Some((_, best_score)) if !direction.is_better(s, best_score) => best,
                    _ => Some((i, s)),
                });
            return Ok(best.map(|(i, _)| y_train[i].clone()));
        }

        let neighbors = self.rank(&scores);
        Ok(majority_vote(neighbors.iter().map(|&(idx, _)| &y_train[idx])))
    }

    /// Predicts labels for every row of `x`
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Option<T>>)` - One prediction per row, in row order
    /// - `Err(ModelError::InputValidationError)` - If `x` is empty
    /// - `Err(ModelError)` - The first error raised by [`KNN::predict_one`]
    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Vec<Option<T>>, ModelError> {
        if x.nrows() == 0 {
            return Err(ModelError::InputValidationError(
                "Input array is empty".to_string(),
            ));
        }

        x.outer_iter().map(|row| self.predict_one(row)).collect()
    }

    /// Fits the model with the training data and immediately predicts on the given test data.
    ///
    /// # Parameters
    ///
    /// - `x_train` - The training feature matrix with shape (n_samples, n_features)
    /// - `y_train` - The training labels
    /// - `x_test` - The test feature matrix with shape (n_samples, n_features)
    pub fn fit_predict(
        &mut self,
        x_train: ArrayView2<f64>,
        y_train: ArrayView1<T>,
        x_test: ArrayView2<f64>,
    ) -> Result<Vec<Option<T>>, ModelError> {
        self.fit(x_train, y_train)?;
        self.predict(x_test)
    }
}

impl<T: Clone + Hash + Eq> Classifier<T> for KNN<T> {
    fn predict_one(&self, x: ArrayView1<f64>) -> Result<Option<T>, ModelError> {
        KNN::predict_one(self, x)
    }
}

/// Picks the most frequent label, breaking ties by first appearance
pub(crate) fn majority_vote<'a, T, I>(labels: I) -> Option<T>
where
    T: Clone + Hash + Eq + 'a,
    I: IntoIterator<Item = &'a T>,
{
    // counts in first-seen order, slots index into it
    let mut counts: Vec<(&T, usize)> = Vec::new();
    let mut slots: AHashMap<&T, usize> = AHashMap::new();

    for label in labels {
        match slots.get(label) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(label, counts.len());
                counts.push((label, 1));
            }
        }
    }

    let max = counts.iter().map(|&(_, count)| count).max()?;
    counts
        .into_iter()
        .find(|&(_, count)| count == max)
        .map(|(label, _)| label.clone())
}

