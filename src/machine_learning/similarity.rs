use crate::ModelError;
use crate::math::{manhattan_distance_row, minkowski_distance_row, squared_euclidean_distance_row};
use ndarray::ArrayView1;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// A dissimilarity measure between two samples: smaller values mean closer samples.
///
/// Implementations are expected to be non-negative and symmetric, and to return zero
/// for identical samples. None of this is enforced.
pub trait Distance: fmt::Debug + Send + Sync {
    /// Computes the distance between `a` and `b`.
    fn compute(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64;

    /// Checks the parameters of the distance before it is used
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

/// A similarity score between two samples: larger values mean closer samples.
pub trait Kernel: fmt::Debug + Send + Sync {
    /// Evaluates the kernel function on `a` and `b`.
    fn function(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64;

    /// Checks the parameters of the kernel before it is used
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

/// Represents different distance calculation methods used to find nearest neighbors.
///
/// # Variants
///
/// - `Euclidean` - Euclidean distance (L2 norm), the square root of the sum of squared differences.
/// - `Manhattan` - Manhattan distance (L1 norm), the sum of absolute differences.
/// - `Minkowski` - Generalized p-norm of the difference. Requires a finite order p >= 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceCalculationMetric {
    Euclidean,
    Manhattan,
    Minkowski(f64),
}

impl Distance for DistanceCalculationMetric {
    fn compute(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
        match *self {
            DistanceCalculationMetric::Euclidean => squared_euclidean_distance_row(&a, &b).sqrt(),
            DistanceCalculationMetric::Manhattan => manhattan_distance_row(&a, &b),
            DistanceCalculationMetric::Minkowski(p) => minkowski_distance_row(&a, &b, p),
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        match *self {
            DistanceCalculationMetric::Minkowski(p) if !p.is_finite() || p < 1.0 => {
                Err(ModelError::InputValidationError(format!(
                    "Minkowski order p must be a finite value of at least 1, got {}",
                    p
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Kernel function types
///
/// # Variants
/// - `Linear` - Linear kernel: K(x, y) = x·y
/// - `Poly` - Polynomial kernel: K(x, y) = (gamma·x·y + coef0)^degree
/// - `RBF` - Radial Basis Function kernel: K(x, y) = exp(-gamma·|x-y|^2)
/// - `Sigmoid` - Sigmoid kernel: K(x, y) = tanh(gamma·x·y + coef0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KernelType {
    Linear,
    Poly { degree: u32, gamma: f64, coef0: f64 },
    RBF { gamma: f64 },
    Sigmoid { gamma: f64, coef0: f64 },
}

impl Kernel for KernelType {
    fn function(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
        match *self {
            KernelType::Linear => a.dot(&b),
            KernelType::Poly {
                degree,
                gamma,
                coef0,
            } => {
                let base = gamma * a.dot(&b) + coef0;
                match i32::try_from(degree) {
                    Ok(degree) => base.powi(degree),
                    Err(_) => base.powf(f64::from(degree)),
                }
            }
            KernelType::RBF { gamma } => (-gamma * squared_euclidean_distance_row(&a, &b)).exp(),
            KernelType::Sigmoid { gamma, coef0 } => (gamma * a.dot(&b) + coef0).tanh(),
        }
    }
}

/// Which end of the score range counts as "closer".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDirection {
    /// Lower scores are closer (distances)
    Minimize,
    /// Higher scores are closer (kernels)
    Maximize,
}

impl ScoreDirection {
    /// Orders two scores so that the closer one comes first.
    ///
    /// Equal scores compare as `Equal`; NaN is treated as equal to everything.
    pub fn compare(&self, a: f64, b: f64) -> Ordering {
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            ScoreDirection::Minimize => ord,
            ScoreDirection::Maximize => ord.reverse(),
        }
    }

    /// Returns `true` when `a` is strictly closer than `b`.
    pub fn is_better(&self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// The similarity measure a KNN model ranks neighbors by.
///
/// Exactly one mode is active: installing a distance replaces any kernel and vice versa.
///
/// # Examples
/// ```rust
/// use knn_loocv::machine_learning::{DistanceCalculationMetric, KernelType, ScoreDirection, Similarity};
/// use ndarray::array;
///
/// let distance = Similarity::distance(DistanceCalculationMetric::Manhattan);
/// assert_eq!(distance.direction(), ScoreDirection::Minimize);
///
/// let kernel = Similarity::kernel(KernelType::Linear);
/// assert_eq!(kernel.direction(), ScoreDirection::Maximize);
/// assert_eq!(kernel.score(array![1.0, 2.0].view(), array![3.0, 4.0].view()), 11.0);
/// ```
#[derive(Clone)]
pub enum Similarity {
    Distance(Arc<dyn Distance>),
    Kernel(Arc<dyn Kernel>),
}

impl Similarity {
    /// Wraps a distance function
    pub fn distance<D: Distance + 'static>(distance: D) -> Self {
        Similarity::Distance(Arc::new(distance))
    }

    /// Wraps a kernel function
    pub fn kernel<K: Kernel + 'static>(kernel: K) -> Self {
        Similarity::Kernel(Arc::new(kernel))
    }

    /// Scores `a` against `b` with the active function
    pub fn score(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
        match self {
            Similarity::Distance(d) => d.compute(a, b),
            Similarity::Kernel(k) => k.function(a, b),
        }
    }

    /// Checks the parameters of the active function
    ///
    /// # Returns
    ///
    /// - `Ok(())` - If the function can be used for scoring
    /// - `Err(ModelError::InputValidationError)` - If a parameter is out of range
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            Similarity::Distance(d) => d.validate(),
            Similarity::Kernel(k) => k.validate(),
        }
    }

    /// Returns whether lower or higher scores mean closer samples
    pub fn direction(&self) -> ScoreDirection {
        match self {
            Similarity::Distance(_) => ScoreDirection::Minimize,
            Similarity::Kernel(_) => ScoreDirection::Maximize,
        }
    }

    /// Returns `true` when a kernel is active
    pub fn is_kernel(&self) -> bool {
        matches!(self, Similarity::Kernel(_))
    }
}

impl Default for Similarity {
    fn default() -> Self {
        Similarity::distance(DistanceCalculationMetric::Euclidean)
    }
}

impl fmt::Debug for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Similarity::Distance(d) => f.debug_tuple("Distance").field(d).finish(),
            Similarity::Kernel(k) => f.debug_tuple("Kernel").field(k).finish(),
        }
    }
}
