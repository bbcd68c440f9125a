use crate::ModelError;
use ndarray::{ArrayBase, Data, Ix1, Ix2};

/// This module provides helper functions for machine learning models
mod helper_functions;
/// K-Nearest Neighbors (KNN) classifier with distance or kernel similarity
pub mod knn;
/// Linear regression module implementing the ordinary least squares method
pub mod linear_regression;
/// Distance metrics, kernel functions and the similarity mode used by KNN
pub mod similarity;

pub(crate) use helper_functions::{check_query, preliminary_check};

pub use knn::*;
pub use linear_regression::*;
pub use similarity::*;
