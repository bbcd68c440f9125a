use super::*;
use std::cmp::Ordering;

#[test]
fn test_distance_metrics() {
    let a = array![1.0, 2.0];
    let b = array![4.0, 6.0];

    let euclidean = DistanceCalculationMetric::Euclidean.compute(a.view(), b.view());
    assert_abs_diff_eq!(euclidean, 5.0);

    let manhattan = DistanceCalculationMetric::Manhattan.compute(a.view(), b.view());
    assert_abs_diff_eq!(manhattan, 7.0);

    let minkowski = DistanceCalculationMetric::Minkowski(3.0).compute(a.view(), b.view());
    assert_abs_diff_eq!(minkowski, 4.497, epsilon = 1e-3);

    // p = 2 is the Euclidean distance
    let minkowski_2 = DistanceCalculationMetric::Minkowski(2.0).compute(a.view(), b.view());
    assert_abs_diff_eq!(minkowski_2, euclidean, epsilon = 1e-12);

    assert_eq!(DistanceCalculationMetric::Euclidean.compute(a.view(), a.view()), 0.0);
}

#[test]
fn test_kernel_functions() {
    let a = array![1.0, 2.0];
    let b = array![3.0, 4.0];

    assert_abs_diff_eq!(KernelType::Linear.function(a.view(), b.view()), 11.0);

    let poly = KernelType::Poly {
        degree: 2,
        gamma: 0.5,
        coef0: 1.0,
    };
    // (0.5 * 11 + 1)^2 = 42.25
    assert_abs_diff_eq!(poly.function(a.view(), b.view()), 42.25);

    let rbf = KernelType::RBF { gamma: 0.1 };
    // |a - b|^2 = 8
    assert_abs_diff_eq!(rbf.function(a.view(), b.view()), (-0.8f64).exp(), epsilon = 1e-12);
    assert_abs_diff_eq!(rbf.function(a.view(), a.view()), 1.0);

    let sigmoid = KernelType::Sigmoid {
        gamma: 0.1,
        coef0: 0.0,
    };
    assert_abs_diff_eq!(sigmoid.function(a.view(), b.view()), 1.1f64.tanh(), epsilon = 1e-12);
}

#[test]
fn test_score_direction() {
    assert_eq!(ScoreDirection::Minimize.compare(1.0, 2.0), Ordering::Less);
    assert_eq!(ScoreDirection::Maximize.compare(1.0, 2.0), Ordering::Greater);
    assert_eq!(ScoreDirection::Maximize.compare(2.0, 2.0), Ordering::Equal);

    assert!(ScoreDirection::Minimize.is_better(0.5, 1.0));
    assert!(!ScoreDirection::Minimize.is_better(1.0, 1.0));
    assert!(ScoreDirection::Maximize.is_better(1.0, 0.5));
}

#[test]
fn test_similarity_dispatch() {
    let a = array![0.0, 0.0];
    let b = array![3.0, 4.0];

    let default = Similarity::default();
    assert!(!default.is_kernel());
    assert_eq!(default.direction(), ScoreDirection::Minimize);
    assert_abs_diff_eq!(default.score(a.view(), b.view()), 5.0);

    let kernel = Similarity::kernel(KernelType::Linear);
    assert!(kernel.is_kernel());
    assert_eq!(kernel.direction(), ScoreDirection::Maximize);
    assert_abs_diff_eq!(kernel.score(b.view(), b.view()), 25.0);

    assert!(format!("{:?}", kernel).starts_with("Kernel(Linear"));
}

#[test]
fn test_minkowski_order_validation() {
    assert!(DistanceCalculationMetric::Minkowski(1.0).validate().is_ok());
    assert!(DistanceCalculationMetric::Minkowski(3.5).validate().is_ok());
    assert!(DistanceCalculationMetric::Euclidean.validate().is_ok());

    for p in [0.0, 0.5, -2.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            DistanceCalculationMetric::Minkowski(p).validate(),
            Err(ModelError::InputValidationError(_))
        ));
        assert!(
            Similarity::distance(DistanceCalculationMetric::Minkowski(p))
                .validate()
                .is_err()
        );
    }

    assert!(Similarity::kernel(KernelType::Linear).validate().is_ok());
}

#[test]
fn test_poly_kernel_with_large_degree() {
    let a = array![0.5];
    let b = array![1.0];

    let kernel = KernelType::Poly {
        degree: u32::MAX,
        gamma: 1.0,
        coef0: 0.0,
    };
    assert_eq!(kernel.function(a.view(), b.view()), 0.0);

    let kernel = KernelType::Poly {
        degree: 3,
        gamma: 1.0,
        coef0: 0.0,
    };
    assert_abs_diff_eq!(kernel.function(a.view(), b.view()), 0.125);
}
