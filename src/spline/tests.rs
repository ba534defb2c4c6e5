use super::*;
use approx::assert_relative_eq;

fn cubic(x: f64) -> f64 {
    x * x * x - 2. * x + 1.
}

fn cubic_slope(x: f64) -> f64 {
    3. * x * x - 2.
}

#[test]
fn passes_through_samples() {
    let x = vec![0., 0.5, 1.5, 2., 3.5];
    let y = vec![1., -1., 2., 0., 0.5];
    for cubic in [true, false] {
        let spline = SplineInterpolation::try_new(&x, &y, cubic).unwrap();
        for (xi, yi) in x.iter().zip(y.iter()) {
            assert_relative_eq!(spline.evaluate(*xi), *yi, epsilon = 1e-12);
        }
    }
}

#[test]
fn clamped_spline_reproduces_cubic_polynomial() {
    let x: Vec<f64> = (0..5).map(|i| i as f64 * 0.75).collect();
    let y: Vec<f64> = x.iter().map(|x| cubic(*x)).collect();
    let mut spline = SplineInterpolation::new();
    spline.set_boundary(
        BoundaryCondition::first_derivative(cubic_slope(x[0])),
        BoundaryCondition::first_derivative(cubic_slope(x[4])),
        false,
    );
    spline.try_set_data(&x, &y, true).unwrap();

    for i in 0..=30 {
        let t = 3. * i as f64 / 30.;
        assert_relative_eq!(spline.evaluate(t), cubic(t), epsilon = 1e-9);
    }
}

#[test]
fn natural_spline_reproduces_line() {
    let x = vec![-1., 0., 0.25, 2.];
    let y: Vec<f64> = x.iter().map(|x| 3. * x - 1.).collect();
    let spline = SplineInterpolation::try_new(&x, &y, true).unwrap();
    for t in [-3., -1., 0.1, 1., 2., 5.] {
        assert_relative_eq!(spline.evaluate(t), 3. * t - 1., epsilon = 1e-12);
    }
}

#[test]
fn natural_spline_has_zero_end_curvature() {
    let x = vec![0., 1., 2., 3.];
    let y = vec![0., 2., -1., 1.];
    let spline = SplineInterpolation::try_new(&x, &y, true).unwrap();
    let e = 1e-4;
    let left = (spline.evaluate(0.) - 2. * spline.evaluate(e) + spline.evaluate(2. * e)) / (e * e);
    let right = (spline.evaluate(3.) - 2. * spline.evaluate(3. - e)
        + spline.evaluate(3. - 2. * e))
        / (e * e);
    assert_relative_eq!(left, 0., epsilon = 1e-2);
    assert_relative_eq!(right, 0., epsilon = 1e-2);
}

#[test]
fn clamped_first_derivative() {
    let x = vec![0., 1., 2.];
    let y = vec![0., 1., 0.];
    let mut spline = SplineInterpolation::new().with_boundary(
        BoundaryCondition::first_derivative(2.),
        BoundaryCondition::first_derivative(-0.5),
        false,
    );
    spline.try_set_data(&x, &y, true).unwrap();

    let e = 1e-6;
    let left = (spline.evaluate(e) - spline.evaluate(0.)) / e;
    let right = (spline.evaluate(2.) - spline.evaluate(2. - e)) / e;
    assert_relative_eq!(left, 2., epsilon = 1e-4);
    assert_relative_eq!(right, -0.5, epsilon = 1e-4);
}

#[test]
fn clamped_second_derivative() {
    let x = vec![0., 1., 2., 3.];
    let y = vec![0., 1., 1., 0.];
    let mut spline = SplineInterpolation::new();
    spline.set_boundary(
        BoundaryCondition::second_derivative(4.),
        BoundaryCondition::second_derivative(-2.),
        false,
    );
    spline.try_set_data(&x, &y, true).unwrap();

    let e = 1e-4;
    let left = (spline.evaluate(0.) - 2. * spline.evaluate(e) + spline.evaluate(2. * e)) / (e * e);
    let right = (spline.evaluate(3.) - 2. * spline.evaluate(3. - e)
        + spline.evaluate(3. - 2. * e))
        / (e * e);
    assert_relative_eq!(left, 4., epsilon = 1e-2);
    assert_relative_eq!(right, -2., epsilon = 1e-2);
}

#[test]
fn two_samples_with_natural_boundary_is_a_line() {
    let spline = SplineInterpolation::try_new(&[1., 3.], &[2., 6.], true).unwrap();
    assert_relative_eq!(spline.evaluate(2.), 4., epsilon = 1e-12);
    assert_relative_eq!(spline.evaluate(4.), 8., epsilon = 1e-12);
}

#[test]
fn single_sample_is_constant() {
    let spline = SplineInterpolation::try_new(&[0.5], &[7.], true).unwrap();
    assert_eq!(spline.domain(), Some((0.5, 0.5)));
    for t in [-1., 0.5, 10.] {
        assert_eq!(spline.evaluate(t), 7.);
    }
}

#[test]
fn linear_interpolation() {
    let spline = SplineInterpolation::try_new(&[0., 1., 3.], &[0., 2., 0.], false).unwrap();
    assert!(!spline.is_cubic());
    assert_relative_eq!(spline.evaluate(0.5), 1.);
    assert_relative_eq!(spline.evaluate(2.), 1.);
    // continues the end segments
    assert_relative_eq!(spline.evaluate(-1.), -2.);
    assert_relative_eq!(spline.evaluate(4.), -1.);
}

#[test]
fn linear_extrapolation_follows_end_tangent() {
    let x = vec![0., 1., 2., 3.];
    let y = vec![0., 1., 0., 2.];
    let mut spline = SplineInterpolation::new();
    spline.set_boundary(
        BoundaryCondition::natural(),
        BoundaryCondition::natural(),
        true,
    );
    spline.try_set_data(&x, &y, true).unwrap();
    assert!(spline.is_linear_extrapolation());

    let e = 1e-6;
    let left_slope = (spline.evaluate(e) - spline.evaluate(0.)) / e;
    let right_slope = (spline.evaluate(3.) - spline.evaluate(3. - e)) / e;

    assert_relative_eq!(spline.evaluate(-2.), -2. * left_slope, epsilon = 1e-4);
    assert_relative_eq!(spline.evaluate(5.), 2. + 2. * right_slope, epsilon = 1e-4);
}

#[test]
fn quadratic_continuation_without_linear_extrapolation() {
    let x = vec![0., 1., 2.];
    let y = vec![0., 1., 0.];
    let mut spline = SplineInterpolation::new();
    spline.set_boundary(
        BoundaryCondition::natural(),
        BoundaryCondition::second_derivative(2.),
        false,
    );
    spline.try_set_data(&x, &y, true).unwrap();

    // curvature of 2 keeps going past the last knot
    let second_difference = spline.evaluate(4.) - 2. * spline.evaluate(3.) + spline.evaluate(2.);
    assert_relative_eq!(second_difference, 2., epsilon = 1e-9);
}

#[test]
fn repeated_samples_are_merged() {
    let spline =
        SplineInterpolation::try_new(&[0., 1., 1., 2.], &[0., 1., 1., 0.], true).unwrap();
    assert_eq!(spline.knots(), &[0., 1., 2.]);
    assert_eq!(spline.samples(), &[0., 1., 0.]);
    assert_relative_eq!(spline.evaluate(1.), 1.);

    let constant = SplineInterpolation::try_new(&[0., 0., 0.], &[3., 3., 3.], true).unwrap();
    assert_eq!(constant.knots().len(), 1);
    assert_eq!(constant.evaluate(0.), 3.);
}

#[test]
fn repeated_parameter_keeps_last_sample() {
    let spline =
        SplineInterpolation::try_new(&[0., 1., 1., 2.], &[0., 1., 3., 0.], true).unwrap();
    assert_eq!(spline.knots(), &[0., 1., 2.]);
    assert_eq!(spline.samples(), &[0., 3., 0.]);
    assert_relative_eq!(spline.evaluate(1.), 3.);

    let start = SplineInterpolation::try_new(&[0., 0.], &[1., 2.], false).unwrap();
    assert_eq!(start.knots(), &[0.]);
    assert_eq!(start.evaluate(0.), 2.);
}

#[test]
fn invalid_samples() {
    assert!(SplineInterpolation::<f64>::try_new(&[], &[], true).is_err());
    assert!(SplineInterpolation::try_new(&[0., 1.], &[0.], true).is_err());
    assert!(SplineInterpolation::try_new(&[0., 2., 1.], &[0., 1., 2.], true).is_err());
    assert!(SplineInterpolation::try_new(&[0., f64::NAN], &[0., 1.], true).is_err());
    assert!(SplineInterpolation::try_new(&[0., 1.], &[0., f64::INFINITY], false).is_err());
}

#[test]
fn failed_fit_keeps_previous_data() {
    let mut spline = SplineInterpolation::try_new(&[0., 1.], &[0., 1.], true).unwrap();
    assert!(spline.try_set_data(&[1., 0.], &[0., 1.], true).is_err());
    assert_eq!(spline.knots(), &[0., 1.]);
    assert_relative_eq!(spline.evaluate(0.5), 0.5);
}

#[test]
fn refit_replaces_data() {
    let mut spline = SplineInterpolation::try_new(&[0., 1., 2.], &[0., 5., 0.], true).unwrap();
    spline.try_set_data(&[0., 1.], &[1., 1.], false).unwrap();
    assert_eq!(spline.domain(), Some((0., 1.)));
    assert_relative_eq!(spline.evaluate(0.5), 1.);
    assert_relative_eq!(spline.evaluate(2.), 1.);
}

#[test]
fn boundary_after_fit_is_rejected() {
    let mut spline = SplineInterpolation::try_new(&[0., 1.], &[0., 1.], true).unwrap();
    let result = spline.try_set_boundary(
        BoundaryCondition::first_derivative(1.),
        BoundaryCondition::natural(),
        false,
    );
    assert!(result.is_err());
    assert_eq!(spline.boundary().0, BoundaryCondition::natural());
}

#[test]
#[cfg(debug_assertions)]
#[should_panic]
fn boundary_after_fit_asserts() {
    let mut spline = SplineInterpolation::try_new(&[0., 1.], &[0., 1.], true).unwrap();
    spline.set_boundary(
        BoundaryCondition::natural(),
        BoundaryCondition::natural(),
        true,
    );
}

#[test]
fn evaluate_without_data_fails() {
    let spline = SplineInterpolation::<f32>::new();
    assert!(!spline.is_fitted());
    assert!(spline.domain().is_none());
    assert!(spline.try_evaluate(0.).is_err());
}

#[test]
fn boundary_condition_constructors() {
    let clamped = BoundaryCondition::first_derivative(1.5f32);
    assert_eq!(clamped.kind(), BoundaryType::FirstDerivative);
    assert_eq!(clamped.value(), 1.5);
    assert!(!clamped.is_natural());
    assert!(BoundaryCondition::<f32>::default().is_natural());
    assert!(!BoundaryCondition::second_derivative(1f32).is_natural());
}
