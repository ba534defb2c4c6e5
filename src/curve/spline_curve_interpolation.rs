use std::marker::PhantomData;

use itertools::Itertools;
use num_traits::Zero;

use crate::{
    curve::ChordLengthParameterization,
    misc::FloatingPoint,
    point::CurvePoint,
    spline::{BoundaryCondition, SplineInterpolation},
};

/// Spline curve interpolation through points of any dimension
///
/// The curve is represented in the parametric form `x_1(t), x_2(t), ...`
/// where `t` is the chord length along the points, and each coordinate is
/// interpolated by its own [`SplineInterpolation`].
/// Curves are evaluated with a normalized parameter `u` in `[0, 1]`.
///
/// # Example
/// ```
/// use spline_curve::prelude::*;
/// use nalgebra::Point3;
/// use approx::assert_relative_eq;
///
/// let points = vec![
///     Point3::new(0., 0., 0.),
///     Point3::new(1., 0., 0.5),
///     Point3::new(1., 1., 1.),
///     Point3::new(0., 2., 1.),
/// ];
/// let mut interpolator = SplineCurveInterpolation::new();
/// interpolator.set_boundary(
///     BoundaryCondition::natural(),
///     BoundaryCondition::first_derivative(0.),
///     false,
/// );
/// interpolator.try_set_points(&points, true).unwrap();
///
/// let resolution = 100;
/// let curve = interpolator.sample(resolution);
/// assert_eq!(curve.len(), resolution);
/// assert_relative_eq!(curve[0], points[0], epsilon = 1e-12);
/// assert_relative_eq!(curve[resolution - 1], points[3], epsilon = 1e-12);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "P::Scalar: serde::Serialize",
        deserialize = "P::Scalar: serde::Deserialize<'de>"
    ))
)]
pub struct SplineCurveInterpolation<P: CurvePoint> {
    left: BoundaryCondition<P::Scalar>,
    right: BoundaryCondition<P::Scalar>,
    linear_extrapolation: bool,
    cubic: bool,
    dimension: usize,
    /// chord length parameters of the fitted points
    parameterization: ChordLengthParameterization<P::Scalar>,
    /// one spline per axis
    interpolators: Vec<SplineInterpolation<P::Scalar>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    _point: PhantomData<P>,
}

impl<P: CurvePoint> Default for SplineCurveInterpolation<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: CurvePoint> SplineCurveInterpolation<P> {
    /// Create an interpolator with zero curvature at both ends
    pub fn new() -> Self {
        Self {
            left: BoundaryCondition::natural(),
            right: BoundaryCondition::natural(),
            linear_extrapolation: false,
            cubic: true,
            dimension: 0,
            parameterization: ChordLengthParameterization::default(),
            interpolators: vec![],
            _point: PhantomData,
        }
    }

    /// Try to create a curve through the points with natural boundary conditions
    /// `cubic` selects cubic spline interpolation, otherwise the points are joined by segments.
    /// # Example
    /// ```
    /// use spline_curve::prelude::*;
    /// use nalgebra::Point2;
    /// use approx::assert_relative_eq;
    ///
    /// let points = vec![Point2::new(0., 0.), Point2::new(1., 0.), Point2::new(1., 1.)];
    /// let polyline = SplineCurveInterpolation::try_interpolate(&points, false).unwrap();
    /// assert_eq!(polyline.total_length(), 2.);
    /// assert_relative_eq!(polyline.point_at(0.25), Point2::new(0.5, 0.));
    /// assert_relative_eq!(polyline.point_at(0.75), Point2::new(1., 0.5));
    /// ```
    pub fn try_interpolate(points: &[P], cubic: bool) -> anyhow::Result<Self> {
        let mut curve = Self::new();
        curve.try_set_points(points, cubic)?;
        Ok(curve)
    }

    /// Builder form of [`SplineCurveInterpolation::set_boundary`]
    pub fn with_boundary(
        mut self,
        left: BoundaryCondition<P::Scalar>,
        right: BoundaryCondition<P::Scalar>,
        linear_extrapolation: bool,
    ) -> Self {
        self.set_boundary(left, right, linear_extrapolation);
        self
    }

    /// Set the boundary conditions at the start and the end of the curve
    /// The same conditions are applied to every coordinate.
    /// With `linear_extrapolation`, evaluating outside of `[0, 1]` follows the end tangents.
    ///
    /// Must be called before [`SplineCurveInterpolation::try_set_points`].
    pub fn set_boundary(
        &mut self,
        left: BoundaryCondition<P::Scalar>,
        right: BoundaryCondition<P::Scalar>,
        linear_extrapolation: bool,
    ) {
        debug_assert!(
            !self.is_fitted(),
            "boundary conditions must be set before the points"
        );
        self.left = left;
        self.right = right;
        self.linear_extrapolation = linear_extrapolation;
    }

    /// Same as [`SplineCurveInterpolation::set_boundary`] but fails instead of asserting
    pub fn try_set_boundary(
        &mut self,
        left: BoundaryCondition<P::Scalar>,
        right: BoundaryCondition<P::Scalar>,
        linear_extrapolation: bool,
    ) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.is_fitted(),
            "Boundary conditions must be set before the points"
        );
        self.set_boundary(left, right, linear_extrapolation);
        Ok(())
    }

    /// Fit the curve through the points, ordered along the curve
    /// All points must share the dimension of the first one.
    /// An empty slice leaves the interpolator unchanged.
    /// On failure the previously fitted curve is kept.
    pub fn try_set_points(&mut self, points: &[P], cubic: bool) -> anyhow::Result<()> {
        if points.is_empty() {
            #[cfg(feature = "log")]
            log::trace!("no points to interpolate, keeping the current curve");
            return Ok(());
        }

        let dimension = points[0].dimension();
        debug_assert!(
            points.iter().all(|p| p.dimension() == dimension),
            "all points must have the same dimension"
        );

        let parameterization = ChordLengthParameterization::new(points);
        let interpolators = (0..dimension)
            .map(|axis| {
                let samples = points.iter().map(|p| p.coord(axis)).collect_vec();
                let mut spline = SplineInterpolation::new().with_boundary(
                    self.left,
                    self.right,
                    self.linear_extrapolation,
                );
                spline.try_set_data(parameterization.parameters(), &samples, cubic)?;
                Ok(spline)
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        #[cfg(feature = "log")]
        {
            log::debug!(
                "interpolated {} points of dimension {} with a {} spline, total length {}",
                points.len(),
                dimension,
                if cubic { "cubic" } else { "linear" },
                parameterization.total_length().as_f64()
            );
            if parameterization.total_length() == P::Scalar::zero() {
                log::trace!("all points coincide, the curve is a single point");
            }
        }

        self.cubic = cubic;
        self.dimension = dimension;
        self.parameterization = parameterization;
        self.interpolators = interpolators;

        Ok(())
    }

    /// Evaluate the position at the normalized parameter `u`
    /// `u = 0` gives the first point and `u = 1` the last one.
    /// Values outside of `[0, 1]` extrapolate the curve.
    ///
    /// The points must have been set.
    pub fn point_at(&self, u: P::Scalar) -> P {
        debug_assert!(self.is_fitted(), "the points must be set before evaluation");

        let t = u * self.total_length();
        let mut p = P::zeros(self.dimension);
        for (axis, spline) in self.interpolators.iter().enumerate() {
            p.set_coord(axis, spline.evaluate(t));
        }
        p
    }

    /// Same as [`SplineCurveInterpolation::point_at`] but fails when no points have been set
    pub fn try_point_at(&self, u: P::Scalar) -> anyhow::Result<P> {
        anyhow::ensure!(self.is_fitted(), "No points have been set");
        Ok(self.point_at(u))
    }

    /// Evaluate `count` points evenly spaced in the normalized parameter
    /// The first and the last samples are the end points of the curve.
    pub fn sample(&self, count: usize) -> Vec<P> {
        match count {
            0 => vec![],
            1 => vec![self.point_at(P::Scalar::zero())],
            _ => {
                let last = P::Scalar::constant((count - 1) as f64);
                (0..count)
                    .map(|i| self.point_at(P::Scalar::constant(i as f64) / last))
                    .collect()
            }
        }
    }

    pub fn is_fitted(&self) -> bool {
        !self.parameterization.is_empty()
    }

    /// Dimension of the fitted points, zero before fitting
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn is_cubic(&self) -> bool {
        self.cubic
    }

    pub fn is_linear_extrapolation(&self) -> bool {
        self.linear_extrapolation
    }

    /// Left and right boundary conditions
    pub fn boundary(&self) -> (BoundaryCondition<P::Scalar>, BoundaryCondition<P::Scalar>) {
        (self.left, self.right)
    }

    /// Chord length of the fitted points
    pub fn total_length(&self) -> P::Scalar {
        self.parameterization.total_length()
    }

    /// Chord length parameter of each fitted point
    pub fn parameters(&self) -> &[P::Scalar] {
        self.parameterization.parameters()
    }

    /// Normalized parameter of each fitted point, where `point_at` passes through it
    pub fn knots(&self) -> Vec<P::Scalar> {
        self.parameterization.normalized()
    }

    /// Per axis splines, driven by the chord length parameter
    pub fn interpolators(&self) -> &[SplineInterpolation<P::Scalar>] {
        &self.interpolators
    }
}
