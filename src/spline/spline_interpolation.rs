use itertools::Itertools;

use crate::misc::{FloatingPoint, TridiagonalSystem};

use super::{BoundaryCondition, BoundaryType};

/// One dimensional spline through scalar samples
///
/// Each interval `[x_i, x_{i+1}]` holds the polynomial
/// `f(t) = y_i + b_i h + c_i h^2 + d_i h^3` with `h = t - x_i`.
/// Outside of the knots the end polynomial is continued without its cubic term,
/// and without its quadratic term too when linear extrapolation is requested.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplineInterpolation<T> {
    left: BoundaryCondition<T>,
    right: BoundaryCondition<T>,
    linear_extrapolation: bool,
    cubic: bool,
    /// strictly increasing knots
    x: Vec<T>,
    y: Vec<T>,
    b: Vec<T>,
    c: Vec<T>,
    d: Vec<T>,
    /// quadratic coefficient used on the left of the first knot
    c0: T,
}

impl<T: FloatingPoint> Default for SplineInterpolation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatingPoint> SplineInterpolation<T> {
    /// Create an empty spline with natural boundary conditions
    pub fn new() -> Self {
        Self {
            left: BoundaryCondition::natural(),
            right: BoundaryCondition::natural(),
            linear_extrapolation: false,
            cubic: true,
            x: vec![],
            y: vec![],
            b: vec![],
            c: vec![],
            d: vec![],
            c0: T::zero(),
        }
    }

    /// Create a spline with natural boundary conditions fitted through the samples
    /// # Example
    /// ```
    /// use spline_curve::prelude::*;
    /// use approx::assert_relative_eq;
    ///
    /// let spline = SplineInterpolation::try_new(&[0., 1., 2.], &[0., 1., 0.], true).unwrap();
    /// assert_relative_eq!(spline.evaluate(1.), 1.);
    /// // symmetric samples yield a symmetric spline
    /// assert_relative_eq!(spline.evaluate(0.5), spline.evaluate(1.5), epsilon = 1e-12);
    /// ```
    pub fn try_new(x: &[T], y: &[T], cubic: bool) -> anyhow::Result<Self> {
        let mut spline = Self::new();
        spline.try_set_data(x, y, cubic)?;
        Ok(spline)
    }

    /// Builder form of [`SplineInterpolation::set_boundary`]
    pub fn with_boundary(
        mut self,
        left: BoundaryCondition<T>,
        right: BoundaryCondition<T>,
        linear_extrapolation: bool,
    ) -> Self {
        self.set_boundary(left, right, linear_extrapolation);
        self
    }

    /// Set the boundary conditions used by the next fit
    /// Must be called before [`SplineInterpolation::try_set_data`].
    pub fn set_boundary(
        &mut self,
        left: BoundaryCondition<T>,
        right: BoundaryCondition<T>,
        linear_extrapolation: bool,
    ) {
        debug_assert!(
            !self.is_fitted(),
            "boundary conditions must be set before the data"
        );
        self.left = left;
        self.right = right;
        self.linear_extrapolation = linear_extrapolation;
    }

    /// Same as [`SplineInterpolation::set_boundary`] but fails instead of asserting
    pub fn try_set_boundary(
        &mut self,
        left: BoundaryCondition<T>,
        right: BoundaryCondition<T>,
        linear_extrapolation: bool,
    ) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.is_fitted(),
            "Boundary conditions must be set before the data"
        );
        self.set_boundary(left, right, linear_extrapolation);
        Ok(())
    }

    /// Fit the spline through the samples `(x[i], y[i])`
    /// `cubic` selects a cubic spline, otherwise the samples are joined by line segments.
    /// # Failures
    /// - if `x` and `y` have different lengths
    /// - if there is no sample or a sample is not finite
    /// - if `x` decreases
    ///
    /// Samples sharing a parameter are merged into the last of them,
    /// a single remaining sample gives a constant function.
    pub fn try_set_data(&mut self, x: &[T], y: &[T], cubic: bool) -> anyhow::Result<()> {
        anyhow::ensure!(
            x.len() == y.len(),
            "Invalid number of samples, got {}, expected {}",
            y.len(),
            x.len()
        );
        anyhow::ensure!(!x.is_empty(), "No samples to interpolate");
        anyhow::ensure!(
            x.iter().chain(y.iter()).all(|v| v.is_finite()),
            "Samples must be finite"
        );

        let (x, y) = merge_repeated_samples(x, y)?;
        let n = x.len();

        let (b, mut c, d) = if n == 1 {
            (vec![T::zero()], vec![T::zero()], vec![T::zero()])
        } else if cubic {
            self.try_cubic_coefficients(&x, &y)?
        } else {
            linear_coefficients(&x, &y)
        };

        let c0 = if !cubic
            || self.linear_extrapolation
            || self.left.kind() == BoundaryType::FirstDerivative
        {
            T::zero()
        } else {
            c[0]
        };
        if self.linear_extrapolation || self.right.kind() == BoundaryType::FirstDerivative {
            c[n - 1] = T::zero();
        }

        self.cubic = cubic;
        self.x = x;
        self.y = y;
        self.b = b;
        self.c = c;
        self.d = d;
        self.c0 = c0;

        Ok(())
    }

    /// Solve the quadratic coefficients of every interval then derive the others
    fn try_cubic_coefficients(
        &self,
        x: &[T],
        y: &[T],
    ) -> anyhow::Result<(Vec<T>, Vec<T>, Vec<T>)> {
        let n = x.len();
        let two = T::constant(2.);
        let three = T::constant(3.);

        let mut m = TridiagonalSystem::zeros(n);
        let mut rhs = vec![T::zero(); n];

        for i in 1..(n - 1) {
            let h0 = x[i] - x[i - 1];
            let h1 = x[i + 1] - x[i];
            m.set_row(i, h0 / three, two * (h0 + h1) / three, h1 / three);
            rhs[i] = (y[i + 1] - y[i]) / h1 - (y[i] - y[i - 1]) / h0;
        }

        let h = x[1] - x[0];
        match self.left.kind() {
            BoundaryType::SecondDerivative => {
                m.set_row(0, T::zero(), two, T::zero());
                rhs[0] = self.left.value();
            }
            BoundaryType::FirstDerivative => {
                m.set_row(0, T::zero(), two * h, h);
                rhs[0] = three * ((y[1] - y[0]) / h - self.left.value());
            }
        }

        let h = x[n - 1] - x[n - 2];
        match self.right.kind() {
            BoundaryType::SecondDerivative => {
                m.set_row(n - 1, T::zero(), two, T::zero());
                rhs[n - 1] = self.right.value();
            }
            BoundaryType::FirstDerivative => {
                m.set_row(n - 1, h, two * h, T::zero());
                rhs[n - 1] = three * (self.right.value() - (y[n - 1] - y[n - 2]) / h);
            }
        }

        let c = m.try_solve(&rhs)?;

        let mut b = vec![T::zero(); n];
        let mut d = vec![T::zero(); n];
        for i in 0..(n - 1) {
            let h = x[i + 1] - x[i];
            d[i] = (c[i + 1] - c[i]) / (three * h);
            b[i] = (y[i + 1] - y[i]) / h - h * (two * c[i] + c[i + 1]) / three;
        }

        // slope at the last knot, continuing the last interval
        let h = x[n - 1] - x[n - 2];
        b[n - 1] = three * d[n - 2] * h * h + two * c[n - 2] * h + b[n - 2];

        Ok((b, c, d))
    }

    /// Evaluate the spline at `t`
    /// The spline must have been fitted.
    pub fn evaluate(&self, t: T) -> T {
        debug_assert!(self.is_fitted(), "the spline has no data");

        let n = self.x.len();
        let i = self.x.partition_point(|k| *k <= t).saturating_sub(1);
        let h = t - self.x[i];

        if t < self.x[0] {
            // left extrapolation
            (self.c0 * h + self.b[0]) * h + self.y[0]
        } else if t > self.x[n - 1] {
            // right extrapolation
            (self.c[n - 1] * h + self.b[n - 1]) * h + self.y[n - 1]
        } else {
            ((self.d[i] * h + self.c[i]) * h + self.b[i]) * h + self.y[i]
        }
    }

    /// Same as [`SplineInterpolation::evaluate`] but fails when the spline has no data
    pub fn try_evaluate(&self, t: T) -> anyhow::Result<T> {
        anyhow::ensure!(self.is_fitted(), "The spline has no data");
        Ok(self.evaluate(t))
    }

    pub fn is_fitted(&self) -> bool {
        !self.x.is_empty()
    }

    pub fn is_cubic(&self) -> bool {
        self.cubic
    }

    pub fn is_linear_extrapolation(&self) -> bool {
        self.linear_extrapolation
    }

    /// Left and right boundary conditions
    pub fn boundary(&self) -> (BoundaryCondition<T>, BoundaryCondition<T>) {
        (self.left, self.right)
    }

    /// Knots of the fitted spline (duplicates removed)
    pub fn knots(&self) -> &[T] {
        &self.x
    }

    /// Samples at the knots
    pub fn samples(&self) -> &[T] {
        &self.y
    }

    /// Range of the knots
    pub fn domain(&self) -> Option<(T, T)> {
        match (self.x.first(), self.x.last()) {
            (Some(first), Some(last)) => Some((*first, *last)),
            _ => None,
        }
    }
}

/// Slopes of the line segments joining the samples
fn linear_coefficients<T: FloatingPoint>(x: &[T], y: &[T]) -> (Vec<T>, Vec<T>, Vec<T>) {
    let n = x.len();
    let mut b = x
        .iter()
        .zip(y.iter())
        .tuple_windows()
        .map(|((x0, y0), (x1, y1))| (*y1 - *y0) / (*x1 - *x0))
        .collect_vec();
    b.push(b[n - 2]);
    (b, vec![T::zero(); n], vec![T::zero(); n])
}

/// Merge runs of samples sharing a parameter, keeping the last sample of each run
/// Distinct but very close points may end up with the same chord length.
fn merge_repeated_samples<T: FloatingPoint>(x: &[T], y: &[T]) -> anyhow::Result<(Vec<T>, Vec<T>)> {
    let mut xs = vec![x[0]];
    let mut ys = vec![y[0]];
    for (i, (xi, yi)) in x.iter().zip(y.iter()).enumerate().skip(1) {
        let last = xs.len() - 1;
        if *xi < xs[last] {
            anyhow::bail!("Parameters must be non-decreasing, but x[{}] < x[{}]", i, i - 1);
        }
        if *xi == xs[last] {
            ys[last] = *yi;
            continue;
        }
        xs.push(*xi);
        ys.push(*yi);
    }
    Ok((xs, ys))
}
