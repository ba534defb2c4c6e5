use itertools::Itertools;

use crate::{misc::FloatingPoint, point::CurvePoint};

/// Cumulative chord length of an ordered sequence of points
/// The parameter of a point is the length of the polyline from the first point up to it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChordLengthParameterization<T> {
    parameters: Vec<T>,
}

impl<T> Default for ChordLengthParameterization<T> {
    fn default() -> Self {
        Self { parameters: vec![] }
    }
}

impl<T: FloatingPoint> ChordLengthParameterization<T> {
    /// Parameterize the points by chord length
    /// # Example
    /// ```
    /// use spline_curve::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let points = vec![
    ///     Point2::new(0., 0.),
    ///     Point2::new(3., 4.),
    ///     Point2::new(3., 4.),
    ///     Point2::new(3., 5.),
    /// ];
    /// let parameterization = ChordLengthParameterization::new(&points);
    /// assert_eq!(parameterization.parameters(), &[0., 5., 5., 6.]);
    /// assert_eq!(parameterization.total_length(), 6.);
    /// ```
    pub fn new<P: CurvePoint<Scalar = T>>(points: &[P]) -> Self {
        if points.is_empty() {
            return Self { parameters: vec![] };
        }

        let parameters = std::iter::once(T::zero())
            .chain(points.iter().tuple_windows().scan(T::zero(), |acc, (a, b)| {
                *acc += a.distance(b);
                Some(*acc)
            }))
            .collect();

        Self { parameters }
    }

    /// Parameter of each point
    pub fn parameters(&self) -> &[T] {
        &self.parameters
    }

    /// Length of the polyline through all points
    pub fn total_length(&self) -> T {
        self.parameters.last().copied().unwrap_or(T::zero())
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Parameters mapped to `[0, 1]`
    /// Every parameter is zero when all points coincide.
    pub fn normalized(&self) -> Vec<T> {
        let total = self.total_length();
        if total > T::zero() {
            self.parameters.iter().map(|t| *t / total).collect()
        } else {
            vec![T::zero(); self.parameters.len()]
        }
    }
}
