use nalgebra::{allocator::Allocator, ComplexField, DVector, DefaultAllocator, DimName, OPoint};
use num_traits::Zero;

use crate::misc::FloatingPoint;

/// Capability required from a point to be interpolated by a spline curve
/// Any type with indexable coordinates, a dimension and a euclidean distance fits,
/// so nalgebra points, dynamic vectors and plain arrays can be used as is.
pub trait CurvePoint: Clone {
    type Scalar: FloatingPoint;

    /// Number of coordinates of the point
    fn dimension(&self) -> usize;

    /// Coordinate on the `axis` (0 -> x, 1 -> y, ...)
    fn coord(&self, axis: usize) -> Self::Scalar;

    fn set_coord(&mut self, axis: usize, value: Self::Scalar);

    /// Create a point of `dimension` with all coordinates set to zero
    /// Fixed size types ignore the argument.
    fn zeros(dimension: usize) -> Self;

    /// Euclidean distance between two points of the same dimension
    fn distance(&self, other: &Self) -> Self::Scalar {
        debug_assert_eq!(self.dimension(), other.dimension());
        (0..self.dimension())
            .map(|i| {
                let d = self.coord(i) - other.coord(i);
                d * d
            })
            .fold(Self::Scalar::zero(), |acc, x| acc + x)
            .sqrt()
    }
}

impl<T: FloatingPoint, D: DimName> CurvePoint for OPoint<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    type Scalar = T;

    fn dimension(&self) -> usize {
        D::dim()
    }

    fn coord(&self, axis: usize) -> T {
        self[axis]
    }

    fn set_coord(&mut self, axis: usize, value: T) {
        self[axis] = value;
    }

    fn zeros(dimension: usize) -> Self {
        debug_assert_eq!(dimension, D::dim());
        OPoint::origin()
    }

    fn distance(&self, other: &Self) -> T {
        (&self.coords - &other.coords).norm()
    }
}

impl<T: FloatingPoint> CurvePoint for DVector<T> {
    type Scalar = T;

    fn dimension(&self) -> usize {
        self.len()
    }

    fn coord(&self, axis: usize) -> T {
        self[axis]
    }

    fn set_coord(&mut self, axis: usize, value: T) {
        self[axis] = value;
    }

    fn zeros(dimension: usize) -> Self {
        DVector::zeros(dimension)
    }

    fn distance(&self, other: &Self) -> T {
        (self - other).norm()
    }
}

impl<T: FloatingPoint, const N: usize> CurvePoint for [T; N] {
    type Scalar = T;

    fn dimension(&self) -> usize {
        N
    }

    fn coord(&self, axis: usize) -> T {
        self[axis]
    }

    fn set_coord(&mut self, axis: usize, value: T) {
        self[axis] = value;
    }

    fn zeros(dimension: usize) -> Self {
        debug_assert_eq!(dimension, N);
        [T::zero(); N]
    }
}
