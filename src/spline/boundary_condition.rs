use crate::misc::FloatingPoint;

/// Which derivative is prescribed at an end of the spline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryType {
    /// The tangent at the end is fixed (clamped spline)
    FirstDerivative,
    /// The curvature at the end is fixed (zero gives a natural spline)
    SecondDerivative,
}

/// Boundary condition applied at the start or at the end of the parameter domain
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryCondition<T> {
    kind: BoundaryType,
    value: T,
}

impl<T: FloatingPoint> BoundaryCondition<T> {
    pub fn new(kind: BoundaryType, value: T) -> Self {
        Self { kind, value }
    }

    /// Zero second derivative
    /// # Example
    /// ```
    /// use spline_curve::prelude::*;
    /// let natural = BoundaryCondition::<f64>::natural();
    /// assert_eq!(natural.kind(), BoundaryType::SecondDerivative);
    /// assert_eq!(natural.value(), 0.);
    /// assert_eq!(natural, BoundaryCondition::default());
    /// ```
    pub fn natural() -> Self {
        Self::second_derivative(T::zero())
    }

    /// Fix the first derivative at the end to `slope`
    pub fn first_derivative(slope: T) -> Self {
        Self::new(BoundaryType::FirstDerivative, slope)
    }

    /// Fix the second derivative at the end to `curvature`
    pub fn second_derivative(curvature: T) -> Self {
        Self::new(BoundaryType::SecondDerivative, curvature)
    }

    pub fn kind(&self) -> BoundaryType {
        self.kind
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn is_natural(&self) -> bool {
        self.kind == BoundaryType::SecondDerivative && self.value == T::zero()
    }
}

impl<T: FloatingPoint> Default for BoundaryCondition<T> {
    fn default() -> Self {
        Self::natural()
    }
}
