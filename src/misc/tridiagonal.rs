use crate::misc::FloatingPoint;

/// Square tridiagonal matrix stored by its three diagonals
///
/// Row `i` reads `lower[i] * x[i - 1] + diagonal[i] * x[i] + upper[i] * x[i + 1]`,
/// so `lower[0]` and `upper[n - 1]` are never used.
#[derive(Clone, Debug, PartialEq)]
pub struct TridiagonalSystem<T> {
    lower: Vec<T>,
    diagonal: Vec<T>,
    upper: Vec<T>,
}

impl<T: FloatingPoint> TridiagonalSystem<T> {
    /// Create a zero-filled system with `n` rows
    pub fn zeros(n: usize) -> Self {
        Self {
            lower: vec![T::zero(); n],
            diagonal: vec![T::zero(); n],
            upper: vec![T::zero(); n],
        }
    }

    pub fn len(&self) -> usize {
        self.diagonal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagonal.is_empty()
    }

    /// Set the coefficients of row `i`
    pub fn set_row(&mut self, i: usize, lower: T, diagonal: T, upper: T) {
        self.lower[i] = lower;
        self.diagonal[i] = diagonal;
        self.upper[i] = upper;
    }

    pub fn lower(&self) -> &[T] {
        &self.lower
    }

    pub fn diagonal(&self) -> &[T] {
        &self.diagonal
    }

    pub fn upper(&self) -> &[T] {
        &self.upper
    }

    /// Solve `A x = rhs` with the Thomas algorithm
    /// # Example
    /// ```
    /// use spline_curve::prelude::TridiagonalSystem;
    /// use approx::assert_relative_eq;
    ///
    /// let mut m = TridiagonalSystem::zeros(3);
    /// m.set_row(0, 0., 2., 1.);
    /// m.set_row(1, 1., 2., 1.);
    /// m.set_row(2, 1., 2., 0.);
    /// let x = m.try_solve(&[4., 8., 8.]).unwrap();
    /// assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
    /// assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
    /// assert_relative_eq!(x[2], 3.0, epsilon = 1e-12);
    /// ```
    pub fn try_solve(&self, rhs: &[T]) -> anyhow::Result<Vec<T>> {
        let n = self.len();
        anyhow::ensure!(
            rhs.len() == n,
            "Invalid right hand side length, got {}, expected {}",
            rhs.len(),
            n
        );
        if n == 0 {
            return Ok(vec![]);
        }

        // forward sweep
        let mut upper = vec![T::zero(); n];
        let mut x = vec![T::zero(); n];
        let mut pivot = self.diagonal[0];
        anyhow::ensure!(is_pivot(pivot), "Singular tridiagonal system at row 0");
        upper[0] = self.upper[0] / pivot;
        x[0] = rhs[0] / pivot;
        for i in 1..n {
            pivot = self.diagonal[i] - self.lower[i] * upper[i - 1];
            anyhow::ensure!(is_pivot(pivot), "Singular tridiagonal system at row {}", i);
            upper[i] = self.upper[i] / pivot;
            x[i] = (rhs[i] - self.lower[i] * x[i - 1]) / pivot;
        }

        // back substitution
        for i in (0..n - 1).rev() {
            x[i] = x[i] - upper[i] * x[i + 1];
        }

        Ok(x)
    }
}

fn is_pivot<T: FloatingPoint>(value: T) -> bool {
    value.is_finite() && value != T::zero()
}
