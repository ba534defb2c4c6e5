use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Floating point type (f32, f64) of point coordinates, chord lengths and spline parameters
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Convert a `f64` constant into the scalar type
    fn constant(value: f64) -> Self {
        nalgebra::convert(value)
    }

    /// Lossy conversion used for diagnostics
    fn as_f64(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
