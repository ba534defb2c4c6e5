pub mod chord_length;
pub mod spline_curve_interpolation;
pub use chord_length::*;
pub use spline_curve_interpolation::*;
