pub mod boundary_condition;
pub mod spline_interpolation;
pub use boundary_condition::*;
pub use spline_interpolation::*;

#[cfg(test)]
mod tests;
