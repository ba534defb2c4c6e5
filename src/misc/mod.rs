pub mod floating_point;
pub mod tridiagonal;

pub use floating_point::*;
pub use tridiagonal::*;
