#![allow(clippy::needless_range_loop)]

mod curve;
mod misc;
mod point;
mod spline;

pub mod prelude {
    pub use crate::curve::*;
    pub use crate::misc::*;
    pub use crate::point::*;
    pub use crate::spline::*;
}
