use nalgebra::Point3;
use spline_curve::prelude::*;

/// Print a smooth curve through a few control points as `x y z` lines
fn main() -> anyhow::Result<()> {
    let points = vec![
        Point3::new(0., 0., 0.),
        Point3::new(1., 0., 0.),
        Point3::new(1., 1., 0.5),
        Point3::new(0., 1., 1.),
        Point3::new(0., 0., 1.5),
    ];

    let mut interpolator = SplineCurveInterpolation::new();
    interpolator.try_set_boundary(
        BoundaryCondition::natural(),
        BoundaryCondition::natural(),
        true,
    )?;
    interpolator.try_set_points(&points, true)?;

    let resolution = 50;
    for p in interpolator.sample(resolution) {
        println!("{:.4} {:.4} {:.4}", p.x, p.y, p.z);
    }
    Ok(())
}
