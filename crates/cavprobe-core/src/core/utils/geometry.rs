use crate::core::models::cell::SimulationBox;
use nalgebra::{Point3, Vector3};

/// Wraps a displacement into the minimum image of an orthorhombic periodic box.
///
/// Each component is shifted by `L * round(d / L)`, where ties round to even. The
/// result satisfies `|d'| <= L / 2` on every axis.
#[inline]
pub fn minimum_image(displacement: &Vector3<f64>, cell: &SimulationBox) -> Vector3<f64> {
    displacement.zip_map(cell.lengths(), |d, l| d - l * (d / l).round_ties_even())
}

/// Squared minimum-image distance between two points.
#[inline]
pub fn minimum_image_distance_squared(
    a: &Point3<f64>,
    b: &Point3<f64>,
    cell: &SimulationBox,
) -> f64 {
    minimum_image(&(b - a), cell).norm_squared()
}

/// Squared minimum-image distances from one probe point to every position in `positions`.
pub fn minimum_image_distances_squared<'a>(
    probe: &'a Point3<f64>,
    positions: &'a [Point3<f64>],
    cell: &'a SimulationBox,
) -> impl Iterator<Item = f64> + 'a {
    positions
        .iter()
        .map(move |position| minimum_image_distance_squared(probe, position, cell))
}

/// Returns `true` if every position lies strictly farther than `radius_squared` from the
/// probe point under periodic boundaries. Positions at exactly the radius count as
/// overlapping. An empty slice leaves the probe unobstructed.
pub fn is_probe_unobstructed(
    probe: &Point3<f64>,
    positions: &[Point3<f64>],
    cell: &SimulationBox,
    radius_squared: f64,
) -> bool {
    minimum_image_distances_squared(probe, positions, cell).all(|d2| d2 > radius_squared)
}
