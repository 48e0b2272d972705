use super::config::GridConfig;
use crate::core::models::cell::SimulationBox;
use itertools::iproduct;
use nalgebra::Point3;

/// Number of samples of `start, start + step, ...` strictly below `stop`.
fn sample_count(start: f64, stop: f64, step: f64) -> usize {
    let n = ((stop - start) / step).ceil();
    if n > 0.0 { n as usize } else { 0 }
}

fn evenly_spaced(start: f64, stop: f64, step: f64) -> Vec<f64> {
    (0..sample_count(start, stop, step))
        .map(|i| start + i as f64 * step)
        .collect()
}

/// The fixed set of probe points scanned in every frame.
///
/// x and y cover `[0, box)` with the xy spacing; z covers `[z_start, z_end)` with the
/// z spacing. Each z value is one histogram bin.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
    zs: Vec<f64>,
    z_start: f64,
    z_spacing: f64,
}

impl ProbeGrid {
    pub fn new(cell: &SimulationBox, config: &GridConfig) -> Self {
        Self {
            xs: evenly_spaced(0.0, cell.x(), config.xy_spacing),
            ys: evenly_spaced(0.0, cell.y(), config.xy_spacing),
            zs: evenly_spaced(config.z_start, config.z_end, config.z_spacing),
            z_start: config.z_start,
            z_spacing: config.z_spacing,
        }
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn zs(&self) -> &[f64] {
        &self.zs
    }

    /// Number of z-bins.
    #[inline]
    pub fn bin_count(&self) -> usize {
        self.zs.len()
    }

    /// Number of probe points in one z-layer.
    #[inline]
    pub fn points_per_layer(&self) -> usize {
        self.xs.len() * self.ys.len()
    }

    pub fn point_count(&self) -> usize {
        self.points_per_layer() * self.bin_count()
    }

    /// Probe points of z-layer `bin`, x-major.
    pub fn layer(&self, bin: usize) -> impl Iterator<Item = Point3<f64>> + '_ {
        let z = self.zs[bin];
        iproduct!(self.xs.iter(), self.ys.iter()).map(move |(&x, &y)| Point3::new(x, y, z))
    }

    /// Absolute z of the center of `bin`.
    #[inline]
    pub fn bin_center(&self, bin: usize) -> f64 {
        self.z_start + (bin as f64 + 0.5) * self.z_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_config(xy: f64, z: f64, z_start: f64, z_end: f64) -> GridConfig {
        GridConfig {
            xy_spacing: xy,
            z_spacing: z,
            z_start,
            z_end,
        }
    }

    #[test]
    fn axes_exclude_the_upper_bound() {
        let cell = SimulationBox::new(10.0, 10.0, 10.0).unwrap();
        let grid = ProbeGrid::new(&cell, &grid_config(5.0, 5.0, 0.0, 10.0));
        assert_eq!(grid.xs(), &[0.0, 5.0]);
        assert_eq!(grid.ys(), &[0.0, 5.0]);
        assert_eq!(grid.zs(), &[0.0, 5.0]);
        assert_eq!(grid.points_per_layer(), 4);
        assert_eq!(grid.point_count(), 8);
    }

    #[test]
    fn partial_steps_add_a_final_sample() {
        let cell = SimulationBox::new(16.4721, 12.6818, 35.3541).unwrap();
        let grid = ProbeGrid::new(&cell, &grid_config(1.0, 0.1, 0.0, 20.0));
        assert_eq!(grid.xs().len(), 17);
        assert_eq!(grid.ys().len(), 13);
        assert_eq!(grid.bin_count(), 200);
        assert_eq!(*grid.xs().last().unwrap(), 16.0);
    }

    #[test]
    fn layer_enumerates_every_xy_pair_at_the_bin_height() {
        let cell = SimulationBox::new(10.0, 10.0, 10.0).unwrap();
        let grid = ProbeGrid::new(&cell, &grid_config(5.0, 5.0, 0.0, 10.0));
        let layer: Vec<Point3<f64>> = grid.layer(1).collect();
        assert_eq!(
            layer,
            vec![
                Point3::new(0.0, 0.0, 5.0),
                Point3::new(0.0, 5.0, 5.0),
                Point3::new(5.0, 0.0, 5.0),
                Point3::new(5.0, 5.0, 5.0),
            ]
        );
    }

    #[test]
    fn bin_centers_are_offset_by_half_a_spacing() {
        let cell = SimulationBox::new(10.0, 10.0, 10.0).unwrap();
        let grid = ProbeGrid::new(&cell, &grid_config(5.0, 2.0, -3.0, 3.0));
        assert_eq!(grid.bin_count(), 3);
        assert_eq!(grid.bin_center(0), -2.0);
        assert_eq!(grid.bin_center(2), 2.0);
    }
}
