use super::grid::ProbeGrid;
use super::histogram::OccupancyHistogram;
use crate::core::io::profile::ProfileRow;
use crate::core::thermo::insertion_probability;

/// The height-resolved result of a scan for one probe radius.
#[derive(Debug, Clone, PartialEq)]
pub struct CavityProfile {
    pub probe_radius: f64,
    pub histogram: OccupancyHistogram,
    /// Bin centers relative to the average reference height.
    pub z_relative: Vec<f64>,
    /// Average reference height over contributing frames.
    pub reference_height: f64,
    /// Frames at or after the start frame.
    pub frames_scanned: usize,
    /// Frames that contained reference atoms and entered the histogram.
    pub frames_used: usize,
}

impl CavityProfile {
    pub fn new(
        probe_radius: f64,
        grid: &ProbeGrid,
        histogram: OccupancyHistogram,
        reference_height: f64,
        frames_scanned: usize,
        frames_used: usize,
    ) -> Self {
        let z_relative = (0..histogram.bins())
            .map(|bin| grid.bin_center(bin) - reference_height)
            .collect();
        Self {
            probe_radius,
            histogram,
            z_relative,
            reference_height,
            frames_scanned,
            frames_used,
        }
    }

    pub fn probabilities(&self) -> Vec<f64> {
        self.histogram.probabilities()
    }

    pub fn global_empty(&self) -> u64 {
        self.histogram.global_empty()
    }

    pub fn global_total(&self) -> u64 {
        self.histogram.global_total()
    }

    /// Fraction of unobstructed probes over all bins and frames.
    pub fn aggregate_probability(&self) -> f64 {
        insertion_probability(self.global_empty(), self.global_total())
    }

    pub fn rows(&self) -> impl Iterator<Item = ProfileRow> + '_ {
        self.z_relative
            .iter()
            .zip(self.histogram.empty().iter().zip(self.histogram.total()))
            .map(|(&z_relative, (&empty, &total))| ProfileRow {
                z_relative,
                probability: insertion_probability(empty, total),
                empty,
                total,
            })
    }
}
