use super::config::SelectionConfig;
use super::grid::ProbeGrid;
use super::histogram::OccupancyHistogram;
use super::reference::ReferencePlane;
use crate::core::models::cell::SimulationBox;
use crate::core::models::frame::Frame;
use crate::core::utils::geometry::is_probe_unobstructed;

/// What a single frame adds to the statistics of a scan.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameContribution {
    /// Mean z of the frame's reference atoms.
    pub reference_height: f64,
    /// Probes tested in every z-layer (the same for all layers).
    pub probes_per_layer: u64,
    /// Unobstructed probes per z-layer.
    pub empty: Vec<u64>,
}

/// Classifies the probe points of one frame for a fixed probe radius.
///
/// Scanning is a pure function of the frame and the scanner's configuration; all
/// accumulation happens in [`ScanAccumulator`].
pub struct FrameScanner<'a> {
    grid: &'a ProbeGrid,
    cell: &'a SimulationBox,
    selection: &'a SelectionConfig,
    radius_squared: f64,
}

impl<'a> FrameScanner<'a> {
    pub fn new(
        grid: &'a ProbeGrid,
        cell: &'a SimulationBox,
        selection: &'a SelectionConfig,
        probe_radius: f64,
    ) -> Self {
        Self {
            grid,
            cell,
            selection,
            radius_squared: probe_radius * probe_radius,
        }
    }

    /// Scans every probe point against the frame's solvent atoms.
    ///
    /// Returns `None` for a frame without reference atoms; such a frame must not
    /// contribute to any statistic.
    pub fn scan(&self, frame: &Frame) -> Option<FrameContribution> {
        let partition = frame.partition(
            &self.selection.solvent_species,
            &self.selection.solvent_range,
            &self.selection.reference_species,
        );
        let reference_height = partition.reference_height()?;

        let empty = (0..self.grid.bin_count())
            .map(|bin| {
                self.grid
                    .layer(bin)
                    .filter(|probe| {
                        is_probe_unobstructed(
                            probe,
                            &partition.solvent,
                            self.cell,
                            self.radius_squared,
                        )
                    })
                    .count() as u64
            })
            .collect();

        Some(FrameContribution {
            reference_height,
            probes_per_layer: self.grid.points_per_layer() as u64,
            empty,
        })
    }
}

/// Running state of a scan over a frame stream.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanAccumulator {
    pub histogram: OccupancyHistogram,
    pub reference: ReferencePlane,
    /// Frames at or after the start frame, whether or not they contributed.
    pub frames_scanned: usize,
}

impl ScanAccumulator {
    pub fn new(bins: usize) -> Self {
        Self {
            histogram: OccupancyHistogram::new(bins),
            reference: ReferencePlane::new(),
            frames_scanned: 0,
        }
    }

    /// Records a scanned frame and, if it has one, its contribution.
    ///
    /// The histogram and the reference plane are always updated together.
    pub fn absorb(&mut self, contribution: Option<FrameContribution>) {
        self.frames_scanned += 1;
        if let Some(contribution) = contribution {
            self.histogram.absorb(&contribution);
            self.reference.record(contribution.reference_height);
        }
    }

    /// Frames that contributed to the histogram.
    pub fn frames_used(&self) -> usize {
        self.reference.frame_count()
    }
}
