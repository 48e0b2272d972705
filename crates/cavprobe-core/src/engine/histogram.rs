use super::scan::FrameContribution;
use crate::core::thermo::insertion_probability;

/// Per-bin counts of tested and unobstructed probes, accumulated over frames.
///
/// `empty[bin] <= total[bin]` holds for every bin at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyHistogram {
    total: Vec<u64>,
    empty: Vec<u64>,
}

impl OccupancyHistogram {
    pub fn new(bins: usize) -> Self {
        Self {
            total: vec![0; bins],
            empty: vec![0; bins],
        }
    }

    #[inline]
    pub fn bins(&self) -> usize {
        self.total.len()
    }

    pub fn total(&self) -> &[u64] {
        &self.total
    }

    pub fn empty(&self) -> &[u64] {
        &self.empty
    }

    /// Adds one frame's counts.
    ///
    /// # Panics
    ///
    /// Panics if the contribution was computed for a different number of bins.
    pub fn absorb(&mut self, contribution: &FrameContribution) {
        assert_eq!(
            contribution.empty.len(),
            self.bins(),
            "frame contribution has a different bin count than the histogram"
        );
        for (bin, &empty) in contribution.empty.iter().enumerate() {
            self.total[bin] += contribution.probes_per_layer;
            self.empty[bin] += empty;
        }
    }

    /// Fraction of unobstructed probes per bin; zero for bins without probes.
    pub fn probabilities(&self) -> Vec<f64> {
        self.empty
            .iter()
            .zip(&self.total)
            .map(|(&empty, &total)| insertion_probability(empty, total))
            .collect()
    }

    pub fn global_empty(&self) -> u64 {
        self.empty.iter().sum()
    }

    pub fn global_total(&self) -> u64 {
        self.total.iter().sum()
    }
}
