/// Tracks the per-frame height of the reference plane.
///
/// Only frames that contributed to the histogram are recorded, so the average is always
/// taken over exactly the frames that were scanned into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferencePlane {
    heights: Vec<f64>,
}

impl ReferencePlane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, height: f64) {
        self.heights.push(height);
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn frame_count(&self) -> usize {
        self.heights.len()
    }

    /// Mean reference height, or `None` when no frame was recorded.
    pub fn average(&self) -> Option<f64> {
        if self.heights.is_empty() {
            None
        } else {
            Some(self.heights.iter().sum::<f64>() / self.heights.len() as f64)
        }
    }
}
