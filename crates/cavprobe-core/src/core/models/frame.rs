use super::atom::{AtomRecord, Species};
use nalgebra::Point3;

/// An inclusive, 1-based range of atom positions within a frame.
///
/// Positions count every atom in file order, regardless of species. An `end` of `None`
/// extends the range to the last atom of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomIndexRange {
    pub start: usize,
    pub end: Option<usize>,
}

impl AtomIndexRange {
    pub fn new(start: usize, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// A range covering every atom of a frame.
    pub fn all() -> Self {
        Self {
            start: 1,
            end: None,
        }
    }

    #[inline]
    pub fn contains(&self, position: usize) -> bool {
        position >= self.start && self.end.is_none_or(|end| position <= end)
    }
}

impl Default for AtomIndexRange {
    fn default() -> Self {
        Self::all()
    }
}

/// The two atom subsets the scan engine derives from a frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FramePartition {
    /// Positions of solvent atoms inside the configured index range.
    pub solvent: Vec<Point3<f64>>,
    /// Positions of atoms of the reference species.
    pub reference: Vec<Point3<f64>>,
}

impl FramePartition {
    /// Mean z-coordinate of the reference atoms, or `None` if there are none.
    pub fn reference_height(&self) -> Option<f64> {
        if self.reference.is_empty() {
            return None;
        }
        let sum: f64 = self.reference.iter().map(|p| p.z).sum();
        Some(sum / self.reference.len() as f64)
    }
}

/// A single trajectory snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// The free-form comment line that precedes the atom records.
    pub comment: String,
    /// Atom records in file order.
    pub atoms: Vec<AtomRecord>,
}

impl Frame {
    pub fn new(comment: impl Into<String>, atoms: Vec<AtomRecord>) -> Self {
        Self {
            comment: comment.into(),
            atoms,
        }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Splits the frame into its solvent and reference subsets.
    ///
    /// An atom of the solvent species is only ever considered as solvent: when it lies
    /// outside `solvent_range` it belongs to neither subset.
    pub fn partition(
        &self,
        solvent: &Species,
        solvent_range: &AtomIndexRange,
        reference: &Species,
    ) -> FramePartition {
        let mut partition = FramePartition::default();
        for (offset, atom) in self.atoms.iter().enumerate() {
            let position = offset + 1;
            if atom.species == *solvent {
                if solvent_range.contains(position) {
                    partition.solvent.push(atom.position);
                }
            } else if atom.species == *reference {
                partition.reference.push(atom.position);
            }
        }
        partition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(label: &str, x: f64, y: f64, z: f64) -> AtomRecord {
        AtomRecord::new(Species::new(label).unwrap(), Point3::new(x, y, z))
    }

    fn sample_frame() -> Frame {
        Frame::new(
            "sample",
            vec![
                atom("Mo", 0.0, 0.0, 1.0),
                atom("O", 1.0, 1.0, 5.0),
                atom("H", 1.5, 1.0, 5.0),
                atom("O", 2.0, 2.0, 6.0),
                atom("MO", 0.0, 0.0, 3.0),
                atom("o", 3.0, 3.0, 7.0),
            ],
        )
    }

    #[test]
    fn index_range_is_inclusive_and_open_ended() {
        let bounded = AtomIndexRange::new(2, Some(4));
        assert!(!bounded.contains(1));
        assert!(bounded.contains(2));
        assert!(bounded.contains(4));
        assert!(!bounded.contains(5));

        let open = AtomIndexRange::new(3, None);
        assert!(open.contains(1_000_000));
        assert!(!open.contains(2));
    }

    #[test]
    fn partition_selects_solvent_by_global_atom_position() {
        let frame = sample_frame();
        let o = Species::new("O").unwrap();
        let mo = Species::new("Mo").unwrap();

        let partition = frame.partition(&o, &AtomIndexRange::new(3, Some(6)), &mo);

        assert_eq!(
            partition.solvent,
            vec![Point3::new(2.0, 2.0, 6.0), Point3::new(3.0, 3.0, 7.0)]
        );
        assert_eq!(partition.reference.len(), 2);
    }

    #[test]
    fn reference_height_is_mean_z_of_reference_atoms() {
        let frame = sample_frame();
        let o = Species::new("O").unwrap();
        let mo = Species::new("MO").unwrap();

        let partition = frame.partition(&o, &AtomIndexRange::all(), &mo);

        assert_eq!(partition.solvent.len(), 3);
        assert_eq!(partition.reference_height(), Some(2.0));
    }

    #[test]
    fn frame_without_reference_atoms_has_no_height() {
        let frame = sample_frame();
        let o = Species::new("O").unwrap();
        let pt = Species::new("Pt").unwrap();

        let partition = frame.partition(&o, &AtomIndexRange::all(), &pt);
        assert!(partition.reference.is_empty());
        assert_eq!(partition.reference_height(), None);
    }
}
