use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SpeciesError {
    #[error("Species label is empty")]
    Empty,
    #[error("Species label '{0}' contains characters other than letters and digits")]
    InvalidCharacters(String),
}

/// A case-insensitive atomic species label (e.g. `O`, `Mo`, `AU`).
///
/// Labels are normalized to upper case on construction, so `Species::new("mo")` and
/// `Species::new("MO")` compare equal. Matching atoms against a configured species is
/// always done through this type rather than by comparing raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Species(String);

impl Species {
    /// Validates and normalizes a species label.
    ///
    /// # Errors
    ///
    /// Returns [`SpeciesError::Empty`] for a blank label and
    /// [`SpeciesError::InvalidCharacters`] if the trimmed label is not alphanumeric.
    pub fn new(label: &str) -> Result<Self, SpeciesError> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(SpeciesError::Empty);
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SpeciesError::InvalidCharacters(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Normalizes an atom label read from a trajectory without validating its characters.
    ///
    /// Trajectories may carry labels such as `Na+` or `C*` for atoms that are neither
    /// solvent nor reference; those must still be read so the frame survives. Such labels
    /// never equal a species built with [`Species::new`].
    pub fn from_label(label: &str) -> Self {
        Self(label.trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Species {
    type Err = SpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One atom line of a trajectory frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The species label of the atom.
    pub species: Species,
    /// The Cartesian position in Angstroms.
    pub position: Point3<f64>,
}

impl AtomRecord {
    pub fn new(species: Species, position: Point3<f64>) -> Self {
        Self { species, position }
    }
}
