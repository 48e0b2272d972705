use nalgebra::Vector3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone, Copy)]
pub enum CellError {
    #[error("Box edge along {axis} must be a positive finite length (got {value})")]
    InvalidEdge { axis: char, value: f64 },
}

/// An orthorhombic, fully periodic simulation box.
///
/// The edge lengths are validated once on construction and are treated as constant for
/// the whole trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationBox {
    lengths: Vector3<f64>,
}

impl SimulationBox {
    /// Creates a box from its three edge lengths in Angstroms.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::InvalidEdge`] if any edge is non-positive or not finite.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, CellError> {
        for (axis, value) in [('x', x), ('y', y), ('z', z)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CellError::InvalidEdge { axis, value });
            }
        }
        Ok(Self {
            lengths: Vector3::new(x, y, z),
        })
    }

    pub fn from_array(dimensions: [f64; 3]) -> Result<Self, CellError> {
        Self::new(dimensions[0], dimensions[1], dimensions[2])
    }

    #[inline]
    pub fn lengths(&self) -> &Vector3<f64> {
        &self.lengths
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.lengths.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.lengths.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.lengths.z
    }
}
