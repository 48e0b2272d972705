use crate::core::models::atom::Species;
use crate::core::models::cell::SimulationBox;
use crate::core::models::frame::AtomIndexRange;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for {parameter}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

fn invalid(parameter: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidParameter {
        parameter,
        reason: reason.into(),
    }
}

fn require_positive(parameter: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(
            parameter,
            format!("must be a positive finite number (got {})", value),
        ))
    }
}

/// Checks that a probe radius is a positive finite length.
pub fn validate_probe_radius(radius: f64) -> Result<(), ConfigError> {
    require_positive("probe_radius", radius)
}

/// Geometry of the probe grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Spacing of probe points along x and y, in Angstroms.
    pub xy_spacing: f64,
    /// Spacing of probe layers along z, in Angstroms.
    pub z_spacing: f64,
    /// Absolute z of the first probe layer.
    pub z_start: f64,
    /// Absolute z bound of the scan (exclusive).
    pub z_end: f64,
}

/// Which atoms act as solvent and which define the reference plane.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionConfig {
    pub solvent_species: Species,
    pub solvent_range: AtomIndexRange,
    pub reference_species: Species,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CavityConfig {
    /// First frame (1-based) that contributes to the statistics.
    pub start_frame: usize,
    pub cell: SimulationBox,
    pub grid: GridConfig,
    pub selection: SelectionConfig,
}

#[derive(Default)]
pub struct CavityConfigBuilder {
    start_frame: Option<usize>,
    cell: Option<SimulationBox>,
    xy_spacing: Option<f64>,
    z_spacing: Option<f64>,
    z_start: Option<f64>,
    z_end: Option<f64>,
    solvent_species: Option<Species>,
    solvent_range: Option<AtomIndexRange>,
    reference_species: Option<Species>,
}

impl CavityConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_frame(mut self, frame: usize) -> Self {
        self.start_frame = Some(frame);
        self
    }
    pub fn cell(mut self, cell: SimulationBox) -> Self {
        self.cell = Some(cell);
        self
    }
    pub fn xy_spacing(mut self, spacing: f64) -> Self {
        self.xy_spacing = Some(spacing);
        self
    }
    pub fn z_spacing(mut self, spacing: f64) -> Self {
        self.z_spacing = Some(spacing);
        self
    }
    pub fn z_range(mut self, start: f64, end: f64) -> Self {
        self.z_start = Some(start);
        self.z_end = Some(end);
        self
    }
    pub fn solvent_species(mut self, species: Species) -> Self {
        self.solvent_species = Some(species);
        self
    }
    pub fn solvent_range(mut self, range: AtomIndexRange) -> Self {
        self.solvent_range = Some(range);
        self
    }
    pub fn reference_species(mut self, species: Species) -> Self {
        self.reference_species = Some(species);
        self
    }

    /// Assembles and validates the configuration.
    ///
    /// The solvent index range defaults to every atom of the frame; every other
    /// parameter is required.
    pub fn build(self) -> Result<CavityConfig, ConfigError> {
        let start_frame = self
            .start_frame
            .ok_or(ConfigError::MissingParameter("start_frame"))?;
        if start_frame == 0 {
            return Err(invalid("start_frame", "frame numbering starts at 1"));
        }

        let grid = GridConfig {
            xy_spacing: self
                .xy_spacing
                .ok_or(ConfigError::MissingParameter("xy_spacing"))?,
            z_spacing: self
                .z_spacing
                .ok_or(ConfigError::MissingParameter("z_spacing"))?,
            z_start: self
                .z_start
                .ok_or(ConfigError::MissingParameter("z_start"))?,
            z_end: self.z_end.ok_or(ConfigError::MissingParameter("z_end"))?,
        };
        require_positive("xy_spacing", grid.xy_spacing)?;
        require_positive("z_spacing", grid.z_spacing)?;
        if !grid.z_start.is_finite() || !grid.z_end.is_finite() || grid.z_end <= grid.z_start {
            return Err(invalid(
                "z_range",
                format!(
                    "scan end must exceed scan start (got {} to {})",
                    grid.z_start, grid.z_end
                ),
            ));
        }

        let solvent_range = self.solvent_range.unwrap_or_default();
        if solvent_range.start == 0 {
            return Err(invalid("solvent_range", "atom positions start at 1"));
        }
        if let Some(end) = solvent_range.end {
            if end < solvent_range.start {
                return Err(invalid(
                    "solvent_range",
                    format!("end {} precedes start {}", end, solvent_range.start),
                ));
            }
        }

        let selection = SelectionConfig {
            solvent_species: self
                .solvent_species
                .ok_or(ConfigError::MissingParameter("solvent_species"))?,
            solvent_range,
            reference_species: self
                .reference_species
                .ok_or(ConfigError::MissingParameter("reference_species"))?,
        };
        if selection.solvent_species == selection.reference_species {
            return Err(invalid(
                "reference_species",
                format!(
                    "must differ from the solvent species '{}'",
                    selection.solvent_species
                ),
            ));
        }

        Ok(CavityConfig {
            start_frame,
            cell: self.cell.ok_or(ConfigError::MissingParameter("cell"))?,
            grid,
            selection,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub cavity: CavityConfig,
    /// Probe radii in Angstroms, evaluated in this order.
    pub probe_radii: Vec<f64>,
    /// Absolute temperature used for the free energy, in Kelvin.
    pub temperature_k: f64,
}

#[derive(Default)]
pub struct SweepConfigBuilder {
    cavity: Option<CavityConfig>,
    probe_radii: Option<Vec<f64>>,
    temperature_k: Option<f64>,
}

impl SweepConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cavity(mut self, config: CavityConfig) -> Self {
        self.cavity = Some(config);
        self
    }
    pub fn probe_radii(mut self, radii: Vec<f64>) -> Self {
        self.probe_radii = Some(radii);
        self
    }
    pub fn temperature_k(mut self, temperature: f64) -> Self {
        self.temperature_k = Some(temperature);
        self
    }

    pub fn build(self) -> Result<SweepConfig, ConfigError> {
        let probe_radii = self
            .probe_radii
            .ok_or(ConfigError::MissingParameter("probe_radii"))?;
        if probe_radii.is_empty() {
            return Err(invalid("probe_radii", "at least one radius is required"));
        }
        for &radius in &probe_radii {
            validate_probe_radius(radius)?;
        }

        let temperature_k = self
            .temperature_k
            .ok_or(ConfigError::MissingParameter("temperature_k"))?;
        require_positive("temperature_k", temperature_k)?;

        Ok(SweepConfig {
            cavity: self
                .cavity
                .ok_or(ConfigError::MissingParameter("cavity"))?,
            probe_radii,
            temperature_k,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn species(label: &str) -> Species {
        Species::new(label).unwrap()
    }

    fn complete_builder() -> CavityConfigBuilder {
        CavityConfigBuilder::new()
            .start_frame(2000)
            .cell(SimulationBox::new(16.4721, 12.6818, 35.3541).unwrap())
            .xy_spacing(1.0)
            .z_spacing(0.1)
            .z_range(0.0, 20.0)
            .solvent_species(species("O"))
            .reference_species(species("Mo"))
    }

    #[test]
    fn complete_builder_produces_config_with_open_solvent_range() {
        let config = complete_builder().build().unwrap();
        assert_eq!(config.start_frame, 2000);
        assert_eq!(config.grid.z_end, 20.0);
        assert_eq!(config.selection.solvent_range, AtomIndexRange::all());
        assert_eq!(config.selection.reference_species.as_str(), "MO");
    }

    #[test]
    fn missing_cell_is_reported() {
        let builder = CavityConfigBuilder::new()
            .start_frame(1)
            .xy_spacing(1.0)
            .z_spacing(0.1)
            .z_range(0.0, 20.0)
            .solvent_species(species("O"))
            .reference_species(species("Mo"));
        assert_eq!(
            builder.build(),
            Err(ConfigError::MissingParameter("cell"))
        );
    }

    #[test]
    fn zero_start_frame_is_rejected() {
        let result = complete_builder().start_frame(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                parameter: "start_frame",
                ..
            })
        ));
    }

    #[test]
    fn inverted_z_range_is_rejected() {
        let result = complete_builder().z_range(10.0, 10.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                parameter: "z_range",
                ..
            })
        ));
    }

    #[test]
    fn non_positive_spacing_is_rejected() {
        assert!(complete_builder().xy_spacing(0.0).build().is_err());
        assert!(complete_builder().z_spacing(-0.1).build().is_err());
    }

    #[test]
    fn inverted_solvent_range_is_rejected() {
        let result = complete_builder()
            .solvent_range(AtomIndexRange::new(10, Some(5)))
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                parameter: "solvent_range",
                ..
            })
        ));
    }

    #[test]
    fn reference_equal_to_solvent_is_rejected() {
        let result = complete_builder().reference_species(species("o")).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                parameter: "reference_species",
                ..
            })
        ));
    }

    #[test]
    fn sweep_requires_positive_radii_and_temperature() {
        let cavity = complete_builder().build().unwrap();

        let ok = SweepConfigBuilder::new()
            .cavity(cavity.clone())
            .probe_radii(vec![1.5, 2.0])
            .temperature_k(298.15)
            .build()
            .unwrap();
        assert_eq!(ok.probe_radii, vec![1.5, 2.0]);

        let empty = SweepConfigBuilder::new()
            .cavity(cavity.clone())
            .probe_radii(vec![])
            .temperature_k(298.15)
            .build();
        assert!(empty.is_err());

        let negative = SweepConfigBuilder::new()
            .cavity(cavity.clone())
            .probe_radii(vec![1.0, -1.0])
            .temperature_k(298.15)
            .build();
        assert!(matches!(
            negative,
            Err(ConfigError::InvalidParameter {
                parameter: "probe_radius",
                ..
            })
        ));

        let cold = SweepConfigBuilder::new()
            .cavity(cavity)
            .probe_radii(vec![1.0])
            .temperature_k(0.0)
            .build();
        assert!(cold.is_err());
    }
}
