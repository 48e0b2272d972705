pub struct DefaultsConfig {
    pub start_frame: usize,
    pub xy_spacing: f64,
    pub z_spacing: f64,
    pub z_start: f64,
    pub z_end: f64,
    pub solvent_species: String,
    pub solvent_start_index: usize,
    pub reference_species: String,
    pub probe_radii: Vec<f64>,
    pub temperature: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            start_frame: 1,
            xy_spacing: 1.0,
            z_spacing: 0.1,
            z_start: 0.0,
            z_end: 20.0,
            solvent_species: "O".to_string(),
            solvent_start_index: 1,
            reference_species: "MO".to_string(),
            probe_radii: vec![1.5, 1.75, 2.0, 2.25, 2.5],
            temperature: cavprobe::core::thermo::DEFAULT_TEMPERATURE_K,
        }
    }
}
