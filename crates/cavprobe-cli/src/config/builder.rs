use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::SweepArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use cavprobe::core::models::atom::Species;
use cavprobe::core::models::cell::SimulationBox;
use cavprobe::core::models::frame::AtomIndexRange;
use cavprobe::engine::config as core_config;
use std::str::FromStr;

/// Resolves the sweep configuration with precedence CLI flag > `--set` > file > defaults.
pub fn build_config(args: &SweepArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let trajectory_file = file_config.trajectory.take().unwrap_or_default();
    let cell_file = file_config.cell.take().unwrap_or_default();
    let grid_file = file_config.grid.take().unwrap_or_default();
    let selection_file = file_config.selection.take().unwrap_or_default();
    let sweep_file = file_config.sweep.take().unwrap_or_default();

    let start_frame = args
        .start_frame
        .or(trajectory_file.start_frame)
        .unwrap_or(defaults.start_frame);

    let dimensions = match &args.box_dimensions {
        Some(values) => Some(<[f64; 3]>::try_from(values.as_slice()).map_err(|_| {
            CliError::Argument(format!(
                "--box expects exactly three edge lengths, got {}",
                values.len()
            ))
        })?),
        None => cell_file.dimensions,
    }
    .ok_or_else(|| {
        CliError::Config(
            "Box dimensions are required. Pass --box X,Y,Z or set `dimensions` under [cell]."
                .to_string(),
        )
    })?;
    let cell = SimulationBox::from_array(dimensions).map_err(|e| CliError::Config(e.to_string()))?;

    let xy_spacing = args
        .xy_spacing
        .or(grid_file.xy_spacing)
        .unwrap_or(defaults.xy_spacing);
    let z_spacing = args
        .z_spacing
        .or(grid_file.z_spacing)
        .unwrap_or(defaults.z_spacing);
    let z_start = args.z_start.or(grid_file.z_start).unwrap_or(defaults.z_start);
    let z_end = args.z_end.or(grid_file.z_end).unwrap_or(defaults.z_end);

    let solvent_species = parse_species(
        args.solvent
            .as_deref()
            .or(selection_file.solvent_species.as_deref())
            .unwrap_or(&defaults.solvent_species),
    )?;
    let reference_species = parse_species(
        args.reference
            .as_deref()
            .or(selection_file.reference_species.as_deref())
            .unwrap_or(&defaults.reference_species),
    )?;
    let solvent_range = AtomIndexRange::new(
        args.solvent_start_index
            .or(selection_file.solvent_start_index)
            .unwrap_or(defaults.solvent_start_index),
        args.solvent_end_index.or(selection_file.solvent_end_index),
    );

    let probe_radii = args
        .probe_radii
        .clone()
        .or(sweep_file.probe_radii)
        .unwrap_or(defaults.probe_radii);
    let temperature = args
        .temperature
        .or(sweep_file.temperature)
        .unwrap_or(defaults.temperature);

    let cavity_config = core_config::CavityConfigBuilder::new()
        .start_frame(start_frame)
        .cell(cell)
        .xy_spacing(xy_spacing)
        .z_spacing(z_spacing)
        .z_range(z_start, z_end)
        .solvent_species(solvent_species)
        .solvent_range(solvent_range)
        .reference_species(reference_species)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let sweep_config = core_config::SweepConfigBuilder::new()
        .cavity(cavity_config)
        .probe_radii(probe_radii)
        .temperature_k(temperature)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        output_dir: args.output_dir.clone(),
        sweep_config,
    })
}

fn parse_species(label: &str) -> Result<Species> {
    Species::from_str(label)
        .map_err(|e| CliError::Argument(format!("Invalid species label '{}': {}", label, e)))
}

fn parse_number<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();

        match key {
            "trajectory.start-frame" => {
                config
                    .trajectory
                    .get_or_insert_with(Default::default)
                    .start_frame = Some(parse_number(key, value_str, "integer")?);
            }
            "cell.dimensions" => {
                config.cell.get_or_insert_with(Default::default).dimensions = Some(
                    parser::parse_triplet(key, value_str)
                        .map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            "grid.xy-spacing" => {
                config.grid.get_or_insert_with(Default::default).xy_spacing =
                    Some(parse_number(key, value_str, "float")?);
            }
            "grid.z-spacing" => {
                config.grid.get_or_insert_with(Default::default).z_spacing =
                    Some(parse_number(key, value_str, "float")?);
            }
            "grid.z-start" => {
                config.grid.get_or_insert_with(Default::default).z_start =
                    Some(parse_number(key, value_str, "float")?);
            }
            "grid.z-end" => {
                config.grid.get_or_insert_with(Default::default).z_end =
                    Some(parse_number(key, value_str, "float")?);
            }
            "selection.solvent-species" => {
                config
                    .selection
                    .get_or_insert_with(Default::default)
                    .solvent_species = Some(value_str.trim().to_string());
            }
            "selection.solvent-start-index" => {
                config
                    .selection
                    .get_or_insert_with(Default::default)
                    .solvent_start_index = Some(parse_number(key, value_str, "integer")?);
            }
            "selection.solvent-end-index" => {
                config
                    .selection
                    .get_or_insert_with(Default::default)
                    .solvent_end_index = Some(parse_number(key, value_str, "integer")?);
            }
            "selection.reference-species" => {
                config
                    .selection
                    .get_or_insert_with(Default::default)
                    .reference_species = Some(value_str.trim().to_string());
            }
            "sweep.probe-radii" => {
                config.sweep.get_or_insert_with(Default::default).probe_radii = Some(
                    parser::parse_float_list(key, value_str)
                        .map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            "sweep.temperature" => {
                config.sweep.get_or_insert_with(Default::default).temperature =
                    Some(parse_number(key, value_str, "float")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn base_sweep_args() -> SweepArgs {
        SweepArgs {
            input: PathBuf::from("traj.xyz"),
            output_dir: PathBuf::from("out"),
            config: None,
            start_frame: None,
            box_dimensions: Some(vec![16.4721, 12.6818, 35.3541]),
            xy_spacing: None,
            z_spacing: None,
            z_start: None,
            z_end: None,
            solvent: None,
            solvent_start_index: None,
            solvent_end_index: None,
            reference: None,
            probe_radii: None,
            temperature: None,
            set_values: vec![],
        }
    }

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cavprobe.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_fill_everything_but_the_box() {
        let app = build_config(&base_sweep_args()).unwrap();
        let defaults = DefaultsConfig::default();
        let sweep = app.sweep_config;

        assert_eq!(app.input_path, PathBuf::from("traj.xyz"));
        assert_eq!(app.output_dir, PathBuf::from("out"));
        assert_eq!(sweep.probe_radii, defaults.probe_radii);
        assert_eq!(sweep.temperature_k, defaults.temperature);
        assert_eq!(sweep.cavity.start_frame, 1);
        assert_eq!(sweep.cavity.cell.x(), 16.4721);
        assert_eq!(sweep.cavity.grid.xy_spacing, 1.0);
        assert_eq!(sweep.cavity.grid.z_spacing, 0.1);
        assert_eq!(sweep.cavity.grid.z_start, 0.0);
        assert_eq!(sweep.cavity.grid.z_end, 20.0);
        assert_eq!(sweep.cavity.selection.solvent_species.as_str(), "O");
        assert_eq!(sweep.cavity.selection.reference_species.as_str(), "MO");
        assert_eq!(sweep.cavity.selection.solvent_range, AtomIndexRange::all());
    }

    #[test]
    fn missing_box_is_a_config_error() {
        let mut args = base_sweep_args();
        args.box_dimensions = None;
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn file_values_replace_defaults() {
        let (_dir, path) = write_config(
            r#"
            [trajectory]
            start-frame = 2000

            [cell]
            dimensions = [10.0, 11.0, 12.0]

            [grid]
            z-spacing = 0.25
            z-end = 15.0

            [selection]
            solvent-start-index = 433
            reference-species = "Au"

            [sweep]
            probe-radii = [2.0, 3.0]
            temperature = 310.0
            "#,
        );
        let mut args = base_sweep_args();
        args.box_dimensions = None;
        args.config = Some(path);

        let sweep = build_config(&args).unwrap().sweep_config;

        assert_eq!(sweep.cavity.start_frame, 2000);
        assert_eq!(sweep.cavity.cell.z(), 12.0);
        assert_eq!(sweep.cavity.grid.z_spacing, 0.25);
        assert_eq!(sweep.cavity.grid.z_end, 15.0);
        assert_eq!(sweep.cavity.grid.xy_spacing, 1.0);
        assert_eq!(
            sweep.cavity.selection.solvent_range,
            AtomIndexRange::new(433, None)
        );
        assert_eq!(sweep.cavity.selection.reference_species.as_str(), "AU");
        assert_eq!(sweep.probe_radii, vec![2.0, 3.0]);
        assert_eq!(sweep.temperature_k, 310.0);
    }

    #[test]
    fn cli_flags_override_set_values_and_file() {
        let (_dir, path) = write_config(
            r#"
            [trajectory]
            start-frame = 2000

            [sweep]
            probe-radii = [2.0, 3.0]
            "#,
        );
        let mut args = base_sweep_args();
        args.config = Some(path);
        args.set_values = vec![
            "trajectory.start-frame=50".to_string(),
            "sweep.probe-radii=1.0,1.25".to_string(),
        ];
        args.start_frame = Some(7);

        let sweep = build_config(&args).unwrap().sweep_config;

        assert_eq!(sweep.cavity.start_frame, 7);
        assert_eq!(sweep.probe_radii, vec![1.0, 1.25]);
    }

    #[test]
    fn set_values_cover_every_section() {
        let mut args = base_sweep_args();
        args.box_dimensions = None;
        args.set_values = vec![
            "cell.dimensions=20,20,40".to_string(),
            "grid.xy-spacing=0.5".to_string(),
            "grid.z-start=-2.0".to_string(),
            "selection.solvent-species=OW".to_string(),
            "selection.solvent-end-index=900".to_string(),
            "sweep.temperature=350".to_string(),
        ];

        let sweep = build_config(&args).unwrap().sweep_config;

        assert_eq!(sweep.cavity.cell.z(), 40.0);
        assert_eq!(sweep.cavity.grid.xy_spacing, 0.5);
        assert_eq!(sweep.cavity.grid.z_start, -2.0);
        assert_eq!(sweep.cavity.selection.solvent_species.as_str(), "OW");
        assert_eq!(
            sweep.cavity.selection.solvent_range,
            AtomIndexRange::new(1, Some(900))
        );
        assert_eq!(sweep.temperature_k, 350.0);
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        let mut args = base_sweep_args();
        args.set_values = vec!["grid.z-spacing".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        args.set_values = vec!["grid.unknown=1".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        args.set_values = vec!["grid.z-spacing=fine".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn invalid_values_surface_as_config_errors() {
        let mut args = base_sweep_args();
        args.probe_radii = Some(vec![1.5, -1.0]);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        let mut args = base_sweep_args();
        args.reference = Some("o".to_string());
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        let mut args = base_sweep_args();
        args.solvent = Some("O-1".to_string());
        assert!(matches!(build_config(&args), Err(CliError::Argument(_))));
    }
}
