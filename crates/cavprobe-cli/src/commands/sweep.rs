use crate::cli::SweepArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use cavprobe::core::io::profile::{PROFILE_FILE_NAME, write_profile_to_path};
use cavprobe::core::io::summary::{SUMMARY_FILE_NAME, SummaryRow, write_summary_to_path};
use cavprobe::core::io::xyz::XyzTrajectory;
use cavprobe::engine::progress::ProgressReporter;
use cavprobe::workflows::sweep::{self, SweepResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

#[instrument(skip_all, name = "sweep_command")]
pub fn run(args: SweepArgs) -> Result<()> {
    info!("Building configuration for sweep command.");
    let app_config = build_config(&args)?;
    debug!(
        "Resolved sweep configuration: {:#?}",
        &app_config.sweep_config
    );

    let source = XyzTrajectory::new(&app_config.input_path);
    let handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(handler.get_callback());

    let result = sweep::run(&source, &app_config.sweep_config, &reporter)?;

    write_outputs(&result, &app_config.output_dir)?;
    print_summary(&result.summary);

    Ok(())
}

/// Name of the directory holding the profile for `radius`, e.g. `R=2.0`.
fn radius_dir_name(radius: f64) -> String {
    format!("R={:?}", radius)
}

fn write_outputs(result: &SweepResult, output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    for profile in &result.profiles {
        let dir = output_dir.join(radius_dir_name(profile.probe_radius));
        fs::create_dir_all(&dir)?;
        let path = dir.join(PROFILE_FILE_NAME);
        write_profile_to_path(profile.rows(), &path).map_err(|e| output_error(&path, e))?;
        info!(radius = profile.probe_radius, "Profile written to {:?}", path);
    }

    let summary_path = output_dir.join(SUMMARY_FILE_NAME);
    write_summary_to_path(&result.summary, &summary_path)
        .map_err(|e| output_error(&summary_path, e))?;
    info!("Summary written to {:?}", summary_path);

    Ok(())
}

fn output_error(path: &Path, source: impl Into<anyhow::Error>) -> CliError {
    CliError::Output {
        path: PathBuf::from(path),
        source: source.into(),
    }
}

fn format_summary(rows: &[SummaryRow]) -> String {
    let mut table = format!(
        "{:>10}  {:>12}  {:>20}\n",
        "Radius(Å)", "P0", "FreeEnergy(kJ/mol)"
    );
    for row in rows {
        table.push_str(&format!(
            "{:>10}  {:>12.6}  {:>20.4}\n",
            format!("{:?}", row.radius),
            row.probability,
            row.free_energy_kj_mol
        ));
    }
    table
}

fn print_summary(rows: &[SummaryRow]) {
    println!("\nCavitation free energy summary");
    print!("{}", format_summary(rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    const TRAJECTORY: &str = "\
2
frame 1
O 5.0 5.0 5.0
Mo 0.0 0.0 1.0
2
frame 2
O 5.0 5.0 5.0
Mo 0.0 0.0 3.0
";

    fn trajectory_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(TRAJECTORY.as_bytes()).unwrap();
        file
    }

    fn args(input: &Path, output: &Path) -> SweepArgs {
        SweepArgs {
            input: input.to_path_buf(),
            output_dir: output.to_path_buf(),
            config: None,
            start_frame: None,
            box_dimensions: Some(vec![10.0, 10.0, 10.0]),
            xy_spacing: Some(5.0),
            z_spacing: Some(5.0),
            z_start: Some(0.0),
            z_end: Some(10.0),
            solvent: None,
            solvent_start_index: None,
            solvent_end_index: None,
            reference: None,
            probe_radii: Some(vec![1.0, 2.0]),
            temperature: None,
            set_values: vec![],
        }
    }

    #[test]
    fn radius_directories_keep_a_decimal_point() {
        assert_eq!(radius_dir_name(2.0), "R=2.0");
        assert_eq!(radius_dir_name(1.75), "R=1.75");
    }

    #[test]
    fn sweep_writes_profiles_and_summary() {
        let input = trajectory_file();
        let out = tempdir().unwrap();

        run(args(input.path(), out.path())).unwrap();

        let profile = fs::read_to_string(out.path().join("R=1.0").join(PROFILE_FILE_NAME)).unwrap();
        let lines: Vec<&str> = profile.lines().collect();
        assert_eq!(
            lines,
            vec![
                "# z_relative(A)  P(0)  empty_counts  total_counts",
                "0.500000 1.000000 8.000000 8.000000",
                "5.500000 0.750000 6.000000 8.000000",
            ]
        );
        assert!(out.path().join("R=2.0").join(PROFILE_FILE_NAME).is_file());

        let summary = fs::read_to_string(out.path().join(SUMMARY_FILE_NAME)).unwrap();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Radius(Å),P0,FreeEnergy(kJ/mol)");
        assert!(lines[1].starts_with("1.0,0.875,"));
    }

    #[test]
    fn failed_sweep_writes_nothing() {
        let input = trajectory_file();
        let out = tempdir().unwrap();
        let target = out.path().join("results");
        let mut sweep_args = args(input.path(), &target);
        sweep_args.reference = Some("Au".to_string());

        let result = run(sweep_args);

        assert!(matches!(result, Err(CliError::Core(_))));
        assert!(!target.exists());
    }

    #[test]
    fn summary_table_keeps_the_full_radius() {
        let rows = [SummaryRow {
            radius: 2.125,
            probability: 0.25,
            free_energy_kj_mol: 3.4,
        }];
        let table = format_summary(&rows);
        let row = table.lines().nth(1).unwrap();

        assert_eq!(row.split_whitespace().next(), Some("2.125"));
        assert!(row.contains(&radius_dir_name(2.125)[2..]));
    }

    #[test]
    fn summary_table_lists_every_radius() {
        let rows = [
            SummaryRow {
                radius: 1.5,
                probability: 0.5,
                free_energy_kj_mol: 1.718,
            },
            SummaryRow {
                radius: 2.5,
                probability: 0.0,
                free_energy_kj_mol: f64::INFINITY,
            },
        ];
        let table = format_summary(&rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("1.5 "));
        assert!(lines[1].contains("0.500000"));
        assert!(lines[2].trim_end().ends_with("inf"));
    }
}
