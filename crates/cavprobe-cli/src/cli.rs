use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan",
    version,
    about = "CAVPROBE CLI - Probe-insertion cavity probabilities and cavitation free energies at interfaces from molecular-dynamics trajectories.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a trajectory for every probe radius and derive cavitation free energies.
    Sweep(SweepArgs),
}

/// Arguments for the `sweep` subcommand.
#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    // --- Core Arguments ---
    /// Path to the input XYZ trajectory.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Directory receiving one `R=<radius>` profile directory per radius and the summary CSV.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Trajectory and Cell Overrides ---
    /// First frame (1-based) included in the statistics.
    #[arg(long, value_name = "INT")]
    pub start_frame: Option<usize>,

    /// Orthorhombic box edge lengths in Angstroms, e.g. `--box 16.47,12.68,35.35`.
    #[arg(long = "box", value_name = "X,Y,Z", value_delimiter = ',')]
    pub box_dimensions: Option<Vec<f64>>,

    // --- Grid Overrides ---
    /// Probe spacing along x and y in Angstroms.
    #[arg(long, value_name = "FLOAT")]
    pub xy_spacing: Option<f64>,

    /// Probe layer spacing along z in Angstroms.
    #[arg(long, value_name = "FLOAT")]
    pub z_spacing: Option<f64>,

    /// Absolute z of the first probe layer.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub z_start: Option<f64>,

    /// Absolute z bound of the scan (exclusive).
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub z_end: Option<f64>,

    // --- Selection Overrides ---
    /// Species label of the solvent atoms (case-insensitive).
    #[arg(long, value_name = "SPECIES")]
    pub solvent: Option<String>,

    /// First atom position (1-based, inclusive) eligible as solvent.
    #[arg(long, value_name = "INT")]
    pub solvent_start_index: Option<usize>,

    /// Last atom position (1-based, inclusive) eligible as solvent.
    #[arg(long, value_name = "INT")]
    pub solvent_end_index: Option<usize>,

    /// Species label defining the reference plane (case-insensitive).
    #[arg(short = 'R', long, value_name = "SPECIES")]
    pub reference: Option<String>,

    // --- Sweep Overrides ---
    /// Probe radii in Angstroms, e.g. `-r 1.5,2.0,2.5`.
    #[arg(short = 'r', long = "radii", value_name = "FLOAT", value_delimiter = ',')]
    pub probe_radii: Option<Vec<f64>>,

    /// Absolute temperature in Kelvin used for the free energy.
    #[arg(short = 'T', long, value_name = "FLOAT")]
    pub temperature: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S grid.z-spacing=0.05
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
