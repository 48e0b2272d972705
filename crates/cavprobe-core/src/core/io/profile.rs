use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// File name of a per-radius profile inside its `R=<radius>` directory.
pub const PROFILE_FILE_NAME: &str = "cavity_probability.dat";

/// Column header of a height-resolved cavity profile table.
pub const PROFILE_HEADER: &str = "z_relative(A)  P(0)  empty_counts  total_counts";

/// One z-bin of a cavity profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileRow {
    /// Bin center relative to the average reference height, in Angstroms.
    pub z_relative: f64,
    /// Fraction of unobstructed probes in the bin.
    pub probability: f64,
    /// Number of unobstructed probes.
    pub empty: u64,
    /// Number of probes tested.
    pub total: u64,
}

/// Writes a profile as a commented header followed by one whitespace-separated row per
/// bin, every column formatted with six decimals.
pub fn write_profile<W: Write>(
    rows: impl IntoIterator<Item = ProfileRow>,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "# {}", PROFILE_HEADER)?;
    for row in rows {
        writeln!(
            writer,
            "{:.6} {:.6} {:.6} {:.6}",
            row.z_relative, row.probability, row.empty as f64, row.total as f64
        )?;
    }
    writer.flush()
}

pub fn write_profile_to_path<P: AsRef<Path>>(
    rows: impl IntoIterator<Item = ProfileRow>,
    path: P,
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_profile(rows, &mut writer)
}
