use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

pub const SUMMARY_FILE_NAME: &str = "cavitation_energy_summary.csv";

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// The cross-radius result for one probe radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "Radius(Å)")]
    pub radius: f64,
    #[serde(rename = "P0")]
    pub probability: f64,
    /// Cavitation free energy in kJ/mol; `+inf` when no probe was ever unobstructed.
    #[serde(rename = "FreeEnergy(kJ/mol)")]
    pub free_energy_kj_mol: f64,
}

/// Writes summary rows as CSV with a header line, in the given order.
pub fn write_summary<W: Write>(rows: &[SummaryRow], writer: W) -> Result<(), SummaryError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_summary_to_path<P: AsRef<Path>>(
    rows: &[SummaryRow],
    path: P,
) -> Result<(), SummaryError> {
    let file = File::create(path)?;
    write_summary(rows, file)
}
