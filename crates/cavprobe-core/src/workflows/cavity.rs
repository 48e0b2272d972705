use crate::core::io::traits::TrajectorySource;
use crate::engine::config::{CavityConfig, validate_probe_radius};
use crate::engine::error::EngineError;
use crate::engine::grid::ProbeGrid;
use crate::engine::profile::CavityProfile;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::scan::{FrameScanner, ScanAccumulator};
use tracing::{debug, info, instrument};

const STATUS_INTERVAL_FRAMES: usize = 100;

/// Computes the height-resolved cavity profile for one probe radius.
///
/// The source is opened afresh and streamed once. Frames numbered below
/// `config.start_frame` are read but ignored; frames without reference atoms are
/// excluded from both the histogram and the reference-height average.
///
/// # Errors
///
/// - [`EngineError::Config`] if `probe_radius` is not a positive finite length.
/// - [`EngineError::SourceUnavailable`] if the source cannot be opened.
/// - [`EngineError::NoValidFrames`] if no frame contributed to the histogram.
#[instrument(skip_all, name = "cavity_workflow", fields(radius = probe_radius))]
pub fn run<S: TrajectorySource + ?Sized>(
    source: &S,
    config: &CavityConfig,
    probe_radius: f64,
    reporter: &ProgressReporter,
) -> Result<CavityProfile, EngineError> {
    validate_probe_radius(probe_radius)?;

    info!(
        start_frame = config.start_frame,
        z_start = config.grid.z_start,
        z_end = config.grid.z_end,
        reference = %config.selection.reference_species,
        "Starting probe insertion scan."
    );

    let frames = source
        .open()
        .map_err(|source_error| EngineError::SourceUnavailable {
            name: source.describe(),
            source: source_error,
        })?;

    let grid = ProbeGrid::new(&config.cell, &config.grid);
    let scanner = FrameScanner::new(&grid, &config.cell, &config.selection, probe_radius);
    debug!(
        bins = grid.bin_count(),
        points_per_layer = grid.points_per_layer(),
        "Probe grid prepared."
    );

    let accumulator = frames
        .enumerate()
        .map(|(index, frame)| (index + 1, frame))
        .filter(|(frame_number, _)| *frame_number >= config.start_frame)
        .fold(
            ScanAccumulator::new(grid.bin_count()),
            |mut accumulator, (frame_number, frame)| {
                let contribution = scanner.scan(&frame);
                if contribution.is_none() {
                    debug!(frame = frame_number, "Frame has no reference atoms, skipped.");
                }
                accumulator.absorb(contribution);

                if accumulator.frames_scanned % STATUS_INTERVAL_FRAMES == 0 {
                    reporter.report(Progress::StatusUpdate {
                        text: format!(
                            "R={} Å: {} frames processed",
                            probe_radius, accumulator.frames_scanned
                        ),
                    });
                }
                accumulator
            },
        );

    let ScanAccumulator {
        histogram,
        reference,
        frames_scanned,
    } = accumulator;

    let Some(reference_height) = reference.average() else {
        return Err(EngineError::NoValidFrames {
            name: source.describe(),
            start_frame: config.start_frame,
            frames_scanned,
            reference: config.selection.reference_species.clone(),
        });
    };

    let profile = CavityProfile::new(
        probe_radius,
        &grid,
        histogram,
        reference_height,
        frames_scanned,
        reference.frame_count(),
    );

    info!(
        frames_scanned = profile.frames_scanned,
        frames_used = profile.frames_used,
        reference_height = profile.reference_height,
        aggregate_probability = profile.aggregate_probability(),
        "Probe insertion scan complete."
    );
    reporter.report(Progress::Message(format!(
        "R={} Å: {} frames processed",
        probe_radius, profile.frames_scanned
    )));

    Ok(profile)
}
