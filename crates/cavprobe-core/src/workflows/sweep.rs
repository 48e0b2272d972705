use crate::core::io::summary::SummaryRow;
use crate::core::io::traits::TrajectorySource;
use crate::core::thermo::cavitation_free_energy;
use crate::engine::config::SweepConfig;
use crate::engine::error::EngineError;
use crate::engine::profile::CavityProfile;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::workflows::cavity;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    /// One profile per probe radius, in configuration order.
    pub profiles: Vec<CavityProfile>,
    /// One summary row per probe radius, in configuration order.
    pub summary: Vec<SummaryRow>,
}

/// Reduces a profile to its aggregate probability and cavitation free energy.
pub fn summarize(profile: &CavityProfile, temperature_k: f64) -> SummaryRow {
    let probability = profile.aggregate_probability();
    SummaryRow {
        radius: profile.probe_radius,
        probability,
        free_energy_kj_mol: cavitation_free_energy(probability, temperature_k),
    }
}

/// Runs the cavity workflow once per probe radius and summarizes each result.
///
/// Radii are processed sequentially in the configured order, each re-streaming the
/// source from its first frame. The first failing radius aborts the sweep.
#[instrument(skip_all, name = "sweep_workflow")]
pub fn run<S: TrajectorySource + ?Sized>(
    source: &S,
    config: &SweepConfig,
    reporter: &ProgressReporter,
) -> Result<SweepResult, EngineError> {
    info!(
        radii = ?config.probe_radii,
        temperature_k = config.temperature_k,
        source = %source.describe(),
        "Starting probe radius sweep."
    );
    reporter.report(Progress::PhaseStart {
        name: "Probe insertion sweep",
    });
    reporter.report(Progress::TaskStart {
        total_steps: config.probe_radii.len() as u64,
    });

    let mut profiles = Vec::with_capacity(config.probe_radii.len());
    let mut summary = Vec::with_capacity(config.probe_radii.len());

    for &radius in &config.probe_radii {
        reporter.report(Progress::StatusUpdate {
            text: format!("R={} Å", radius),
        });

        let profile = cavity::run(source, &config.cavity, radius, reporter)?;
        let row = summarize(&profile, config.temperature_k);
        info!(
            radius,
            probability = row.probability,
            free_energy_kj_mol = row.free_energy_kj_mol,
            "Radius summarized."
        );

        profiles.push(profile);
        summary.push(row);
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    Ok(SweepResult { profiles, summary })
}
