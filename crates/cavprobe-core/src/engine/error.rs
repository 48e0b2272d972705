use super::config::ConfigError;
use crate::core::io::xyz::XyzError;
use crate::core::models::atom::Species;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Trajectory source '{name}' is unavailable: {source}")]
    SourceUnavailable {
        name: String,
        #[source]
        source: XyzError,
    },

    #[error(
        "No valid frames in '{name}': {frames_scanned} frame(s) scanned from frame {start_frame} on, none contained reference species '{reference}'"
    )]
    NoValidFrames {
        name: String,
        start_frame: usize,
        frames_scanned: usize,
        reference: Species,
    },
}
