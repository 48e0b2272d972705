use cavprobe::engine::config::SweepConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub sweep_config: SweepConfig,
}
