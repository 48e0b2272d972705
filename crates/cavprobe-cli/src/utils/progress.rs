use cavprobe::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const TICK_MS: u64 = 100;
const SWEEP_TEMPLATE: &str =
    "{spinner:.green} {prefix} [{bar:30.cyan/blue}] radius {pos}/{len} ({elapsed}) {wide_msg}";

/// Shows a sweep as one bar counting finished radii, with the latest frame status of
/// the radius in progress as its message.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr())
            .with_style(Self::sweep_style());
        pb.finish_and_clear();
        Self { pb }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();
        Box::new(move |progress: Progress| Self::apply(&pb, progress))
    }

    fn apply(pb: &ProgressBar, progress: Progress) {
        match progress {
            Progress::PhaseStart { name } => {
                pb.reset();
                pb.set_prefix(name);
                pb.set_message("");
                pb.enable_steady_tick(Duration::from_millis(TICK_MS));
            }
            Progress::TaskStart { total_steps } => {
                pb.set_length(total_steps);
                pb.set_position(0);
            }
            Progress::StatusUpdate { text } => pb.set_message(text),
            Progress::TaskIncrement => pb.inc(1),
            Progress::TaskFinish => {
                if let Some(length) = pb.length() {
                    pb.set_position(length);
                }
            }
            Progress::PhaseFinish => {
                pb.disable_steady_tick();
                pb.finish_with_message("done");
            }
            // Per-radius completion lines stay in the scrollback above the bar.
            Progress::Message(msg) if !pb.is_finished() => pb.println(format!("  {}", msg)),
            Progress::Message(msg) => pb.set_message(msg),
        }
    }

    fn sweep_style() -> ProgressStyle {
        ProgressStyle::with_template(SWEEP_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
