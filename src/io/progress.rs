//! Progress display for batches of planning runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static RUN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Runs: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks completed runs and how many of them found a path
pub struct RunProgress {
    bar: Option<ProgressBar>,
    completed: usize,
    reachable: usize,
}

impl RunProgress {
    /// Create a tracker; a bar is only drawn when `visible` and more than one
    /// run is planned
    pub fn new(total_runs: usize, visible: bool) -> Self {
        let bar = (visible && total_runs > 1).then(|| {
            let bar = ProgressBar::new(total_runs as u64);
            bar.set_style(RUN_STYLE.clone());
            bar
        });
        Self {
            bar,
            completed: 0,
            reachable: 0,
        }
    }

    /// Record one finished run
    pub fn complete_run(&mut self, found_path: bool) {
        self.completed += 1;
        if found_path {
            self.reachable += 1;
        }
        if let Some(ref bar) = self.bar {
            bar.inc(1);
            bar.set_message(format!("{} with a path", self.reachable));
        }
    }

    /// Runs finished so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Finished runs that found a path
    pub const fn reachable(&self) -> usize {
        self.reachable
    }

    /// Clear the bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
