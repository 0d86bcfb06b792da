use crate::batch::ProgressObserver;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Terminal progress bar that ticks once per processed file.
///
/// Drawn on stderr, so JSON results on stdout stay machine-readable.
/// Hidden automatically when stderr is not a terminal.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new(total_files: u64) -> anyhow::Result<Self> {
        let style = ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
            .context("invalid progress bar template")?
            .progress_chars("#>-");

        let bar = ProgressBar::new(total_files).with_style(style);
        bar.set_message("Computing hashes of files");

        Ok(Self { bar })
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressObserver for ProgressReporter {
    fn file_processed(&self, _path: &Path) {
        self.bar.inc(1);
    }
}
