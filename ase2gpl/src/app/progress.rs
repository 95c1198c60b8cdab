/*!
 Progress bar displayed while a conversion runs.
*/

use ase_palette::palette::ImportReporter;
use indicatif::{ProgressBar, ProgressStyle};

/// Scale for the bar; the importer reports fractions, not block counts
const PROGRESS_SCALE: u64 = 100;

/// Terminal progress bar fed by the importer's per-block callbacks
pub struct ConvertProgress {
    bar: ProgressBar,
}

impl ConvertProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(PROGRESS_SCALE);
        let style = ProgressStyle::default_bar()
            .template("{percent}% [{bar:30}]")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        Self { bar }
    }

    /// Fill and remove the bar once the import is over
    pub fn finish(&self) {
        self.bar.set_position(PROGRESS_SCALE);
        self.bar.finish_and_clear();
    }
}

impl ImportReporter for ConvertProgress {
    fn report_progress(&mut self, fraction: f64) -> bool {
        self.bar
            .set_position((fraction * PROGRESS_SCALE as f64).round() as u64);
        true
    }
}
