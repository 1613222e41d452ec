//! Progress reporting for plan installs
//!
//! All progress goes through the [`ProgressReporter`] trait so the
//! orchestrators stay silent in tests and dry runs.

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

pub trait ProgressReporter {
    /// Show the package currently being installed
    fn start_package(&mut self, name: &str, current: usize, total: usize);

    fn finish_package(&mut self);

    fn finish(&mut self);

    /// Stop the display after an error
    fn abandon(&mut self);
}

/// Progress bar over the packages of a plan
///
/// Hidden when stdout is not a terminal.
pub struct InteractiveProgress {
    pb: ProgressBar,
}

impl InteractiveProgress {
    pub fn new(total_packages: u64) -> Self {
        let pb = if Term::stdout().is_term() {
            ProgressBar::new(total_packages)
        } else {
            ProgressBar::hidden()
        };

        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);

        Self { pb }
    }
}

impl ProgressReporter for InteractiveProgress {
    fn start_package(&mut self, name: &str, current: usize, total: usize) {
        self.pb.set_message(format!("({current}/{total}) {name}"));
    }

    fn finish_package(&mut self) {
        self.pb.inc(1);
    }

    fn finish(&mut self) {
        self.pb.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.pb.abandon();
    }
}

/// No-op reporter for dry runs, single installs and tests
#[derive(Debug, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn start_package(&mut self, _name: &str, _current: usize, _total: usize) {}

    fn finish_package(&mut self) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}
