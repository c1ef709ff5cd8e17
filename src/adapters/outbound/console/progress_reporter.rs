use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const PROGRESS_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so it doesn't interfere with stdout output. Counted
/// operations get an indicatif progress bar.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            pb.clone()
        } else {
            let pb = ProgressBar::new(total as u64);
            let style = ProgressStyle::default_bar()
                .template(PROGRESS_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-");
            pb.set_style(style);
            *pb_option = Some(pb.clone());
            pb
        }
    }

    /// Clears a finished bar so the next counted operation starts a new one
    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
        if current >= total {
            self.finish_progress_bar();
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!();
        eprintln!("{}", message);
    }
}

/// Reporter used with `--quiet`: drops everything
#[derive(Debug, Default, Clone, Copy)]
pub struct QuietProgressReporter;

impl ProgressReporter for QuietProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, _message: &str) {}

    fn report_completion(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.report_progress(5, 10, Some("test"));
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_progress_bar_is_dropped_when_complete() {
        let reporter = StderrProgressReporter::default();
        reporter.report_progress(1, 2, None);
        assert!(reporter.progress_bar.borrow().is_some());
        reporter.report_progress(2, 2, None);
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_quiet_reporter_is_silent() {
        let reporter = QuietProgressReporter;
        reporter.report("ignored");
        reporter.report_progress(1, 1, Some("ignored"));
        reporter.report_error("ignored");
        reporter.report_completion("ignored");
    }
}
