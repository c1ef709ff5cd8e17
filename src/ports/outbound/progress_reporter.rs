/// ProgressReporter port for user feedback on stderr
///
/// Keeps diagnostics off stdout so formatted output can be piped.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress of a counted operation
    ///
    /// # Arguments
    /// * `current` - Items processed so far
    /// * `total` - Total expected items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
