/// ProgressReporter port for interactive progress feedback
///
/// Separate from [`super::ActivityLog`]: progress is for a person watching
/// the console, the activity log is the durable record.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the files of a sweep
    ///
    /// # Arguments
    /// * `current` - 1-based index of the file being processed
    /// * `total` - Number of files in the sweep
    /// * `message` - Optional message to include (typically the file name)
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports completion of a sweep
    fn report_completion(&self, message: &str);
}
