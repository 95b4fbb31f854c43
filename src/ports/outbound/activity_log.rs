/// ActivityLog port for the persistent diagnostic log
///
/// One handle is created at startup and injected wherever processing
/// outcomes need to be recorded. Message text is informational only.
pub trait ActivityLog {
    /// A file or record was processed successfully
    fn info(&self, message: &str);

    /// A recoverable anomaly; processing continues
    fn warn(&self, message: &str);

    /// An input or output could not be used
    fn error(&self, message: &str);
}
