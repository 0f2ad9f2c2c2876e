/// ProgressReporter port for diagnostics during a run
///
/// Everything reported here is side-channel output (stderr in production):
/// it must never be mixed into the report itself.
pub trait ProgressReporter {
    /// Reports an informational stage message
    fn report(&self, message: &str);

    /// Reports how many records of a batch have been processed
    ///
    /// # Arguments
    /// * `current` - Records processed so far
    /// * `total` - Records in the batch
    /// * `message` - Optional label for the stage
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a recoverable problem, such as a skipped match record
    fn report_warning(&self, message: &str);

    /// Reports that the run finished
    fn report_completion(&self, message: &str);
}
