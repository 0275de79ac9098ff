/// ProgressReporter port for user-facing status messages
///
/// Messages go to a side channel (stderr) so that stdout can carry the
/// rendered header itself.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
