/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts user feedback (e.g., to stderr) while records are
/// fetched and the tree is built. It never touches stdout, which carries
/// the rendered output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an operation of unknown length that has started
    ///
    /// The next `report_completion` or `report_error` ends it.
    ///
    /// # Arguments
    /// * `message` - What is being waited on
    fn report_waiting(&self, message: &str);

    /// Reports a non-fatal problem, such as a dropped orphan record
    fn report_warning(&self, message: &str);

    /// Reports an error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
