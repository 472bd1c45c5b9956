/// ProgressReporter port for user-facing diagnostics
///
/// Everything reported here goes to a side channel (stderr in the CLI) so
/// that the query output itself stays machine readable.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports a warning that does not affect the result
    fn report_warning(&self, message: &str);

    /// Reports an error the user must see, e.g. an unresolved target
    fn report_error(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_warning(&self, message: &str) {
        (**self).report_warning(message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }
}
