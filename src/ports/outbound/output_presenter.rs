use crate::shared::Result;

/// OutputPresenter port: where the formatted dependents end up
///
/// The presenter writes content verbatim; formatting is already done.
pub trait OutputPresenter {
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
