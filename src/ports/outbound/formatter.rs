use crate::application::dto::UsesResponse;
use crate::shared::Result;

/// DependentsFormatter port for rendering a query response
pub trait DependentsFormatter {
    /// Formats the response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &UsesResponse) -> Result<String>;
}
