use crate::application::dto::UsesResponse;
use crate::ports::outbound::DependentsFormatter;
use crate::shared::Result;

/// TextFormatter adapter: one dependent name per line, sorted
///
/// An empty result formats to an empty string. Unresolved targets are not
/// part of the text output; they are reported on stderr.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependentsFormatter for TextFormatter {
    fn format(&self, response: &UsesResponse) -> Result<String> {
        let mut output = String::new();
        for name in response.result.names() {
            output.push_str(name);
            output.push('\n');
        }
        Ok(output)
    }
}
