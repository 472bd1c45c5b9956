/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the formatters,
/// keeping the domain layer isolated.
mod output_format;
mod uses_request;
mod uses_response;

pub use output_format::OutputFormat;
pub use uses_request::{UsesRequest, UsesRequestBuilder};
pub use uses_response::{QueryMetadata, UsesResponse};
