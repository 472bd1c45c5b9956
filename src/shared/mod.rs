/// Shared kernel - error types, result alias and helpers used across layers
pub mod error;
pub mod partial;
pub mod result;
pub mod security;

pub use partial::Partial;
pub use result::Result;
