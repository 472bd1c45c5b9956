/// Type alias for Result with anyhow::Error as the error type.
/// Every fallible operation outside the typed error enum goes through this alias.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
