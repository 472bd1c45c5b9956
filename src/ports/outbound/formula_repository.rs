use crate::reverse_deps::domain::Formula;
use crate::shared::Result;
use std::path::Path;

/// FormulaRepository port for loading the formula universe
///
/// Parsing formula definitions is the repository's job; the core only ever
/// sees the resulting `Formula` values.
pub trait FormulaRepository {
    /// Loads every formula from the given source
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source does not exist or cannot be read
    /// - A definition cannot be parsed or holds an invalid name
    fn load_formulae(&self, source: &Path) -> Result<Vec<Formula>>;
}
