use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell a clean run apart from one where some of the requested
/// formulae could not be found, even though output was still produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every target resolved and the query completed
    Success = 0,
    /// At least one target could not be resolved (dependents of the others were still printed)
    UnresolvedTargets = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable index, bad config, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnresolvedTargets => write!(f, "Unresolved Targets (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors.
///
/// These are the hard failures; a formula that cannot be resolved is not one
/// of them (see `UnresolvedTarget`).
#[derive(Debug, Error)]
pub enum RdepsError {
    #[error("Formula index not found: {path}\n\n💡 Hint: {suggestion}")]
    FormulaIndexNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse formula index: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the index contains [[formula]] tables with a 'name' field")]
    FormulaIndexParseError { path: PathBuf, details: String },

    #[error("Duplicate formula in index: {name}\n\n💡 Hint: Every formula name must appear exactly once")]
    DuplicateFormula { name: String },

    #[error("Invalid formula name '{name}': {reason}")]
    InvalidFormulaName { name: String, reason: String },

    #[error("Invalid cellar path: {path}\nReason: {reason}\n\n💡 Hint: Pass the directory that holds one sub-directory per installed formula")]
    InvalidCellarPath { path: PathBuf, reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::UnresolvedTargets.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::UnresolvedTargets),
            "Unresolved Targets (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_formula_index_not_found_display() {
        let error = RdepsError::FormulaIndexNotFound {
            path: PathBuf::from("/tap/formulae.toml"),
            suggestion: "Pass --formulae".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Formula index not found"));
        assert!(display.contains("/tap/formulae.toml"));
        assert!(display.contains("💡 Hint: Pass --formulae"));
    }

    #[test]
    fn test_parse_error_display() {
        let error = RdepsError::FormulaIndexParseError {
            path: PathBuf::from("formulae.toml"),
            details: "missing field `name`".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse formula index"));
        assert!(display.contains("missing field `name`"));
    }

    #[test]
    fn test_duplicate_formula_display() {
        let error = RdepsError::DuplicateFormula {
            name: "foo".to_string(),
        };
        assert!(format!("{}", error).contains("Duplicate formula in index: foo"));
    }

    #[test]
    fn test_security_error_display() {
        let error = RdepsError::SecurityError {
            path: PathBuf::from("/tmp/link.toml"),
            reason: "formula index is a symbolic link".to_string(),
            hint: "Use the real file".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("symbolic link"));
        assert!(display.contains("Use the real file"));
    }
}
