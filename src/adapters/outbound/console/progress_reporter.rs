use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// StderrProgressReporter adapter writing diagnostics to stderr
///
/// Stdout carries only the query output. Informational messages are shown
/// only in verbose mode; warnings and errors always are. Prefixes are
/// colored when stderr is a terminal.
pub struct StderrProgressReporter {
    verbose: bool,
    colored: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self::with_verbosity(false)
    }

    pub fn with_verbosity(verbose: bool) -> Self {
        Self {
            verbose,
            colored: std::io::stderr().is_terminal(),
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn warning_line(&self, message: &str) -> String {
        if self.colored {
            format!("{} {}", "Warning:".yellow().bold(), message)
        } else {
            format!("Warning: {}", message)
        }
    }

    fn error_line(&self, message: &str) -> String {
        if self.colored {
            format!("{} {}", "Error:".red().bold(), message)
        } else {
            format!("Error: {}", message)
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message);
        }
    }

    fn report_warning(&self, message: &str) {
        eprintln!("{}", self.warning_line(message));
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", self.error_line(message));
    }
}
