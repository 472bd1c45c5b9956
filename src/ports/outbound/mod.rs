/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define what the application core needs from the file system,
/// the install tree and the console.
pub mod formatter;
pub mod formula_repository;
pub mod install_state;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::DependentsFormatter;
pub use formula_repository::FormulaRepository;
pub use install_state::InstallState;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
