/// Mock implementations for testing
mod mock_formula_repository;
mod mock_install_state;
mod mock_progress_reporter;

pub use mock_formula_repository::MockFormulaRepository;
pub use mock_install_state::MockInstallState;
pub use mock_progress_reporter::MockProgressReporter;
