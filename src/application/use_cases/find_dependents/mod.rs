use crate::application::dto::{QueryMetadata, UsesRequest, UsesResponse};
use crate::ports::inbound::UsesQueryPort;
use crate::ports::outbound::{FormulaRepository, InstallState, ProgressReporter};
use crate::reverse_deps::domain::FormulaUniverse;
use crate::reverse_deps::services::ReverseResolver;
use crate::shared::Result;

/// Reported once when a target that does not exist still matched edges by name
pub const MISSING_WITH_DEPENDENTS: &str = "Missing formulae should not have dependents!";

/// FindDependentsUseCase - answers "which formulae use X?"
///
/// Loads the formula universe, runs the reverse resolver and reports every
/// unresolved target through the progress reporter. Unresolved targets are
/// part of the response, so callers decide the exit status.
///
/// # Type Parameters
/// * `FR` - FormulaRepository implementation
/// * `IS` - InstallState implementation
/// * `PR` - ProgressReporter implementation
pub struct FindDependentsUseCase<FR, IS, PR> {
    formula_repository: FR,
    install_state: IS,
    progress_reporter: PR,
}

impl<FR, IS, PR> FindDependentsUseCase<FR, IS, PR>
where
    FR: FormulaRepository,
    IS: InstallState,
    PR: ProgressReporter,
{
    /// Creates a new FindDependentsUseCase with injected dependencies
    pub fn new(formula_repository: FR, install_state: IS, progress_reporter: PR) -> Self {
        Self {
            formula_repository,
            install_state,
            progress_reporter,
        }
    }

    /// Executes the query
    ///
    /// # Errors
    /// Fails when the formula index cannot be read or is inconsistent.
    /// Unknown targets are not errors here.
    pub fn execute(&self, request: UsesRequest) -> Result<UsesResponse> {
        let universe = self.load_universe(&request)?;

        let (result, unresolved) = ReverseResolver::find_dependents(
            &universe,
            &request.targets,
            &request.spec,
            &self.install_state,
        )
        .into_parts();

        for target in &unresolved {
            self.progress_reporter.report_error(&target.to_string());
        }

        let response = UsesResponse::new(
            request.targets,
            request.spec,
            result,
            unresolved,
            QueryMetadata::now(),
        );

        if response.missing_targets_have_dependents() {
            self.progress_reporter.report_error(MISSING_WITH_DEPENDENTS);
        }

        self.progress_reporter.report(&format!(
            "✅ Found {} dependent(s)",
            response.result.len()
        ));

        Ok(response)
    }

    fn load_universe(&self, request: &UsesRequest) -> Result<FormulaUniverse> {
        self.progress_reporter.report(&format!(
            "📖 Loading formula index from: {}",
            request.formulae_path.display()
        ));

        let formulae = self
            .formula_repository
            .load_formulae(&request.formulae_path)?;
        let universe = FormulaUniverse::new(formulae)?;

        self.progress_reporter
            .report(&format!("✅ Loaded {} formula(e)", universe.len()));

        let dangling = universe.dangling_edge_count();
        if dangling > 0 {
            tracing::debug!(dangling, "index references formulae it does not define");
        }

        Ok(universe)
    }
}

impl<FR, IS, PR> UsesQueryPort for FindDependentsUseCase<FR, IS, PR>
where
    FR: FormulaRepository,
    IS: InstallState,
    PR: ProgressReporter,
{
    fn find_uses(&self, request: UsesRequest) -> Result<UsesResponse> {
        self.execute(request)
    }
}
