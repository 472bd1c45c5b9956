//! rdeps - reverse-dependency queries over a formula index
//!
//! Answers "which formulae use X?": given one or more formula names, lists
//! every formula that declares them as a dependency, optionally following
//! the relation transitively and narrowing it by dependency kind and
//! installation state.
//!
//! # Architecture
//!
//! - **Domain Layer** (`reverse_deps`): formulae, the formula universe and the reverse resolver
//! - **Application Layer** (`application`): use case, DTOs and factories
//! - **Ports** (`ports`): interfaces the core needs from the outside
//! - **Adapters** (`adapters`): formula index reader, cellar, formatters, console
//! - **Shared** (`shared`): errors, partial results and file security checks
//!
//! # Example
//!
//! ```no_run
//! use rdeps::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = FindDependentsUseCase::new(
//!     FileSystemReader::new(),
//!     FixedInstallState::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = UsesRequest::builder()
//!     .target("openssl@3")
//!     .formulae_path("formulae.toml")
//!     .recursive(true)
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! let output = TextFormatter::new().format(&response)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod reverse_deps;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::install_state::{CellarInstallState, FixedInstallState};
    pub use crate::application::dto::{OutputFormat, UsesRequest, UsesResponse};
    pub use crate::application::use_cases::FindDependentsUseCase;
    pub use crate::ports::inbound::UsesQueryPort;
    pub use crate::ports::outbound::{
        DependentsFormatter, FormulaRepository, InstallState, OutputPresenter, ProgressReporter,
    };
    pub use crate::reverse_deps::domain::{
        Dependency, DependencyKind, DependentsResult, Formula, FormulaName, FormulaUniverse,
        KindFilter, QuerySpec, Requirement, UnresolvedTarget,
    };
    pub use crate::reverse_deps::services::ReverseResolver;
    pub use crate::shared::Result;
}
