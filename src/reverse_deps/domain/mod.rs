pub mod dependency;
pub mod formula;
pub mod formula_universe;
pub mod kind_filter;
pub mod query;

pub use dependency::{Dependency, DependencyKind, Requirement};
pub use formula::{Formula, FormulaName, Version};
pub use formula_universe::{FormulaUniverse, Resolution};
pub use kind_filter::KindFilter;
pub use query::{DependentsResult, QuerySpec, UnresolvedTarget};
