use super::{FormulaName, KindFilter};
use serde::Serialize;
use std::collections::BTreeSet;

/// Options of a reverse-dependency query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuerySpec {
    /// Dependency kinds that count as edges
    pub kinds: KindFilter,
    /// Follow edges transitively instead of stopping at direct dependents
    pub recursive: bool,
    /// Only report dependents that are currently installed
    pub installed_only: bool,
    /// Only report dependents with no version installed at all
    pub missing_only: bool,
    /// Still match edges by name for targets that do not resolve
    pub match_missing: bool,
}

impl QuerySpec {
    pub fn new(kinds: KindFilter) -> Self {
        Self {
            kinds,
            ..Self::default()
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn installed_only(mut self, installed_only: bool) -> Self {
        self.installed_only = installed_only;
        self
    }

    pub fn missing_only(mut self, missing_only: bool) -> Self {
        self.missing_only = missing_only;
        self
    }

    pub fn match_missing(mut self, match_missing: bool) -> Self {
        self.match_missing = match_missing;
        self
    }
}

/// A query target that is not in the universe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedTarget {
    pub name: String,
    /// Formulae other than the query targets that declare an in-filter edge
    /// to this name. Only counted when the query matches missing targets by
    /// name.
    pub dependent_count: usize,
}

impl UnresolvedTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependent_count: 0,
        }
    }

    pub fn has_dependents(&self) -> bool {
        self.dependent_count > 0
    }
}

impl std::fmt::Display for UnresolvedTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No available formula with the name \"{}\".", self.name)
    }
}

/// The dependents found by a query. Never contains a query target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependentsResult {
    pub dependents: BTreeSet<FormulaName>,
}

impl DependentsResult {
    pub fn new(dependents: BTreeSet<FormulaName>) -> Self {
        Self { dependents }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dependents.contains(name)
    }

    pub fn len(&self) -> usize {
        self.dependents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }

    /// Names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.dependents.iter().map(FormulaName::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reverse_deps::domain::DependencyKind;

    #[test]
    fn test_query_spec_default() {
        let spec = QuerySpec::default();
        assert_eq!(spec.kinds, KindFilter::default());
        assert!(!spec.recursive);
        assert!(!spec.installed_only);
        assert!(!spec.missing_only);
        assert!(!spec.match_missing);
    }

    #[test]
    fn test_query_spec_chaining() {
        let spec = QuerySpec::new(KindFilter::default().with(DependencyKind::Optional))
            .recursive(true)
            .missing_only(true);
        assert!(spec.recursive);
        assert!(spec.missing_only);
        assert!(spec.kinds.includes(DependencyKind::Optional));
    }

    #[test]
    fn test_unresolved_target_display() {
        let target = UnresolvedTarget::new("foo");
        assert_eq!(
            target.to_string(),
            "No available formula with the name \"foo\"."
        );
        assert!(!target.has_dependents());
    }

    #[test]
    fn test_dependents_result_names_are_sorted() {
        let result = DependentsResult::new(BTreeSet::from([
            FormulaName::new("optional").unwrap(),
            FormulaName::new("bar").unwrap(),
        ]));
        assert_eq!(result.names(), vec!["bar", "optional"]);
        assert!(result.contains("bar"));
        assert!(!result.contains("foo"));
    }
}
