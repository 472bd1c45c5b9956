use super::DependencyKind;
use serde::Serialize;
use std::collections::BTreeSet;

/// The set of dependency kinds a query follows.
///
/// Built from the defaults plus flags, `required` is always present. Only
/// [`KindFilter::only`] can produce a filter without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KindFilter {
    kinds: BTreeSet<DependencyKind>,
}

impl KindFilter {
    /// Required dependencies only.
    pub fn required() -> Self {
        Self {
            kinds: BTreeSet::from([DependencyKind::Required]),
        }
    }

    /// Builds a filter the way the command-line flags describe it.
    pub fn from_flags(
        include_build: bool,
        include_test: bool,
        include_optional: bool,
        skip_recommended: bool,
    ) -> Self {
        let mut filter = Self::required().with(DependencyKind::Recommended);
        if skip_recommended {
            filter = filter.without(DependencyKind::Recommended);
        }
        if include_build {
            filter = filter.with(DependencyKind::Build);
        }
        if include_test {
            filter = filter.with(DependencyKind::Test);
        }
        if include_optional {
            filter = filter.with(DependencyKind::Optional);
        }
        filter
    }

    /// Every kind.
    pub fn all() -> Self {
        Self {
            kinds: DependencyKind::ALL.into_iter().collect(),
        }
    }

    /// Exactly the given kinds, nothing implied.
    pub fn only(kinds: impl IntoIterator<Item = DependencyKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Adds a kind. `required` stays in.
    pub fn with(mut self, kind: DependencyKind) -> Self {
        self.kinds.insert(DependencyKind::Required);
        self.kinds.insert(kind);
        self
    }

    /// Drops a kind. `required` cannot be dropped.
    pub fn without(mut self, kind: DependencyKind) -> Self {
        if kind != DependencyKind::Required {
            self.kinds.remove(&kind);
        }
        self
    }

    pub fn includes(&self, kind: DependencyKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = DependencyKind> + '_ {
        self.kinds.iter().copied()
    }
}

impl Default for KindFilter {
    /// `required` and `recommended`
    fn default() -> Self {
        Self::from_flags(false, false, false, false)
    }
}

impl std::fmt::Display for KindFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.kinds.iter().map(DependencyKind::as_str).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}
