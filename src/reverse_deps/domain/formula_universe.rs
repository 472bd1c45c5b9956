use super::{Dependency, Formula, FormulaName, Requirement};
use crate::shared::error::RdepsError;
use crate::shared::Result;
use std::collections::HashMap;

/// Outcome of looking a name up in the universe
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    Found(&'a Formula),
    NotFound(String),
}

impl<'a> Resolution<'a> {
    pub fn found(self) -> Option<&'a Formula> {
        match self {
            Resolution::Found(formula) => Some(formula),
            Resolution::NotFound(_) => None,
        }
    }
}

/// FormulaUniverse aggregate: every known formula, loaded once per invocation
///
/// Formulae live in an arena in load order; a name index gives O(1) lookup.
/// The universe is never mutated after construction, so a shared reference can
/// serve any number of concurrent queries.
#[derive(Debug, Clone, Default)]
pub struct FormulaUniverse {
    formulae: Vec<Formula>,
    index: HashMap<FormulaName, usize>,
}

impl FormulaUniverse {
    /// Builds the universe, rejecting duplicate names.
    pub fn new(formulae: Vec<Formula>) -> Result<Self> {
        let mut index = HashMap::with_capacity(formulae.len());
        for (position, formula) in formulae.iter().enumerate() {
            if index.insert(formula.name().clone(), position).is_some() {
                return Err(RdepsError::DuplicateFormula {
                    name: formula.name().to_string(),
                }
                .into());
            }
        }

        Ok(Self { formulae, index })
    }

    /// The full universe, in load order
    pub fn all_formulae(&self) -> &[Formula] {
        &self.formulae
    }

    pub fn dependencies_of<'a>(&self, formula: &'a Formula) -> &'a [Dependency] {
        formula.dependencies()
    }

    pub fn requirements_of<'a>(&self, formula: &'a Formula) -> &'a [Requirement] {
        formula.requirements()
    }

    /// Looks a formula up by name. A miss is a value, not an error.
    pub fn resolve(&self, name: &str) -> Resolution<'_> {
        match self.get(name) {
            Some(formula) => Resolution::Found(formula),
            None => Resolution::NotFound(name.to_string()),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Formula> {
        self.index.get(name).map(|&position| &self.formulae[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.formulae.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulae.is_empty()
    }

    /// Number of dependency edges whose target is not in the universe
    pub fn dangling_edge_count(&self) -> usize {
        self.formulae
            .iter()
            .flat_map(Formula::dependencies)
            .filter(|dep| !self.contains(dep.name().as_str()))
            .count()
    }
}
