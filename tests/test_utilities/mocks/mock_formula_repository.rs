use rdeps::prelude::*;
use std::path::Path;

/// Mock FormulaRepository serving formulae built in the test
pub struct MockFormulaRepository {
    formulae: Vec<Formula>,
    should_fail: bool,
}

impl MockFormulaRepository {
    pub fn new() -> Self {
        Self {
            formulae: Vec::new(),
            should_fail: false,
        }
    }

    /// Adds a formula declaring `deps` as (name, kind) pairs
    pub fn with_formula(mut self, name: &str, deps: &[(&str, DependencyKind)]) -> Self {
        let formula = deps
            .iter()
            .fold(Formula::new(name).unwrap(), |formula, (dep, kind)| {
                formula.with_dependency(Dependency::new(*dep, *kind).unwrap())
            });
        self.formulae.push(formula);
        self
    }

    pub fn with_requirement(mut self, name: &str, requirement: &str, kind: DependencyKind) -> Self {
        let formula = Formula::new(name)
            .unwrap()
            .with_requirement(Requirement::new(requirement, kind));
        self.formulae.push(formula);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            formulae: Vec::new(),
            should_fail: true,
        }
    }
}

impl FormulaRepository for MockFormulaRepository {
    fn load_formulae(&self, source: &Path) -> Result<Vec<Formula>> {
        if self.should_fail {
            anyhow::bail!("Mock formula index unavailable: {}", source.display());
        }
        Ok(self.formulae.clone())
    }
}
